use anyhow::{Context, Result, anyhow};

use courtbook::core::cli::CliArgs;
use courtbook::core::context::AppContext;
use courtbook::logging::LogTarget;
use courtbook::prompter::flows::main_flow::BookingFlow;
use courtbook::prompter::prompter::Prompter;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = CliArgs::from_env().map_err(|msg| anyhow!(msg))?;
    let config_path = args.config_path.clone();
    let mut ctx = AppContext::from_args(args)
        .with_context(|| format!("failed to start with config {}", config_path.display()))?;

    let logger = ctx.logger.clone();
    logger.info(
        format!(
            "Session started for user {} at stadium {}",
            ctx.book.user_id(),
            ctx.session.facility().stadium_id
        ),
        LogTarget::FileOnly,
    );

    let flow = BookingFlow::new(&mut ctx);
    if let Err(err) = Prompter::new().run(flow) {
        logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
    }

    ctx.book.save().context("failed to save reservations")?;
    logger.info("Session ended", LogTarget::FileOnly);
    Ok(())
}
