use crate::config::Config;
use crate::core::cli::CliArgs;
use crate::core::repository::ReservationBook;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::scheduler::date_window::local_today;
use crate::scheduler::{BookingSession, LoggerObserver};
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct AppContext {
    pub config: Config,
    pub book: ReservationBook,
    pub session: BookingSession,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub reservations_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn from_args(args: CliArgs) -> Result<Self> {
        Self::from_args_on(args, local_today())
    }

    /// Build the context with an explicit "today" for the date window.
    pub fn from_args_on(args: CliArgs, today: NaiveDate) -> Result<Self> {
        let config = Config::load_from(&args.config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&args.logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let book = ReservationBook::open(&args.reservations_path, args.user_id.clone())?;
        let session = Self::session_for(&config, &logger, today);

        let mut ctx = Self {
            config,
            book,
            session,
            logger,
            startup_displayed: false,
            config_path: args.config_path,
            reservations_path: args.reservations_path,
            logs_dir: args.logs_dir,
        };
        ctx.session.refresh(&ctx.book);
        Ok(ctx)
    }

    fn session_for(config: &Config, logger: &Logger, today: NaiveDate) -> BookingSession {
        BookingSession::new(
            config.facility(),
            config.slot_coverage(),
            config.date_window_days(),
            today,
            Box::new(LoggerObserver::new(logger.clone())),
        )
    }

    /// Regenerate axes after a configuration change. The previously
    /// selected date is kept when it is still inside the new window.
    pub fn rebuild_session(&mut self, today: NaiveDate) {
        let previous = self.session.selected_date();
        self.logger
            .set_file_logging_enabled(self.config.file_logging_enabled());
        self.session = Self::session_for(&self.config, &self.logger, today);
        if previous != today && self.session.select_date(previous).is_err() {
            self.logger.info(
                format!("Selected date {previous} left the booking window; back to {today}."),
                LogTarget::FileOnly,
            );
        }
        self.session.refresh(&self.book);
    }
}
