use chrono::NaiveDate;

use crate::core::context::AppContext;
use crate::core::types::{Date, SessionCommand};
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::flows::help::{render_help, usage_for};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::scheduler::BuildApplied;
use crate::scheduler::booking::ReservationSource;
use crate::scheduler::date_window::local_today;
use crate::scheduler::grouping::history_view;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

/// The booking session's command loop: date selection, grid toggling,
/// pricing, booking, history and configuration.
pub struct BookingFlow<'a> {
    ctx: &'a mut AppContext,
    display: DisplayManager,
    chrome: UiChrome,
    logger: Logger,
    today: NaiveDate,
}

impl<'a> BookingFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        let today = ctx
            .session
            .dates()
            .first()
            .map(|d| d.date)
            .unwrap_or_else(local_today);
        Self {
            ctx,
            display: DisplayManager::new(),
            chrome: UiChrome::new(),
            logger,
            today,
        }
    }
}

impl<'a> Flow for BookingFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        let key = self.ctx.session.selected_date().format("%Y-%m-%d").to_string();
        self.chrome.print_prompt(&key);
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }
        if line.eq_ignore_ascii_case("exit") {
            return Ok(FlowCtrl::Finish);
        }

        let mut parts = line.split_whitespace();
        let raw_command = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        let command = match SessionCommand::try_from(raw_command) {
            Ok(command) => command,
            Err(err) => {
                self.logger.error(
                    format!("{err} (type 'help' for usage)"),
                    LogTarget::ConsoleOnly,
                );
                return Ok(FlowCtrl::Continue);
            }
        };

        self.logger
            .info(format!("Command run: {line}"), LogTarget::FileOnly);
        if let Err(err) = self.execute(command, &args) {
            self.report_error(command, &err.to_string());
        }
        Ok(FlowCtrl::Continue)
    }
}

impl<'a> BookingFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.chrome.print_banner();
        println!();
        println!("Type 'help' for the command list, 'exit' to leave.");
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Reservations path: {}", self.ctx.reservations_path.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        self.display.display_grid(&self.ctx.session);
        self.ctx.startup_displayed = true;
    }

    fn execute(&mut self, command: SessionCommand, args: &[&str]) -> Result<()> {
        match command {
            SessionCommand::Dates => {
                self.display.display_dates(&self.ctx.session);
                Ok(())
            }
            SessionCommand::Date => self.select_date(args),
            SessionCommand::Grid => {
                self.display.display_grid(&self.ctx.session);
                Ok(())
            }
            SessionCommand::Toggle => self.toggle(args),
            SessionCommand::Clear => {
                self.ctx.session.clear_selection();
                self.logger.info("Selection cleared.", LogTarget::ConsoleOnly);
                Ok(())
            }
            SessionCommand::Price => self.price(args),
            SessionCommand::Book => self.book(),
            SessionCommand::History => self.history(args),
            SessionCommand::Cancel => self.cancel(args),
            SessionCommand::Config => {
                self.display.display_config(&self.ctx.config);
                Ok(())
            }
            SessionCommand::Set => self.set(args),
            SessionCommand::Help => {
                println!("{}", render_help(args.first().copied())?);
                Ok(())
            }
        }
    }

    fn select_date(&mut self, args: &[&str]) -> Result<()> {
        let [raw] = args else {
            return Err(usage_error(SessionCommand::Date, "Expected one date."));
        };
        let date = match raw.parse::<usize>() {
            Ok(n) => self
                .ctx
                .session
                .dates()
                .get(n.wrapping_sub(1))
                .map(|d| d.date)
                .ok_or_else(|| {
                    usage_error(
                        SessionCommand::Date,
                        &format!(
                            "Date number {n} is out of range 1-{}.",
                            self.ctx.session.dates().len()
                        ),
                    )
                })?,
            Err(_) => Date::try_from_str(raw)?.0,
        };

        let ticket = self.ctx.session.select_date(date)?;
        let fetched = self
            .ctx
            .book
            .fetch_reservations(&self.ctx.session.facility().stadium_id, ticket.date);
        if let BuildApplied::Stale = self.ctx.session.apply_build(ticket, fetched) {
            return Ok(());
        }
        self.display.display_grid(&self.ctx.session);
        Ok(())
    }

    fn toggle(&mut self, args: &[&str]) -> Result<()> {
        let [slot, court] = args else {
            return Err(usage_error(
                SessionCommand::Toggle,
                "Expected a slot number and a court number.",
            ));
        };
        let row = parse_position(slot, "slot", self.ctx.session.slots().len())?;
        let col = parse_position(court, "court", self.ctx.session.courts().len())?;
        if self.ctx.session.toggle(row, col) {
            self.display.display_grid(&self.ctx.session);
        }
        Ok(())
    }

    fn price(&mut self, args: &[&str]) -> Result<()> {
        let participants = match args {
            [] => None,
            [n] => Some(
                n.parse::<u32>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| {
                        usage_error(
                            SessionCommand::Price,
                            &format!("Participants must be a whole number of at least 1, got '{n}'."),
                        )
                    })?,
            ),
            _ => {
                return Err(usage_error(
                    SessionCommand::Price,
                    "Expected at most one argument.",
                ));
            }
        };
        self.display
            .display_price(&self.ctx.session.price_summary(participants));
        Ok(())
    }

    fn book(&mut self) -> Result<()> {
        let outcome = self.ctx.session.submit(&mut self.ctx.book);
        self.display.display_outcome(&outcome);
        if outcome.is_empty() {
            return Ok(());
        }

        if let Some(path) = self.ctx.book.save()? {
            self.logger.info(
                format!("Reservations saved to {}", path.display()),
                LogTarget::FileOnly,
            );
        }
        let summary = format!(
            "{} of {} slot(s) booked.",
            outcome.succeeded.len(),
            outcome.succeeded.len() + outcome.failed.len()
        );
        if outcome.all_succeeded() {
            self.logger.info(summary, LogTarget::ConsoleAndFile);
        } else if outcome.is_partial() {
            self.logger.warn(
                format!("{summary} Failed slots are still selected."),
                LogTarget::ConsoleAndFile,
            );
        } else {
            self.logger.error(
                format!("{summary} Every request was rejected; the selection is unchanged."),
                LogTarget::ConsoleAndFile,
            );
        }
        Ok(())
    }

    fn history(&mut self, args: &[&str]) -> Result<()> {
        let search = args.join(" ");
        let search = (!search.is_empty()).then_some(search.as_str());
        let mine = self.ctx.book.for_user(self.ctx.book.user_id());
        self.display.display_history(&history_view(&mine, search));
        Ok(())
    }

    fn cancel(&mut self, args: &[&str]) -> Result<()> {
        let [raw] = args else {
            return Err(usage_error(SessionCommand::Cancel, "Expected one reservation id."));
        };
        let id = raw.parse::<i32>().map_err(|_| {
            usage_error(
                SessionCommand::Cancel,
                &format!("Invalid reservation id '{raw}'."),
            )
        })?;

        let owner = self.ctx.book.get(id)?.user_id.clone();
        if owner != self.ctx.book.user_id() {
            return Err(Error::Domain(format!(
                "Reservation {id} belongs to another user."
            )));
        }
        let cancelled = self.ctx.book.cancel(id)?.to_string();
        self.ctx.book.save()?;
        self.logger
            .info(format!("Cancelled {cancelled}"), LogTarget::ConsoleAndFile);

        // the freed slot shows up after a rebuild; staged selections are dropped
        self.ctx.session.refresh(&self.ctx.book);
        Ok(())
    }

    fn set(&mut self, args: &[&str]) -> Result<()> {
        let [key, value @ ..] = args else {
            return Err(usage_error(SessionCommand::Set, "Expected a key and a value."));
        };
        if value.is_empty() {
            return Err(usage_error(SessionCommand::Set, "Expected a key and a value."));
        }
        self.ctx.config.set(key, &value.join(" "))?;
        if let Some((key, old, new)) = self.ctx.config.take_last_change() {
            self.logger.info(
                format!("Config updated: {key}: {old} -> {new}"),
                LogTarget::ConsoleAndFile,
            );
        }
        self.ctx.rebuild_session(self.today);
        Ok(())
    }

    fn report_error(&self, command: SessionCommand, err_text: &str) {
        match err_text.split_once("\nUsage:") {
            Some((head, tail)) => {
                self.logger.error(
                    format!("Command '{command}' failed. {head}\nUsage:{tail}"),
                    LogTarget::ConsoleOnly,
                );
                self.logger.error(
                    format!("Command '{command}' failed. {}", head.trim()),
                    LogTarget::FileOnly,
                );
            }
            None => self.logger.error(
                format!("Command '{command}' failed. {err_text}"),
                LogTarget::ConsoleAndFile,
            ),
        }
    }
}

fn usage_error(command: SessionCommand, msg: &str) -> Error {
    Error::Parse(format!("{msg}\nUsage: {}", usage_for(command)))
}

/// Parse a 1-based position shown on screen into a 0-based index.
fn parse_position(raw: &str, what: &str, len: usize) -> Result<usize> {
    raw.parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| {
            usage_error(
                SessionCommand::Toggle,
                &format!("Invalid {what} '{raw}'; expected 1-{len}."),
            )
        })
}
