use crate::config::Config;
use crate::core::models::GroupedReservation;
use crate::scheduler::BookingSession;
use crate::scheduler::booking::BookingOutcome;
use crate::scheduler::pricing::PriceSummary;
use crate::ui::display_data::{DisplayDataBuilder, format_amount};
use crate::ui::table_printer::{Table, TablePrinter};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Renders every screen of the booking flow. Each `render_*` writes to any
/// writer; the `display_*` twins print to stdout.
#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub util: WidthUtil,
    pub data: DisplayDataBuilder,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_dates<W: Write + ?Sized>(
        &self,
        session: &BookingSession,
        out: &mut W,
    ) -> io::Result<()> {
        let table = Table::new("Dates")
            .headers(&["#", "DATE", "DAY"])
            .rows(self.data.date_rows(session.dates(), session.selected_date()))
            .empty_message("No bookable dates.");
        self.printer.render(&table, out)
    }

    pub fn render_grid<W: Write + ?Sized>(
        &self,
        session: &BookingSession,
        out: &mut W,
    ) -> io::Result<()> {
        let title = format!(
            "Availability {} ({})",
            session.selected_date().format("%Y-%m-%d"),
            session.facility().stadium_id
        );
        let table = Table::new(&title)
            .headers(&self.data.grid_headers(session.courts()))
            .rows(self.data.grid_rows(session.slots(), session.grid()))
            .empty_message("No slots fit inside the opening hours.");
        self.printer.render(&table, out)?;
        writeln!(out, "{}", self.data.legend())
    }

    pub fn render_price<W: Write + ?Sized>(
        &self,
        summary: &PriceSummary,
        out: &mut W,
    ) -> io::Result<()> {
        let table = Table::new("Price")
            .headers(&["ITEM", "AMOUNT"])
            .rows(self.data.price_rows(summary));
        self.printer.render(&table, out)
    }

    pub fn render_history<W: Write + ?Sized>(
        &self,
        groups: &[GroupedReservation],
        out: &mut W,
    ) -> io::Result<()> {
        let table = Table::new("Booking history")
            .headers(&["IDS", "DATE", "COURT", "TIME", "SLOTS", "STATUS", "SPORT", "TOTAL"])
            .rows(self.data.history_rows(groups))
            .empty_message("No reservations found.");
        self.printer.render(&table, out)
    }

    pub fn render_config<W: Write + ?Sized>(&self, config: &Config, out: &mut W) -> io::Result<()> {
        let table = Table::new("Config")
            .headers(&["ID", "KEY", "DESCRIPTION", "VALUE"])
            .rows(self.data.config_rows(&config.rows()))
            .empty_message("No config items found.");
        let pad = self.util.center_pad(self.printer.table_width(&table));
        self.printer.with_left_pad(pad).render(&table, out)
    }

    pub fn render_outcome<W: Write + ?Sized>(
        &self,
        outcome: &BookingOutcome,
        out: &mut W,
    ) -> io::Result<()> {
        let mut rows: Vec<Vec<String>> = outcome
            .succeeded
            .iter()
            .map(|(_, r)| {
                vec![
                    r.court_number.to_string(),
                    r.slot().to_string(),
                    format!("booked #{}", r.id),
                    format_amount(r.total_price),
                ]
            })
            .collect();
        rows.extend(outcome.failed.iter().map(|(_, req, err)| {
            vec![
                req.court_number.to_string(),
                req.slot().to_string(),
                format!("failed: {err}"),
                "-".to_string(),
            ]
        }));
        let table = Table::new("Booking result")
            .headers(&["COURT", "TIME", "RESULT", "PRICE"])
            .rows(rows)
            .empty_message("Nothing selected to book.");
        self.printer.render(&table, out)
    }

    pub fn display_dates(&self, session: &BookingSession) {
        let _ = self.render_dates(session, &mut io::stdout());
    }

    pub fn display_grid(&self, session: &BookingSession) {
        let _ = self.render_grid(session, &mut io::stdout());
    }

    pub fn display_price(&self, summary: &PriceSummary) {
        let _ = self.render_price(summary, &mut io::stdout());
    }

    pub fn display_history(&self, groups: &[GroupedReservation]) {
        let _ = self.render_history(groups, &mut io::stdout());
    }

    pub fn display_config(&self, config: &Config) {
        let _ = self.render_config(config, &mut io::stdout());
    }

    pub fn display_outcome(&self, outcome: &BookingOutcome) {
        let _ = self.render_outcome(outcome, &mut io::stdout());
    }
}
