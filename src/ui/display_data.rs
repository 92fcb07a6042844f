use crate::config::ConfigRows;
use crate::core::models::{Court, DateEntry, GroupedReservation};
use crate::core::types::{SlotStatus, TimeSlot};
use crate::scheduler::grid::AvailabilityGrid;
use crate::scheduler::pricing::PriceSummary;
use crate::ui::ansi::{FG_DARK_GRAY, FG_GREEN, FG_HIGHLIGHT, FG_RED, STYLE_RESET};
use chrono::NaiveDate;

/// Turns scheduling state into table rows. Row and column numbers shown to
/// the user are 1-based.
#[derive(Debug, Default, Clone)]
pub struct DisplayDataBuilder;

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn date_rows(&self, dates: &[DateEntry], selected: NaiveDate) -> Vec<Vec<String>> {
        dates
            .iter()
            .enumerate()
            .map(|(i, d)| {
                let cells = vec![(i + 1).to_string(), d.key.clone(), d.to_string()];
                if d.date == selected {
                    cells.iter().map(|c| paint(FG_HIGHLIGHT, c)).collect()
                } else {
                    cells
                }
            })
            .collect()
    }

    pub fn grid_headers(&self, courts: &[Court]) -> Vec<String> {
        let mut headers = vec!["#".to_string(), "SLOT".to_string()];
        headers.extend(courts.iter().map(|c| c.name.clone()));
        headers
    }

    pub fn grid_rows(&self, slots: &[TimeSlot], grid: &AvailabilityGrid) -> Vec<Vec<String>> {
        slots
            .iter()
            .enumerate()
            .map(|(row, slot)| {
                let mut cells = vec![(row + 1).to_string(), slot.to_string()];
                if let Some(statuses) = grid.row(row) {
                    cells.extend(statuses.iter().map(|s| paint_status(*s)));
                }
                cells
            })
            .collect()
    }

    pub fn history_rows(&self, groups: &[GroupedReservation]) -> Vec<Vec<String>> {
        groups
            .iter()
            .map(|g| {
                let first = g.representative();
                let ids = g
                    .reservations()
                    .iter()
                    .map(|r| r.id.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                vec![
                    ids,
                    first.date.format("%Y-%m-%d").to_string(),
                    first.court_number.to_string(),
                    g.span().to_string(),
                    g.len().to_string(),
                    first.status.to_string(),
                    first.sport.clone(),
                    format_amount(g.total_price()),
                ]
            })
            .collect()
    }

    pub fn price_rows(&self, summary: &PriceSummary) -> Vec<Vec<String>> {
        let mut rows = vec![
            vec!["Selected slots".to_string(), summary.selected_slots.to_string()],
            vec!["Price per slot".to_string(), format_amount(summary.price_per_slot)],
            vec!["Total".to_string(), format_amount(summary.total)],
        ];
        if let (Some(n), Some(share)) = (summary.participants, summary.per_person) {
            rows.push(vec!["Participants".to_string(), n.to_string()]);
            rows.push(vec!["Per person".to_string(), format_amount(share)]);
        }
        rows
    }

    pub fn config_rows(&self, rows: &ConfigRows) -> Vec<Vec<String>> {
        rows.iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect()
    }

    pub fn legend(&self) -> String {
        format!(
            "{} available   {} booked   {} selected",
            paint_status(SlotStatus::Available),
            paint_status(SlotStatus::Locked),
            paint_status(SlotStatus::Selected)
        )
    }
}

fn paint(style: &str, s: &str) -> String {
    format!("{style}{s}{STYLE_RESET}")
}

pub fn paint_status(status: SlotStatus) -> String {
    let style = match status {
        SlotStatus::Available => FG_DARK_GRAY,
        SlotStatus::Locked => FG_RED,
        SlotStatus::Selected => FG_GREEN,
    };
    paint(style, status.marker())
}

/// Integer amount with comma thousands separators: `300000` -> `300,000`.
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
