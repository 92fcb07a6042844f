use crate::core::types::SlotStatus;
use crate::scheduler::grid::AvailabilityGrid;

/// Used whenever the facility has no per-slot price configured.
pub const DEFAULT_PRICE_PER_SLOT: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSummary {
    pub selected_slots: usize,
    pub price_per_slot: u64,
    pub total: u64,
    /// Present only when the cost is shared.
    pub participants: Option<u32>,
    pub per_person: Option<u64>,
}

pub fn price_or_default(price_per_slot: Option<u64>) -> u64 {
    price_per_slot.unwrap_or(DEFAULT_PRICE_PER_SLOT)
}

/// Saturates instead of overflowing.
pub fn compute_total(grid: &AvailabilityGrid, price_per_slot: u64) -> u64 {
    (grid.count(SlotStatus::Selected) as u64).saturating_mul(price_per_slot)
}

/// Ceiling share so the shares never add up to less than `total`.
/// Zero participants is treated as one.
pub fn per_person_share(total: u64, participants: u32) -> u64 {
    total.div_ceil(u64::from(participants.max(1)))
}

pub fn summarize(
    grid: &AvailabilityGrid,
    price_per_slot: u64,
    shared_by: Option<u32>,
) -> PriceSummary {
    let total = compute_total(grid, price_per_slot);
    let participants = shared_by.map(|p| p.max(1));
    PriceSummary {
        selected_slots: grid.count(SlotStatus::Selected),
        price_per_slot,
        total,
        participants,
        per_person: participants.map(|p| per_person_share(total, p)),
    }
}
