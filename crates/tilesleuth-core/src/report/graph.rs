/// ASCII bar graph for a band's share of all files.

/// Number of slots in a bar. Each slot is 5 percentage points.
pub const BAR_SLOTS: u64 = 20;

/// Number of filled slots for `count` out of `total`: `ceil(percent / 5)`.
///
/// Integer arithmetic throughout, so any non-zero share shows at least one
/// slot and a zero `total` never divides.
pub fn filled_slots(count: u64, total: u64) -> u64 {
    if count == 0 || total == 0 {
        return 0;
    }
    let filled = (u128::from(count) * u128::from(BAR_SLOTS)).div_ceil(u128::from(total));
    filled.min(u128::from(BAR_SLOTS)) as u64
}

/// Render the bar, e.g. `[#######.............]`.
pub fn bar(count: u64, total: u64) -> String {
    let filled = filled_slots(count, total) as usize;
    let empty = BAR_SLOTS as usize - filled;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(empty))
}
