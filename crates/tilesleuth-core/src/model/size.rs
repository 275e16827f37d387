/// Size formatting utilities — human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// Unit labels, indexed by power of 1024.
const UNITS: [&str; 9] = ["B", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Format a byte count into a human-readable string with appropriate unit.
///
/// Picks the largest unit for which the scaled value is at least 1, rounds
/// to two decimal places, and drops trailing zeros while keeping one digit
/// after the point (`1.0 KB`, `1.5 KB`, `1.91 MB`). Zero is `"0B"`.
///
/// The unit index is found by repeated integer division rather than a
/// floating-point logarithm, so exact powers of 1024 never round down a unit.
pub fn convert_units(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }

    let mut unit = 0;
    let mut whole = bytes;
    while whole >= 1024 && unit < UNITS.len() - 1 {
        whole /= 1024;
        unit += 1;
    }

    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    format!("{} {}", two_decimals(scaled), UNITS[unit])
}

/// Round to two decimals, then trim trailing zeros down to one decimal digit.
fn two_decimals(value: f64) -> String {
    let mut s = format!("{value:.2}");
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

/// Format a file count with thousand separators.
pub fn format_count(count: u64) -> String {
    if count < 1_000 {
        return count.to_string();
    }
    let s = count.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
