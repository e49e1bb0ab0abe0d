/// Unit suffixes for human-scaled byte counts, base 1024.
const SIZE_SUFFIXES: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Renders a byte count as a human-scaled size string.
///
/// Divides by 1024 while the rounded quotient is still at least 1,
/// then formats with two decimal digits and the reached unit suffix.
/// Rounding ties go to even, so an exact midpoint such as 512 bytes
/// stays in its unit instead of promoting to "0.50 KB". The unit index
/// is bounded by the suffix table, so even `u64::MAX` (16 EB) cannot
/// run past the last entry.
///
/// # Examples
///
/// ```
/// use win_usb_history::format_size;
///
/// assert_eq!(format_size(0), "0.00 B");
/// assert_eq!(format_size(1024), "1.00 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while unit + 1 < SIZE_SUFFIXES.len() && (value / 1024.0).round_ties_even() >= 1.0 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", SIZE_SUFFIXES[unit])
}
