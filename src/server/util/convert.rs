use crate::model::server::FlagParam;

const SIZE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Coerces an optional flag parameter into a boolean.
///
/// Booleans pass through, strings are `true` only when they equal `"true"` ignoring
/// case, and an absent parameter is `false`.
///
/// # Arguments
/// - `value` - Raw flag as received from the query string
///
/// # Returns
/// - `bool` - The coerced flag
pub fn convert_to_boolean(value: Option<&FlagParam>) -> bool {
    match value {
        Some(FlagParam::Bool(flag)) => *flag,
        Some(FlagParam::Text(text)) => text.eq_ignore_ascii_case("true"),
        None => false,
    }
}

/// Formats a byte count stored as text into a human readable size.
///
/// Reads the leading integer of the text (`"1024.0"` and `"2048 bytes"` both count),
/// divides by 1024 while the value is at least 1024 and a larger unit exists, then
/// formats with two decimals. Input without leading digits, or reading as zero, is
/// returned unchanged.
///
/// # Arguments
/// - `bytes` - Byte count as stored in the inventory tables
///
/// # Returns
/// - `String` - e.g. `"1.00 KB"` for `"1024"`
pub fn format_disk_size(bytes: &str) -> String {
    let mut size = match leading_integer(bytes) {
        Some(value) if value != 0.0 => value,
        _ => return bytes.to_string(),
    };

    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    format!("{:.2} {}", size, SIZE_UNITS[unit])
}

/// Parses an optionally signed run of digits at the start of `text`, ignoring leading
/// whitespace and anything after the digits. Wide values lose precision instead of
/// overflowing.
fn leading_integer(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, text.strip_prefix('+').unwrap_or(text)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    rest[..end].parse::<f64>().ok().map(|value| sign * value)
}

/// Renders a raw byte count together with its formatted size, e.g. `"1024 (1.00 KB)"`.
pub fn format_size_with_raw(bytes: &str) -> String {
    format!("{} ({})", bytes, format_disk_size(bytes))
}

/// Percentage of `used` over `size` with two decimals, or `"N/A"` when size is zero.
pub fn format_usage(used: i64, size: i64) -> String {
    if size == 0 {
        return "N/A".to_string();
    }

    format!("{:.2}%", used as f64 / size as f64 * 100.0)
}

/// Substitutes `fallback` for an empty column value.
pub fn or_placeholder(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}
