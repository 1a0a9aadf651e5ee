//! Business registration number format and checksum.
//!
//! Numbers are written `ddd-dd-ddddd`. The first nine digits are weighted with
//! `1,3,7,1,3,7,1,3,5`, `floor(d9 * 5 / 10)` is added, and the tenth digit must equal
//! `(10 - sum % 10) % 10`.

use regex::Regex;
use std::sync::LazyLock;

const WEIGHTS: [u32; 9] = [1, 3, 7, 1, 3, 7, 1, 3, 5];

static FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}-\d{2}-\d{5}$").expect("valid business number pattern"));

/// Returns true when `value` is written as `ddd-dd-ddddd`.
pub fn has_valid_format(value: &str) -> bool {
    FORMAT.is_match(value)
}

/// Validates the check digit of a business number.
///
/// # Arguments
/// - `value` - Business number, hyphens optional
///
/// # Returns
/// - `true` - Ten digits whose last digit matches the weighted checksum
/// - `false` - Wrong digit count or checksum mismatch
pub fn has_valid_checksum(value: &str) -> bool {
    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 10 || value.chars().any(|c| c != '-' && !c.is_ascii_digit()) {
        return false;
    }

    let mut sum: u32 = digits
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(digit, weight)| digit * weight)
        .sum();
    sum += digits[8] * 5 / 10;

    (10 - sum % 10) % 10 == digits[9]
}

/// Format and checksum together.
pub fn is_valid(value: &str) -> bool {
    has_valid_format(value) && has_valid_checksum(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_good_numbers() {
        assert!(is_valid("123-45-67891"));
        assert!(is_valid("220-81-62517"));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!is_valid("123-45-67890"));
        assert!(!is_valid("220-81-62518"));
    }

    #[test]
    fn rejects_wrong_format() {
        assert!(!has_valid_format("1234567891"));
        assert!(!has_valid_format("12-345-67891"));
        assert!(!has_valid_format("123-45-6789a"));
        assert!(has_valid_checksum("1234567891"));
    }

    #[test]
    fn rejects_wrong_digit_count() {
        assert!(!has_valid_checksum("123-45-6789"));
        assert!(!has_valid_checksum("123-45-678912"));
    }
}
