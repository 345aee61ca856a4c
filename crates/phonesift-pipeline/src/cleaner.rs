//! # Cleaner
//!
//! Reduces a candidate token to ASCII digits with an optional leading `+`.
//!
//! When the token contains a `+` anywhere, the result gets exactly one
//! leading `+` and the zeros right after it are dropped, so `+00044 20…`
//! becomes `+4420…`. Without a `+` the digits are kept verbatim: a domestic
//! leading `0` carries meaning for region-aware parsing.
//!
//! A token without any significant digit cleans to the empty string.

/// Clean a single candidate token.
pub fn clean(token: &str) -> String {
    let has_plus = token.contains('+');
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();

    if !has_plus {
        return digits;
    }

    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return String::new();
    }
    format!("+{significant}")
}
