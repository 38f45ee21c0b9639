//! Parsers for the stringly-typed numeric fields of the rewards wire format.
//!
//! The API delivers `apy`, `lockupPeriod` and `minStaking` as display
//! strings. These helpers parse them once at the filter/sort boundary;
//! the parsed form is never written back onto a row. All parsers are
//! total: an unparseable value yields `None` and the caller decides
//! (filters fail the row, sorting treats it as an equal-order value).

/// Lockup duration of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lockup {
    /// No lockup ("Esnek" / "Flexible"). Exempt from `max_lockup_days`
    /// filtering and sorts as zero days.
    Flexible,
    /// Fixed lockup in days.
    Days(u32),
}

impl Lockup {
    /// Day count used for ordering. `Flexible` sorts before any fixed
    /// lockup.
    pub fn sort_days(self) -> u32 {
        match self {
            Lockup::Flexible => 0,
            Lockup::Days(d) => d,
        }
    }
}

/// Parse a `lockupPeriod` value.
///
/// The flexible sentinel is matched case-insensitively in both its
/// Turkish and English spellings. Otherwise the leading digits are taken
/// as a day count. Returns `None` for anything else.
pub fn parse_lockup(raw: &str) -> Option<Lockup> {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("esnek") || trimmed.eq_ignore_ascii_case("flexible") {
        return Some(Lockup::Flexible);
    }
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok().map(Lockup::Days)
}

/// Parse an `apy` value (decimal percentage-points string, e.g. `"8.0"`).
///
/// Accepts a trailing `%` or other unit text after the number, matching
/// the permissive parsing the upstream views relied on.
pub fn parse_apy(raw: &str) -> Option<f64> {
    leading_f64(raw.trim())
}

/// Parse the quantity out of a `minStaking` value (`"0.1 ETH"` -> `0.1`).
///
/// Only the leading whitespace-delimited token is load-bearing; the unit
/// is display-only.
pub fn parse_min_amount(raw: &str) -> Option<f64> {
    let first = raw.split_whitespace().next()?;
    leading_f64(first)
}

/// Parse the longest leading decimal prefix of `s` as an `f64`.
///
/// `"8.5%"` -> `8.5`, `"-0.1x"` -> `-0.1`, `"abc"` -> `None`.
fn leading_f64(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse().ok()
}
