//! Ordering-key parsing.
//!
//! The ordering column is free text. It is interpreted by trying each strategy
//! in [`ORDERING_STRATEGIES`] in turn; the first one that succeeds wins and a
//! value no strategy accepts becomes `0`.

pub type OrderingStrategy = fn(&str) -> Option<i64>;

pub const ORDERING_STRATEGIES: &[OrderingStrategy] = &[parse_integer, parse_truncated_float];

pub fn parse_ordering_key(raw: &str) -> i64 {
    let trimmed = raw.trim();
    ORDERING_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(trimmed))
        .unwrap_or(0)
}

pub fn parse_integer(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

/// Parses a float and truncates it toward zero. Non-finite values are
/// rejected; finite values outside the `i64` range saturate.
pub fn parse_truncated_float(value: &str) -> Option<i64> {
    let parsed = value.parse::<f64>().ok()?;
    if parsed.is_finite() {
        Some(parsed.trunc() as i64)
    } else {
        None
    }
}
