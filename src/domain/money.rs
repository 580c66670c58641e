use thiserror::Error;

/// Money is represented as integer cents to avoid floating-point drift.
/// 1 unit = 100 cents, so $10.15 = 1015 cents.
pub type Cents = i64;

/// Format cents as a two-decimal string with the sign preserved.
/// Example: 97396 -> "973.96", -1589 -> "-15.89"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs_cents / 100, abs_cents % 100)
}

/// Format cents the way ledger printouts show them: `$` followed by the
/// signed amount, e.g. "$-15.89".
pub fn format_dollars(cents: Cents) -> String {
    format!("${}", format_cents(cents))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCentsError {
    #[error("empty amount")]
    Empty,
    #[error("invalid money format: {0}")]
    InvalidFormat(String),
    #[error("amount out of range: {0}")]
    Overflow(String),
}

/// Parse a decimal string into cents. Digits past the second decimal are
/// truncated.
/// Example: "10.15" -> 1015, "1000" -> 100000, ".5" -> 50
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseCentsError::Empty);
    }

    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let invalid = || ParseCentsError::InvalidFormat(trimmed.to_string());

    let (units_str, fraction_str) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if units_str.is_empty() && fraction_str.is_empty() {
        return Err(invalid());
    }
    if !units_str.chars().chain(fraction_str.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::Overflow(trimmed.to_string()))?
    };

    let fraction: i64 = match fraction_str.len() {
        0 => 0,
        1 => fraction_str.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => fraction_str[..2].parse().map_err(|_| invalid())?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction))
        .ok_or_else(|| ParseCentsError::Overflow(trimmed.to_string()))?;

    Ok(if negative { -cents } else { cents })
}
