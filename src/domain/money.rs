use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Error;

pub const FRACTION_DIGITS: u32 = 2;

/// Renders `amount` as US dollars: `$1,234.56`, `-$4.50`.
///
/// The sign always precedes the currency symbol. Credits that should read as
/// `+$3,200.00` go through [`format_signed`].
pub fn format_usd(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    let neg = rounded < Decimal::ZERO;

    // `{:.2}` pads whole numbers such as 45000 to 45000.00
    let digits = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let grouped = group_thousands(int_part);
    if neg {
        format!("-${}.{}", grouped, frac_part)
    } else {
        format!("${}.{}", grouped, frac_part)
    }
}

/// Like [`format_usd`] but with an explicit `+` on non-negative amounts.
pub fn format_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format_usd(amount)
    } else {
        format!("+{}", format_usd(amount))
    }
}

/// Parses user-typed money such as `500`, `67.89` or `1,250.30`.
pub fn parse_amount(input: &str) -> Result<Decimal, Error> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    if cleaned.is_empty() {
        return Err(Error::InvalidInput("Please enter an amount".to_string()));
    }

    Decimal::from_str(&cleaned)
        .map_err(|_| Error::InvalidInput(format!("'{}' is not a valid amount", input.trim())))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
