use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use crate::{Currency, EngineError};

/// Signed money amount represented as **integer cents**.
///
/// Use this type for all monetary values the engine derives (totals,
/// remaining budget, category sums) to avoid floating-point drift while
/// summing. Wire amounts arrive as decimal numbers and are fixed to cents
/// once, at the boundary.
///
/// The value is signed: the remaining budget goes negative on overspend,
/// which is data, not an error.
///
/// # Examples
///
/// ```rust
/// use engine::{Currency, MoneyCents};
///
/// let amount = MoneyCents::new(12_34);
/// assert_eq!(amount.cents(), 1234);
/// assert_eq!(amount.format(Currency::Usd), "$12.34");
/// ```
///
/// Parsing from user input (accepts `.` or `,` as decimal separator; rejects
/// more than 2 decimals):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Fixes a decimal wire amount to cents, rounding half away from zero.
    #[must_use]
    pub fn from_major(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns the value in major units, for serialized output.
    #[must_use]
    pub fn to_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Renders the amount with the currency symbol and exactly two decimals.
    ///
    /// No thousands separators and no locale-aware formatting; the symbol is
    /// a pure lookup on [`Currency`].
    #[must_use]
    pub fn format(self, currency: Currency) -> String {
        format!("{}{}", currency.symbol(), self)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{major}.{cents:02}")
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl Add for MoneyCents {
    type Output = MoneyCents;

    fn add(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 + rhs.0)
    }
}

impl AddAssign for MoneyCents {
    fn add_assign(&mut self, rhs: MoneyCents) {
        self.0 += rhs.0;
    }
}

impl Sub for MoneyCents {
    type Output = MoneyCents;

    fn sub(self, rhs: MoneyCents) -> Self::Output {
        MoneyCents(self.0 - rhs.0)
    }
}

impl SubAssign for MoneyCents {
    fn sub_assign(&mut self, rhs: MoneyCents) {
        self.0 -= rhs.0;
    }
}

impl Neg for MoneyCents {
    type Output = MoneyCents;

    fn neg(self) -> Self::Output {
        MoneyCents(-self.0)
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading
    /// `+`/`-`.
    ///
    /// Validation rules:
    /// - max 2 fractional digits (rejects `12.345`)
    /// - rejects empty/invalid strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("empty amount".to_string());
        let invalid = || EngineError::InvalidAmount("invalid amount".to_string());
        let overflow = || EngineError::InvalidAmount("amount too large".to_string());

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (sign, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (-1i64, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (1i64, stripped)
        } else {
            (1i64, trimmed)
        };

        let rest = rest.trim();
        if rest.is_empty() {
            return Err(empty());
        }

        let rest = rest.replace(',', ".");
        let mut parts = rest.split('.');
        let major_str = parts.next().ok_or_else(invalid)?;
        let cents_str = parts.next();

        if parts.next().is_some() {
            return Err(invalid());
        }

        if major_str.is_empty() || !major_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let major: i64 = major_str.parse().map_err(|_| invalid())?;

        let cents: i64 = match cents_str {
            None => 0,
            Some("") => 0,
            Some(frac) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return Err(invalid());
                }
                match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    2 => frac.parse::<i64>().map_err(|_| invalid())?,
                    _ => return Err(EngineError::InvalidAmount("too many decimals".to_string())),
                }
            }
        };

        let total = major
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        let signed = if sign < 0 {
            total.checked_neg().ok_or_else(overflow)?
        } else {
            total
        };

        Ok(MoneyCents(signed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(MoneyCents::new(0).to_string(), "0.00");
        assert_eq!(MoneyCents::new(1).to_string(), "0.01");
        assert_eq!(MoneyCents::new(10).to_string(), "0.10");
        assert_eq!(MoneyCents::new(1050).to_string(), "10.50");
        assert_eq!(MoneyCents::new(-1050).to_string(), "-10.50");
    }

    #[test]
    fn format_prefixes_symbol() {
        assert_eq!(MoneyCents::new(80000).format(Currency::Inr), "₹800.00");
        assert_eq!(MoneyCents::new(-20000).format(Currency::Gbp), "£-200.00");
    }

    #[test]
    fn from_major_rounds_to_nearest_cent() {
        assert_eq!(MoneyCents::from_major(12.5).cents(), 1250);
        assert_eq!(MoneyCents::from_major(0.005).cents(), 1);
        assert_eq!(MoneyCents::from_major(500.0).cents(), 50000);
    }

    #[test]
    fn parse_accepts_dot_or_comma() {
        assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
        assert_eq!("10.5".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("10,50".parse::<MoneyCents>().unwrap().cents(), 1050);
        assert_eq!("-0.01".parse::<MoneyCents>().unwrap().cents(), -1);
        assert_eq!("+1.00".parse::<MoneyCents>().unwrap().cents(), 100);
        assert_eq!("  2.30 ".parse::<MoneyCents>().unwrap().cents(), 230);
    }

    #[test]
    fn parse_rejects_more_than_two_decimals() {
        assert!("12.345".parse::<MoneyCents>().is_err());
        assert!("0.001".parse::<MoneyCents>().is_err());
    }
}
