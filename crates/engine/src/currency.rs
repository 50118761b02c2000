use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Currency code used as a display label.
///
/// The dashboard never converts between currencies; the code only selects
/// the symbol placed in front of formatted amounts. All supported currencies
/// use 2 fraction digits, so stored minor units mean the same thing under
/// every code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub const ALL: [Currency; 4] = [Currency::Inr, Currency::Usd, Currency::Eur, Currency::Gbp];

    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// Symbol prefixed to formatted amounts. Pure lookup, no locale rules.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
        }
    }

    /// The next code in the fixed set, wrapping around. Used by the settings
    /// screen to cycle the display currency.
    #[must_use]
    pub const fn next(self) -> Currency {
        match self {
            Currency::Inr => Currency::Usd,
            Currency::Usd => Currency::Eur,
            Currency::Eur => Currency::Gbp,
            Currency::Gbp => Currency::Inr,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            other => Err(EngineError::UnsupportedCurrency(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Currency::try_from("usd").unwrap(), Currency::Usd);
        assert_eq!(Currency::try_from(" GBP ").unwrap(), Currency::Gbp);
        assert!(Currency::try_from("JPY").is_err());
    }

    #[test]
    fn cycle_visits_every_code() {
        let mut seen = vec![Currency::default()];
        let mut current = Currency::default();
        for _ in 0..3 {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(seen.len(), Currency::ALL.len());
        assert_eq!(current.next(), Currency::default());
    }
}
