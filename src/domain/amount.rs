use crate::error::QrisError;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A positive transaction amount, in the smallest unit the payer's wallet
/// expects (whole Rupiah for QRIS).
///
/// Wraps `rust_decimal::Decimal` so the exact digits the caller supplied are
/// kept: `10.50` stays `10.50` when written into the payload.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, QrisError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(QrisError::InvalidAmount(format!(
                "{value} is not a positive amount"
            )))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Text written into the amount field (tag `54`).
    pub fn to_payload_string(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = QrisError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u64> for Amount {
    type Error = QrisError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(Decimal::from(value))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = QrisError;

    /// Accepts only `digits[.digits]` without leading zeros. Separators,
    /// signs, exponents and anything `Decimal` could only hold by rounding
    /// are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };
        let leading_zero = whole.len() > 1 && whole.starts_with('0');
        if !is_digits(whole) || leading_zero || !fraction.is_none_or(is_digits) {
            return Err(QrisError::InvalidAmount(format!(
                "{s:?} is not a plain decimal number"
            )));
        }

        let value = Decimal::from_str_exact(s).map_err(|_| {
            QrisError::InvalidAmount(format!("{s:?} has more digits than can be kept exactly"))
        })?;
        if value.is_zero() {
            return Err(QrisError::InvalidAmount(format!(
                "{s:?} is not a positive amount"
            )));
        }
        Ok(Self(value))
    }
}

// Parsed from the raw text so the caller's scale survives (`10.50`).
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
