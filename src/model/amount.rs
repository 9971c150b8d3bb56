//! Two-decimal fixed-point amounts.
//!
//! Weights, costs and capacities are quantized to integer hundredths
//! before any comparison, so the DP recurrence only ever compares
//! integers.

use super::error::ConstraintViolation;
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

/// Integer units per whole amount.
pub const SCALE: u32 = 100;

/// Maximum distance from a hundredth still accepted by [`Amount::quantize`].
const PRECISION_TOLERANCE: f64 = 1e-6;

/// A non-negative decimal with exactly two fractional digits, stored as
/// hundredths.
///
/// Values above [`Amount::MAX`] saturate to it. Valid [`Limits`] stay
/// below `MAX`, so a saturated amount always fails the limit checks.
///
/// [`Limits`]: super::Limits
///
/// # Examples
///
/// ```
/// use u_packer::model::Amount;
///
/// let weight: Amount = "2.01".parse().unwrap();
/// assert_eq!(weight.units(), 201);
/// assert_eq!(Amount::quantize(2.01).unwrap(), weight);
/// assert_eq!(weight.to_string(), "2.01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Amount(u32);

impl Amount {
    /// Zero weight or cost.
    pub const ZERO: Amount = Amount(0);

    /// Largest representable amount, `42949672.95`.
    pub const MAX: Amount = Amount(u32::MAX);

    /// Creates an amount from integer hundredths.
    pub const fn from_units(units: u32) -> Self {
        Amount(units)
    }

    /// Creates an amount from a whole number.
    pub const fn from_whole(whole: u32) -> Self {
        Amount(whole.saturating_mul(SCALE))
    }

    /// Returns the amount in hundredths.
    pub const fn units(self) -> u32 {
        self.0
    }

    /// Quantizes a floating-point value to hundredths: `round(value * 100)`.
    ///
    /// Rounding absorbs binary representation error, so `2.01` becomes
    /// exactly `201`. Values that sit farther than a rounding error away
    /// from a hundredth are rejected rather than truncated. Values past
    /// [`Amount::MAX`] saturate.
    pub fn quantize(value: f64) -> Result<Self, ConstraintViolation> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConstraintViolation::InvalidAmount {
                value: value.to_string(),
            });
        }

        let scaled = value * f64::from(SCALE);
        let rounded = scaled.round();
        if (scaled - rounded).abs() > PRECISION_TOLERANCE {
            return Err(ConstraintViolation::InvalidPrecision {
                value: value.to_string(),
            });
        }
        if rounded >= f64::from(u32::MAX) {
            return Ok(Amount::MAX);
        }

        Ok(Amount(rounded as u32))
    }

    /// Converts back to a float, for display or interop only.
    pub fn to_f64(self) -> f64 {
        f64::from(self.0) / f64::from(SCALE)
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, other: Amount) -> Amount {
        Amount(self.0 + other.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / SCALE, self.0 % SCALE)
    }
}

/// Exact decimal parsing. Trailing zeros past the second digit are
/// accepted (`72.300`), any other extra digit is not. Values past
/// [`Amount::MAX`] saturate.
impl FromStr for Amount {
    type Err = ConstraintViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || ConstraintViolation::InvalidAmount {
            value: text.to_string(),
        };

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let fraction = fraction.trim_end_matches('0');
        if fraction.len() > 2 {
            return Err(ConstraintViolation::InvalidPrecision {
                value: text.to_string(),
            });
        }

        let whole = whole.trim_start_matches('0');
        if whole.len() > 10 {
            return Ok(Amount::MAX);
        }
        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let hundredths = fraction
            .bytes()
            .chain(std::iter::repeat(b'0'))
            .take(2)
            .fold(0u64, |acc, b| acc * 10 + u64::from(b - b'0'));

        let units = whole * u64::from(SCALE) + hundredths;
        Ok(u32::try_from(units).map_or(Amount::MAX, Amount))
    }
}

impl TryFrom<f64> for Amount {
    type Error = ConstraintViolation;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Amount::quantize(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> f64 {
        amount.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantize_rounds_binary_error() {
        // 2.01 * 100 is 200.99999999999997 in binary floating point
        assert_eq!(Amount::quantize(2.01).unwrap().units(), 201);
        assert_eq!(Amount::quantize(53.38).unwrap().units(), 5338);
        assert_eq!(Amount::quantize(0.29).unwrap().units(), 29);
        assert_eq!(Amount::quantize(100.0).unwrap().units(), 10_000);
    }

    #[test]
    fn test_quantize_rejects_extra_precision() {
        assert!(matches!(
            Amount::quantize(2.005),
            Err(ConstraintViolation::InvalidPrecision { .. })
        ));
    }

    #[test]
    fn test_quantize_rejects_negative_and_nan() {
        assert!(matches!(
            Amount::quantize(-1.0),
            Err(ConstraintViolation::InvalidAmount { .. })
        ));
        assert!(matches!(
            Amount::quantize(f64::NAN),
            Err(ConstraintViolation::InvalidAmount { .. })
        ));
        assert!(Amount::quantize(f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_exact() {
        assert_eq!("53.38".parse::<Amount>().unwrap().units(), 5338);
        assert_eq!("15.3".parse::<Amount>().unwrap().units(), 1530);
        assert_eq!("81".parse::<Amount>().unwrap().units(), 8100);
        assert_eq!("6.".parse::<Amount>().unwrap().units(), 600);
        assert_eq!(".5".parse::<Amount>().unwrap().units(), 50);
        assert_eq!(" 72.300 ".parse::<Amount>().unwrap().units(), 7230);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for text in ["", ".", "abc", "1.2.3", "-4", "1e3", "4,5"] {
            assert!(
                matches!(
                    text.parse::<Amount>(),
                    Err(ConstraintViolation::InvalidAmount { .. })
                ),
                "expected `{text}` to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_extra_precision() {
        assert_eq!(
            "2.001".parse::<Amount>(),
            Err(ConstraintViolation::InvalidPrecision {
                value: "2.001".into()
            })
        );
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!("42949672.95".parse::<Amount>(), Ok(Amount::MAX));
        assert_eq!("42949673".parse::<Amount>(), Ok(Amount::MAX));
        assert_eq!("50000000".parse::<Amount>(), Ok(Amount::MAX));
        assert_eq!("99999999999999999999.5".parse::<Amount>(), Ok(Amount::MAX));
        assert_eq!(Amount::quantize(5e7), Ok(Amount::MAX));
        assert_eq!(Amount::quantize(1e300), Ok(Amount::MAX));
        assert_eq!("0042949672.94".parse::<Amount>().unwrap().units(), u32::MAX - 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_units(7230).to_string(), "72.30");
        assert_eq!(Amount::from_units(5).to_string(), "0.05");
        assert_eq!(Amount::from_whole(100).to_string(), "100.00");
    }

    #[test]
    fn test_add_and_order() {
        let a = Amount::from_units(1455);
        let b = Amount::from_units(6002);
        assert_eq!((a + b).units(), 7457);
        assert!(a < b);
        assert_eq!(Amount::from_units(u32::MAX).checked_add(a), None);
    }
}
