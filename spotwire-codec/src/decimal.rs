/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Fixed-point decimal conversion.
//!
//! SBE encodes decimals as an `i64` mantissa and an `i8` exponent:
//! `value = mantissa * 10^exponent`. The mantissa `i64::MIN` is the null
//! value and renders as an empty string.
//!
//! [`convert`] goes through `f64`, which is what the text responses are
//! compared against. For mantissas above 2^53 the rendering can differ from
//! the exact decimal; use [`FixedPointDecimal::to_decimal`] when exactness
//! matters.

use rust_decimal::Decimal;
use spotwire_core::error::DecodeError;
use std::fmt;
use std::str::FromStr;

/// Mantissa value that marks an absent decimal.
pub const NULL_MANTISSA: i64 = i64::MIN;

/// Renders `mantissa * 10^exponent` with `max(0, -exponent)` fractional digits.
///
/// # Arguments
/// * `mantissa` - The decimal mantissa; `i64::MIN` means absent
/// * `exponent` - The power of ten applied to the mantissa
///
/// # Returns
/// The rendered decimal, or an empty string for the null mantissa.
#[must_use]
pub fn convert(mantissa: i64, exponent: i8) -> String {
    if mantissa == NULL_MANTISSA {
        return String::new();
    }

    let value = mantissa as f64 * pow10(exponent);
    let precision = usize::from(exponent.unsigned_abs()) * usize::from(exponent < 0);
    format!("{value:.precision$}")
}

/// Powers `10^0..=10^31`.
const POW10_SMALL: [f64; 32] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17, 1e18, 1e19, 1e20, 1e21, 1e22, 1e23, 1e24, 1e25, 1e26, 1e27, 1e28, 1e29, 1e30, 1e31,
];

/// Positive powers in steps of 32, up to the `i8` range.
const POW10_POS32: [f64; 5] = [1e0, 1e32, 1e64, 1e96, 1e128];

/// Negative powers in steps of 32, up to the `i8` range.
const POW10_NEG32: [f64; 5] = [1e0, 1e-32, 1e-64, 1e-96, 1e-128];

/// `10^exponent` as `f64`.
///
/// Correctly rounded for `0..=31`; larger magnitudes multiply (or divide) a power of
/// `10^32` by the remainder, matching the text rendering path.
#[inline]
fn pow10(exponent: i8) -> f64 {
    let magnitude = usize::from(exponent.unsigned_abs());
    let (high, low) = (magnitude / 32, magnitude % 32);
    if exponent < 0 {
        POW10_NEG32[high] / POW10_SMALL[low]
    } else {
        POW10_POS32[high] * POW10_SMALL[low]
    }
}

/// A decimal as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPointDecimal {
    /// Unscaled value.
    pub mantissa: i64,
    /// Power of ten applied to the mantissa.
    pub exponent: i8,
}

impl FixedPointDecimal {
    /// Creates a decimal from its wire parts.
    #[inline]
    #[must_use]
    pub const fn new(mantissa: i64, exponent: i8) -> Self {
        Self { mantissa, exponent }
    }

    /// Creates the null decimal.
    #[inline]
    #[must_use]
    pub const fn null(exponent: i8) -> Self {
        Self::new(NULL_MANTISSA, exponent)
    }

    /// Returns true if this is the absent-value sentinel.
    #[inline]
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.mantissa == NULL_MANTISSA
    }

    /// Renders the decimal the same way as [`convert`].
    #[must_use]
    pub fn render(self) -> String {
        convert(self.mantissa, self.exponent)
    }

    /// Returns the exact decimal value.
    ///
    /// # Returns
    /// `None` for the null value or when the value does not fit a `Decimal`
    /// (scale above 28 or overflow).
    #[must_use]
    pub fn to_decimal(self) -> Option<Decimal> {
        if self.is_null() {
            return None;
        }
        let magnitude = u32::from(self.exponent.unsigned_abs());
        if self.exponent <= 0 {
            Decimal::try_from_i128_with_scale(i128::from(self.mantissa), magnitude).ok()
        } else {
            let factor = 10i64.checked_pow(magnitude)?;
            Decimal::from(self.mantissa).checked_mul(Decimal::from(factor))
        }
    }
}

impl fmt::Display for FixedPointDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for FixedPointDecimal {
    type Err = DecodeError;

    /// Parses a plain decimal string such as `"-1234.5600"`.
    ///
    /// The exponent is minus the number of fractional digits, so the
    /// rendering of the parsed value reproduces the input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DecodeError::mapping(format!("invalid decimal: {s:?}"));

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if int_part.is_empty()
            || !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let exponent = i8::try_from(frac_part.len())
            .map(|digits| -digits)
            .map_err(|_| invalid())?;
        let mut mantissa: i64 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            mantissa = mantissa
                .checked_mul(10)
                .and_then(|m| m.checked_add(i64::from(b - b'0')))
                .ok_or_else(invalid)?;
        }
        if negative {
            mantissa = -mantissa;
        }
        Ok(Self::new(mantissa, exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_convert_negative_exponent() {
        assert_eq!(convert(123456, -2), "1234.56");
    }

    #[test]
    fn test_convert_zero_exponent() {
        assert_eq!(convert(12345, 0), "12345");
    }

    #[test]
    fn test_convert_null() {
        assert_eq!(convert(i64::MIN, -2), "");
        assert_eq!(FixedPointDecimal::null(-8).render(), "");
    }

    #[test]
    fn test_convert_large_number() {
        assert_eq!(convert(9876543210, -8), "98.76543210");
    }

    #[test]
    fn test_convert_small_number() {
        assert_eq!(convert(1, -8), "0.00000001");
    }

    #[test]
    fn test_convert_positive_exponent() {
        assert_eq!(convert(15, 2), "1500");
    }

    #[test]
    fn test_convert_negative_mantissa() {
        assert_eq!(convert(-250, -2), "-2.50");
        assert_eq!(convert(0, -4), "0.0000");
    }

    #[test]
    fn test_pow10_small_exponents_are_exact() {
        for exponent in -22i8..=31 {
            let parsed: f64 = format!("1e{exponent}").parse().unwrap();
            assert_eq!(pow10(exponent), parsed, "10^{exponent}");
        }
    }

    #[test]
    fn test_pow10_large_exponents_split_on_32() {
        assert_eq!(pow10(33), 1e32 * 1e1);
        assert_eq!(pow10(39), 1e32 * 1e7);
        assert_eq!(pow10(127), 1e96 * 1e31);
        assert_eq!(pow10(-33), 1e-32 / 1e1);
        assert_eq!(pow10(-128), 1e-128);
    }

    #[test]
    fn test_to_decimal_is_exact() {
        let price = FixedPointDecimal::new(9876543210, -8);
        assert_eq!(price.to_decimal().unwrap().to_string(), "98.76543210");
        assert_eq!(
            FixedPointDecimal::new(15, 2).to_decimal(),
            Some(Decimal::from(1500))
        );
        assert_eq!(FixedPointDecimal::null(-2).to_decimal(), None);
        assert_eq!(FixedPointDecimal::new(1, -29).to_decimal(), None);
    }

    #[test]
    fn test_parse() {
        let parsed: FixedPointDecimal = "-1234.5600".parse().unwrap();
        assert_eq!(parsed, FixedPointDecimal::new(-12345600, -4));
        let whole: FixedPointDecimal = "42".parse().unwrap();
        assert_eq!(whole, FixedPointDecimal::new(42, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "-", ".5", "1.2.3", "1e5", "abc", "99999999999999999999"] {
            assert!(input.parse::<FixedPointDecimal>().is_err(), "{input}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(FixedPointDecimal::new(5, -1).to_string(), "0.5");
    }

    proptest! {
        #[test]
        fn prop_render_is_stable(
            mantissa in -100_000_000_000_000i64..100_000_000_000_000i64,
            exponent in -18i8..=0,
        ) {
            let rendered = convert(mantissa, exponent);
            let reparsed: FixedPointDecimal = rendered.parse().unwrap();
            prop_assert_eq!(reparsed.exponent, exponent);
            prop_assert_eq!(reparsed.render(), rendered);
        }

        #[test]
        fn prop_positive_exponent_is_integer(
            mantissa in -1_000_000i64..1_000_000i64,
            exponent in 0i8..=8,
        ) {
            let rendered = convert(mantissa, exponent);
            prop_assert!(!rendered.contains('.'));
            let reparsed: FixedPointDecimal = rendered.parse().unwrap();
            prop_assert_eq!(reparsed.render(), rendered);
        }
    }
}
