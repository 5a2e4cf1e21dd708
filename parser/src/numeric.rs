//! Safe conversions of numeral-only strings at increasing precision.
//!
//! Every converter accepts only a non-empty run of ASCII digits.
//! Signs, whitespace, separators, and out-of-range values are reported as `None`.

#[cfg(feature = "bigint")]
use num_bigint::BigUint;

/// Converts a numeral into an `i32`.
///
/// ```rust
/// use flexible_version_parser::numeric::try_int32;
///
/// assert_eq!(try_int32("2147483647"), Some(i32::MAX));
/// assert_eq!(try_int32("2147483648"), None);
/// assert_eq!(try_int32("+1"), None);
/// ```
pub fn try_int32(numeral: &str) -> Option<i32> {
    if is_numeral(numeral) {
        numeral.parse().ok()
    } else {
        None
    }
}

/// Converts a numeral into an `i64`.
///
/// ```rust
/// use flexible_version_parser::numeric::try_int64;
///
/// assert_eq!(try_int64("2147483648"), Some(2_147_483_648));
/// assert_eq!(try_int64("9223372036854775808"), None);
/// ```
pub fn try_int64(numeral: &str) -> Option<i64> {
    if is_numeral(numeral) {
        numeral.parse().ok()
    } else {
        None
    }
}

/// Converts a numeral of any length into an arbitrary precision integer.
///
/// ```rust
/// use flexible_version_parser::numeric::try_big_integer;
///
/// let value = try_big_integer("98765432109876543210").unwrap();
/// assert_eq!(value.to_string(), "98765432109876543210");
/// assert!(try_big_integer("1_000").is_none());
/// ```
#[cfg(feature = "bigint")]
pub fn try_big_integer(numeral: &str) -> Option<BigUint> {
    if is_numeral(numeral) {
        BigUint::parse_bytes(numeral.as_bytes(), 10)
    } else {
        None
    }
}

/// Converts a numeral into an `f64`.
///
/// Very long numerals lose precision, which is why this is only
/// used as the widest tier when the `bigint` feature is disabled.
///
/// ```rust
/// use flexible_version_parser::numeric::try_double;
///
/// assert_eq!(try_double("42"), Some(42.0));
/// assert_eq!(try_double("4.2"), None);
/// ```
pub fn try_double(numeral: &str) -> Option<f64> {
    if is_numeral(numeral) {
        numeral.parse().ok()
    } else {
        None
    }
}

fn is_numeral(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// A numeric tier the parser tries, in this order, when a component does not fit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Precision {
    Int32,
    Int64,
    /// Arbitrary precision with `bigint`, a double without it.
    Unbounded,
}

impl Precision {
    pub(crate) const TIERS: [Precision; 3] =
        [Precision::Int32, Precision::Int64, Precision::Unbounded];

    /// Splits a numeral into a component value of at most `i32::MAX`
    /// and the decimal remainder that did not fit.
    pub(crate) fn cap(self, numeral: &str) -> Option<Capped> {
        match self {
            Precision::Int32 => try_int32(numeral).map(Capped::exact),
            Precision::Int64 => {
                let value = try_int64(numeral)?;
                let max = i64::from(i32::MAX);
                if value > max {
                    Some(Capped::overflowing(value - max))
                } else {
                    try_int32(numeral).map(Capped::exact)
                }
            }
            Precision::Unbounded => cap_unbounded(numeral),
        }
    }
}

#[cfg(feature = "bigint")]
fn cap_unbounded(numeral: &str) -> Option<Capped> {
    use num_traits::ToPrimitive;

    let value = try_big_integer(numeral)?;
    let max = BigUint::from(i32::MAX.unsigned_abs());
    if value > max {
        Some(Capped::overflowing(value - max))
    } else {
        value.to_i32().map(Capped::exact)
    }
}

#[cfg(not(feature = "bigint"))]
fn cap_unbounded(numeral: &str) -> Option<Capped> {
    let value = try_double(numeral)?;
    let max = f64::from(i32::MAX);
    if value > max {
        Some(Capped::overflowing(value - max))
    } else {
        try_int32(numeral).map(Capped::exact)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Capped {
    pub(crate) component: i32,
    pub(crate) remainder: Option<String>,
}

impl Capped {
    fn exact(component: i32) -> Self {
        Self {
            component,
            remainder: None,
        }
    }

    fn overflowing(remainder: impl ToString) -> Self {
        Self {
            component: i32::MAX,
            remainder: Some(remainder.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0" => Some(0))]
    #[test_case("007" => Some(7))]
    #[test_case("2147483647" => Some(i32::MAX))]
    #[test_case("2147483648" => None; "one past max")]
    #[test_case("" => None; "empty")]
    #[test_case("-1" => None; "negative")]
    #[test_case("+1" => None; "plus sign")]
    #[test_case(" 1" => None; "whitespace")]
    #[test_case("1a" => None; "trailing letter")]
    fn test_try_int32(input: &str) -> Option<i32> {
        try_int32(input)
    }

    #[test_case("2147483648" => Some(2_147_483_648))]
    #[test_case("9223372036854775807" => Some(i64::MAX))]
    #[test_case("9223372036854775808" => None; "one past max")]
    #[test_case("-5" => None; "negative")]
    fn test_try_int64(input: &str) -> Option<i64> {
        try_int64(input)
    }

    #[cfg(feature = "bigint")]
    #[test_case("9223372036854775808" => Some("9223372036854775808".to_string()))]
    #[test_case("0000" => Some("0".to_string()))]
    #[test_case("12_34" => None; "underscore")]
    #[test_case("" => None; "empty")]
    fn test_try_big_integer(input: &str) -> Option<String> {
        try_big_integer(input).map(|v| v.to_string())
    }

    #[test_case("12" => Some(12.0))]
    #[test_case("1e5" => None; "exponent")]
    #[test_case("inf" => None; "infinity")]
    #[test_case("1.5" => None; "fraction")]
    fn test_try_double(input: &str) -> Option<f64> {
        try_double(input)
    }

    #[test_case(Precision::Int32, "42" => Some(Capped::exact(42)))]
    #[test_case(Precision::Int32, "2147483700" => None; "int32 overflow")]
    #[test_case(Precision::Int64, "2147483700" => Some(Capped::overflowing(53)))]
    #[test_case(Precision::Int64, "17" => Some(Capped::exact(17)); "int64 small")]
    #[test_case(Precision::Int64, "99999999999999999999" => None; "int64 overflow")]
    #[test_case(Precision::Unbounded, "2147483648" => Some(Capped::overflowing(1)))]
    #[test_case(Precision::Unbounded, "5" => Some(Capped::exact(5)); "unbounded small")]
    fn test_cap(precision: Precision, numeral: &str) -> Option<Capped> {
        precision.cap(numeral)
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_cap_beyond_int64_is_exact() {
        let capped = Precision::Unbounded
            .cap("98765432109876543210987654321")
            .unwrap();
        assert_eq!(capped.component, i32::MAX);
        assert_eq!(
            capped.remainder.as_deref(),
            Some("98765432109876543208840170674")
        );
    }

    #[test]
    fn test_tier_order() {
        assert_eq!(
            Precision::TIERS,
            [Precision::Int32, Precision::Int64, Precision::Unbounded]
        );
    }
}
