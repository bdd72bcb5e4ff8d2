//! 18-decimal fixed-point token amounts.
//!
//! All quantities read from the chain are `uint256` values with an implicit
//! 18-decimal scale. Arithmetic is exact integer arithmetic: `mul` and
//! `sub` are checked, `div` floors toward zero. Division order matters for
//! truncation and is part of the observable contract, so callers chain
//! operations in the exact order the figures are defined in.

use std::fmt;

use alloy_primitives::U256;

use crate::error::MetricsError;

/// 10^18, the scale of the underlying token standard.
const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// A non-negative token amount at 18-decimal scale.
///
/// Constructed only from raw contract-call results or integer literals,
/// never from floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(U256);

impl Amount {
    pub const ZERO: Self = Self(U256::ZERO);

    pub fn from_raw(value: U256) -> Self {
        Self(value)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(U256::from(value))
    }

    /// Decode a big-endian `uint256` word as returned by `eth_call`.
    ///
    /// Accepts any length up to 32 bytes (nodes strip leading zeros in
    /// some error paths); an empty result means the call hit a non-contract
    /// account and is a node read failure, not a zero.
    pub fn from_be_bytes(raw: &[u8]) -> Result<Self, MetricsError> {
        if raw.is_empty() {
            return Err(MetricsError::NodeRead("empty call result".into()));
        }
        if raw.len() > 32 {
            return Err(MetricsError::NodeRead(format!(
                "oversized integer result ({} bytes)",
                raw.len()
            )));
        }
        let mut word = [0u8; 32];
        word[32 - raw.len()..].copy_from_slice(raw);
        Ok(Self(U256::from_be_bytes(word)))
    }

    pub fn raw(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked multiplication.
    pub fn mul(self, rhs: Self) -> Result<Self, MetricsError> {
        self.0
            .checked_mul(rhs.0)
            .map(Self)
            .ok_or(MetricsError::Arithmetic("mul"))
    }

    /// Flooring division. A zero divisor is an explicit error value;
    /// call sites dividing by a pair reserve reinterpret it as
    /// [`MetricsError::EmptyReferencePool`].
    pub fn div(self, rhs: Self) -> Result<Self, MetricsError> {
        if rhs.0.is_zero() {
            return Err(MetricsError::DivisionByZero);
        }
        Ok(Self(self.0 / rhs.0))
    }

    /// Checked subtraction. Amounts are non-negative, so an underflow is
    /// out of range rather than a negative value.
    pub fn sub(self, rhs: Self) -> Result<Self, MetricsError> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(MetricsError::Arithmetic("sub"))
    }

    /// Drop the 18-decimal scale, flooring: the human-readable whole-token
    /// figure.
    pub fn scale_down(self) -> Self {
        Self(self.0 / WAD)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(v: u128) -> Amount {
        Amount::from_raw(U256::from(v))
    }

    #[test]
    fn div_floors_toward_zero() {
        let cases: &[(u128, u128, u128)] = &[
            (7, 2, 3),
            (1, 3, 0),
            (999, 1000, 0),
            (1000, 1000, 1),
            (31_449_600 * 100, 200, 15_724_800),
        ];
        for &(a, b, want) in cases {
            let got = amt(a).div(amt(b)).unwrap();
            assert_eq!(got, amt(want), "{a} / {b}");
            // floor property: floor(a/b) * b never exceeds a
            assert!(got.mul(amt(b)).unwrap() <= amt(a));
        }
    }

    #[test]
    fn div_by_zero_is_an_error() {
        assert!(matches!(
            amt(1).div(Amount::ZERO),
            Err(MetricsError::DivisionByZero)
        ));
    }

    #[test]
    fn sub_underflow_is_out_of_range() {
        assert!(matches!(
            amt(1).sub(amt(2)),
            Err(MetricsError::Arithmetic("sub"))
        ));
        assert_eq!(amt(5).sub(amt(2)).unwrap(), amt(3));
    }

    #[test]
    fn mul_overflow_is_out_of_range() {
        let max = Amount::from_raw(U256::MAX);
        assert!(matches!(
            max.mul(amt(2)),
            Err(MetricsError::Arithmetic("mul"))
        ));
    }

    #[test]
    fn scale_down_drops_eighteen_decimals() {
        let raw = amt(800_000).mul(Amount::from_raw(WAD)).unwrap();
        assert_eq!(raw.scale_down(), amt(800_000));
        // sub-wad dust floors to zero
        assert_eq!(amt(999_999_999_999_999_999).scale_down(), Amount::ZERO);
    }

    #[test]
    fn decodes_padded_and_short_words() {
        let mut word = [0u8; 32];
        word[31] = 42;
        assert_eq!(Amount::from_be_bytes(&word).unwrap(), amt(42));
        // short (stripped) encodings are still valid big-endian integers
        assert_eq!(Amount::from_be_bytes(&[1, 0]).unwrap(), amt(256));
        assert!(Amount::from_be_bytes(&[]).is_err());
        assert!(Amount::from_be_bytes(&[0u8; 33]).is_err());
    }
}
