//! Auxiliary functions.

use num_bigint::BigInt;
use num_traits::Pow;

/// 10 raised to `exp` as a big integer.
pub(crate) fn pow10(exp: u64) -> BigInt {
    Pow::pow(BigInt::from(10u8), exp)
}
