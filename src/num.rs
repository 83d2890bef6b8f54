//! Decimal value and the scale-based arithmetic it is computed with.

use bigdecimal::rounding::RoundingMode;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_integer::Roots;
use num_traits::{Pow, ToPrimitive, Zero};

use crate::common::util::pow10;
use crate::ctx::Context;
use crate::defs::{Error, Sign};

/// An arbitrary-precision signed decimal number.
///
/// Values are produced and consumed through operations that follow
/// scale-based truncating rules: addition and subtraction are exact,
/// multiplication keeps `min(sa + sb, max(scale, sa, sb))` fractional
/// digits (`sa`, `sb` being the operand scales), division truncates to
/// exactly `scale` fractional digits, and the square root keeps
/// `max(scale, sa)`. Truncation is always toward zero, computed over the
/// shifted integer mantissa, so results are exact to their scale.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Decimal {
    val: BigDecimal,
}

impl Decimal {
    /// Returns zero.
    pub fn zero() -> Self {
        Decimal {
            val: BigDecimal::zero(),
        }
    }

    /// Creates a value from an unsigned machine integer.
    pub fn from_u64(d: u64) -> Self {
        Decimal {
            val: BigDecimal::from(d),
        }
    }

    /// Creates a value from a signed machine integer.
    pub fn from_i64(d: i64) -> Self {
        Decimal {
            val: BigDecimal::from(d),
        }
    }

    pub(crate) fn from_raw(val: BigDecimal) -> Self {
        Decimal { val }
    }

    /// Returns true if `self` is zero.
    pub fn is_zero(&self) -> bool {
        self.val.is_zero()
    }

    /// Returns true if `self` is negative.
    pub fn is_negative(&self) -> bool {
        self.val.sign() == num_bigint::Sign::Minus
    }

    /// Returns the sign of `self`; zero is reported as positive.
    pub fn sign(&self) -> Sign {
        if self.is_negative() {
            Sign::Neg
        } else {
            Sign::Pos
        }
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        Decimal {
            val: self.val.abs(),
        }
    }

    /// Returns `self` with the opposite sign.
    pub fn neg(&self) -> Self {
        Decimal { val: -&self.val }
    }

    /// Returns the number of significant fractional digits of `self`
    /// (the engine's `scale(x)`).
    pub fn frac_digits(&self) -> u32 {
        self.val.fractional_digit_count().max(0) as u32
    }

    /// Integer value of `self`, if it is an integer that fits the machine
    /// range.
    pub(crate) fn to_i64(&self) -> Option<i64> {
        self.val.to_i64()
    }

    /// Computes the exact sum of `self` and `rhs`.
    pub fn add(&self, rhs: &Self) -> Self {
        Decimal {
            val: &self.val + &rhs.val,
        }
    }

    /// Computes the exact difference of `self` and `rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        Decimal {
            val: &self.val - &rhs.val,
        }
    }

    /// Computes the product of `self` and `rhs`, truncated per the scale
    /// rule.
    pub fn mul(&self, rhs: &Self, ctx: &Context) -> Self {
        let sa = self.frac_digits() as i64;
        let sb = rhs.frac_digits() as i64;
        let keep = (sa + sb).min((ctx.scale() as i64).max(sa).max(sb));

        Decimal {
            val: truncate(&self.val * &rhs.val, keep),
        }
    }

    /// Computes the quotient of `self` and `rhs`, truncated toward zero to
    /// exactly `scale` fractional digits.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `rhs` is zero.
    pub fn div(&self, rhs: &Self, ctx: &Context) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let scale = ctx.scale() as i64;
        let (ia, ea) = self.val.as_bigint_and_exponent();
        let (ib, eb) = rhs.val.as_bigint_and_exponent();

        // self / rhs scaled to `scale` digits: ia·10^(scale - ea + eb) / ib
        let shift = scale - ea + eb;
        let q = if shift >= 0 {
            ia * pow10(shift as u64) / ib
        } else {
            ia / (ib * pow10(shift.unsigned_abs()))
        };

        Ok(Decimal {
            val: BigDecimal::new(q, scale),
        })
    }

    /// Computes the remainder `self − (self / rhs)·rhs`, with the division
    /// truncated at the ambient scale. At zero scale this is exact
    /// integer-multiple subtraction.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `rhs` is zero.
    pub fn rem(&self, rhs: &Self, ctx: &Context) -> Result<Self, Error> {
        let q = self.div(rhs, ctx)?;
        Ok(self.sub(&q.mul(rhs, ctx)))
    }

    /// Computes the square root of `self`, truncated to
    /// `max(scale, frac_digits)` fractional digits.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `self` is negative.
    pub fn sqrt(&self, ctx: &Context) -> Result<Self, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument);
        }

        let digits = (ctx.scale() as i64).max(self.frac_digits() as i64);
        let (ia, ea) = self.val.as_bigint_and_exponent();

        // trunc(sqrt(self)·10^digits) = isqrt(ia·10^(2·digits − ea))
        let shift = 2 * digits - ea;
        let n = if shift >= 0 {
            ia * pow10(shift as u64)
        } else {
            ia / pow10(shift.unsigned_abs())
        };

        Ok(Decimal {
            val: BigDecimal::new(n.sqrt(), digits),
        })
    }

    /// Raises `self` to the integer power `n`. For `n > 0` the exact power
    /// is truncated to `min(sa·n, max(scale, sa))` fractional digits; for
    /// `n < 0` the reciprocal of the exact power is taken at the ambient
    /// scale; `n = 0` yields 1.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `self` is zero and `n` is negative.
    ///  - Overflow: the power's scale exceeds the machine range.
    pub fn pow_int(&self, n: i64, ctx: &Context) -> Result<Self, Error> {
        if n == 0 {
            return Ok(Decimal::from_u64(1));
        }
        if self.is_zero() && n < 0 {
            return Err(Error::DivisionByZero);
        }

        let m = n.unsigned_abs();
        let mi = i64::try_from(m).map_err(|_| Error::Overflow)?;
        let (ia, ea) = self.val.as_bigint_and_exponent();
        let e = ea.checked_mul(mi).ok_or(Error::Overflow)?;
        let p = Decimal {
            val: BigDecimal::new(Pow::pow(ia, m), e),
        };

        if n > 0 {
            let sa = self.frac_digits() as i64;
            let keep = sa
                .checked_mul(mi)
                .ok_or(Error::Overflow)?
                .min((ctx.scale() as i64).max(sa));
            Ok(Decimal {
                val: truncate(p.val, keep),
            })
        } else {
            Decimal::from_u64(1).div(&p, ctx)
        }
    }

    /// Copy of `self` truncated toward zero to at most `digits` fractional
    /// digits.
    pub(crate) fn with_frac_digits(&self, digits: u32) -> Self {
        Decimal {
            val: truncate(self.val.clone(), digits as i64),
        }
    }
}

// Drop fractional digits beyond `keep`, toward zero. Values with fewer
// digits are left as they are.
fn truncate(val: BigDecimal, keep: i64) -> BigDecimal {
    if val.fractional_digit_count() > keep {
        val.with_scale_round(keep, RoundingMode::Down)
    } else {
        val
    }
}

impl core::fmt::Display for Decimal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.val, f)
    }
}
