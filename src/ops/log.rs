//! Natural logarithm.

use crate::common::consts::{ONE, TEN, TWO};
use crate::ctx::{BaseGuard, Context};
use crate::defs::{Error, MAX_SERIES_ITERATIONS};
use crate::num::Decimal;
use crate::ops::series::{series_sum, SeriesTermGen};

// Term generator for artanh(y) = y + y³/3 + y⁵/5 + …
struct LnTermGen {
    y: Decimal,
    step: Decimal,
    i: u64,
}

impl LnTermGen {
    fn new(y: &Decimal, ctx: &Context) -> Self {
        LnTermGen {
            y: y.clone(),
            step: y.mul(y, ctx),
            i: 1,
        }
    }
}

impl SeriesTermGen for LnTermGen {
    fn next(&mut self, ctx: &mut Context) -> Result<Decimal, Error> {
        self.i += 2;
        self.y = self.y.mul(&self.step, ctx);

        self.y.div(&Decimal::from_u64(self.i), ctx)
    }
}

impl Decimal {
    /// Computes the natural logarithm of `self` at the ambient scale.
    ///
    /// A non-positive argument yields the sentinel `(1 − 10^scale)/1`, a
    /// large-magnitude negative stand-in for −∞ rather than an error;
    /// callers must special-case it. Positive arguments are reduced into
    /// `[0.9, 1.2]` by repeated square roots, with a weight accumulator
    /// doubling per root, before the artanh series of `(x−1)/(x+1)` runs.
    ///
    /// ## Errors
    ///
    ///  - NoConvergence: the series did not converge at the current scale.
    ///  - Overflow: an internal counter exceeded the machine range.
    pub fn ln(&self, ctx: &mut Context) -> Result<Self, Error> {
        let mut guard = BaseGuard::ten(ctx);
        let ctx: &mut Context = &mut guard;

        // the sentinel for a domain violation, not an error
        if self.is_zero() || self.is_negative() {
            let p = TEN.pow_int(ctx.scale() as i64, ctx)?;
            return ONE.sub(&p).div(&ONE, ctx);
        }

        let upper = Decimal::parse("1.2", ctx)?;
        let lower = Decimal::parse("0.9", ctx)?;

        let mut x = self.clone();
        let mut weight = Decimal::from_u64(1);
        while x > upper {
            x = x.sqrt(ctx)?;
            weight = weight.add(&weight);
        }
        while x < lower && !x.is_zero() {
            x = x.sqrt(ctx)?;
            weight = weight.add(&weight);
        }

        let y = x.sub(&ONE).div(&x.add(&ONE), ctx)?;
        let mut term_gen = LnTermGen::new(&y, ctx);
        let r = series_sum(y.clone(), &mut term_gen, MAX_SERIES_ITERATIONS, ctx)?;

        Ok(r.mul(&TWO, ctx).mul(&weight, ctx))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_ln_one_is_zero() {
        let mut ctx = Context::with_scale(20);
        assert_eq!(dec("1").ln(&mut ctx).unwrap(), Decimal::zero());
    }

    #[test]
    fn test_ln_values() {
        let mut ctx = Context::with_scale(20);
        let eps = dec("0.000000000000000005");

        let l = dec("2").ln(&mut ctx).unwrap();
        assert!(l.sub(&dec("0.69314718055994530941")).abs() <= eps);

        let l = dec("10").ln(&mut ctx).unwrap();
        assert!(l.sub(&dec("2.30258509299404568401")).abs() <= eps);

        let l = dec("0.5").ln(&mut ctx).unwrap();
        assert!(l.add(&dec("0.69314718055994530941")).abs() <= eps);
    }

    #[test]
    fn test_ln_sentinel() {
        let mut ctx = Context::with_scale(5);

        // (1 − 10^5)/1 exactly
        let sentinel = dec("-99999");
        assert_eq!(Decimal::zero().ln(&mut ctx).unwrap(), sentinel);
        assert_eq!(dec("-2").ln(&mut ctx).unwrap(), sentinel);
    }

    #[test]
    fn test_ln_sentinel_path_restores_ibase() {
        let mut ctx = Context::with_scale(5);
        ctx.set_ibase(16).unwrap();

        Decimal::zero().ln(&mut ctx).unwrap();
        assert_eq!(ctx.ibase(), 16);
    }

    #[test]
    fn test_ln_restores_ibase() {
        let mut ctx = Context::with_scale(20);
        ctx.set_ibase(2).unwrap();

        dec("3").ln(&mut ctx).unwrap();
        assert_eq!(ctx.ibase(), 2);
        assert_eq!(ctx.scale(), 20);
    }
}
