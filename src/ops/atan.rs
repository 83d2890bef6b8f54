//! Arctangent.

use crate::common::consts::{ONE, TWO};
use crate::ctx::{BaseGuard, Context};
use crate::defs::{Error, MAX_SERIES_ITERATIONS};
use crate::num::Decimal;
use crate::ops::series::{series_sum, SeriesTermGen};

// Term generator for atan(x) = x − x³/3 + x⁵/5 − …
struct AtanTermGen {
    y: Decimal,
    step: Decimal,
    i: u64,
}

impl AtanTermGen {
    fn new(x: &Decimal, ctx: &Context) -> Self {
        AtanTermGen {
            y: x.clone(),
            step: x.mul(x, ctx).neg(),
            i: 1,
        }
    }
}

impl SeriesTermGen for AtanTermGen {
    fn next(&mut self, ctx: &mut Context) -> Result<Decimal, Error> {
        self.i += 2;
        self.y = self.y.mul(&self.step, ctx);

        self.y.div(&Decimal::from_u64(self.i), ctx)
    }
}

impl Decimal {
    /// Computes the arctangent of `self` at the ambient scale. The result
    /// lies in `(−π/2, π/2)`.
    ///
    /// Arguments of magnitude one or more are halved once through
    /// `atan(x) = 2·atan(x / (1 + √(1+x²)))`, which brings any positive
    /// argument strictly below one, so the series converges for every
    /// input.
    ///
    /// ## Errors
    ///
    ///  - NoConvergence: the series did not converge at the current scale.
    ///  - Overflow: an internal counter exceeded the machine range.
    pub fn atan(&self, ctx: &mut Context) -> Result<Self, Error> {
        let mut guard = BaseGuard::ten(ctx);
        let ctx: &mut Context = &mut guard;

        let sign = self.sign();
        let mut x = self.abs();

        let mut doubling = false;
        if x >= *ONE {
            let t = x.mul(&x, ctx).add(&ONE).sqrt(ctx)?;
            x = x.div(&ONE.add(&t), ctx)?;
            doubling = true;
        }

        let mut term_gen = AtanTermGen::new(&x, ctx);
        let mut r = series_sum(x, &mut term_gen, MAX_SERIES_ITERATIONS, ctx)?;

        if doubling {
            r = r.mul(&TWO, ctx);
        }

        Ok(if sign.is_negative() { r.neg() } else { r })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_atan_zero() {
        let mut ctx = Context::with_scale(20);
        assert_eq!(Decimal::zero().atan(&mut ctx).unwrap(), Decimal::zero());
    }

    #[test]
    fn test_atan_one_is_quarter_pi() {
        let mut ctx = Context::with_scale(20);
        let eps = dec("0.0000000000000000005");

        let a = dec("1").atan(&mut ctx).unwrap();
        assert!(a.sub(&dec("0.78539816339744830961")).abs() <= eps);
    }

    #[test]
    fn test_atan_values() {
        let mut ctx = Context::with_scale(20);
        let eps = dec("0.0000000000000000005");

        let a = dec("0.5").atan(&mut ctx).unwrap();
        assert!(a.sub(&dec("0.46364760900080611621")).abs() <= eps);

        // a large argument is halved into range
        let a = dec("10").atan(&mut ctx).unwrap();
        assert!(a.sub(&dec("1.47112767430373459185")).abs() <= eps);

        let a = dec("-1").atan(&mut ctx).unwrap();
        assert!(a.add(&dec("0.78539816339744830961")).abs() <= eps);
    }

    #[test]
    fn test_atan_restores_ibase() {
        let mut ctx = Context::with_scale(20);
        ctx.set_ibase(12).unwrap();

        dec("2").atan(&mut ctx).unwrap();
        assert_eq!(ctx.ibase(), 12);
        assert_eq!(ctx.scale(), 20);
    }
}
