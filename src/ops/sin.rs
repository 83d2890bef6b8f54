//! Sine.

use crate::ctx::{BaseGuard, Context};
use crate::defs::{Error, MAX_SERIES_ITERATIONS};
use crate::num::Decimal;
use crate::ops::consts::Consts;
use crate::ops::series::{series_sum, SeriesTermGen};
use crate::ops::util::reduce_trig_arg;

// Term generator for sin(x) = x − x³/3! + x⁵/5! − …
struct SinTermGen {
    y: Decimal,
    step: Decimal,
    fct: Decimal,
    i: u64,
}

impl SinTermGen {
    fn new(x: &Decimal, ctx: &Context) -> Self {
        SinTermGen {
            y: x.clone(),
            step: x.mul(x, ctx).neg(),
            fct: Decimal::from_u64(1),
            i: 1,
        }
    }
}

impl SeriesTermGen for SinTermGen {
    fn next(&mut self, ctx: &mut Context) -> Result<Decimal, Error> {
        self.i += 2;
        self.y = self.y.mul(&self.step, ctx);
        let f = Decimal::from_u64((self.i - 1) * self.i);
        self.fct = self.fct.mul(&f, ctx);

        self.y.div(&self.fct, ctx)
    }
}

impl Decimal {
    /// Computes the sine of `self` at the ambient scale. The argument is
    /// first reduced modulo 2π, so inputs of any magnitude converge.
    ///
    /// ## Errors
    ///
    ///  - NoConvergence: the series did not converge at the current scale.
    ///  - Overflow: an internal counter exceeded the machine range.
    pub fn sin(&self, ctx: &mut Context, cc: &mut Consts) -> Result<Self, Error> {
        let mut guard = BaseGuard::ten(ctx);
        let ctx: &mut Context = &mut guard;

        let (x, negate) = reduce_trig_arg(self, ctx, cc)?;

        let mut term_gen = SinTermGen::new(&x, ctx);
        let r = series_sum(x, &mut term_gen, MAX_SERIES_ITERATIONS, ctx)?;

        Ok(if negate { r.neg() } else { r })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::parse(s, &Context::new()).unwrap()
    }

    #[test]
    fn test_sin_zero() {
        let mut ctx = Context::with_scale(20);
        let mut cc = Consts::new();
        assert_eq!(
            Decimal::zero().sin(&mut ctx, &mut cc).unwrap(),
            Decimal::zero()
        );
    }

    #[test]
    fn test_sin_values() {
        let mut ctx = Context::with_scale(20);
        let mut cc = Consts::new();
        let eps = dec("0.0000000000000000001");

        let s = dec("1").sin(&mut ctx, &mut cc).unwrap();
        assert!(s.sub(&dec("0.84147098480789650665")).abs() <= eps);

        let s = dec("0.5").sin(&mut ctx, &mut cc).unwrap();
        assert!(s.sub(&dec("0.47942553860420300027")).abs() <= eps);

        let s = dec("-1").sin(&mut ctx, &mut cc).unwrap();
        assert!(s.add(&dec("0.84147098480789650665")).abs() <= eps);
    }

    #[test]
    fn test_sin_large_arg_reduces() {
        let mut ctx = Context::with_scale(20);
        let mut cc = Consts::new();
        let eps = dec("0.000000000000000001");

        // sin(100) = −0.50636564110975879366…
        let s = dec("100").sin(&mut ctx, &mut cc).unwrap();
        assert!(s.add(&dec("0.50636564110975879366")).abs() <= eps);
    }

    #[test]
    fn test_sin_multiple_of_two_pi() {
        let mut ctx = Context::with_scale(20);
        let mut cc = Consts::new();
        let eps = dec("0.0000000000000000001");

        let pi = cc.pi(&mut ctx).unwrap();
        let x = pi.add(&pi);
        let s = x.sin(&mut ctx, &mut cc).unwrap();
        assert!(s.abs() <= eps);
    }

    #[test]
    fn test_sin_restores_ibase() {
        let mut ctx = Context::with_scale(20);
        ctx.set_ibase(16).unwrap();
        let mut cc = Consts::new();

        Decimal::from_u64(1).sin(&mut ctx, &mut cc).unwrap();
        assert_eq!(ctx.ibase(), 16);
        assert_eq!(ctx.scale(), 20);
    }
}
