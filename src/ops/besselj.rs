//! Bessel function of the first kind, integer order.

use crate::common::consts::{FOUR, ONE, TWO};
use crate::ctx::{BaseGuard, Context, ScaleGuard};
use crate::defs::{Error, Sign, MAX_SERIES_ITERATIONS};
use crate::num::Decimal;
use crate::ops::series::{series_sum, SeriesTermGen};

// Term generator for Σ (−x²)ᵏ / (4ᵏ·k!·(n+1)…(n+k)), k ≥ 1.
struct BesselTermGen {
    y: Decimal,
    step: Decimal,
    div: Decimal,
    order: Decimal,
    i: u64,
}

impl BesselTermGen {
    fn new(x: &Decimal, order: i64, ctx: &Context) -> Self {
        BesselTermGen {
            y: Decimal::from_u64(1),
            step: x.mul(x, ctx).neg(),
            div: Decimal::from_u64(1),
            order: Decimal::from_i64(order),
            i: 0,
        }
    }
}

impl SeriesTermGen for BesselTermGen {
    fn next(&mut self, ctx: &mut Context) -> Result<Decimal, Error> {
        self.i += 1;
        let i = Decimal::from_u64(self.i);
        self.div = self
            .div
            .mul(&FOUR, ctx)
            .mul(&i, ctx)
            .mul(&self.order.add(&i), ctx);
        self.y = self.y.mul(&self.step, ctx);

        self.y.div(&self.div, ctx)
    }
}

impl Decimal {
    /// Computes the Bessel function of the first kind of `self`, for the
    /// integer order `order`, at the ambient scale.
    ///
    /// The order is coerced to an integer by truncating division under a
    /// zero-scale guard; a negative order folds through
    /// `J₋ₙ(x) = (−1)ⁿ·Jₙ(x)`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the coerced order does not fit the machine
    ///    integer range.
    ///  - NoConvergence: the series did not converge at the current scale.
    ///  - Overflow: an internal counter exceeded the machine range.
    pub fn besselj(&self, order: &Decimal, ctx: &mut Context) -> Result<Self, Error> {
        let mut guard = BaseGuard::ten(ctx);
        let ctx: &mut Context = &mut guard;

        let n = {
            let zg = ScaleGuard::zero(ctx);
            order.div(&ONE, &zg)?
        };
        let mut n = n.to_i64().ok_or(Error::InvalidArgument)?;

        let mut sign = Sign::Pos;
        if n < 0 {
            n = n.checked_neg().ok_or(Error::Overflow)?;
            if n % 2 == 1 {
                sign = sign.invert();
            }
        }

        // leading coefficient: xⁿ / (2ⁿ·n!)
        let mut fct = Decimal::from_u64(1);
        for i in 1..=n as u64 {
            fct = fct.mul(&Decimal::from_u64(i), ctx);
        }
        let den = TWO.pow_int(n, ctx)?.mul(&fct, ctx);
        let g = self.pow_int(n, ctx)?.div(&den, ctx)?;

        let mut term_gen = BesselTermGen::new(self, n, ctx);
        let r = series_sum(
            Decimal::from_u64(1),
            &mut term_gen,
            MAX_SERIES_ITERATIONS,
            ctx,
        )?;

        let r = g.mul(&r, ctx);
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
    fn test_besselj_zero_order_at_zero() {
        let mut ctx = Context::with_scale(20);
        let j = Decimal::zero()
            .besselj(&Decimal::zero(), &mut ctx)
            .unwrap();
        assert_eq!(j, dec("1"));
    }

    #[test]
    fn test_besselj_values() {
        let mut ctx = Context::with_scale(20);
        let eps = dec("0.000000000000000001");

        // J₀(1) = 0.76519768655796655145…
        let j = dec("1").besselj(&Decimal::zero(), &mut ctx).unwrap();
        assert!(j.sub(&dec("0.76519768655796655145")).abs() <= eps);

        // J₁(2) = 0.57672480775687338654…
        let j = dec("2").besselj(&dec("1"), &mut ctx).unwrap();
        assert!(j.sub(&dec("0.57672480775687338654")).abs() <= eps);
    }

    #[test]
    fn test_besselj_negative_order_folds() {
        let mut ctx = Context::with_scale(20);
        let x = dec("1.5");

        let plus = x.besselj(&dec("3"), &mut ctx).unwrap();
        let minus = x.besselj(&dec("-3"), &mut ctx).unwrap();
        assert_eq!(minus, plus.neg());

        let plus = x.besselj(&dec("2"), &mut ctx).unwrap();
        let minus = x.besselj(&dec("-2"), &mut ctx).unwrap();
        assert_eq!(minus, plus);
    }

    #[test]
    fn test_besselj_order_truncation() {
        let mut ctx = Context::with_scale(20);
        let x = dec("1");

        // the order is truncated toward zero before use
        let frac = x.besselj(&dec("2.9"), &mut ctx).unwrap();
        let whole = x.besselj(&dec("2"), &mut ctx).unwrap();
        assert_eq!(frac, whole);
    }

    #[test]
    fn test_besselj_restores_ibase() {
        let mut ctx = Context::with_scale(20);
        ctx.set_ibase(16).unwrap();

        dec("1").besselj(&dec("2"), &mut ctx).unwrap();
        assert_eq!(ctx.ibase(), 16);
        assert_eq!(ctx.scale(), 20);
    }
}
