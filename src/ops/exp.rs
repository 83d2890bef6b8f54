//! Exponential.

use crate::common::consts::{ONE, TWO};
use crate::ctx::{BaseGuard, Context, ScaleGuard};
use crate::defs::{Error, MAX_SERIES_ITERATIONS};
use crate::num::Decimal;
use crate::ops::series::{series_sum, SeriesTermGen};

// Term generator for eˣ = 1 + x + x²/2! + x³/3! + …
struct ExpTermGen {
    t: Decimal,
    x: Decimal,
    fct: Decimal,
    i: u64,
}

impl ExpTermGen {
    fn new(x: &Decimal) -> Self {
        ExpTermGen {
            t: x.clone(),
            x: x.clone(),
            fct: Decimal::from_u64(1),
            i: 1,
        }
    }
}

impl SeriesTermGen for ExpTermGen {
    fn next(&mut self, ctx: &mut Context) -> Result<Decimal, Error> {
        self.i += 1;
        self.t = self.t.mul(&self.x, ctx);
        self.fct = self.fct.mul(&Decimal::from_u64(self.i), ctx);

        self.t.div(&self.fct, ctx)
    }
}

impl Decimal {
    /// Computes the exponential of `self` at the ambient scale.
    ///
    /// The series runs on `|x|` halved into `(0, 1]` at a raised scale:
    /// one extra digit per fractional digit of the argument plus one per
    /// halving, since undoing the halvings by powering compounds the
    /// rounding error multiplicatively. The original scale is restored
    /// for the final division, which also normalizes the result.
    ///
    /// ## Errors
    ///
    ///  - NoConvergence: the series did not converge at the current scale.
    ///  - Overflow: the power accumulator or the raised scale exceeded the
    ///    machine range.
    pub fn exp(&self, ctx: &mut Context) -> Result<Self, Error> {
        let mut base_guard = BaseGuard::ten(ctx);
        let ctx: &mut Context = &mut base_guard;

        let sign = self.sign();
        let mut x = self.abs();

        let mut scale_guard = ScaleGuard::save(ctx);
        scale_guard.bump(x.frac_digits() + 1)?;

        let mut power: i64 = 1;
        while x > *ONE {
            scale_guard.bump(1)?;
            x = x.div(&TWO, &scale_guard)?;
            power = power.checked_mul(2).ok_or(Error::Overflow)?;
        }

        let mut term_gen = ExpTermGen::new(&x);
        let r = series_sum(
            ONE.add(&x),
            &mut term_gen,
            MAX_SERIES_ITERATIONS,
            &mut scale_guard,
        )?;
        let r = r.pow_int(power, &scale_guard)?;

        scale_guard.restore();
        if sign.is_negative() {
            ONE.div(&r, &scale_guard)
        } else {
            r.div(&ONE, &scale_guard)
        }
    }
}
