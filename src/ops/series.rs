//! Power series computation appliance.

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;

/// Generator of series terms.
///
/// Each transcendental function supplies its own generator, since the rule
/// deriving a term from its predecessor differs per series; the stopping
/// rule in [`series_sum`] is uniform.
pub(crate) trait SeriesTermGen {
    /// Returns the next series term, computed at the ambient scale.
    fn next(&mut self, ctx: &mut Context) -> Result<Decimal, Error>;
}

/// Sums terms produced by `term_gen` onto `acc`.
///
/// Termination is precision-driven: each term ends in a division that
/// truncates to the ambient scale, so once the true term drops below one
/// unit in the last retained digit the generator yields exactly zero and
/// the summation stops.
///
/// ## Errors
///
///  - NoConvergence: no term reached zero within `max_iter` iterations.
pub(crate) fn series_sum<T: SeriesTermGen>(
    mut acc: Decimal,
    term_gen: &mut T,
    max_iter: usize,
    ctx: &mut Context,
) -> Result<Decimal, Error> {
    for _ in 0..max_iter {
        let v = term_gen.next(ctx)?;
        if v.is_zero() {
            return Ok(acc);
        }
        acc = acc.add(&v);
    }

    Err(Error::NoConvergence)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::common::consts::TEN;
    use crate::defs::MAX_SERIES_ITERATIONS;

    struct GeomTermGen {
        y: Decimal,
    }

    impl SeriesTermGen for GeomTermGen {
        fn next(&mut self, ctx: &mut Context) -> Result<Decimal, Error> {
            self.y = self.y.div(&TEN, ctx)?;
            Ok(self.y.clone())
        }
    }

    struct ConstTermGen {}

    impl SeriesTermGen for ConstTermGen {
        fn next(&mut self, _ctx: &mut Context) -> Result<Decimal, Error> {
            Ok(Decimal::from_u64(1))
        }
    }

    #[test]
    fn test_series_stops_on_underflow() {
        let mut ctx = Context::with_scale(3);
        let mut gen = GeomTermGen {
            y: Decimal::from_u64(1),
        };

        // 0.1 + 0.01 + 0.001; the next term truncates to zero at scale 3
        let sum = series_sum(
            Decimal::zero(),
            &mut gen,
            MAX_SERIES_ITERATIONS,
            &mut ctx,
        )
        .unwrap();
        assert_eq!(sum, Decimal::parse("0.111", &ctx).unwrap());
    }

    #[test]
    fn test_series_iteration_cap() {
        let mut ctx = Context::with_scale(3);
        let mut gen = ConstTermGen {};

        assert_eq!(
            series_sum(Decimal::zero(), &mut gen, 5, &mut ctx),
            Err(Error::NoConvergence)
        );
    }
}
