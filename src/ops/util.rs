//! Argument reduction helpers.

use crate::ctx::{Context, ScaleGuard};
use crate::defs::Error;
use crate::num::Decimal;
use crate::ops::consts::Consts;

/// Reduces `x` onto `(−π, π]` for the sine series.
///
/// The reduction modulo 2π runs under a zero-scale guard, so the
/// subtracted multiple is exact and only π itself carries rounding. The
/// returned flag indicates that π was folded out and the final result must
/// be negated.
pub(crate) fn reduce_trig_arg(
    x: &Decimal,
    ctx: &mut Context,
    cc: &mut Consts,
) -> Result<(Decimal, bool), Error> {
    let pi = cc.pi(ctx)?;
    let two_pi = pi.add(&pi);

    let mut x = {
        let zg = ScaleGuard::zero(ctx);
        x.rem(&two_pi, &zg)?
    };

    // one fold brings the remainder from (−2π, 2π) into (−π, π]
    let mut negate = false;
    if x >= pi {
        x = x.sub(&pi);
        negate = true;
    } else if x <= pi.neg() {
        x = x.add(&pi);
        negate = true;
    }

    Ok((x, negate))
}
