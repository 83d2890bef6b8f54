//! Cosine.

use crate::common::consts::TWO;
use crate::ctx::{BaseGuard, Context};
use crate::defs::Error;
use crate::num::Decimal;
use crate::ops::consts::Consts;

impl Decimal {
    /// Computes the cosine of `self` at the ambient scale, as the sine of
    /// `self + π/2`. There is no independent series.
    ///
    /// ## Errors
    ///
    ///  - NoConvergence: the series did not converge at the current scale.
    ///  - Overflow: an internal counter exceeded the machine range.
    pub fn cos(&self, ctx: &mut Context, cc: &mut Consts) -> Result<Self, Error> {
        let mut guard = BaseGuard::ten(ctx);
        let ctx: &mut Context = &mut guard;

        let pi = cc.pi(ctx)?;
        let half_pi = pi.div(&TWO, ctx)?;

        self.add(&half_pi).sin(ctx, cc)
    }
}
