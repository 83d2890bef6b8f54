//! Constants cache.

use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;

mod pi;

use pi::PiCache;

/// Cache of precomputed constants.
#[derive(Debug)]
pub struct Consts {
    pi: PiCache,
}

impl Consts {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Consts { pi: PiCache::new() }
    }

    /// Returns π at the ambient scale.
    ///
    /// ## Errors
    ///
    ///  - NoConvergence: the defining series did not converge.
    pub fn pi(&mut self, ctx: &mut Context) -> Result<Decimal, Error> {
        self.pi.for_scale(ctx)
    }
}

impl Default for Consts {
    fn default() -> Self {
        Self::new()
    }
}
