//! Ambient precision configuration and its save/restore discipline.

use crate::defs::{Error, DEFAULT_IBASE, DEFAULT_SCALE, IBASE_MAX, IBASE_MIN};
use core::ops::{Deref, DerefMut};

/// The ambient configuration pair consumed by every operation: `scale` is
/// the number of fractional digits retained by arithmetic results, and
/// `ibase` is the base used to interpret digit literals.
///
/// Functions that rely on base-ten literals capture and override `ibase`
/// for the duration of their body; the exponential additionally inflates
/// `scale`, and integer truncation is forced by setting `scale` to zero
/// around a division. All of this goes through scope guards, so the
/// captured values are put back on every exit path, and nested calls
/// compose stack-like: an inner restore reproduces exactly the value the
/// outer call had set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    scale: u32,
    ibase: u32,
}

impl Context {
    /// Creates a context with the default scale and input base.
    pub fn new() -> Self {
        Self::with_scale(DEFAULT_SCALE)
    }

    /// Creates a context with the given scale and the default input base.
    pub fn with_scale(scale: u32) -> Self {
        Context {
            scale,
            ibase: DEFAULT_IBASE,
        }
    }

    /// Returns the current scale.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Sets the number of fractional digits retained by arithmetic results.
    pub fn set_scale(&mut self, scale: u32) {
        self.scale = scale;
    }

    /// Returns the current input base.
    pub fn ibase(&self) -> u32 {
        self.ibase
    }

    /// Sets the base used to interpret digit literals.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the base is outside 2..=16.
    pub fn set_ibase(&mut self, ibase: u32) -> Result<(), Error> {
        if !(IBASE_MIN..=IBASE_MAX).contains(&ibase) {
            return Err(Error::InvalidArgument);
        }
        self.ibase = ibase;
        Ok(())
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

/// Captures `ibase` on acquisition and restores it when dropped.
///
/// Every function whose literals must be read in base ten holds one of
/// these for the whole body, so early returns and error propagation cannot
/// leak an altered base to the caller.
pub(crate) struct BaseGuard<'a> {
    ctx: &'a mut Context,
    saved: u32,
}

impl<'a> BaseGuard<'a> {
    /// Captures the current input base and switches to base ten.
    pub fn ten(ctx: &'a mut Context) -> Self {
        let saved = ctx.ibase;
        ctx.ibase = 10;
        BaseGuard { ctx, saved }
    }
}

impl Deref for BaseGuard<'_> {
    type Target = Context;

    fn deref(&self) -> &Context {
        self.ctx
    }
}

impl DerefMut for BaseGuard<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        self.ctx
    }
}

impl Drop for BaseGuard<'_> {
    fn drop(&mut self) {
        self.ctx.ibase = self.saved;
    }
}

/// Captures `scale` on acquisition and restores it when dropped.
pub(crate) struct ScaleGuard<'a> {
    ctx: &'a mut Context,
    saved: u32,
}

impl<'a> ScaleGuard<'a> {
    /// Captures the current scale without changing it.
    pub fn save(ctx: &'a mut Context) -> Self {
        let saved = ctx.scale;
        ScaleGuard { ctx, saved }
    }

    /// Captures the current scale and sets it to zero, forcing integer
    /// truncation in subsequent divisions.
    pub fn zero(ctx: &'a mut Context) -> Self {
        let mut guard = Self::save(ctx);
        guard.ctx.scale = 0;
        guard
    }

    /// Raises the ambient scale by `add` digits.
    ///
    /// ## Errors
    ///
    ///  - Overflow: the scale does not fit the machine range.
    pub fn bump(&mut self, add: u32) -> Result<(), Error> {
        self.ctx.scale = self.ctx.scale.checked_add(add).ok_or(Error::Overflow)?;
        Ok(())
    }

    /// Puts the captured scale back before the guard drops.
    pub fn restore(&mut self) {
        self.ctx.scale = self.saved;
    }
}

impl Deref for ScaleGuard<'_> {
    type Target = Context;

    fn deref(&self) -> &Context {
        self.ctx
    }
}

impl DerefMut for ScaleGuard<'_> {
    fn deref_mut(&mut self) -> &mut Context {
        self.ctx
    }
}

impl Drop for ScaleGuard<'_> {
    fn drop(&mut self) {
        self.ctx.scale = self.saved;
    }
}
