//! Cached value of π.

use crate::common::consts::{FOUR, ONE};
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;

/// Holds the value of π computed for the largest scale requested so far.
#[derive(Debug)]
pub struct PiCache {
    cached: Option<(u32, Decimal)>,
}

impl PiCache {
    pub fn new() -> Self {
        PiCache { cached: None }
    }

    /// π at the ambient scale, derived as `4·arctan(1)` and memoized. A
    /// value cached at a higher scale is truncated down for smaller
    /// requests.
    pub fn for_scale(&mut self, ctx: &mut Context) -> Result<Decimal, Error> {
        let scale = ctx.scale();
        match &self.cached {
            Some((s, pi)) if *s >= scale => Ok(if *s == scale {
                pi.clone()
            } else {
                pi.with_frac_digits(scale)
            }),
            _ => {
                let pi = ONE.atan(ctx)?.mul(&FOUR, ctx);
                self.cached = Some((scale, pi.clone()));
                Ok(pi)
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_pi_value() {
        let mut ctx = Context::with_scale(20);
        let mut cache = PiCache::new();

        let pi = cache.for_scale(&mut ctx).unwrap();
        let reference = Decimal::parse("3.14159265358979323846", &ctx).unwrap();
        let eps = Decimal::parse("0.00000000000000000005", &ctx).unwrap();
        assert!(pi.sub(&reference).abs() <= eps);
    }

    #[test]
    fn test_pi_cache_reuse_and_truncation() {
        let mut ctx = Context::with_scale(20);
        let mut cache = PiCache::new();

        let wide = cache.for_scale(&mut ctx).unwrap();
        assert_eq!(cache.for_scale(&mut ctx).unwrap(), wide);

        // a smaller request reuses the cached digits
        ctx.set_scale(5);
        let narrow = cache.for_scale(&mut ctx).unwrap();
        assert_eq!(narrow, wide.with_frac_digits(5));
        assert_eq!(narrow.frac_digits(), 5);
    }
}
