//! Transcendental operations.

pub(crate) mod consts;
pub(crate) mod series;
pub(crate) mod util;

mod atan;
mod besselj;
mod cos;
mod exp;
mod log;
mod sin;
