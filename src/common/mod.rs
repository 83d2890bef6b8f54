//! Utility functions and constants.

pub(crate) mod consts;
pub(crate) mod util;
