//! Transcendental functions over arbitrary-precision decimal numbers with
//! scale-based truncating arithmetic: sine, cosine, arctangent, natural
//! logarithm, exponential and the Bessel function J of integer order.
//!
//! Every arithmetic result keeps a number of fractional digits governed by
//! the ambient [`Context`]: `scale` fixes the digits retained by divisions,
//! and `ibase` fixes the base in which digit literals are read. Each
//! function reduces its argument into a range where its Taylor series
//! converges quickly, sums terms until one truncates to exactly zero at the
//! current scale, and undoes the reduction on the result. The ambient
//! configuration is restored on every exit path.
//!
//! ## Examples
//!
//! ```
//! use decmath::{Consts, Context, Decimal};
//!
//! let mut ctx = Context::with_scale(20);
//! let mut cc = Consts::new();
//!
//! let x = Decimal::parse("0.5", &ctx).unwrap();
//! let s = x.sin(&mut ctx, &mut cc).unwrap();
//! let c = x.cos(&mut ctx, &mut cc).unwrap();
//!
//! // sin²x + cos²x = 1 up to the ambient scale
//! let one = s.mul(&s, &ctx).add(&c.mul(&c, &ctx));
//! let err = one.sub(&Decimal::from_u64(1)).abs();
//! assert!(err <= Decimal::parse("0.000000000000000001", &ctx).unwrap());
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]

mod common;
mod ctx;
mod defs;
mod num;
mod ops;
mod parser;

pub use crate::ctx::Context;
pub use crate::defs::Error;
pub use crate::defs::Sign;
pub use crate::defs::DEFAULT_IBASE;
pub use crate::defs::DEFAULT_SCALE;
pub use crate::defs::IBASE_MAX;
pub use crate::defs::IBASE_MIN;
pub use crate::num::Decimal;
pub use crate::ops::consts::Consts;
