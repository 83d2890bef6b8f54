//! Parsing of digit literals under the ambient input base.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{Pow, Zero};

use crate::common::util::pow10;
use crate::ctx::Context;
use crate::defs::Error;
use crate::num::Decimal;

impl Decimal {
    /// Parses a literal under the context's input base.
    ///
    /// Digits run `0-9A-F`; in a multi-digit literal each digit is clamped
    /// to `ibase − 1`, while a lone integer digit keeps its value whatever
    /// the base, so `F` reads as fifteen even in base ten. A fraction of
    /// `f` digits converts to exactly `f` decimal fractional digits,
    /// truncated toward zero.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: `text` is empty or contains a character that is
    ///    not a digit, a leading `-`, or a single `.`.
    pub fn parse(text: &str, ctx: &Context) -> Result<Self, Error> {
        let base = ctx.ibase();
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (body, None),
        };
        if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
            return Err(Error::InvalidArgument);
        }

        // a lone integer digit keeps its value regardless of the base
        if frac_part.is_none() && int_part.len() == 1 {
            let d = digit_value(int_part.chars().next().unwrap_or_default())?;
            let val = BigDecimal::from(d);
            return Ok(Decimal::from_raw(if negative { -val } else { val }));
        }

        let mut int_val = BigInt::zero();
        for c in int_part.chars() {
            let d = digit_value(c)?.min(base - 1);
            int_val = int_val * base + d;
        }

        let frac_part = frac_part.unwrap_or_default();
        let mut frac_val = BigInt::zero();
        for c in frac_part.chars() {
            let d = digit_value(c)?.min(base - 1);
            frac_val = frac_val * base + d;
        }

        // I·10^f + trunc(F·10^f / b^f), read at f decimal fractional digits
        let f = frac_part.len() as u64;
        let num = int_val * pow10(f) + frac_val * pow10(f) / Pow::pow(BigInt::from(base), f);
        let val = BigDecimal::new(num, f as i64);

        Ok(Decimal::from_raw(if negative { -val } else { val }))
    }
}

fn digit_value(c: char) -> Result<u32, Error> {
    match c {
        '0'..='9' | 'A'..='F' => Ok(c.to_digit(16).unwrap_or_default()),
        _ => Err(Error::InvalidArgument),
    }
}
