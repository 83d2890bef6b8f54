//! Static constants.

use crate::num::Decimal;
use lazy_static::lazy_static;

lazy_static! {

    /// 1
    pub(crate) static ref ONE: Decimal = Decimal::from_u64(1);

    /// 2
    pub(crate) static ref TWO: Decimal = Decimal::from_u64(2);

    /// 4
    pub(crate) static ref FOUR: Decimal = Decimal::from_u64(4);

    /// 10
    pub(crate) static ref TEN: Decimal = Decimal::from_u64(10);
}
