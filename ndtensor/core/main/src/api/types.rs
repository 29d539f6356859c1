//! Element-type constraint for tensors

use num_traits::Num;
use std::fmt;
use std::str::FromStr;

/// Types storable in a tensor.
///
/// `Num` supplies the additive/multiplicative identities and ring
/// operations; the remaining bounds cover what the file codec
/// (`FromStr`/`Display`) and diagnostics need. A blanket impl makes every
/// numeric primitive a `Scalar`.
pub trait Scalar:
    Num
    + Copy
    + PartialOrd
    + Default
    + FromStr
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
}

impl<T> Scalar for T where
    T: Num
        + Copy
        + PartialOrd
        + Default
        + FromStr
        + fmt::Debug
        + fmt::Display
        + Send
        + Sync
        + 'static
{
}
