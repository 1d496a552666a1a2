use std::fmt::Debug;
use std::ops::BitAnd;
use std::str::FromStr;

use strum::IntoEnumIterator;

/// A closed vocabulary of option tokens, each backed by a single bit
/// of its companion `bitflags` structure.
///
/// The declaration order of the enumeration is the order in which
/// members are described when a set is encoded.
pub trait Vocabulary:
    Copy + Eq + Debug + FromStr + AsRef<str> + IntoEnumIterator + 'static
{
    /// The packed storage for built-in members.
    type Flags: bitflags::Flags + Copy + Debug + Eq + BitAnd<Output = Self::Flags>;

    /// Human readable name of the vocabulary, used in decode errors.
    const NAME: &'static str;

    /// Token written in place of an empty set, if the wire has one.
    const EMPTY: Option<&'static str> = None;

    fn to_flag(self) -> Self::Flags;
}
