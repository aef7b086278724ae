//! Transition guards over a single input byte.

use crate::AutomatonError;

/// Guard on an NFA transition.
///
/// Exactly two kinds exist: an exact byte, or a fixed pattern of leading
/// bits. Overlapping guards on transitions out of one state are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Matches the byte exactly.
    Value(u8),
    /// Matches any byte whose top bits equal the prefix.
    Prefix(Prefix),
}

impl Condition {
    /// Exact-byte condition.
    pub fn value(byte: u8) -> Self {
        Condition::Value(byte)
    }

    /// Leading-bits condition. See [`Prefix::new`].
    pub fn prefix(prefix: u8, bits: u8) -> Result<Self, AutomatonError> {
        Prefix::new(prefix, bits).map(Condition::Prefix)
    }

    /// Returns true if `byte` satisfies this condition.
    #[inline]
    pub fn matches(&self, byte: u8) -> bool {
        match self {
            Condition::Value(value) => *value == byte,
            Condition::Prefix(prefix) => prefix.matches(byte),
        }
    }
}

/// The top `bits` bits of a byte must equal `prefix`.
///
/// Used for lead bytes of multi-byte UTF-8 sequences, e.g. `110xxxxx` is
/// `Prefix::new(0b110, 3)`. With `bits == 0` every byte matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    prefix: u8,
    bits: u8,
}

impl Prefix {
    /// Validates that `bits <= 8` and that `prefix` fits in `bits` bits.
    pub fn new(prefix: u8, bits: u8) -> Result<Self, AutomatonError> {
        if bits > 8 || u32::from(prefix) >> bits != 0 {
            return Err(AutomatonError::InvalidPrefix { prefix, bits });
        }
        Ok(Self { prefix, bits })
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    #[inline]
    pub fn matches(&self, byte: u8) -> bool {
        // Shift in u32: a u8 shifted by 8 would overflow.
        u32::from(byte) >> (8 - u32::from(self.bits)) == u32::from(self.prefix)
    }
}
