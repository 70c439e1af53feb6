//! The canonical identifier wrapper.

use std::{fmt, str::FromStr};

use crate::encoding::{self, BLOCK_SIZE};
use crate::{CuidError, CuidResult};

// Counter + fingerprint + two random blocks; everything after the timestamp.
const FIXED_TAIL: usize = 4 * BLOCK_SIZE;

// The timestamp block is 1..=8 characters: it is encoded without padding and its
// value stays below 36^8.
const MIN_LEN: usize = 1 + 1 + FIXED_TAIL;
const MAX_LEN: usize = 1 + 8 + FIXED_TAIL;

/// A CUID in canonical form.
///
/// This wrapper type guarantees that once constructed, the contained identifier is
/// canonical: it starts with `c`, is entirely lowercase base 36, and carries the
/// fixed-width block layout described in the crate docs. It provides type safety for
/// identifier handling and segment access for the fixed-width layout.
///
/// # When to use this type
/// Use this wrapper whenever you are:
/// - Accepting an identifier string from *outside* the process (CLI input, API
///   request, stored reference, etc), or
/// - Inspecting the blocks of an identifier.
///
/// Once you have a `Cuid`, you can safely assume the contained string is canonical.
///
/// # Construction
/// - [`CuidGenerator::generate`](crate::CuidGenerator::generate) mints a fresh identifier.
/// - [`Cuid::parse`] validates an externally supplied identifier.
///
/// # Errors
/// [`Cuid::parse`] returns [`CuidError::InvalidInput`] if the input is not canonical.
///
/// # Display format
/// When displayed or converted to string, `Cuid` always produces the canonical
/// lowercase form it was constructed with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cuid(String);

impl Cuid {
    /// Wraps a string the generator just assembled.
    pub(crate) fn from_raw(raw: String) -> Self {
        debug_assert!(Self::is_canonical(&raw));
        Self(raw)
    }

    /// Validates and parses an identifier that must already be in canonical form.
    ///
    /// This does **not** normalise near-misses (for example, uppercase input).
    /// Callers must provide the canonical representation.
    ///
    /// # Arguments
    ///
    /// * `input` - Identifier string to validate and wrap.
    ///
    /// # Returns
    ///
    /// Returns a validated [`Cuid`] on success.
    ///
    /// # Errors
    ///
    /// Returns [`CuidError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> CuidResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self(input.to_string()));
        }
        Err(CuidError::InvalidInput(format!(
            "CUID must start with 'c' and be {}-{} lowercase base-36 characters, got: '{}'",
            MIN_LEN, MAX_LEN, input
        )))
    }

    /// Returns true if `input` is in canonical CUID form.
    ///
    /// This is a purely syntactic check: prefix, length bounds, and character set. It
    /// cannot tell whether the identifier was actually minted by a generator.
    pub fn is_canonical(input: &str) -> bool {
        (MIN_LEN..=MAX_LEN).contains(&input.len())
            && input.as_bytes()[0] == b'c'
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z'))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the identifier string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The variable-width timestamp block (everything between the prefix and the
    /// counter block).
    pub fn timestamp_block(&self) -> &str {
        &self.0[1..self.0.len() - FIXED_TAIL]
    }

    /// The decoded timestamp value: wall-clock microseconds at mint time, reduced to
    /// the `36^8` wraparound window.
    pub fn timestamp_value(&self) -> u64 {
        encoding::decode(self.timestamp_block()).expect("canonical form guarantees base-36 digits")
    }

    /// The four-character counter block.
    pub fn counter_block(&self) -> &str {
        let start = self.0.len() - FIXED_TAIL;
        &self.0[start..start + BLOCK_SIZE]
    }

    /// The decoded counter value the generator embedded in this identifier.
    pub fn counter(&self) -> u64 {
        encoding::decode(self.counter_block()).expect("canonical form guarantees base-36 digits")
    }

    /// The four-character process/host fingerprint block.
    pub fn fingerprint_block(&self) -> &str {
        let start = self.0.len() - FIXED_TAIL + BLOCK_SIZE;
        &self.0[start..start + BLOCK_SIZE]
    }

    /// Both four-character random blocks, in identifier order.
    pub fn random_blocks(&self) -> (&str, &str) {
        let start = self.0.len() - 2 * BLOCK_SIZE;
        (&self.0[start..start + BLOCK_SIZE], &self.0[start + BLOCK_SIZE..])
    }
}

impl fmt::Display for Cuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Cuid {
    type Err = CuidError;

    /// Parses a string into a `Cuid`, requiring canonical form.
    ///
    /// This is equivalent to calling [`Cuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cuid::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Cuid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Cuid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Cuid::parse(&raw).map_err(serde::de::Error::custom)
    }
}
