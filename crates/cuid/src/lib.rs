//! Collision-resistant identifier (CUID) generation.
//!
//! A CUID is a short, lowercase, printable identifier built to be extremely unlikely to collide
//! across concurrent callers, processes, and hosts, without any central coordination.
//!
//! Identifiers are produced by a stateful [`CuidGenerator`]; the [`Cuid`] wrapper type
//! *guarantees* the canonical format once constructed.
//!
//! ## Canonical CUID form
//! - Prefix: the literal character `c`
//! - Characters: `0-9` and `a-z` only (lowercase base 36)
//! - Example: `ck2p3vw9q00031l2d7ze0a1sm`
//!
//! Reading left to right, an identifier is composed of:
//! - `c` — constant prefix
//! - **timestamp block** (variable width): wall-clock microseconds, bounded to a wraparound
//!   window of `36^8` values
//! - **counter block** (4 chars): per-generator monotonic counter
//! - **fingerprint** (4 chars): process + host identity, derived once per generator
//! - **two random blocks** (4 chars each): independent uniform draws
//!
//! Notes:
//! - Identifiers are effectively time-ordered within the timestamp wraparound window, but carry
//!   no ordering guarantee beyond it.
//! - The counter keeps identifiers generated back-to-back on one generator distinct even when
//!   the clock reading and random draws repeat.
//! - Externally supplied identifiers (CLI input, stored references, etc) should be validated
//!   with [`Cuid::parse`].
//! - This is collision resistance for cooperative workloads, not a security boundary:
//!   identifiers are not unguessable and must not be used as capabilities or secrets.

mod encoding;
mod fingerprint;
mod generator;
mod id;

// Re-export public types
pub use fingerprint::ProcessIdentity;
pub use generator::CuidGenerator;
pub use id::Cuid;

/// Error type for CUID operations.
#[derive(Debug, thiserror::Error)]
pub enum CuidError {
    /// The host name could not be read from the environment
    #[error("failed to read hostname: {0}")]
    Hostname(std::io::Error),
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for CUID operations.
pub type CuidResult<T> = Result<T, CuidError>;
