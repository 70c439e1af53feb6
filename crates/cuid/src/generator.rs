//! The stateful identifier factory.

use std::sync::Mutex;

use chrono::Utc;
use rand::Rng;

use crate::encoding::{self, BLOCK_SIZE, DISCRETE_VALUES};
use crate::fingerprint::ProcessIdentity;
use crate::id::Cuid;
use crate::CuidResult;

/// Wraparound window for the timestamp block: `36^8` microsecond values (about 32.6 days).
pub(crate) const TIMESTAMP_MODULUS: u64 = DISCRETE_VALUES * DISCRETE_VALUES;

/// A stateful CUID factory.
///
/// Each generator owns its own monotonic counter and a fingerprint derived once at
/// construction; independent generators share no state and may be used fully in
/// parallel. Calls against one generator are serialized internally: the counter read,
/// the string assembly, and the increment happen as one unit, so no two calls ever
/// observe the same counter value.
///
/// # Example
///
/// ```
/// use cuid::CuidGenerator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let generator = CuidGenerator::new()?;
/// let id = generator.generate();
/// assert!(id.as_str().starts_with('c'));
/// # Ok(())
/// # }
/// ```
pub struct CuidGenerator {
    fingerprint: String,
    counter: Mutex<u64>,
}

impl CuidGenerator {
    /// Creates a generator fingerprinted with the running process's identity.
    ///
    /// # Errors
    ///
    /// Fails only if the process/host identity cannot be read; see
    /// [`ProcessIdentity::from_env`].
    pub fn new() -> CuidResult<Self> {
        Ok(Self::with_identity(&ProcessIdentity::from_env()?))
    }

    /// Creates a generator fingerprinted with an explicit identity.
    ///
    /// Deterministic and infallible; intended for tests and for embedders that resolve
    /// process identity themselves at startup.
    pub fn with_identity(identity: &ProcessIdentity) -> Self {
        let fingerprint = identity.fingerprint();
        tracing::debug!("created CUID generator with fingerprint {}", fingerprint);
        Self {
            fingerprint,
            counter: Mutex::new(0),
        }
    }

    /// Returns the fingerprint block embedded in every identifier from this generator.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Produces one identifier and advances the counter.
    ///
    /// The timestamp and both random blocks are sourced fresh on every call; the counter
    /// value is embedded as read and then incremented by exactly one. The embedded
    /// counter block wraps modulo `36^4` so the field stays at four characters forever.
    pub fn generate(&self) -> Cuid {
        let mut rng = rand::thread_rng();
        // The section below cannot panic, so the lock cannot be poisoned.
        let mut counter = self.counter.lock().expect("counter lock poisoned");
        let raw = assemble(
            timestamp_value(),
            *counter,
            &self.fingerprint,
            rng.gen_range(1..DISCRETE_VALUES),
            rng.gen_range(1..DISCRETE_VALUES),
        );
        *counter += 1;
        Cuid::from_raw(raw)
    }
}

/// Current wall-clock microseconds, bounded to the wraparound window.
fn timestamp_value() -> u64 {
    // Non-negative for any clock reading after the Unix epoch.
    let micros = Utc::now().timestamp_micros() as u64;
    micros % TIMESTAMP_MODULUS
}

/// Concatenates the five identifier parts in canonical order.
fn assemble(timestamp: u64, counter: u64, fingerprint: &str, rand1: u64, rand2: u64) -> String {
    let mut raw = String::with_capacity(25);
    raw.push('c');
    raw.push_str(&encoding::encode(timestamp));
    raw.push_str(&encoding::encode_fixed(counter % DISCRETE_VALUES, BLOCK_SIZE));
    raw.push_str(fingerprint);
    raw.push_str(&encoding::encode_fixed(rand1, BLOCK_SIZE));
    raw.push_str(&encoding::encode_fixed(rand2, BLOCK_SIZE));
    raw
}
