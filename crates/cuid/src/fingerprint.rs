//! Process + host fingerprint derivation.
//!
//! The fingerprint folds the process id and a hostname checksum into one fixed-width
//! base-36 block, so identifiers minted by different processes or hosts diverge without
//! any coordination protocol. Ambient identity is read once, at generator construction;
//! request handling never touches process-wide state.

use crate::encoding::{self, BASE, BLOCK_SIZE};
use crate::{CuidError, CuidResult};

/// The process id and host name a fingerprint is derived from.
///
/// Normally obtained from the environment via [`ProcessIdentity::from_env`]. Tests and
/// embedders that need deterministic fingerprints can construct one directly with
/// [`ProcessIdentity::new`] and hand it to
/// [`CuidGenerator::with_identity`](crate::CuidGenerator::with_identity).
#[derive(Clone, Debug)]
pub struct ProcessIdentity {
    pid: u32,
    hostname: String,
}

impl ProcessIdentity {
    /// Builds an identity from an explicit process id and host name.
    pub fn new(pid: u32, hostname: impl Into<String>) -> Self {
        Self {
            pid,
            hostname: hostname.into(),
        }
    }

    /// Reads the identity of the running process from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CuidError::Hostname`] if the OS will not reveal the host name. This is
    /// fatal for generator construction: a fingerprint cannot be derived without it.
    pub fn from_env() -> CuidResult<Self> {
        let hostname = hostname::get()
            .map_err(CuidError::Hostname)?
            .to_string_lossy()
            .into_owned();
        Ok(Self {
            pid: std::process::id(),
            hostname,
        })
    }

    /// Derives the fixed-width base-36 fingerprint block for this identity.
    ///
    /// The high half of the block encodes `pid mod 36^2`; the low half encodes a checksum
    /// of the host name (character codes plus character count, offset by the base). Two
    /// identities with the same pid but different host names therefore differ in the low
    /// half, and vice versa.
    pub fn fingerprint(&self) -> String {
        let base_squared = BASE * BASE;
        let process_component = (u64::from(self.pid) % base_squared) * base_squared;
        let char_sum: u64 = self.hostname.chars().map(|c| c as u64).sum();
        let char_count = self.hostname.chars().count() as u64;
        let host_component = (char_sum + char_count + BASE) % base_squared;
        encoding::encode_fixed(process_component + host_component, BLOCK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_fixed_width() {
        for (pid, host) in [
            (0, ""),
            (1, "a"),
            (12345, "example"),
            (u32::MAX, "a-very-long-hostname.internal.example.com"),
        ] {
            let fingerprint = ProcessIdentity::new(pid, host).fingerprint();
            assert_eq!(fingerprint.len(), 4);
            assert!(fingerprint
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z')));
        }
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let identity = ProcessIdentity::new(4242, "build-host");
        assert_eq!(identity.fingerprint(), identity.fingerprint());
    }

    #[test]
    fn test_fingerprint_known_value() {
        // pid 12345 -> (12345 mod 1296) * 1296 = 882576
        // "example" -> (748 + 7 + 36) mod 1296 = 791
        // 883367 in base 36 is "ixlz"
        let identity = ProcessIdentity::new(12345, "example");
        assert_eq!(identity.fingerprint(), "ixlz");
    }

    #[test]
    fn test_fingerprint_partitions_pid_and_host() {
        let alpha = ProcessIdentity::new(7, "alpha").fingerprint();
        let beta = ProcessIdentity::new(7, "beta").fingerprint();
        // Same pid: the high half matches, the host checksum half differs.
        assert_eq!(alpha[0..2], beta[0..2]);
        assert_ne!(alpha[2..4], beta[2..4]);

        let pid_zero = ProcessIdentity::new(0, "alpha").fingerprint();
        let pid_one = ProcessIdentity::new(1, "alpha").fingerprint();
        // Same host: the checksum half matches, the pid half differs.
        assert_eq!(pid_zero[2..4], pid_one[2..4]);
        assert_ne!(pid_zero[0..2], pid_one[0..2]);
    }

    #[test]
    fn test_fingerprint_pid_wraps_modulo_base_squared() {
        // 1296 apart in pid space lands on the same process component.
        let low = ProcessIdentity::new(100, "host").fingerprint();
        let high = ProcessIdentity::new(100 + 1296, "host").fingerprint();
        assert_eq!(low, high);
    }

    #[test]
    fn test_from_env_reads_running_process() {
        let identity = ProcessIdentity::from_env().unwrap();
        assert_eq!(identity.pid, std::process::id());
        assert_eq!(identity.fingerprint().len(), 4);
    }
}
