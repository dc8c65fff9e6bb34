//! Entropy source for identifier generation.
//!
//! Generation needs exactly one capability from the outside world: fill 16
//! bytes with random data. [`RandomSource`] names that capability so tests
//! and embedders can inject their own generator, and every [`rand::RngCore`]
//! provides it for free. Default generation uses the operating system's
//! entropy ([`rand::rngs::OsRng`]).
//!
//! Uniqueness and randomness quality are the source's responsibility, not
//! this crate's; the bytes are stored as delivered. Sources that hand out
//! GUID-style fields in little-endian order must be adapted through
//! [`crate::Uuid::from_guid_fields`] instead.

use rand::rngs::OsRng;
use rand::RngCore;

/// A producer of 16 random bytes for a fresh identifier.
pub trait RandomSource {
    /// Fills `out` with 16 random bytes.
    fn fill_identifier(&mut self, out: &mut [u8; 16]);
}

impl<R: RngCore> RandomSource for R {
    fn fill_identifier(&mut self, out: &mut [u8; 16]) {
        self.fill_bytes(out);
    }
}

/// Fills a fresh byte store from the OS entropy source.
pub(crate) fn os_identifier_bytes() -> [u8; 16] {
    let mut bytes = [0u8; 16];
    OsRng.fill_identifier(&mut bytes);
    bytes
}
