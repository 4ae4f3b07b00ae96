//! Password-based key derivation (PBKDF2, RFC 8018) over an exchangeable keyed pseudorandom
//! function. The derivation loop is generic over [`PseudoRandomFunction`], which every RustCrypto
//! HMAC already implements, so the hash primitive is chosen by a type parameter:
//!
//! ```
//! use jester_kdf::{pbkdf2, HmacSha256};
//!
//! let key = pbkdf2::<HmacSha256>(b"password", b"salt", 4096, 32).unwrap();
//! assert_eq!(key.len(), 32);
//! ```
//!
//! When the primitive is only known at runtime, use [`Params`] instead.

pub(crate) mod array_util;
pub mod error;
pub mod hmac;
pub mod kdf;
pub mod params;

#[cfg(test)]
mod test_implementations;

pub use crate::error::{Error, InvalidParameter};
pub use crate::hmac::{HmacSha1, HmacSha224, HmacSha256, HmacSha384, HmacSha512};
pub use crate::kdf::{pbkdf2, pbkdf2_into, pbkdf2_verify};
pub use crate::params::{Algorithm, Params};

/// A keyed pseudorandom function as PBKDF2 consumes it. An instance is keyed exactly once and
/// then reused for any number of computations, each of them started by `reset_prf`.
pub trait PseudoRandomFunction: Sized {
    /// Number of bytes every computation produces.
    const OUTPUT_SIZE: usize;

    /// Create a new instance keyed with `key`. The key stays in effect across every `reset_prf`.
    fn init_keyed(key: &[u8]) -> Result<Self, Error>;

    /// Feed more input into the current computation.
    fn update_prf(&mut self, input: &[u8]);

    /// Finish the current computation and write its output into `out`, which must be exactly
    /// `OUTPUT_SIZE` bytes long. The instance must be reset before it is used again.
    fn finish_into(&mut self, out: &mut [u8]);

    /// Discard all input of the current computation, keeping the key.
    fn reset_prf(&mut self);
}
