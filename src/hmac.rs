use ::hmac::digest::typenum::Unsigned;
use ::hmac::digest::{FixedOutputReset, KeyInit, OutputSizeUser, Reset};
use ::hmac::{Hmac, Mac};

use crate::{Error, PseudoRandomFunction};

/// HMAC-SHA-1, the PRF of the RFC 6070 test vectors.
pub type HmacSha1 = Hmac<sha1::Sha1>;

pub type HmacSha224 = Hmac<sha2::Sha224>;

pub type HmacSha256 = Hmac<sha2::Sha256>;

pub type HmacSha384 = Hmac<sha2::Sha384>;

pub type HmacSha512 = Hmac<sha2::Sha512>;

/// Any MAC that can be keyed from a slice and reset to its keyed state is a usable PRF. This
/// covers `Hmac<D>` and `SimpleHmac<D>` for every RustCrypto digest.
impl<M> PseudoRandomFunction for M
    where M: Mac + KeyInit + Reset + FixedOutputReset
{
    const OUTPUT_SIZE: usize = <<M as OutputSizeUser>::OutputSize as Unsigned>::USIZE;

    fn init_keyed(key: &[u8]) -> Result<Self, Error> {
        <M as KeyInit>::new_from_slice(key).map_err(Error::primitive)
    }

    fn update_prf(&mut self, input: &[u8]) {
        Mac::update(self, input)
    }

    fn finish_into(&mut self, out: &mut [u8]) {
        let tag = Mac::finalize_reset(self).into_bytes();
        out.copy_from_slice(&tag);
    }

    fn reset_prf(&mut self) {
        Mac::reset(self)
    }
}

/// Generate a keyed-hash message authentication code from a `PseudoRandomFunction` and a given
/// key using the HMAC protocol of RFC 2104.
/// #Parameters
/// - `key` a secret key for the authentication code
/// - `message` an arbitrary-sized message to authenticate
/// - `P` a keyed hash, usually one of the `HmacSha*` aliases
///
/// #Outputs
/// Returns a boxed slice containing the raw authentication code
pub fn hmac<P>(key: &[u8], message: &[u8]) -> Result<Box<[u8]>, Error>
    where P: PseudoRandomFunction
{
    let mut prf = P::init_keyed(key)?;
    prf.update_prf(message);

    let mut tag = vec![0u8; P::OUTPUT_SIZE];
    prf.finish_into(&mut tag);
    Ok(tag.into_boxed_slice())
}
