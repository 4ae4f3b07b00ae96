//! PBKDF2 key derivation (RFC 8018, section 5.2) over an arbitrary `PseudoRandomFunction`.

use std::convert::TryFrom;

use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::array_util::xor_in_place;
use crate::{Error, InvalidParameter, PseudoRandomFunction};

/// Derive a key of `output_length` bytes from `password` and `salt` using PBKDF2 with `P` as the
/// pseudorandom function.
/// #Parameters
/// - `password` the secret the key is derived from. It is used as the key of `P`.
/// - `salt` public, per-key random data
/// - `iterations` number of chained `P` applications per output block, at least 1
/// - `output_length` length of the derived key in bytes, at least 1
///
/// #Outputs
/// Returns exactly `output_length` bytes. All parameters are checked before any work is done, so
/// no partial key is ever returned.
pub fn pbkdf2<P>(password: &[u8], salt: &[u8], iterations: u32, output_length: usize) -> Result<Vec<u8>, Error>
    where P: PseudoRandomFunction
{
    block_count(iterations, output_length, P::OUTPUT_SIZE)?;

    let mut output = vec![0u8; output_length];
    pbkdf2_into::<P>(password, salt, iterations, &mut output)?;
    Ok(output)
}

/// Same as [`pbkdf2`], but the derived key is written into `output` and its length is taken
/// from there.
pub fn pbkdf2_into<P>(password: &[u8], salt: &[u8], iterations: u32, output: &mut [u8]) -> Result<(), Error>
    where P: PseudoRandomFunction
{
    let blocks = block_count(iterations, output.len(), P::OUTPUT_SIZE)?;
    debug!(iterations, output_length = output.len(), blocks, digest_size = P::OUTPUT_SIZE, "deriving key");

    let mut prf = P::init_keyed(password)?;
    let mut accumulator = Zeroizing::new(vec![0u8; P::OUTPUT_SIZE]);
    let mut chain = Zeroizing::new(vec![0u8; P::OUTPUT_SIZE]);

    // every chunk is a full block except possibly the last one, which receives a prefix
    for (index, chunk) in (1..=blocks).zip(output.chunks_mut(P::OUTPUT_SIZE)) {
        trace!(index, "deriving block");
        derive_block(&mut prf, salt, iterations, index, &mut accumulator, &mut chain);
        chunk.copy_from_slice(&accumulator[..chunk.len()]);
    }

    Ok(())
}

/// Derive `expected.len()` bytes and compare them with `expected` in constant time.
///
/// Returns `Ok(false)` on a mismatch; errors only report invalid parameters or a failing
/// pseudorandom function.
pub fn pbkdf2_verify<P>(password: &[u8], salt: &[u8], iterations: u32, expected: &[u8]) -> Result<bool, Error>
    where P: PseudoRandomFunction
{
    let mut derived = Zeroizing::new(vec![0u8; expected.len()]);
    pbkdf2_into::<P>(password, salt, iterations, &mut derived)?;

    Ok(bool::from(derived.ct_eq(expected)))
}

/// Validate the parameters of one derivation and return the number of blocks it needs.
pub(crate) fn block_count(iterations: u32, output_length: usize, digest_size: usize) -> Result<u32, Error> {
    if iterations == 0 {
        return Err(InvalidParameter::ZeroIterations.into());
    }
    if output_length == 0 {
        return Err(InvalidParameter::EmptyOutput.into());
    }
    if digest_size == 0 {
        return Err(InvalidParameter::EmptyDigest.into());
    }

    let blocks = output_length / digest_size + usize::from(output_length % digest_size != 0);

    // the block index is encoded in four bytes and starts at 1
    u32::try_from(blocks).map_err(|_| {
        InvalidParameter::DerivedKeyTooLong {
            requested: output_length,
            limit: (digest_size as u64).saturating_mul(u64::from(u32::MAX)),
        }.into()
    })
}

/// Compute block `index` into `accumulator`. `chain` is scratch space of the same size.
///
/// T = U_1 ^ U_2 ^ ... ^ U_c with U_1 = PRF(salt || INT(index)) and U_n = PRF(U_(n-1)).
fn derive_block<P>(
    prf: &mut P,
    salt: &[u8],
    iterations: u32,
    index: u32,
    accumulator: &mut [u8],
    chain: &mut [u8],
) where P: PseudoRandomFunction {
    prf.reset_prf();
    prf.update_prf(salt);
    prf.update_prf(&index.to_be_bytes());
    prf.finish_into(chain);
    accumulator.copy_from_slice(chain);

    for _ in 1..iterations {
        prf.reset_prf();
        prf.update_prf(chain);
        prf.finish_into(chain);
        xor_in_place(accumulator, chain);
    }
}
