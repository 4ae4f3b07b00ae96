use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::kdf::{block_count, pbkdf2, pbkdf2_verify};
use crate::{Error, HmacSha1, HmacSha224, HmacSha256, HmacSha384, HmacSha512, InvalidParameter, PseudoRandomFunction};

/// The keyed hash a [`Params`] set derives with, chosen at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Algorithm {
    HmacSha1,
    HmacSha224,
    HmacSha256,
    HmacSha384,
    HmacSha512,
}

impl Algorithm {
    /// Size of one derived block in bytes.
    pub fn output_size(self) -> usize {
        match self {
            Algorithm::HmacSha1 => <HmacSha1 as PseudoRandomFunction>::OUTPUT_SIZE,
            Algorithm::HmacSha224 => <HmacSha224 as PseudoRandomFunction>::OUTPUT_SIZE,
            Algorithm::HmacSha256 => <HmacSha256 as PseudoRandomFunction>::OUTPUT_SIZE,
            Algorithm::HmacSha384 => <HmacSha384 as PseudoRandomFunction>::OUTPUT_SIZE,
            Algorithm::HmacSha512 => <HmacSha512 as PseudoRandomFunction>::OUTPUT_SIZE,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Algorithm::HmacSha1 => "hmac-sha1",
            Algorithm::HmacSha224 => "hmac-sha224",
            Algorithm::HmacSha256 => "hmac-sha256",
            Algorithm::HmacSha384 => "hmac-sha384",
            Algorithm::HmacSha512 => "hmac-sha512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts `sha256`, `sha-256`, `hmac-sha256`, `HmacSHA256` and the JCA name
/// `PBKDF2WithHmacSHA256`, ignoring case. The same holds for the other digests.
impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        let digest = normalized.strip_prefix("pbkdf2with").unwrap_or(normalized.as_str());
        let digest = digest.strip_prefix("hmac").unwrap_or(digest);

        match digest {
            "sha1" => Ok(Algorithm::HmacSha1),
            "sha224" => Ok(Algorithm::HmacSha224),
            "sha256" => Ok(Algorithm::HmacSha256),
            "sha384" => Ok(Algorithm::HmacSha384),
            "sha512" => Ok(Algorithm::HmacSha512),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// A validated set of derivation parameters. Constructing one performs every check the
/// derivation itself would, so `derive` only fails if the keyed hash does.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Params {
    algorithm: Algorithm,
    iterations: u32,
    output_length: usize,
}

impl Params {
    pub fn new(algorithm: Algorithm, iterations: u32, output_length: usize) -> Result<Self, Error> {
        block_count(iterations, output_length, algorithm.output_size())?;

        Ok(Self {
            algorithm,
            iterations,
            output_length,
        })
    }

    /// Like `new`, with the key length given in bits the way JCA key specs state it.
    pub fn from_key_bits(algorithm: Algorithm, iterations: u32, key_bits: u64) -> Result<Self, Error> {
        if key_bits == 0 || key_bits % 8 != 0 {
            return Err(InvalidParameter::UnalignedKeyBits(key_bits).into());
        }

        let output_length = usize::try_from(key_bits / 8).map_err(|_| InvalidParameter::DerivedKeyTooLong {
            requested: usize::MAX,
            limit: (algorithm.output_size() as u64).saturating_mul(u64::from(u32::MAX)),
        })?;
        Self::new(algorithm, iterations, output_length)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn output_length(&self) -> usize {
        self.output_length
    }

    /// Derive `output_length` bytes from `password` and `salt`.
    pub fn derive(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>, Error> {
        let Params { algorithm, iterations, output_length } = *self;

        match algorithm {
            Algorithm::HmacSha1 => pbkdf2::<HmacSha1>(password, salt, iterations, output_length),
            Algorithm::HmacSha224 => pbkdf2::<HmacSha224>(password, salt, iterations, output_length),
            Algorithm::HmacSha256 => pbkdf2::<HmacSha256>(password, salt, iterations, output_length),
            Algorithm::HmacSha384 => pbkdf2::<HmacSha384>(password, salt, iterations, output_length),
            Algorithm::HmacSha512 => pbkdf2::<HmacSha512>(password, salt, iterations, output_length),
        }
    }

    /// Check in constant time whether `expected` is the key derived from `password` and `salt`.
    /// The length of `expected` takes precedence over `output_length`.
    pub fn verify(&self, password: &[u8], salt: &[u8], expected: &[u8]) -> Result<bool, Error> {
        let iterations = self.iterations;

        match self.algorithm {
            Algorithm::HmacSha1 => pbkdf2_verify::<HmacSha1>(password, salt, iterations, expected),
            Algorithm::HmacSha224 => pbkdf2_verify::<HmacSha224>(password, salt, iterations, expected),
            Algorithm::HmacSha256 => pbkdf2_verify::<HmacSha256>(password, salt, iterations, expected),
            Algorithm::HmacSha384 => pbkdf2_verify::<HmacSha384>(password, salt, iterations, expected),
            Algorithm::HmacSha512 => pbkdf2_verify::<HmacSha512>(password, salt, iterations, expected),
        }
    }
}
