use thiserror::Error;

/// Errors returned by key derivation and parameter construction.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] InvalidParameter),

    #[error("unknown pseudorandom function `{0}`")]
    UnknownAlgorithm(String),

    /// The underlying keyed hash failed. The original error is kept as the source.
    #[error("pseudorandom function failed")]
    Primitive(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wrap a failure reported by a pseudorandom function implementation.
    pub fn primitive<E>(error: E) -> Self
        where E: std::error::Error + Send + Sync + 'static
    {
        Error::Primitive(Box::new(error))
    }
}

/// A derivation parameter outside the range PBKDF2 is defined for.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidParameter {
    #[error("iteration count must be at least 1")]
    ZeroIterations,

    #[error("derived key length must be at least 1 byte")]
    EmptyOutput,

    #[error("pseudorandom function has an output size of 0 bytes")]
    EmptyDigest,

    /// More than 2^32 - 1 blocks would be needed.
    #[error("derived key too long: {requested} bytes requested, at most {limit} possible")]
    DerivedKeyTooLong { requested: usize, limit: u64 },

    #[error("key length of {0} bits is not a positive multiple of 8")]
    UnalignedKeyBits(u64),
}
