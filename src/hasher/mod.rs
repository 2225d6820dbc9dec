pub mod crc32;
pub mod crc32c;
pub mod crc64nvme;
pub mod md5;
pub mod sha1;
pub mod sha256;

use crate::E;
use std::{error, fmt};

/// Digest schemes computed by `Calculator`. The order of `Algorithm::ALL` is the order in which
/// accumulators are created and looked up; it never changes during the lifetime of a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// RFC 1321, 16 bytes.
    Md5,
    /// CRC-32 with the IEEE 802.3 polynomial, 4 bytes.
    Crc32,
    /// CRC-32 with the Castagnoli polynomial, 4 bytes.
    Crc32c,
    /// FIPS 180-4, 20 bytes.
    Sha1,
    /// FIPS 180-4, 32 bytes.
    Sha256,
    /// NVMe CRC-64 (polynomial 0x9a6c9329ac4bc9b5), 8 bytes.
    Crc64Nvme,
}

impl Algorithm {
    pub const COUNT: usize = 6;

    pub const ALL: [Algorithm; Algorithm::COUNT] = [
        Algorithm::Md5,
        Algorithm::Crc32,
        Algorithm::Crc32c,
        Algorithm::Sha1,
        Algorithm::Sha256,
        Algorithm::Crc64Nvme,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Crc32 => "CRC32",
            Algorithm::Crc32c => "CRC32C",
            Algorithm::Sha1 => "SHA-1",
            Algorithm::Sha256 => "SHA-256",
            Algorithm::Crc64Nvme => "CRC64-NVME",
        }
    }

    /// Length of the finalized digest in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 16,
            Algorithm::Crc32 | Algorithm::Crc32c => 4,
            Algorithm::Sha1 => 20,
            Algorithm::Sha256 => 32,
            Algorithm::Crc64Nvme => 8,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A trait that defines the behavior of a hasher (accumulator) used by `Calculator`.
/// Implementers of this trait must also implement `Send`.
///
/// `Calculator` creates one instance of each hasher and uses it as follows:
/// - Create the instance (with method `new()`).
/// - Add content of the source as it's being read (with method `absorb(..)`). The same bytes
///   in the same order are given to every hasher.
/// - Request the digest any number of times (with method `hash()`).
/// - Drop the instance together with `Calculator`.
pub trait Hasher: Send {
    /// The type of error that can occur during operations.
    type Error: error::Error + Into<E>;

    /// The algorithm this hasher implements.
    const ALGORITHM: Algorithm;

    /// Creates a fresh hasher with an empty running state.
    fn new() -> Self
    where
        Self: Sized;

    /// Absorbs data into the hasher. This method processes the input data and updates the hasher
    /// state. This method might be called multiple times during the reading of a source.
    ///
    /// # Parameters
    ///
    /// - `data`: A reference to a slice of bytes to be absorbed by the hasher.
    ///
    /// # Returns
    ///
    /// - `Result<(), Self::Error>`: On success, returns `Ok(())`. On failure,
    ///   returns an error of type `Self::Error`.
    fn absorb(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Finalizes a copy of the running state and returns the digest of all bytes absorbed so far.
    /// The running state itself isn't touched, so this method can be called any number of times
    /// and absorbing can continue afterwards.
    ///
    /// # Returns
    ///
    /// - `Result<Vec<u8>, Self::Error>`: On success, returns the digest (`Self::ALGORITHM.digest_len()`
    ///   bytes). On failure, returns an error of type `Self::Error`.
    fn hash(&self) -> Result<Vec<u8>, Self::Error>;
}
