use super::{Algorithm, Hasher};
use crc_fast::{CrcAlgorithm, Digest};
use std::convert::Infallible;

/// CRC-32 (IEEE 802.3, reflected polynomial 0xEDB88320). The digest is the big-endian
/// representation of the checksum, as expected by `x-amz-checksum-crc32`.
#[derive(Clone)]
pub struct Crc32 {
    inner: Digest,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    pub fn new() -> Self {
        Self {
            inner: Digest::new(CrcAlgorithm::Crc32IsoHdlc),
        }
    }

    pub fn checksum(&self) -> u32 {
        self.inner.clone().finalize() as u32
    }
}

impl Hasher for Crc32 {
    type Error = Infallible;
    const ALGORITHM: Algorithm = Algorithm::Crc32;

    fn new() -> Self
    where
        Self: Sized,
    {
        Self::new()
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), Infallible> {
        self.inner.update(data);
        Ok(())
    }

    fn hash(&self) -> Result<Vec<u8>, Infallible> {
        Ok(self.checksum().to_be_bytes().to_vec())
    }
}
