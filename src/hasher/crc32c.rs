use super::{Algorithm, Hasher};
use crc_fast::{CrcAlgorithm, Digest};
use std::convert::Infallible;

/// CRC-32C (Castagnoli polynomial 0x1EDC6F41, reflected form), also known as CRC-32/ISCSI.
#[derive(Clone)]
pub struct Crc32c {
    inner: Digest,
}

impl Default for Crc32c {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32c {
    pub fn new() -> Self {
        Self {
            inner: Digest::new(CrcAlgorithm::Crc32Iscsi),
        }
    }

    pub fn checksum(&self) -> u32 {
        self.inner.clone().finalize() as u32
    }
}

impl Hasher for Crc32c {
    type Error = Infallible;
    const ALGORITHM: Algorithm = Algorithm::Crc32c;

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
