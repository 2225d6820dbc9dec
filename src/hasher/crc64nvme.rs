use super::{Algorithm, Hasher};
use crc_fast::{CrcAlgorithm, Digest};
use std::convert::Infallible;

/// CRC-64/NVME (polynomial 0x9a6c9329ac4bc9b5). Not to be confused with the ECMA-182 or
/// ISO 3309 CRC-64 variants.
#[derive(Clone)]
pub struct Crc64Nvme {
    inner: Digest,
}

impl Default for Crc64Nvme {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc64Nvme {
    pub fn new() -> Self {
        Self {
            inner: Digest::new(CrcAlgorithm::Crc64Nvme),
        }
    }

    pub fn checksum(&self) -> u64 {
        self.inner.clone().finalize()
    }
}

impl Hasher for Crc64Nvme {
    type Error = Infallible;
    const ALGORITHM: Algorithm = Algorithm::Crc64Nvme;

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

#[cfg(test)]
mod test {
    use crate::{
        hasher::{crc64nvme::Crc64Nvme, Hasher},
        test::{reference, vectors},
        E,
    };

    #[test]
    fn vectors() -> Result<(), E> {
        vectors::check::<Crc64Nvme>()
    }

    #[test]
    fn check_value() -> Result<(), E> {
        let mut hasher = Crc64Nvme::new();
        hasher.absorb(b"123456789")?;
        assert_eq!(hasher.checksum(), 0xAE8B14860A799888);
        Ok(())
    }

    #[test]
    fn same_as_bitwise() -> Result<(), E> {
        let data = reference::random_bytes(4_096);
        let mut hasher = Crc64Nvme::new();
        for chunk in data.chunks(100) {
            hasher.absorb(chunk)?;
        }
        assert_eq!(
            hasher.checksum(),
            reference::crc_reflected(&data, reference::CRC64_NVME_POLY, 64)
        );
        Ok(())
    }
}
