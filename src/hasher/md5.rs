use super::{Algorithm, Hasher};
use ::md5::{Digest, Md5 as Origin};
use std::convert::Infallible;

/// Hasher based on `md-5` crate. Its digest is used for both `ETag` and `Content-MD5`.
#[derive(Default, Clone)]
pub struct Md5 {
    hasher: Origin,
}

impl Md5 {
    pub fn new() -> Self {
        Md5 {
            hasher: Origin::new(),
        }
    }
}

impl Hasher for Md5 {
    type Error = Infallible;
    const ALGORITHM: Algorithm = Algorithm::Md5;

    fn new() -> Self
    where
        Self: Sized,
    {
        Self::new()
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), Infallible> {
        self.hasher.update(data);
        Ok(())
    }

    fn hash(&self) -> Result<Vec<u8>, Infallible> {
        Ok(self.hasher.clone().finalize().to_vec())
    }
}
