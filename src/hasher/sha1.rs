use super::{Algorithm, Hasher};
use ::sha1::{Digest, Sha1 as Origin};
use std::convert::Infallible;

/// Hasher based on `sha1` crate.
#[derive(Default, Clone)]
pub struct Sha1 {
    hasher: Origin,
}

impl Sha1 {
    pub fn new() -> Self {
        Sha1 {
            hasher: Origin::new(),
        }
    }
}

impl Hasher for Sha1 {
    type Error = Infallible;
    const ALGORITHM: Algorithm = Algorithm::Sha1;

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
