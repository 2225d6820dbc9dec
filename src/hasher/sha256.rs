use super::{Algorithm, Hasher};
use sha2::{Digest, Sha256 as Origin};
use std::convert::Infallible;

/// Hasher based on `sha2` crate.
#[derive(Default, Clone)]
pub struct Sha256 {
    hasher: Origin,
}

impl Sha256 {
    /// Creates a new instance of `Sha256` hasher.
    pub fn new() -> Self {
        Sha256 {
            hasher: Origin::new(),
        }
    }
}

impl Hasher for Sha256 {
    type Error = Infallible;
    const ALGORITHM: Algorithm = Algorithm::Sha256;

    /// Creates a new instance of `Sha256` hasher.
    fn new() -> Self
    where
        Self: Sized,
    {
        Self::new()
    }

    /// Absorbs input data into the hasher.
    ///
    /// # Parameters
    ///
    /// - `data`: A slice of bytes to be hashed.
    fn absorb(&mut self, data: &[u8]) -> Result<(), Infallible> {
        self.hasher.update(data);
        Ok(())
    }

    /// Returns the digest of everything absorbed so far. The hasher keeps its state, so
    /// this can be called repeatedly.
    fn hash(&self) -> Result<Vec<u8>, Infallible> {
        Ok(self.hasher.clone().finalize().to_vec())
    }
}
