use crate::{
    hasher::{
        crc32::Crc32, crc32c::Crc32c, crc64nvme::Crc64Nvme, md5::Md5, sha1::Sha1, sha256::Sha256,
        Algorithm,
    },
    Hasher, E,
};
use log::debug;
use std::io::{self, Read, Write};

/// Object-safe view of a `Hasher`, so accumulators of different types can live in one
/// collection. Errors are already converted into `E`.
trait Accumulator: Send {
    fn algorithm(&self) -> Algorithm;
    fn absorb(&mut self, data: &[u8]) -> Result<(), E>;
    fn digest(&self) -> Result<Vec<u8>, E>;
}

impl<H: Hasher> Accumulator for H {
    fn algorithm(&self) -> Algorithm {
        H::ALGORITHM
    }
    fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        Hasher::absorb(self, data).map_err(Into::into)
    }
    fn digest(&self) -> Result<Vec<u8>, E> {
        Hasher::hash(self).map_err(Into::into)
    }
}

fn accumulator(algorithm: Algorithm) -> Box<dyn Accumulator> {
    match algorithm {
        Algorithm::Md5 => Box::new(<Md5 as Hasher>::new()),
        Algorithm::Crc32 => Box::new(<Crc32 as Hasher>::new()),
        Algorithm::Crc32c => Box::new(<Crc32c as Hasher>::new()),
        Algorithm::Sha1 => Box::new(<Sha1 as Hasher>::new()),
        Algorithm::Sha256 => Box::new(<Sha256 as Hasher>::new()),
        Algorithm::Crc64Nvme => Box::new(<Crc64Nvme as Hasher>::new()),
    }
}

/// `Calculator` feeds a single stream of bytes into one accumulator per `Algorithm`, so all
/// digests of a source are produced with one read of it.
///
/// Every call of `absorb()` (or `write()`, as `Calculator` implements `std::io::Write`) hands
/// the same bytes to every accumulator, in the order of `Algorithm::ALL`, before returning. If
/// any accumulator fails, the whole call fails.
///
/// Digests are requested with `result()`. Requesting a digest doesn't change the state of an
/// accumulator: it can be requested again (with the same result) and more data can be absorbed
/// afterwards.
///
/// # Example
///
/// ```
/// use objsum::{Algorithm, Calculator};
/// use std::io;
///
/// let mut calculator = Calculator::new();
/// io::copy(&mut &b"abc"[..], &mut calculator).unwrap();
/// assert_eq!(
///     hex::encode(calculator.result(Algorithm::Md5).unwrap()),
///     "900150983cd24fb0d6963f7d28e17f72"
/// );
/// ```
pub struct Calculator {
    /// Accumulators in `Algorithm::ALL` order; `Algorithm as usize` is the index.
    accumulators: [Box<dyn Accumulator>; Algorithm::COUNT],
    /// Total number of absorbed bytes.
    absorbed: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a new instance of `Calculator` with a fresh accumulator for each algorithm.
    pub fn new() -> Self {
        let accumulators = Algorithm::ALL.map(accumulator);
        debug_assert!(accumulators
            .iter()
            .enumerate()
            .all(|(i, acc)| acc.algorithm() as usize == i));
        debug!(
            "created calculator with {} accumulators",
            accumulators.len()
        );
        Self {
            accumulators,
            absorbed: 0,
        }
    }

    /// Hands `data` to every accumulator.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by an accumulator. Accumulators following the failed one
    /// don't get `data`, so after an error the calculator should be discarded.
    pub fn absorb(&mut self, data: &[u8]) -> Result<(), E> {
        for accumulator in self.accumulators.iter_mut() {
            accumulator.absorb(data)?;
        }
        self.absorbed += data.len() as u64;
        Ok(())
    }

    /// Copies `source` into the calculator until the end of it.
    ///
    /// # Returns
    ///
    /// - `Result<u64, E>`: the number of bytes copied. Any failure (either reading the source
    ///   or absorbing data) is reported as `E::Read`.
    pub fn consume<S: Read + ?Sized>(&mut self, source: &mut S) -> Result<u64, E> {
        Ok(io::copy(source, self)?)
    }

    /// Returns the digest of `algorithm` over all bytes absorbed so far.
    pub fn result(&self, algorithm: Algorithm) -> Result<Vec<u8>, E> {
        self.accumulators[algorithm as usize].digest()
    }

    /// Returns the digests of all algorithms in `Algorithm::ALL` order.
    pub fn results(&self) -> Result<Vec<(Algorithm, Vec<u8>)>, E> {
        Algorithm::ALL
            .iter()
            .map(|algorithm| -> Result<(Algorithm, Vec<u8>), E> {
                Ok((*algorithm, self.result(*algorithm)?))
            })
            .collect()
    }

    /// Number of bytes absorbed so far.
    pub fn absorbed(&self) -> u64 {
        self.absorbed
    }

    #[cfg(test)]
    fn replace<H: Hasher + 'static>(&mut self, hasher: H) {
        self.accumulators[H::ALGORITHM as usize] = Box::new(hasher);
    }

    #[cfg(test)]
    fn absorb_into(&mut self, algorithm: Algorithm, data: &[u8]) -> Result<(), E> {
        self.accumulators[algorithm as usize].absorb(data)
    }
}

impl Write for Calculator {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.absorb(buf).map_err(|err| match err {
            E::Read(err) => err,
            err => io::Error::new(io::ErrorKind::Other, err.to_string()),
        })?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
