pub mod buffering;
pub mod mapping;

use crate::E;
use std::{error, io, io::Read, path::Path};

/// A trait that extends the standard `Read` trait with additional capabilities for reading data.
/// Implementers of this trait must also implement `Send`.
///
/// `Options::calculate()` uses a reader as follows:
/// - Bind a new instance of `Reader` to the target file (the file is opened here).
/// - Read the file using the instance of `Reader` (or map it into memory).
/// - Drop the instance of `Reader`.
pub trait Reader: Read + Send {
    /// The type of error that can occur during operations.
    type Error: error::Error + Into<E>;

    /// Opens the file and binds the reader to it.
    ///
    /// # Parameters
    ///
    /// - `path`: A reference to a path that the reader will be bound to.
    ///
    /// # Returns
    ///
    /// - `io::Result<Self>`: On success, returns an instance of the reader. On failure,
    ///   returns the error of opening the file.
    fn bind<P: AsRef<Path>>(path: P) -> io::Result<Self>
    where
        Self: Sized;

    /// Returns the size of the opened file in bytes.
    fn size(&self) -> io::Result<u64>;

    /// Memory-maps the file for reading. This method must be implemented only if the reader supports
    /// mapping the file into memory. This method will be called only if `Options` is used with the
    /// `ReadingStrategy::MemoryMapped`.
    ///
    /// If the implementation of `Reader` doesn't support memory mapping, it should return an error.
    ///
    /// # Returns
    ///
    /// - `Result<&[u8], Self::Error>`: On success, returns a reference to the memory-mapped data.
    ///   On failure, returns an error of type `Self::Error`.
    fn mmap(&mut self) -> Result<&[u8], Self::Error>;
}
