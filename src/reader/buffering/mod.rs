mod error;

use super::Reader;
pub use error::E;
use std::{fs::File, io, io::Read, path::Path};

/// Plain reader on top of `std::fs::File`. Doesn't support memory mapping.
pub struct Buffering {
    file: File,
}

impl Reader for Buffering {
    type Error = E;
    fn bind<P: AsRef<Path>>(path: P) -> io::Result<Self>
    where
        Self: Sized,
    {
        Ok(Self {
            file: File::open(path.as_ref())?,
        })
    }
    fn size(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }
    fn mmap(&mut self) -> Result<&[u8], E> {
        Err(E::MemoryMappingNotSupported)
    }
}

impl Read for Buffering {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.file.read(buffer)
    }
}
