mod error;

use super::Reader;
pub use error::E;
use memmap2::{Mmap, MmapOptions};
use std::{fs::File, io, io::Read, path::Path};

/// Reader which is able to map the whole file into memory. Regular reading is also supported.
pub struct Mapping {
    file: File,
    mmap: Option<Mmap>,
}

impl Reader for Mapping {
    type Error = E;
    fn bind<P: AsRef<Path>>(path: P) -> io::Result<Self>
    where
        Self: Sized,
    {
        Ok(Self {
            file: File::open(path.as_ref())?,
            mmap: None,
        })
    }
    fn size(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }
    fn mmap(&mut self) -> Result<&[u8], E> {
        let len = self.size()?;
        if len == 0 {
            // mmap(2) rejects zero-length mappings
            return Ok(&[]);
        }
        let len = usize::try_from(len).map_err(|_| E::FileIsTooBig)?;
        // SAFETY: the mapping is read-only and lives no longer than `self`. Truncation of the file
        // by another process while it's mapped raises SIGBUS on access.
        let mmap = unsafe { MmapOptions::new().len(len).map(&self.file) }?;
        Ok(&self.mmap.insert(mmap)[..])
    }
}

impl Read for Mapping {
    fn read(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        self.file.read(buffer)
    }
}
