use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("Fail to read: {0}")]
    IOError(io::Error),
    #[error("File is too big to be mapped into memory")]
    FileIsTooBig,
}

impl From<io::Error> for E {
    fn from(err: io::Error) -> Self {
        E::IOError(err)
    }
}

impl From<E> for crate::E {
    fn from(err: E) -> Self {
        match err {
            E::IOError(err) => crate::E::Read(err),
            err => crate::E::reader(err),
        }
    }
}
