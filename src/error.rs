use std::{convert::Infallible, io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum E {
    #[error("input file is required")]
    MissingArgument,
    #[error("opening file {0}: {1}")]
    FileOpen(PathBuf, io::Error),
    #[error("reading file: {0}")]
    Read(io::Error),
    #[error("Reader error: {0}")]
    Reader(String),
    #[error("Hasher error: {0}")]
    Hasher(String),
    #[error("Scenario strategy cannot include another scenario strategy")]
    NestedScenarioStrategy,
    #[error("No reading strategy defined for a file of {0} bytes")]
    NoRangeForScenarioStrategy(u64),
    #[error("Buffer size should be greater than zero")]
    InvalidBufferSize,
}

impl E {
    pub fn reader<Er: std::error::Error>(err: Er) -> E {
        E::Reader(err.to_string())
    }
    pub fn hasher<Er: std::error::Error>(err: Er) -> E {
        E::Hasher(err.to_string())
    }
}

impl From<io::Error> for E {
    fn from(err: io::Error) -> Self {
        E::Read(err)
    }
}

impl From<(PathBuf, io::Error)> for E {
    fn from(err: (PathBuf, io::Error)) -> Self {
        E::FileOpen(err.0, err.1)
    }
}

impl From<Infallible> for E {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
