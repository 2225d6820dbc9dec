#![doc = include_str!("../README.md")]

pub mod calculator;
mod error;
pub mod hasher;
pub mod options;
pub mod reader;
pub mod report;
#[cfg(test)]
pub(crate) mod test;

pub use calculator::Calculator;
pub use error::E;
pub use hasher::{Algorithm, Hasher};
pub use options::{Options, ReadingStrategy};
pub use reader::Reader;
pub use report::{Encoding, Report};
