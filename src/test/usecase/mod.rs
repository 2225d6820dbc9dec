use crate::test::reference;
use log::debug;
use std::{
    env::temp_dir,
    fs::{create_dir, remove_dir_all, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};
use uuid::Uuid;

/// A single temporary file with known content.
pub struct UseCase {
    pub file: PathBuf,
    pub root: PathBuf,
    pub content: Vec<u8>,
}

impl UseCase {
    pub fn random(len: usize) -> Result<Self, io::Error> {
        Self::gen(reference::random_bytes(len))
    }

    pub fn with(content: &[u8]) -> Result<Self, io::Error> {
        Self::gen(content.to_vec())
    }

    pub fn gen(content: Vec<u8>) -> Result<Self, io::Error> {
        let root = temp_dir().join(Uuid::new_v4().to_string());
        if root.exists() {
            remove_dir_all(&root)?;
        }
        create_dir(&root)?;
        let file = root.join(Uuid::new_v4().to_string());
        let mut output = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file)?;
        output.write_all(&content)?;
        output.flush()?;
        debug!("created \"{}\" with {} bytes", file.display(), content.len());
        Ok(Self {
            file,
            root,
            content,
        })
    }

    /// A path inside of the use case folder which doesn't exist.
    pub fn missing(&self) -> PathBuf {
        self.root.join(Uuid::new_v4().to_string())
    }

    pub fn clean(&self) -> Result<(), io::Error> {
        if !self.root.exists() {
            return Ok(());
        }
        let Some(parent) = self.root.parent() else {
            return Ok(());
        };
        if !parent.starts_with(temp_dir()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("parent of root isn't belong to {}", temp_dir().display()),
            ));
        }
        remove_dir_all(&self.root)?;
        debug!("Removed {}", self.root.display());
        Ok(())
    }
}
