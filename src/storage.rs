use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::{Error, SessionStorage};

/// Keeps the flag as `true`/`false` text in a file. A missing file means signed out.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<bool, Error> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.trim() == "true"),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&mut self, authenticated: bool) -> Result<(), Error> {
        fs::write(&self.path, if authenticated { "true" } else { "false" })?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemorySessionStorage {
    authenticated: bool,
}

impl MemorySessionStorage {
    pub fn signed_in() -> Self {
        Self {
            authenticated: true,
        }
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Result<bool, Error> {
        Ok(self.authenticated)
    }

    fn store(&mut self, authenticated: bool) -> Result<(), Error> {
        self.authenticated = authenticated;
        Ok(())
    }
}
