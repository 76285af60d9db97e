use std::io::ErrorKind;
use std::path::PathBuf;

/// The flat text blob that survives across sessions.
pub trait ConfigStore {
    fn read_all(&self) -> Result<String, std::io::Error>;
    fn write_all(&mut self, blob: &str) -> Result<(), std::io::Error>;
}

/// A [`ConfigStore`] kept in a single text file.
#[derive(Debug)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }
}

impl ConfigStore for FileConfigStore {
    fn read_all(&self) -> Result<String, std::io::Error> {
        match std::fs::read_to_string(&self.path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            res => res,
        }
    }

    fn write_all(&mut self, blob: &str) -> Result<(), std::io::Error> {
        std::fs::write(&self.path, blob)
    }
}
