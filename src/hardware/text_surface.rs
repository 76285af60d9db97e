use crate::warn;
use std::path::PathBuf;

/// A surface that shows a block of text, replacing whatever it showed before.
pub trait TextSurface {
    fn write_text(&mut self, text: &str);
}

/// A display panel backed by a plain text file that is rewritten on every frame.
pub struct FileDisplay {
    path: PathBuf,
    failed: bool,
}

impl FileDisplay {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into(), failed: false } }
}

impl TextSurface for FileDisplay {
    fn write_text(&mut self, text: &str) {
        match std::fs::write(&self.path, text) {
            Ok(()) => self.failed = false,
            Err(e) => {
                // only report the first failure of a streak, frames arrive every tick
                if !self.failed {
                    warn!("Could not write display panel {}: {e}", self.path.display());
                }
                self.failed = true;
            }
        }
    }
}

/// The diagnostic echo channel: prints a frame to stdout whenever it changes.
#[derive(Default)]
pub struct ConsoleEcho {
    last: String,
}

impl TextSurface for ConsoleEcho {
    fn write_text(&mut self, text: &str) {
        if self.last != text {
            println!("{text}");
            self.last = text.to_string();
        }
    }
}
