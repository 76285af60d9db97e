//! Recorded paths, the home point and the in-progress recording.

mod path;
mod path_store;
mod recording_buffer;

#[cfg(test)]
mod tests;

pub use path::Path;
pub use path_store::PathStore;
pub use recording_buffer::{RecordingBuffer, RecordingState};
