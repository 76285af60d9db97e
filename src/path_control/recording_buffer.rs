use crate::util::Point;
use strum_macros::Display;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Display)]
pub enum RecordingState {
    #[default]
    Off,
    On,
}

/// Positions sampled while recording, with consecutive duplicates dropped.
#[derive(Debug, Default, Clone)]
pub struct RecordingBuffer {
    samples: Vec<Point>,
}

impl RecordingBuffer {
    /// Appends `pos` unless it equals the last sample.
    ///
    /// # Returns
    /// `true` if the sample was stored.
    pub fn push(&mut self, pos: Point) -> bool {
        if self.samples.last() == Some(&pos) {
            return false;
        }
        self.samples.push(pos);
        true
    }

    /// Empties the buffer and hands out what was collected.
    pub fn take(&mut self) -> Vec<Point> { std::mem::take(&mut self.samples) }

    pub fn clear(&mut self) { self.samples.clear(); }
    pub fn samples(&self) -> &[Point] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
}
