use crate::util::Point;

/// A named, ordered sequence of recorded waypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    name: String,
    waypoints: Vec<Point>,
}

impl Path {
    pub fn new(name: impl Into<String>, waypoints: Vec<Point>) -> Self {
        Self { name: name.into(), waypoints }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn waypoints(&self) -> &[Point] { &self.waypoints }
    pub fn len(&self) -> usize { self.waypoints.len() }
    pub fn is_empty(&self) -> bool { self.waypoints.is_empty() }
}
