//! Fakes substituted for the real collaborators in tests.

use super::{ConfigStore, FlightMode, TextSurface, VehicleActuator};
use crate::util::Point;
use std::cell::RefCell;
use std::rc::Rc;

/// A single call received by [`MockActuator`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ActuatorCall {
    Clear,
    Enqueue(Point, String),
    Autopilot(bool),
    Configure,
}

/// Records every call and reports a fixed, settable position.
#[derive(Debug, Default)]
pub(crate) struct MockActuator {
    pub pos: Point,
    pub calls: Vec<ActuatorCall>,
    pub autopilot: bool,
}

impl MockActuator {
    pub fn at(pos: Point) -> Self { Self { pos, ..Self::default() } }

    /// Points enqueued since the last clear.
    pub fn route(&self) -> Vec<Point> {
        let start = self.calls.iter().rposition(|c| *c == ActuatorCall::Clear).map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Enqueue(p, _) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ActuatorCall::Enqueue(_, l) => Some(l.clone()),
                _ => None,
            })
            .collect()
    }
}

impl VehicleActuator for MockActuator {
    fn position(&mut self) -> Point { self.pos }
    fn clear_waypoints(&mut self) { self.calls.push(ActuatorCall::Clear); }
    fn enqueue_waypoint(&mut self, point: Point, label: &str) {
        self.calls.push(ActuatorCall::Enqueue(point, label.to_string()));
    }
    fn set_autopilot_enabled(&mut self, enabled: bool) {
        self.autopilot = enabled;
        self.calls.push(ActuatorCall::Autopilot(enabled));
    }
    fn is_autopilot_enabled(&self) -> bool { self.autopilot }
    fn set_speed_limit(&mut self, _limit: f64) { self.calls.push(ActuatorCall::Configure); }
    fn set_collision_avoidance(&mut self, _enabled: bool) { self.calls.push(ActuatorCall::Configure); }
    fn set_docking_mode(&mut self, _enabled: bool) { self.calls.push(ActuatorCall::Configure); }
    fn set_flight_mode(&mut self, _mode: FlightMode) { self.calls.push(ActuatorCall::Configure); }
}

/// An in-memory store counting its writes.
#[derive(Debug, Default, Clone)]
pub(crate) struct MemoryStore {
    pub blob: String,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with(blob: &str) -> Self { Self { blob: blob.to_string(), writes: 0 } }
}

impl ConfigStore for MemoryStore {
    fn read_all(&self) -> Result<String, std::io::Error> { Ok(self.blob.clone()) }
    fn write_all(&mut self, blob: &str) -> Result<(), std::io::Error> {
        self.blob = blob.to_string();
        self.writes += 1;
        Ok(())
    }
}

/// A surface whose frames stay readable from the test after being boxed away.
#[derive(Debug, Default, Clone)]
pub(crate) struct CaptureSurface {
    pub frames: Rc<RefCell<Vec<String>>>,
}

impl CaptureSurface {
    pub fn last(&self) -> String { self.frames.borrow().last().cloned().unwrap_or_default() }
}

impl TextSurface for CaptureSurface {
    fn write_text(&mut self, text: &str) { self.frames.borrow_mut().push(text.to_string()); }
}

impl VehicleActuator for Rc<RefCell<MockActuator>> {
    fn position(&mut self) -> Point { self.borrow_mut().position() }
    fn clear_waypoints(&mut self) { self.borrow_mut().clear_waypoints(); }
    fn enqueue_waypoint(&mut self, point: Point, label: &str) {
        self.borrow_mut().enqueue_waypoint(point, label);
    }
    fn set_autopilot_enabled(&mut self, enabled: bool) {
        self.borrow_mut().set_autopilot_enabled(enabled);
    }
    fn is_autopilot_enabled(&self) -> bool { self.borrow().is_autopilot_enabled() }
    fn set_speed_limit(&mut self, limit: f64) { self.borrow_mut().set_speed_limit(limit); }
    fn set_collision_avoidance(&mut self, enabled: bool) {
        self.borrow_mut().set_collision_avoidance(enabled);
    }
    fn set_docking_mode(&mut self, enabled: bool) { self.borrow_mut().set_docking_mode(enabled); }
    fn set_flight_mode(&mut self, mode: FlightMode) { self.borrow_mut().set_flight_mode(mode); }
}

impl ConfigStore for Rc<RefCell<MemoryStore>> {
    fn read_all(&self) -> Result<String, std::io::Error> { self.borrow().read_all() }
    fn write_all(&mut self, blob: &str) -> Result<(), std::io::Error> {
        self.borrow_mut().write_all(blob)
    }
}
