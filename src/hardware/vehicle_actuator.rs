use crate::util::Point;
use strum_macros::{Display, EnumString};

/// How the actuator treats a waypoint once it has been reached.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FlightMode {
    /// Drop reached waypoints and stop when the queue runs dry.
    OneWay,
    /// Go back and forth along the queue, turning around at either end.
    Patrol,
    /// Loop through the queue, flying from the last waypoint straight back to the first.
    Circle,
}

/// One-time actuator configuration applied at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActuatorSettings {
    pub speed_limit: f64,
    pub collision_avoidance: bool,
    pub docking_mode: bool,
    pub flight_mode: FlightMode,
}

impl Default for ActuatorSettings {
    fn default() -> Self {
        Self {
            speed_limit: 30.0,
            collision_avoidance: true,
            docking_mode: false,
            flight_mode: FlightMode::OneWay,
        }
    }
}

/// The steering unit that consumes waypoint queues and reports position.
pub trait VehicleActuator {
    /// Current world position of the vehicle.
    fn position(&mut self) -> Point;
    fn clear_waypoints(&mut self);
    fn enqueue_waypoint(&mut self, point: Point, label: &str);
    fn set_autopilot_enabled(&mut self, enabled: bool);
    fn is_autopilot_enabled(&self) -> bool;

    fn set_speed_limit(&mut self, limit: f64);
    fn set_collision_avoidance(&mut self, enabled: bool);
    fn set_docking_mode(&mut self, enabled: bool);
    fn set_flight_mode(&mut self, mode: FlightMode);

    /// Applies all startup settings at once.
    fn configure(&mut self, settings: &ActuatorSettings) {
        self.set_speed_limit(settings.speed_limit);
        self.set_collision_avoidance(settings.collision_avoidance);
        self.set_docking_mode(settings.docking_mode);
        self.set_flight_mode(settings.flight_mode);
    }
}
