use super::vehicle_actuator::{FlightMode, VehicleActuator};
use crate::util::Point;
use crate::{event, log};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// An in-memory vehicle that follows its waypoint queue in straight lines.
///
/// The position is integrated lazily: every call to [`VehicleActuator::position`]
/// advances the vehicle by the wall clock time elapsed since the previous call.
#[derive(Debug)]
pub struct SimulatedActuator {
    pos: Point,
    queue: VecDeque<(Point, String)>,
    autopilot: bool,
    speed_limit: f64,
    docking_mode: bool,
    flight_mode: FlightMode,
    /// Waypoints reached since the patrol last turned around.
    lap: usize,
    last_update: Instant,
}

impl SimulatedActuator {
    /// Speed cap while precision docking is enabled.
    const DOCKING_SPEED: f64 = 5.0;

    pub fn new(start: Point) -> Self {
        Self {
            pos: start,
            queue: VecDeque::new(),
            autopilot: false,
            speed_limit: 0.0,
            docking_mode: false,
            flight_mode: FlightMode::OneWay,
            lap: 0,
            last_update: Instant::now(),
        }
    }

    /// Labels and targets still waiting in the queue, front first.
    pub fn queued(&self) -> impl Iterator<Item = &(Point, String)> { self.queue.iter() }

    fn effective_speed(&self) -> f64 {
        if self.docking_mode { self.speed_limit.min(Self::DOCKING_SPEED) } else { self.speed_limit }
    }

    /// Moves the vehicle along the queue for `dt`.
    pub fn advance(&mut self, dt: Duration) {
        let mut budget = self.effective_speed() * dt.as_secs_f64();
        // each pass either reaches a waypoint or spends the whole budget
        for _ in 0..=self.queue.len() {
            if !self.autopilot || budget <= 0.0 {
                break;
            }
            let Some((target, _)) = self.queue.front().cloned() else {
                break;
            };
            let (new_pos, reached) = self.pos.step_towards(&target, budget);
            budget -= self.pos.euclid_distance(&new_pos);
            self.pos = new_pos;
            if !reached {
                break;
            }
            if let Some(done) = self.queue.pop_front() {
                event!("Reached waypoint '{}' at {}", done.1, done.0);
                match self.flight_mode {
                    FlightMode::OneWay => {
                        if self.queue.is_empty() {
                            self.autopilot = false;
                        }
                    }
                    FlightMode::Patrol => {
                        self.queue.push_back(done);
                        self.lap += 1;
                        if self.lap >= self.queue.len() {
                            self.turn_around();
                        }
                    }
                    FlightMode::Circle => self.queue.push_back(done),
                }
            }
        }
    }

    /// Reverses the patrol at its end point; the point just reached is visited last.
    fn turn_around(&mut self) {
        self.queue.make_contiguous().reverse();
        self.queue.rotate_left(1);
        self.lap = 1;
        if let Some((next, label)) = self.queue.front() {
            event!("Patrol turning around, heading to '{label}' at {next}");
        }
    }
}

impl VehicleActuator for SimulatedActuator {
    fn position(&mut self) -> Point {
        let now = Instant::now();
        let dt = now - self.last_update;
        self.last_update = now;
        self.advance(dt);
        self.pos
    }

    fn clear_waypoints(&mut self) {
        self.queue.clear();
        self.lap = 0;
    }

    fn enqueue_waypoint(&mut self, point: Point, label: &str) {
        self.queue.push_back((point, label.to_string()));
        self.lap = 0;
    }

    fn set_autopilot_enabled(&mut self, enabled: bool) {
        // settle the position before the motion model changes
        let _ = self.position();
        self.autopilot = enabled;
    }

    fn is_autopilot_enabled(&self) -> bool { self.autopilot }

    fn set_speed_limit(&mut self, limit: f64) {
        log!("Actuator speed limit set to {limit} m/s");
        self.speed_limit = limit.max(0.0);
    }

    fn set_collision_avoidance(&mut self, enabled: bool) {
        log!("Actuator collision avoidance {}", if enabled { "on" } else { "off" });
    }

    fn set_docking_mode(&mut self, enabled: bool) {
        log!("Actuator docking mode {}", if enabled { "on" } else { "off" });
        self.docking_mode = enabled;
    }

    fn set_flight_mode(&mut self, mode: FlightMode) {
        log!("Actuator flight mode set to {mode}");
        self.flight_mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving_sim(mode: FlightMode) -> SimulatedActuator {
        let mut sim = SimulatedActuator::new(Point::zero());
        sim.set_speed_limit(10.0);
        sim.set_flight_mode(mode);
        sim
    }

    #[test]
    fn test_one_way_stops_at_last_waypoint() {
        let mut sim = moving_sim(FlightMode::OneWay);
        sim.enqueue_waypoint(Point::new(10.0, 0.0, 0.0), "A");
        sim.enqueue_waypoint(Point::new(10.0, 10.0, 0.0), "B");
        sim.autopilot = true;
        sim.advance(Duration::from_millis(500));
        assert_eq!(sim.pos, Point::new(5.0, 0.0, 0.0));
        sim.advance(Duration::from_secs(10));
        assert_eq!(sim.pos, Point::new(10.0, 10.0, 0.0));
        assert!(!sim.is_autopilot_enabled());
        assert_eq!(sim.queued().count(), 0);
    }

    fn square_route(sim: &mut SimulatedActuator) {
        sim.enqueue_waypoint(Point::new(10.0, 0.0, 0.0), "A");
        sim.enqueue_waypoint(Point::new(10.0, 10.0, 0.0), "B");
        sim.enqueue_waypoint(Point::new(0.0, 10.0, 0.0), "C");
        sim.autopilot = true;
    }

    fn visits(sim: &mut SimulatedActuator, steps: usize) -> Vec<Point> {
        (0..steps)
            .map(|_| {
                sim.advance(Duration::from_secs(1));
                sim.pos
            })
            .collect()
    }

    #[test]
    fn test_patrol_turns_around() {
        let mut sim = moving_sim(FlightMode::Patrol);
        square_route(&mut sim);
        let (a, b, c) =
            (Point::new(10.0, 0.0, 0.0), Point::new(10.0, 10.0, 0.0), Point::new(0.0, 10.0, 0.0));
        assert_eq!(visits(&mut sim, 7), vec![a, b, c, b, a, b, c]);
        assert!(sim.is_autopilot_enabled());
        assert_eq!(sim.queued().count(), 3);
    }

    #[test]
    fn test_circle_closes_the_loop() {
        let mut sim = moving_sim(FlightMode::Circle);
        square_route(&mut sim);
        let seen = visits(&mut sim, 4);
        assert_eq!(seen[2], Point::new(0.0, 10.0, 0.0));
        assert!((seen[3].euclid_distance(&Point::new(0.0, 10.0, 0.0)) - 10.0).abs() < 1e-9);
        assert_eq!(sim.queued().next().map(|(_, l)| l.as_str()), Some("A"));
        assert!(sim.is_autopilot_enabled());
    }

    #[test]
    fn test_single_waypoint_patrol_holds() {
        let mut sim = moving_sim(FlightMode::Patrol);
        sim.enqueue_waypoint(Point::new(10.0, 0.0, 0.0), "A");
        sim.autopilot = true;
        assert_eq!(visits(&mut sim, 3), vec![Point::new(10.0, 0.0, 0.0); 3]);
    }

    #[test]
    fn test_idle_without_autopilot() {
        let mut sim = moving_sim(FlightMode::OneWay);
        sim.enqueue_waypoint(Point::new(10.0, 0.0, 0.0), "A");
        sim.advance(Duration::from_secs(5));
        assert_eq!(sim.pos, Point::zero());
    }
}
