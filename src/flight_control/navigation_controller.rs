use super::FlightState;
use crate::error::PilotError;
use crate::hardware::VehicleActuator;
use crate::path_control::PathStore;
use crate::util::Point;
use crate::{info, nav};
use itertools::Itertools;

/// Index of the waypoint closest to `pos`, the first one on ties.
pub fn closest_waypoint(waypoints: &[Point], pos: &Point) -> Option<usize> {
    waypoints.iter().map(|wp| wp.euclid_distance(pos)).position_min_by(f64::total_cmp)
}

/// Owner of the flight intent.
///
/// Builds the waypoint routes handed to the [`VehicleActuator`] and tracks which one
/// is being flown. Path data is only read from the [`PathStore`].
#[derive(Debug, Default)]
pub struct NavigationController {
    state: FlightState,
    selected_path: Option<String>,
}

impl NavigationController {
    const CURRENT_POS_LABEL: &'static str = "Current Position";
    const HOME_LABEL: &'static str = "HOME";
    const FLY_ALL_LABEL: &'static str = "IP";

    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> &FlightState { &self.state }
    pub fn selected_path(&self) -> Option<&str> { self.selected_path.as_deref() }
    pub fn is_flying(&self) -> bool { self.state.is_flying() }

    /// Returns to the home point.
    ///
    /// With a selected path the route first joins that path at its closest waypoint and
    /// retraces it backwards to its start. A selection whose path no longer exists is
    /// ignored.
    pub fn go_home(
        &mut self,
        actuator: &mut dyn VehicleActuator,
        paths: &PathStore,
    ) -> Result<(), PilotError> {
        let pos = actuator.position();
        let mut route: Vec<(Point, &str)> = Vec::new();
        if let Some(path) = self.selected_path.as_deref().and_then(|name| paths.get(name)) {
            if let Some(start) = closest_waypoint(path.waypoints(), &pos) {
                route.extend(path.waypoints()[start..].iter().rev().map(|wp| (*wp, path.name())));
            }
        }
        route.push((paths.home(), Self::HOME_LABEL));
        Self::push_route(actuator, &route);
        nav!("Flying home from {pos} via {} waypoints.", route.len());
        self.state = FlightState::FlyingHome;
        Ok(())
    }

    /// Flies a stored path from its first waypoint, starting at the current position.
    ///
    /// # Errors
    /// [`PilotError::NotFound`] if there is no path with this name. The actuator is
    /// left untouched.
    pub fn fly_path(
        &mut self,
        name: &str,
        actuator: &mut dyn VehicleActuator,
        paths: &PathStore,
    ) -> Result<(), PilotError> {
        let path = paths.get(name).ok_or_else(|| PilotError::NotFound(name.to_string()))?;
        let pos = actuator.position();
        let route = std::iter::once((pos, Self::CURRENT_POS_LABEL))
            .chain(path.waypoints().iter().map(|wp| (*wp, path.name())))
            .collect_vec();
        Self::push_route(actuator, &route);
        nav!("Flying {name} with {} waypoints.", path.len());
        self.state = FlightState::FlyingPath(name.to_string());
        self.selected_path = Some(name.to_string());
        Ok(())
    }

    /// Flies every stored path in collection order and returns home.
    ///
    /// # Errors
    /// [`PilotError::Empty`] without stored paths. The actuator is left untouched.
    pub fn fly_all(
        &mut self,
        actuator: &mut dyn VehicleActuator,
        paths: &PathStore,
    ) -> Result<(), PilotError> {
        if paths.is_empty() {
            return Err(PilotError::Empty);
        }
        let route = paths
            .paths()
            .iter()
            .flat_map(|p| p.waypoints().iter().map(|wp| (*wp, Self::FLY_ALL_LABEL)))
            .chain(std::iter::once((paths.home(), Self::HOME_LABEL)))
            .collect_vec();
        Self::push_route(actuator, &route);
        nav!("Flying all {} paths with {} waypoints, then home.", paths.len(), route.len());
        self.state = FlightState::FlyingAll;
        Ok(())
    }

    pub fn stop_flying(&mut self, actuator: &mut dyn VehicleActuator) {
        actuator.set_autopilot_enabled(false);
        if self.is_flying() {
            info!("Stopped flying ({}).", self.state);
        }
        self.state = FlightState::Idle;
    }

    /// Drops the selection if it names `name`, or unconditionally for `None`.
    pub fn forget_path(&mut self, name: Option<&str>) {
        if name.is_none() || self.selected_path.as_deref() == name {
            self.selected_path = None;
        }
    }

    /// Falls back to idle once the actuator switched its autopilot off by itself.
    ///
    /// # Returns
    /// `true` if a route was finished by this observation.
    pub fn observe_autopilot(&mut self, enabled: bool) -> bool {
        if enabled || !self.is_flying() {
            return false;
        }
        info!("Route finished ({}).", self.state);
        self.state = FlightState::Idle;
        true
    }

    fn push_route(actuator: &mut dyn VehicleActuator, route: &[(Point, &str)]) {
        actuator.set_autopilot_enabled(false);
        actuator.clear_waypoints();
        for (wp, label) in route {
            actuator.enqueue_waypoint(*wp, label);
        }
        actuator.set_autopilot_enabled(true);
    }
}
