mod flight_state;
mod navigation_controller;


pub use flight_state::FlightState;
pub use navigation_controller::{NavigationController, closest_waypoint};
