//! Boundaries to the outside world: the vehicle actuator, text surfaces and the
//! persisted configuration store, together with the concrete implementations the
//! binary runs with.

mod config_store;
mod simulated_actuator;
mod text_surface;
mod vehicle_actuator;

#[cfg(test)]
pub(crate) mod mock;

pub use config_store::{ConfigStore, FileConfigStore};
pub use simulated_actuator::SimulatedActuator;
pub use text_surface::{ConsoleEcho, FileDisplay, TextSurface};
pub use vehicle_actuator::{ActuatorSettings, FlightMode, VehicleActuator};
