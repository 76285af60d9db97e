use std::fmt::{Display, Formatter};

/// What the vehicle is currently flying, if anything.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub enum FlightState {
    #[default]
    Idle,
    FlyingHome,
    FlyingPath(String),
    FlyingAll,
}

impl FlightState {
    pub fn is_flying(&self) -> bool { !matches!(self, FlightState::Idle) }
}

impl Display for FlightState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FlightState::Idle => write!(f, "Idle"),
            FlightState::FlyingHome => write!(f, "Flying Home"),
            FlightState::FlyingPath(name) => write!(f, "Flying {name}"),
            FlightState::FlyingAll => write!(f, "Flying All Paths"),
        }
    }
}
