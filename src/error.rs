use std::fmt::{Display, Formatter};

/// Every failure an operation of the pilot can report.
///
/// None of these are fatal: the command dispatcher turns each of them into the warning
/// shown on the display and keeps the tick loop running.
#[derive(Debug)]
pub enum PilotError {
    /// Persisted numeric data that could not be read as a point.
    Parse(String),
    /// A path name that is not in the store.
    NotFound(String),
    /// An operation that needs at least one stored path.
    Empty,
    /// The vehicle actuator was not found at startup.
    ActuatorUnavailable,
    /// A verb the command surface does not know.
    UnknownCommand(String),
    /// A command that needs a path name was issued without one.
    MissingArgument,
    /// The persisted configuration store could not be read or written.
    Storage(std::io::Error),
}

impl Display for PilotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PilotError::Parse(input) => write!(f, "Could not parse point: '{input}'"),
            PilotError::NotFound(name) => write!(f, "Path not found: {name}"),
            PilotError::Empty => write!(f, "No paths recorded."),
            PilotError::ActuatorUnavailable => write!(f, "Remote Control not found."),
            PilotError::UnknownCommand(verb) => write!(f, "Unknown command: {verb}"),
            PilotError::MissingArgument => write!(f, "Please specify a path name."),
            PilotError::Storage(err) => write!(f, "Storage failure: {err}"),
        }
    }
}

impl std::error::Error for PilotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PilotError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PilotError {
    fn from(value: std::io::Error) -> Self { PilotError::Storage(value) }
}
