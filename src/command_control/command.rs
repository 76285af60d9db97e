use crate::error::PilotError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A single operator command, typed or produced by activating a menu row.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    SaveHome,
    Record,
    StopRecord,
    DeletePath(String),
    GoHome,
    FlyPath(String),
    FlyAll,
    StopFlying,
    WipeAll,
    Up,
    Down,
    Set,
    Back,
    ClearWarning,
}

impl Command {
    /// Parses a whole input line.
    ///
    /// # Returns
    /// `Ok(None)` for a blank line.
    pub fn parse_line(line: &str) -> Result<Option<Self>, PilotError> {
        if line.trim().is_empty() { Ok(None) } else { line.parse().map(Some) }
    }
}

impl FromStr for Command {
    type Err = PilotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let verb = tokens.next().unwrap_or_default();
        let mut name = || tokens.next().map(String::from).ok_or(PilotError::MissingArgument);
        Ok(match verb {
            "save_home" => Command::SaveHome,
            "record" => Command::Record,
            "stop_record" => Command::StopRecord,
            "delete_path" => Command::DeletePath(name()?),
            "go_home" => Command::GoHome,
            "fly_path" => Command::FlyPath(name()?),
            "fly_all" => Command::FlyAll,
            "stop_flying" => Command::StopFlying,
            "wipe_all" => Command::WipeAll,
            "up" => Command::Up,
            "down" => Command::Down,
            "set" => Command::Set,
            "back" => Command::Back,
            "clear_warning" => Command::ClearWarning,
            _ => return Err(PilotError::UnknownCommand(verb.to_string())),
        })
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SaveHome => write!(f, "save_home"),
            Command::Record => write!(f, "record"),
            Command::StopRecord => write!(f, "stop_record"),
            Command::DeletePath(name) => write!(f, "delete_path {name}"),
            Command::GoHome => write!(f, "go_home"),
            Command::FlyPath(name) => write!(f, "fly_path {name}"),
            Command::FlyAll => write!(f, "fly_all"),
            Command::StopFlying => write!(f, "stop_flying"),
            Command::WipeAll => write!(f, "wipe_all"),
            Command::Up => write!(f, "up"),
            Command::Down => write!(f, "down"),
            Command::Set => write!(f, "set"),
            Command::Back => write!(f, "back"),
            Command::ClearWarning => write!(f, "clear_warning"),
        }
    }
}
