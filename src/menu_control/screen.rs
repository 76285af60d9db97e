use super::MenuView;
use crate::command_control::Command;
use strum_macros::{Display, EnumIter};

/// What a path picked on the selection screen is used for.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum PathIntent {
    Fly,
    Delete,
}

impl PathIntent {
    pub fn title(self) -> &'static str {
        match self {
            PathIntent::Fly => "Select Path to Fly:",
            PathIntent::Delete => "Select Path to Delete:",
        }
    }

    /// The command run on the path picked for this intent.
    pub fn command(self, name: String) -> Command {
        match self {
            PathIntent::Fly => Command::FlyPath(name),
            PathIntent::Delete => Command::DeletePath(name),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    #[default]
    Main,
    PathSelect(PathIntent),
}

/// What activating a menu row does.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MenuAction {
    Run(Command),
    Enter(Screen),
    Back,
}

/// Rows of the main screen, in display order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, EnumIter)]
pub enum MainOption {
    SaveHome,
    ToggleRecording,
    ToggleFlight,
    FlyPath,
    FlyAll,
    DeletePath,
    WipeAll,
}

impl MainOption {
    pub fn label(self, view: &MenuView) -> &'static str {
        match self {
            MainOption::SaveHome => "Save Home",
            MainOption::ToggleRecording if view.recording => "Stop Recording",
            MainOption::ToggleRecording => "Record Path",
            MainOption::ToggleFlight if view.flight.is_flying() => "Stop Flying",
            MainOption::ToggleFlight => "Go Home",
            MainOption::FlyPath => "Fly Path",
            MainOption::FlyAll => "Fly All Paths and Return Home",
            MainOption::DeletePath => "Delete Path",
            MainOption::WipeAll => "Wipe all Data",
        }
    }

    pub fn action(self, view: &MenuView) -> MenuAction {
        match self {
            MainOption::SaveHome => MenuAction::Run(Command::SaveHome),
            MainOption::ToggleRecording if view.recording => MenuAction::Run(Command::StopRecord),
            MainOption::ToggleRecording => MenuAction::Run(Command::Record),
            MainOption::ToggleFlight if view.flight.is_flying() => {
                MenuAction::Run(Command::StopFlying)
            }
            MainOption::ToggleFlight => MenuAction::Run(Command::GoHome),
            MainOption::FlyPath => MenuAction::Enter(Screen::PathSelect(PathIntent::Fly)),
            MainOption::FlyAll => MenuAction::Run(Command::FlyAll),
            MainOption::DeletePath => MenuAction::Enter(Screen::PathSelect(PathIntent::Delete)),
            MainOption::WipeAll => MenuAction::Run(Command::WipeAll),
        }
    }
}
