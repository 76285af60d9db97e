use super::{MainOption, MenuAction, PathIntent, Screen};
use crate::command_control::Command;
use crate::flight_control::FlightState;
use crate::log;
use crate::path_control::PathStore;
use strum::IntoEnumIterator;

/// The live state a frame is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'a> {
    pub recording: bool,
    pub flight: &'a FlightState,
    pub paths: &'a PathStore,
    pub warning: Option<&'a str>,
}

impl<'a> MenuView<'a> {
    pub fn new(paths: &'a PathStore, flight: &'a FlightState, warning: Option<&'a str>) -> Self {
        Self { recording: paths.is_recording(), flight, paths, warning }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CursorMove {
    Up,
    Down,
}

/// Screen and cursor position. Never persisted.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct MenuState {
    pub screen: Screen,
    pub cursor: usize,
    /// Rows on the current screen as of the last refresh, at least 1.
    pub option_count: usize,
}

impl MenuState {
    pub fn selecting_path(&self) -> Option<PathIntent> {
        match self.screen {
            Screen::PathSelect(intent) => Some(intent),
            Screen::Main => None,
        }
    }
}

#[derive(Debug)]
pub struct MenuController {
    state: MenuState,
}

impl Default for MenuController {
    fn default() -> Self { Self::new() }
}

impl MenuController {
    const HEADER: &'static str = "-- AIPilot --";
    const SEPARATOR: &'static str = "---------------------------";
    const RECORDING_LINE: &'static str = "Recording Path...";
    const NO_PATHS_LABEL: &'static str = "No paths recorded";

    pub fn new() -> Self {
        Self { state: MenuState { screen: Screen::Main, cursor: 0, option_count: Self::main_count() } }
    }

    pub fn state(&self) -> &MenuState { &self.state }

    fn main_count() -> usize { MainOption::iter().count() }

    /// Row count of the current screen. The path list reports its placeholder row when
    /// empty, so this is never 0.
    fn option_count(&self, view: &MenuView) -> usize {
        match self.state.screen {
            Screen::Main => Self::main_count(),
            Screen::PathSelect(_) => view.paths.len().max(1),
        }
    }

    /// Updates the row count and pulls the cursor back in range if the screen shrank.
    fn refresh(&mut self, view: &MenuView) {
        self.state.option_count = self.option_count(view);
        if self.state.cursor >= self.state.option_count {
            self.state.cursor = self.state.option_count - 1;
        }
    }

    pub fn move_cursor(&mut self, mv: CursorMove, view: &MenuView) {
        self.refresh(view);
        let count = self.state.option_count;
        self.state.cursor = match mv {
            CursorMove::Up => (self.state.cursor + count - 1) % count,
            CursorMove::Down => (self.state.cursor + 1) % count,
        };
    }

    /// Resolves the row under the cursor.
    ///
    /// # Returns
    /// The command to run, if the row maps to one. Entering or leaving a screen is
    /// handled here and yields `None`.
    pub fn activate(&mut self, view: &MenuView) -> Option<Command> {
        self.refresh(view);
        match self.action_at(self.state.cursor, view) {
            MenuAction::Run(cmd) => {
                if self.state.selecting_path().is_some() {
                    self.back();
                }
                Some(cmd)
            }
            MenuAction::Enter(screen) => {
                self.enter(screen, view);
                None
            }
            MenuAction::Back => {
                self.back();
                None
            }
        }
    }

    /// Returns to the main screen. Does nothing there.
    pub fn back(&mut self) {
        if self.state.screen != Screen::Main {
            self.state = Self::new().state;
        }
    }

    fn enter(&mut self, screen: Screen, view: &MenuView) {
        log!("Menu entering {screen:?}.");
        self.state.screen = screen;
        self.state.cursor = 0;
        self.refresh(view);
    }

    fn action_at(&self, idx: usize, view: &MenuView) -> MenuAction {
        match self.state.screen {
            Screen::Main => {
                MainOption::iter().nth(idx).map_or(MenuAction::Back, |opt| opt.action(view))
            }
            Screen::PathSelect(intent) => view
                .paths
                .paths()
                .get(idx)
                .map_or(MenuAction::Back, |p| MenuAction::Run(intent.command(p.name().to_string()))),
        }
    }

    fn labels<'v>(&self, view: &MenuView<'v>) -> Vec<&'v str> {
        match self.state.screen {
            Screen::Main => MainOption::iter().map(|opt| opt.label(view)).collect(),
            Screen::PathSelect(_) if view.paths.is_empty() => vec![Self::NO_PATHS_LABEL],
            Screen::PathSelect(_) => view.paths.names().collect(),
        }
    }

    /// Renders the full frame pushed to the display and the echo channel.
    pub fn render(&mut self, view: &MenuView) -> String {
        self.refresh(view);
        let mut frame = String::new();
        let mut line = |text: &str| {
            frame.push_str(text);
            frame.push('\n');
        };
        line(Self::HEADER);
        if let Some(warning) = view.warning {
            line(Self::SEPARATOR);
            line("Warning:");
            line(warning);
        }
        if view.recording {
            line(Self::SEPARATOR);
            line(Self::RECORDING_LINE);
        }
        line(Self::SEPARATOR);
        if let Some(intent) = self.state.selecting_path() {
            line(intent.title());
        }
        for (i, label) in self.labels(view).into_iter().enumerate() {
            let marker = if i == self.state.cursor { "> " } else { "" };
            line(&format!("{marker}[{label}]"));
        }
        line(&format!("Status: {}", view.flight));
        line(Self::SEPARATOR);
        frame
    }
}
