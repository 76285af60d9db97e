use super::Command;
use crate::error::PilotError;
use crate::flight_control::NavigationController;
use crate::menu_control::{CursorMove, MenuController, MenuView};
use crate::path_control::PathStore;
use crate::util::Keychain;
use crate::{event, info, warn};

/// Runs commands and ticks against the pilot's state, one at a time.
///
/// This is the only place where a [`PilotError`] turns into the warning shown on the
/// display. A warning stays up until the next command, which either clears it or
/// replaces it with its own.
pub struct CommandDispatcher {
    keychain: Keychain,
    paths: PathStore,
    nav: NavigationController,
    menu: MenuController,
    warning: Option<String>,
    /// Shown whenever no other warning is up.
    persistent_warning: Option<String>,
}

impl CommandDispatcher {
    /// Loads the persisted paths and renders the first frame.
    pub fn new(keychain: Keychain) -> Self {
        let mut paths = PathStore::new();
        let warning = match paths.load(keychain.store()) {
            Ok(recovered) => recovered.last().map(ToString::to_string),
            Err(e) => {
                warn!("Could not load stored paths: {e}");
                Some(e.to_string())
            }
        };
        let persistent_warning =
            (!keychain.has_actuator()).then(|| PilotError::ActuatorUnavailable.to_string());
        let mut dispatcher = Self {
            keychain,
            paths,
            nav: NavigationController::new(),
            menu: MenuController::new(),
            warning,
            persistent_warning,
        };
        dispatcher.render();
        dispatcher
    }

    pub fn paths(&self) -> &PathStore { &self.paths }
    pub fn nav(&self) -> &NavigationController { &self.nav }
    pub fn menu(&self) -> &MenuController { &self.menu }

    /// The warning currently on the display.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref().or(self.persistent_warning.as_deref())
    }

    /// Parses and runs a raw input line. Blank lines are ignored.
    pub fn dispatch_line(&mut self, line: &str) {
        match Command::parse_line(line) {
            Ok(Some(cmd)) => self.dispatch(cmd),
            Ok(None) => {}
            Err(e) => {
                self.report(&e);
                self.render();
            }
        }
    }

    pub fn dispatch(&mut self, cmd: Command) {
        event!("Dispatching '{cmd}'.");
        self.warning = None;
        if let Err(e) = self.execute(cmd) {
            self.report(&e);
        }
        self.render();
    }

    /// Samples the recording and re-renders.
    pub fn tick(&mut self) {
        if let Ok(act) = self.keychain.actuator() {
            let pos = act.position();
            let autopilot = act.is_autopilot_enabled();
            if self.paths.record_sample(pos) {
                event!("Recorded sample {pos}.");
            }
            self.nav.observe_autopilot(autopilot);
        }
        self.render();
    }

    fn execute(&mut self, cmd: Command) -> Result<(), PilotError> {
        match cmd {
            Command::SaveHome => {
                let (act, store) = self.keychain.actuator_and_store()?;
                let pos = act.position();
                self.paths.save_home(pos, store)
            }
            Command::Record => {
                self.keychain.actuator()?;
                self.paths.begin_recording();
                Ok(())
            }
            Command::StopRecord => {
                if let Some(name) = self.paths.stop_recording(self.keychain.store_mut())? {
                    info!("Recorded {name}.");
                }
                Ok(())
            }
            Command::DeletePath(name) => {
                self.paths.delete(&name, self.keychain.store_mut())?;
                self.nav.forget_path(Some(&name));
                Ok(())
            }
            Command::GoHome => self.nav.go_home(self.keychain.actuator()?, &self.paths),
            Command::FlyPath(name) => {
                self.nav.fly_path(&name, self.keychain.actuator()?, &self.paths)
            }
            Command::FlyAll => self.nav.fly_all(self.keychain.actuator()?, &self.paths),
            Command::StopFlying => {
                self.nav.stop_flying(self.keychain.actuator()?);
                Ok(())
            }
            Command::WipeAll => {
                self.paths.wipe_all();
                self.nav.forget_path(None);
                Ok(())
            }
            Command::Up => {
                self.move_cursor(CursorMove::Up);
                Ok(())
            }
            Command::Down => {
                self.move_cursor(CursorMove::Down);
                Ok(())
            }
            Command::Set => {
                let view = MenuView::new(&self.paths, self.nav.state(), self.warning.as_deref());
                match self.menu.activate(&view) {
                    Some(next) => self.execute(next),
                    None => Ok(()),
                }
            }
            Command::Back => {
                self.menu.back();
                Ok(())
            }
            Command::ClearWarning => {
                self.warning = None;
                Ok(())
            }
        }
    }

    fn move_cursor(&mut self, mv: CursorMove) {
        let view = MenuView::new(&self.paths, self.nav.state(), self.warning.as_deref());
        self.menu.move_cursor(mv, &view);
    }

    fn report(&mut self, e: &PilotError) {
        warn!("{e}");
        self.warning = Some(e.to_string());
    }

    fn render(&mut self) {
        let warning = self.warning.as_deref().or(self.persistent_warning.as_deref());
        let view = MenuView::new(&self.paths, self.nav.state(), warning);
        let frame = self.menu.render(&view);
        self.keychain.publish(&frame);
    }
}
