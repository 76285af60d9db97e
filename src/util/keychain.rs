use crate::config::PilotConfig;
use crate::error::PilotError;
use crate::hardware::{
    ActuatorSettings, ConfigStore, ConsoleEcho, FileConfigStore, FileDisplay, SimulatedActuator,
    TextSurface, VehicleActuator,
};
use crate::{info, warn};

/// The collaborators the pilot talks to, handed to the dispatcher as one context.
///
/// # Fields
/// - `actuator`: The vehicle actuator, `None` if it was not found at startup.
/// - `store`: The persisted configuration store.
/// - `displays`: The display panels every frame is written to.
/// - `echo`: The diagnostic echo channel.
pub struct Keychain {
    actuator: Option<Box<dyn VehicleActuator>>,
    store: Box<dyn ConfigStore>,
    displays: Vec<Box<dyn TextSurface>>,
    echo: Box<dyn TextSurface>,
}

impl Keychain {
    /// Assembles a keychain and applies the startup settings to the actuator.
    pub fn new(
        mut actuator: Option<Box<dyn VehicleActuator>>,
        settings: &ActuatorSettings,
        store: Box<dyn ConfigStore>,
        displays: Vec<Box<dyn TextSurface>>,
        echo: Box<dyn TextSurface>,
    ) -> Self {
        match actuator.as_deref_mut() {
            Some(act) => act.configure(settings),
            None => warn!("No vehicle actuator attached, flight commands are disabled."),
        }
        if displays.is_empty() {
            warn!("No display panel attached, only echoing.");
        }
        Self { actuator, store, displays, echo }
    }

    /// The file-backed collaborators and simulated vehicle the binary runs with.
    pub fn from_config(config: &PilotConfig) -> Self {
        let actuator: Option<Box<dyn VehicleActuator>> = if config.with_actuator {
            info!("Simulated vehicle starting at {}.", config.start_pos);
            Some(Box::new(SimulatedActuator::new(config.start_pos)))
        } else {
            None
        };
        Self::new(
            actuator,
            &config.actuator,
            Box::new(FileConfigStore::new(config.store_path.clone())),
            vec![Box::new(FileDisplay::new(config.lcd_path.clone())) as Box<dyn TextSurface>],
            Box::new(ConsoleEcho::default()),
        )
    }

    pub fn has_actuator(&self) -> bool { self.actuator.is_some() }

    /// # Errors
    /// [`PilotError::ActuatorUnavailable`] if no actuator was found at startup.
    pub fn actuator(&mut self) -> Result<&mut (dyn VehicleActuator + 'static), PilotError> {
        self.actuator.as_deref_mut().ok_or(PilotError::ActuatorUnavailable)
    }

    pub fn store(&self) -> &dyn ConfigStore { self.store.as_ref() }
    pub fn store_mut(&mut self) -> &mut dyn ConfigStore { self.store.as_mut() }

    /// Splits out the actuator and the store for operations that need both.
    ///
    /// # Errors
    /// [`PilotError::ActuatorUnavailable`] if no actuator was found at startup.
    pub fn actuator_and_store(
        &mut self,
    ) -> Result<(&mut (dyn VehicleActuator + 'static), &mut (dyn ConfigStore + 'static)), PilotError>
    {
        let act = self.actuator.as_deref_mut().ok_or(PilotError::ActuatorUnavailable)?;
        Ok((act, self.store.as_mut()))
    }

    /// Writes a frame to every display panel and the echo channel.
    pub fn publish(&mut self, frame: &str) {
        for display in &mut self.displays {
            display.write_text(frame);
        }
        self.echo.write_text(frame);
    }
}
