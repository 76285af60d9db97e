use crate::hardware::{ActuatorSettings, FlightMode};
use crate::persistence::decode_point;
use crate::util::Point;
use crate::warn;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct PilotConfig {
    /// File holding the persisted paths and home point.
    pub store_path: PathBuf,
    /// File the rendered menu is written to.
    pub lcd_path: PathBuf,
    pub tick: Duration,
    pub actuator: ActuatorSettings,
    /// Whether a vehicle actuator is attached at all.
    pub with_actuator: bool,
    /// Where the simulated vehicle starts.
    pub start_pos: Point,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("./custom_data.txt"),
            lcd_path: PathBuf::from("./lcd.txt"),
            tick: Duration::from_millis(166),
            actuator: ActuatorSettings::default(),
            with_actuator: true,
            start_pos: Point::zero(),
        }
    }
}

impl PilotConfig {
    pub fn from_env() -> Self { Self::from_lookup(|key| std::env::var(key).ok()) }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Unset variables take their default, malformed ones too after a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where F: Fn(&str) -> Option<String> {
        let def = Self::default();
        let parsed = |key: &str, default| parse_or(key, lookup(key), default, |v| v.parse().ok());

        let tick_ms = parse_or("AIP_TICK_MS", lookup("AIP_TICK_MS"), 166u64, |v| {
            v.parse().ok().filter(|ms| *ms > 0)
        });
        let speed_limit = parse_or(
            "AIP_SPEED_LIMIT",
            lookup("AIP_SPEED_LIMIT"),
            def.actuator.speed_limit,
            |v| v.parse::<f64>().ok().filter(|s| s.is_finite() && *s >= 0.0),
        );
        let flight_mode = parse_or(
            "AIP_FLIGHT_MODE",
            lookup("AIP_FLIGHT_MODE"),
            def.actuator.flight_mode,
            |v| FlightMode::from_str(v).ok(),
        );
        let with_actuator = parse_or("AIP_ACTUATOR", lookup("AIP_ACTUATOR"), true, |v| {
            match v.to_ascii_lowercase().as_str() {
                "simulated" => Some(true),
                "none" => Some(false),
                _ => None,
            }
        });
        let start_pos = parse_or("AIP_START_POS", lookup("AIP_START_POS"), def.start_pos, |v| {
            decode_point(v).ok()
        });

        Self {
            store_path: lookup("AIP_STORE_PATH").map_or(def.store_path, PathBuf::from),
            lcd_path: lookup("AIP_LCD_PATH").map_or(def.lcd_path, PathBuf::from),
            tick: Duration::from_millis(tick_ms),
            actuator: ActuatorSettings {
                speed_limit,
                collision_avoidance: parsed(
                    "AIP_COLLISION_AVOIDANCE",
                    def.actuator.collision_avoidance,
                ),
                docking_mode: parsed("AIP_DOCKING_MODE", def.actuator.docking_mode),
                flight_mode,
            },
            with_actuator,
            start_pos,
        }
    }
}

fn parse_or<T, P>(key: &str, raw: Option<String>, default: T, parse: P) -> T
where P: FnOnce(&str) -> Option<T> {
    let Some(raw) = raw else { return default };
    parse(raw.trim()).unwrap_or_else(|| {
        warn!("Ignoring malformed {key}='{raw}', using the default.");
        default
    })
}

#[cfg(test)]
mod tests {
    use super::PilotConfig;
    use crate::hardware::FlightMode;
    use crate::util::Point;
    use std::collections::HashMap;
    use std::time::Duration;

    fn config_from(vars: &[(&str, &str)]) -> PilotConfig {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        PilotConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), PilotConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = config_from(&[
            ("AIP_STORE_PATH", "/tmp/store.txt"),
            ("AIP_TICK_MS", "50"),
            ("AIP_SPEED_LIMIT", "12.5"),
            ("AIP_DOCKING_MODE", "true"),
            ("AIP_FLIGHT_MODE", "patrol"),
            ("AIP_ACTUATOR", "none"),
            ("AIP_START_POS", "1, 2, 3"),
        ]);
        assert_eq!(cfg.store_path.to_str(), Some("/tmp/store.txt"));
        assert_eq!(cfg.tick, Duration::from_millis(50));
        assert!((cfg.actuator.speed_limit - 12.5).abs() < f64::EPSILON);
        assert!(cfg.actuator.docking_mode);
        assert_eq!(cfg.actuator.flight_mode, FlightMode::Patrol);
        assert!(!cfg.with_actuator);
        assert_eq!(cfg.start_pos, Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let cfg = config_from(&[
            ("AIP_TICK_MS", "0"),
            ("AIP_SPEED_LIMIT", "fast"),
            ("AIP_COLLISION_AVOIDANCE", "maybe"),
            ("AIP_FLIGHT_MODE", "Orbit"),
            ("AIP_START_POS", "1,2"),
        ]);
        assert_eq!(cfg, PilotConfig::default());
    }
}
