use crate::error::config::ConfigError;
use crate::error::gesture::GestureError;
use sloggers::types::Severity;
use std::time::Duration;
use winit::event::VirtualKeyCode;

pub const GESTURE_VAR: &str = "SECRET_GESTURE";
pub const DURATION_VAR: &str = "SECRET_DURATION_MS";
pub const LOG_LEVEL_VAR: &str = "SECRET_LOG_LEVEL";

const KONAMI_CODE: &str =
    "ArrowUp ArrowUp ArrowDown ArrowDown ArrowLeft ArrowRight ArrowLeft ArrowRight KeyB KeyA";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub title: String,
    pub secret_banner: String,
    pub gesture: Vec<VirtualKeyCode>,
    pub secret_duration: Duration,
    pub log_level: Severity,
    pub log_rotate_size: u64,
    pub tick: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "SecretGesture".to_string(),
            title: "SecretGesture".to_string(),
            secret_banner: "SECRET UNLOCKED! +9999 XP BONUS".to_string(),
            gesture: konami_code(),
            secret_duration: Duration::from_secs(5),
            log_level: Severity::Trace,
            log_rotate_size: 10 * 2u64.pow(20),
            tick: Duration::from_millis(16),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds config from defaults, overridden by values `lookup` returns.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(gesture) = lookup(GESTURE_VAR) {
            config.gesture = parse_gesture(&gesture)?;
        }
        if let Some(duration) = lookup(DURATION_VAR) {
            config.secret_duration = parse_duration_ms(&duration)?;
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level = parse_severity(&level)?;
        }
        Ok(config)
    }
}

pub fn konami_code() -> Vec<VirtualKeyCode> {
    KONAMI_CODE
        .split_whitespace()
        .filter_map(|name| parse_key(name).ok())
        .collect()
}

/// Parses key names separated by whitespace or commas.
pub fn parse_gesture(value: &str) -> Result<Vec<VirtualKeyCode>, ConfigError> {
    let keys = value
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|name| !name.is_empty())
        .map(parse_key)
        .collect::<Result<Vec<_>, _>>()?;
    if keys.is_empty() {
        return Err(GestureError::EmptyTarget.into());
    }
    Ok(keys)
}

/// Accepts `ArrowUp`/`KeyB`/`Digit1` style names as well as short ones
/// (`Up`, `B`, `1`). Names resolve to layout-dependent virtual keys, not
/// physical key positions.
pub fn parse_key(name: &str) -> Result<VirtualKeyCode, ConfigError> {
    use VirtualKeyCode::*;

    let short = name
        .strip_prefix("Arrow")
        .or_else(|| name.strip_prefix("Key"))
        .or_else(|| name.strip_prefix("Digit"))
        .unwrap_or(name);

    let key = match short {
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "Enter" | "Return" => Return,
        "Space" => Space,
        "Escape" => Escape,
        "Tab" => Tab,
        "Backspace" | "Back" => Back,
        "A" => A,
        "B" => B,
        "C" => C,
        "D" => D,
        "E" => E,
        "F" => F,
        "G" => G,
        "H" => H,
        "I" => I,
        "J" => J,
        "K" => K,
        "L" => L,
        "M" => M,
        "N" => N,
        "O" => O,
        "P" => P,
        "Q" => Q,
        "R" => R,
        "S" => S,
        "T" => T,
        "U" => U,
        "V" => V,
        "W" => W,
        "X" => X,
        "Y" => Y,
        "Z" => Z,
        "0" => Key0,
        "1" => Key1,
        "2" => Key2,
        "3" => Key3,
        "4" => Key4,
        "5" => Key5,
        "6" => Key6,
        "7" => Key7,
        "8" => Key8,
        "9" => Key9,
        _ => return Err(ConfigError::UnknownKey(name.to_string())),
    };
    Ok(key)
}

fn parse_duration_ms(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::BadDuration(value.to_string()))
}

fn parse_severity(value: &str) -> Result<Severity, ConfigError> {
    value
        .trim()
        .to_ascii_lowercase()
        .parse::<Severity>()
        .map_err(|_| ConfigError::BadLogLevel(value.to_string()))
}
