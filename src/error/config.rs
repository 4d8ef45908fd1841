use super::gesture::GestureError;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnknownKey(String),
    BadDuration(String),
    BadLogLevel(String),
    Gesture(GestureError),
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Gesture(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConfigError::UnknownKey(name) => write!(f, "Unknown key name in gesture: {:?}", name),
            ConfigError::BadDuration(value) => {
                write!(f, "Can't parse duration in milliseconds: {:?}", value)
            }
            ConfigError::BadLogLevel(value) => write!(f, "Unknown log level: {:?}", value),
            ConfigError::Gesture(e) => Display::fmt(e, f),
        }
    }
}

impl From<GestureError> for ConfigError {
    fn from(e: GestureError) -> Self {
        Self::Gesture(e)
    }
}
