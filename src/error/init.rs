use super::config::ConfigError;
use super::gesture::GestureError;
use super::log_init::LogInitError;
use settings_path::FindPathError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use winit::error::OsError;

#[derive(Debug)]
pub enum InitError {
    Path(FindPathError),
    Log(LogInitError),
    Os(OsError),
    Config(ConfigError),
    Gesture(GestureError),
}

impl Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::Path(e) => Some(e),
            InitError::Log(e) => Some(e),
            InitError::Os(e) => Some(e),
            InitError::Config(e) => Some(e),
            InitError::Gesture(e) => Some(e),
        }
    }
}

impl Display for InitError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            InitError::Path(e) => write!(f, "Can't find settings path: {}", e),
            InitError::Log(e) => write!(f, "Can't initialize logger: {}", e),
            InitError::Os(e) => write!(f, "Can't create window: {}", e),
            InitError::Config(e) => write!(f, "Bad configuration: {}", e),
            InitError::Gesture(e) => Display::fmt(e, f),
        }
    }
}

impl From<LogInitError> for InitError {
    fn from(e: LogInitError) -> Self {
        Self::Log(e)
    }
}

impl From<FindPathError> for InitError {
    fn from(e: FindPathError) -> Self {
        Self::Path(e)
    }
}

impl From<OsError> for InitError {
    fn from(e: OsError) -> Self {
        Self::Os(e)
    }
}

impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GestureError> for InitError {
    fn from(e: GestureError) -> Self {
        Self::Gesture(e)
    }
}
