use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    EmptyTarget,
}

impl Error for GestureError {}

impl Display for GestureError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            GestureError::EmptyTarget => write!(f, "Gesture target sequence must not be empty"),
        }
    }
}
