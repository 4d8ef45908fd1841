use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelNotFreeError {
    WaitTimeoutExceeded,
    ArcGetMutFailed,
}

impl Error for ModelNotFreeError {}

impl fmt::Display for ModelNotFreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelNotFreeError::WaitTimeoutExceeded => {
                write!(f, "Model snapshot was not released by presenter in time")
            }
            ModelNotFreeError::ArcGetMutFailed => {
                write!(f, "Model was not free when model manager expect")
            }
        }
    }
}
