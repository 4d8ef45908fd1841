pub mod error;
pub mod model_manager;
pub mod secret_model;

use crate::input::Input;

/// State owned by the model manager and updated once per tick.
pub trait Model {
    fn update(&mut self, inputs: impl Iterator<Item = Input>);
}
