use std::convert::TryFrom;
use std::time::Instant;
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};

#[derive(Debug, Clone)]
pub struct Input {
    happen_at: Instant,
    event: InputEvent,
}

impl Input {
    pub fn at(happen_at: Instant, event: InputEvent) -> Self {
        Self { happen_at, event }
    }

    pub fn event(&self) -> &InputEvent {
        &self.event
    }

    pub fn happen_at(&self) -> Instant {
        self.happen_at
    }
}

impl From<InputEvent> for Input {
    fn from(event: InputEvent) -> Self {
        Self::at(Instant::now(), event)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Keyboard {
        key: VirtualKeyCode,
        state: ElementState,
    },
    Focus(bool),
}

#[cfg(test)]
impl InputEvent {
    pub fn pressed(key: VirtualKeyCode) -> Self {
        InputEvent::Keyboard {
            key,
            state: ElementState::Pressed,
        }
    }

    pub fn released(key: VirtualKeyCode) -> Self {
        InputEvent::Keyboard {
            key,
            state: ElementState::Released,
        }
    }
}

impl<T> TryFrom<&Event<'_, T>> for Input {
    type Error = ();

    fn try_from(event: &Event<T>) -> Result<Self, Self::Error> {
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(key) = input.virtual_keycode {
                        let event = InputEvent::Keyboard {
                            key,
                            state: input.state,
                        };
                        return Ok(event.into());
                    }
                    Err(())
                }
                WindowEvent::Focused(focused) => Ok(InputEvent::Focus(*focused).into()),
                _ => Err(()),
            },
            _ => Err(()),
        }
    }
}
