use super::Model;
use crate::error::gesture::GestureError;
use crate::gesture::GestureMatcher;
use crate::input::{Input, InputEvent};
use crate::overlay::SecretOverlay;
use slog::{debug, info, trace, Logger};
use std::time::{Duration, Instant};
use winit::event::{ElementState, VirtualKeyCode};

/// Watches key presses for the secret gesture and keeps the secret
/// visible for a while after each match.
#[derive(Debug)]
pub struct SecretModel {
    matcher: GestureMatcher<VirtualKeyCode>,
    overlay: SecretOverlay,
    unlocks: u64,
    logger: Logger,
}

impl SecretModel {
    pub fn new(
        gesture: Vec<VirtualKeyCode>,
        secret_duration: Duration,
        logger: Logger,
    ) -> Result<Self, GestureError> {
        let matcher = GestureMatcher::new(gesture)?;
        trace!(logger, "Secret model created"; "gesture_len" => matcher.target().len());
        Ok(Self {
            matcher,
            overlay: SecretOverlay::new(secret_duration),
            unlocks: 0,
            logger,
        })
    }

    pub fn update_at(&mut self, inputs: impl Iterator<Item = Input>, now: Instant) {
        for input in inputs {
            match input.event() {
                InputEvent::Keyboard {
                    key,
                    state: ElementState::Pressed,
                } => self.key_pressed(*key, input.happen_at()),
                InputEvent::Focus(false) => {
                    trace!(self.logger, "Focus lost, dropping gesture progress");
                    self.matcher.reset();
                }
                _ => {}
            }
        }

        if self.overlay.expire(now) {
            debug!(self.logger, "Secret hidden");
        }
    }

    fn key_pressed(&mut self, key: VirtualKeyCode, at: Instant) {
        if self.matcher.observe(key) {
            self.unlocks += 1;
            self.overlay.show(at);
            info!(self.logger, "Secret unlocked"; "unlocks" => self.unlocks);
        }
    }

    pub fn secret_visible(&self, now: Instant) -> bool {
        self.overlay.is_visible(now)
    }

    pub fn unlocks(&self) -> u64 {
        self.unlocks
    }

    pub fn progress(&self) -> usize {
        self.matcher.progress()
    }
}

impl Model for SecretModel {
    fn update(&mut self, inputs: impl Iterator<Item = Input>) {
        self.update_at(inputs, Instant::now())
    }
}
