use std::time::{Duration, Instant};

/// Shows the secret for a fixed duration after each match.
#[derive(Debug, Clone)]
pub struct SecretOverlay {
    duration: Duration,
    hide_at: Option<Instant>,
}

impl SecretOverlay {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            hide_at: None,
        }
    }

    /// Arms the overlay. A pending hide is replaced by a fresh deadline.
    pub fn show(&mut self, at: Instant) {
        self.hide_at = Some(at + self.duration);
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) => now < deadline,
            None => false,
        }
    }

    /// Returns `true` if the overlay was hidden by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.hide_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SECS: Duration = Duration::from_secs(5);

    #[test]
    fn hidden_until_shown() {
        let overlay = SecretOverlay::new(FIVE_SECS);
        assert!(!overlay.is_visible(Instant::now()));
    }

    #[test]
    fn hides_after_duration() {
        let start = Instant::now();
        let mut overlay = SecretOverlay::new(FIVE_SECS);
        overlay.show(start);
        assert!(overlay.is_visible(start + Duration::from_secs(4)));
        assert!(!overlay.expire(start + Duration::from_secs(4)));
        assert!(!overlay.is_visible(start + FIVE_SECS));
        assert!(overlay.expire(start + FIVE_SECS));
        assert!(!overlay.expire(start + Duration::from_secs(6)));
    }

    #[test]
    fn show_again_restarts_deadline() {
        let start = Instant::now();
        let mut overlay = SecretOverlay::new(FIVE_SECS);
        overlay.show(start);
        overlay.show(start + Duration::from_secs(3));
        assert!(overlay.is_visible(start + Duration::from_secs(7)));
        assert!(!overlay.expire(start + Duration::from_secs(7)));
        assert!(overlay.expire(start + Duration::from_secs(8)));
    }
}
