use crate::model::secret_model::SecretModel;
use slog::{debug, trace, Logger};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;

/// Reports secret visibility changes seen in model snapshots.
pub struct Presenter<F> {
    model_rx: Receiver<Arc<SecretModel>>,
    on_change: F,
    shown: bool,
    logger: Logger,
}

impl<F: FnMut(bool)> Presenter<F> {
    pub fn new(model_rx: Receiver<Arc<SecretModel>>, on_change: F, logger: Logger) -> Self {
        Self {
            model_rx,
            on_change,
            shown: false,
            logger,
        }
    }

    /// Returns the new visibility if it differs from the last presented one.
    pub fn present(&mut self, model: &SecretModel, now: Instant) -> Option<bool> {
        let visible = model.secret_visible(now);
        if visible == self.shown {
            return None;
        }
        self.shown = visible;
        (self.on_change)(visible);
        Some(visible)
    }

    pub fn run(mut self) {
        trace!(self.logger, "Starting presenter loop");
        while let Ok(model) = self.model_rx.recv() {
            if let Some(visible) = self.present(&model, Instant::now()) {
                debug!(
                    self.logger,
                    "Secret visibility changed";
                    "visible" => visible,
                    "unlocks" => model.unlocks(),
                    "progress" => model.progress()
                );
            }
        }
        trace!(self.logger, "Model channel closed, presenter done");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::konami_code;
    use crate::input::{Input, InputEvent};
    use slog::{o, Discard};
    use std::sync::mpsc::channel;
    use std::time::Duration;

    fn logger() -> Logger {
        Logger::root(Discard, o!())
    }

    fn unlocked_model(at: Instant) -> SecretModel {
        let mut model = SecretModel::new(konami_code(), Duration::from_secs(5), logger()).unwrap();
        let inputs = konami_code()
            .into_iter()
            .map(|k| Input::at(at, InputEvent::pressed(k)));
        model.update_at(inputs, at);
        model
    }

    #[test]
    fn reports_only_changes() {
        let start = Instant::now();
        let (_tx, rx) = channel();
        let mut changes = Vec::new();
        let model = unlocked_model(start);
        {
            let mut presenter = Presenter::new(rx, |v| changes.push(v), logger());
            assert_eq!(presenter.present(&model, start), Some(true));
            assert_eq!(presenter.present(&model, start + Duration::from_secs(1)), None);
            assert_eq!(presenter.present(&model, start + Duration::from_secs(5)), Some(false));
        }
        assert_eq!(changes, vec![true, false]);
    }

    #[test]
    fn run_ends_when_channel_closes() {
        let (tx, rx) = channel();
        let (changes_tx, changes_rx) = channel();
        tx.send(Arc::new(unlocked_model(Instant::now()))).unwrap();
        drop(tx);

        let presenter = Presenter::new(rx, move |v| changes_tx.send(v).unwrap(), logger());
        presenter.run();
        assert_eq!(changes_rx.try_iter().collect::<Vec<_>>(), vec![true]);
    }
}
