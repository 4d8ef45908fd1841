use crate::input::Input;
use crate::model::error::model_not_free::ModelNotFreeError;
use crate::model::error::update::UpdateError;
use crate::model::error::ModelManagerError;
use crate::model::Model;
use crate::utils;
use crate::utils::{sleep_remaining, wait_for};
use slog::{debug, error, trace, warn, Logger};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub enum Command {
    Run,
    Exit,
}

#[derive(Debug)]
pub enum Notification {
    Error(ModelManagerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Stoped,
    Exitting,
}

pub struct ModelManager<M> {
    model: Arc<M>,
    input_rx: Receiver<Input>,
    state: State,
    tick: Duration,
    commands_rx: Receiver<Command>,
    notifications_tx: Sender<Notification>,
    model_tx: Sender<Arc<M>>,
    logger: Logger,
}

impl<M: Model> ModelManager<M> {
    pub fn new(
        model: M,
        tick: Duration,
        logger: Logger,
    ) -> (
        Self,
        Sender<Input>,
        Sender<Command>,
        Receiver<Notification>,
        Receiver<Arc<M>>,
    ) {
        let (commands_tx, commands_rx) = channel();
        let (notifications_tx, notifications_rx) = channel();
        let (input_tx, input_rx) = channel();
        let (model_tx, model_rx) = channel();

        trace!(logger, "Creating model manager");
        let s = Self {
            model: Arc::new(model),
            input_rx,
            state: State::Stoped,
            tick,
            commands_rx,
            notifications_tx,
            model_tx,
            logger,
        };
        (s, input_tx, commands_tx, notifications_rx, model_rx)
    }

    fn interpret_commands(&self) -> State {
        let mut state = self.state;
        for command in self.commands_rx.try_iter() {
            trace!(self.logger, "Got command: {:?}", command);
            match command {
                Command::Run => state = State::Running,
                Command::Exit => return State::Exitting,
            }
        }
        state
    }

    fn try_get_mut_model(&mut self) -> Result<&mut M, ModelNotFreeError> {
        debug!(
            self.logger,
            "try_get_mut_model(&mut self) called. Strong reference count: {:?}",
            Arc::strong_count(&self.model)
        );
        match Arc::get_mut(&mut self.model) {
            Some(m) => Ok(m),
            None => {
                warn!(self.logger, "Arc::get_mut(...) failed",);
                Err(ModelNotFreeError::ArcGetMutFailed)
            }
        }
    }

    fn wait_for_mut_model(&mut self) -> Result<&mut M, ModelNotFreeError> {
        trace!(self.logger, "Start wait for &mut Model");
        let model = &self.model;
        let wait_result = wait_for(
            || Arc::strong_count(model) == 1,
            Duration::from_secs(2),
            Duration::from_micros(500),
        );
        if wait_result {
            trace!(self.logger, "Got &mut Model");
            return self.try_get_mut_model();
        }
        warn!(self.logger, "Wait time for &mut Model exceeded");
        Err(ModelNotFreeError::WaitTimeoutExceeded)
    }

    fn take_input_events(&mut self) -> Vec<Input> {
        self.input_rx.try_iter().collect()
    }

    fn update(&mut self) -> Result<(), UpdateError> {
        // Inputs stay queued until the model is free to take them.
        self.wait_for_mut_model()?;
        let input_events = self.take_input_events();
        trace!(self.logger, "Got {:?} input events", input_events.len());
        let model = self.try_get_mut_model()?;
        model.update(input_events.into_iter());
        trace!(self.logger, "Model updated. Sending Arc clone...");
        self.model_tx.send(self.model.clone())?;
        trace!(self.logger, "Arc clone sent");
        Ok(())
    }

    pub fn run(mut self) {
        trace!(self.logger, "Starting model manager loop");
        loop {
            self.state = self.interpret_commands();
            trace!(self.logger, "New state is: {:?}", self.state);

            match self.state {
                State::Running => {
                    let tick_start = Instant::now();
                    if let Err(e) = self.update() {
                        error!(self.logger, "Update error: {}", e);
                        trace!(self.logger, "Stop model manager loop");
                        self.state = State::Stoped;
                        self.send_error(e.into());
                        continue;
                    }
                    sleep_remaining(tick_start, self.tick);
                }
                State::Stoped => {
                    trace!(self.logger, "State::Stopped: waiting for next commands");
                    self.wait_for_next_commands();
                }
                State::Exitting => {
                    trace!(self.logger, "State::Exitting: leaving loop");
                    break;
                }
            }
        }
    }

    fn wait_for_next_commands(&mut self) {
        trace!(self.logger, "Start waiting for commands");
        match self.commands_rx.recv() {
            Ok(c) => {
                trace!(self.logger, "Command recieved: {:?}", c);
                self.state = match c {
                    Command::Run => State::Running,
                    Command::Exit => State::Exitting,
                }
            }
            Err(e) => {
                trace!(self.logger, "Command recieve error: {}", e);
                self.send_error(e.into());
                self.state = State::Exitting;
            }
        }
    }

    fn send_error(&mut self, e: ModelManagerError) {
        trace!(self.logger, "Sending error: {}", e);
        if let Err(e) = self.notifications_tx.send(Notification::Error(e)) {
            let error_message = format!("Can't send notification to main: {}", e);
            utils::show_error_message("Model manager error", error_message.as_str());
            error!(self.logger, "{}", error_message);
            self.state = State::Exitting;
        }
    }
}
