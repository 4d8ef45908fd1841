mod config;
mod error;
mod gesture;
mod input;
mod model;
mod overlay;
mod presenter;
mod utils;

use winit::dpi::PhysicalSize;
use winit::event_loop::{ControlFlow, EventLoop, EventLoopProxy};
use winit::window::{Window, WindowBuilder};

use settings_path::*;
use slog::{error, info, o, trace, warn, Logger};
use sloggers::{file::FileLoggerBuilder, types::TimeZone, Build};
use std::path::PathBuf;

use error::init::InitError;
use error::log_init::LogInitError;
use winit::error::OsError;

use crate::config::AppConfig;
use crate::input::Input;
use crate::model::model_manager::{Command, ModelManager, Notification};
use crate::model::secret_model::SecretModel;
use crate::presenter::Presenter;
use crate::utils::show_error_message;
use std::convert::TryInto;
use std::sync::mpsc::{Receiver, Sender};
use winit::event::{Event, WindowEvent};

#[derive(Debug, Clone, Copy)]
enum UserEvent {
    SecretVisible(bool),
}

struct App {
    config: AppConfig,
    logger: Logger,
    event_loop: EventLoop<UserEvent>,
    window: Window,
    input_tx: Sender<Input>,
    commands_tx: Sender<Command>,
    notifications_rx: Receiver<Notification>,
}

fn main() {
    let app = init().unwrap_or_else(|e| {
        let message = format!("Initialization error occurred: {}", e);
        show_error_message("Initialization error", message.as_str());
        eprintln!("{}", message);
        std::process::exit(1);
    });
    let App {
        config,
        logger,
        event_loop,
        window,
        input_tx,
        commands_tx,
        notifications_rx,
    } = app;

    info!(logger, "Initialization done");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        for Notification::Error(e) in notifications_rx.try_iter() {
            error!(logger, "Model manager failed: {}", e);
            if e.is_recoverable() {
                info!(logger, "Restarting model manager");
                commands_tx.send(Command::Run).unwrap_or_else(|e| {
                    warn!(logger, "Can't restart model manager: {}", e);
                });
                continue;
            }

            window.set_title(config.title.as_str());
            let message = format!("Model manager stopped: {}", e);
            show_error_message("Model manager error", message.as_str());
            commands_tx.send(Command::Exit).unwrap_or_else(|e| {
                warn!(logger, "Model manager already gone: {}", e);
            });
            *control_flow = ControlFlow::Exit;
            return;
        }

        if let Ok(input) = (&event).try_into() {
            input_tx.send(input).unwrap_or_else(|e| {
                warn!(logger, "Can't send input event, because: {}", e);
            });
            return;
        }

        match event {
            Event::UserEvent(UserEvent::SecretVisible(visible)) => {
                let title = if visible {
                    config.secret_banner.as_str()
                } else {
                    config.title.as_str()
                };
                window.set_title(title);
            }
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(logger, "Exiting...");
                commands_tx.send(Command::Exit).unwrap_or_else(|e| {
                    warn!(logger, "Model manager already gone: {}", e);
                });
                *control_flow = ControlFlow::Exit;
            }
            _ => {}
        }
    });
}

/// Basis structures initialization
fn init() -> Result<App, InitError> {
    let config = AppConfig::from_env()?;

    let mut save_path = default_settings_path()?;
    save_path.push(&config.app_name);

    // Init logger
    let logger = init_logger(save_path, &config)?;
    info!(logger, "=============== START NEW SESSION ===============");
    trace!(logger, "Logger initilized");

    // Init event loop
    let event_loop = EventLoop::with_user_event();
    trace!(logger, "Event loop initialized");

    // Init window
    let window = init_window(&event_loop, &config)?;
    trace!(logger, "Window initialized");

    let model = SecretModel::new(
        config.gesture.clone(),
        config.secret_duration,
        logger.new(o!("component" => "model")),
    )?;
    let (model_manager, input_tx, commands_tx, notifications_rx, model_rx) =
        ModelManager::new(model, config.tick, logger.new(o!("component" => "manager")));
    std::thread::spawn(|| model_manager.run());

    let presenter = init_presenter(
        model_rx,
        event_loop.create_proxy(),
        logger.new(o!("component" => "presenter")),
    );
    std::thread::spawn(|| presenter.run());

    commands_tx.send(Command::Run).unwrap_or_else(|e| {
        warn!(logger, "Can't start model manager: {}", e);
    });

    Ok(App {
        config,
        logger,
        event_loop,
        window,
        input_tx,
        commands_tx,
        notifications_rx,
    })
}

fn init_presenter(
    model_rx: Receiver<std::sync::Arc<SecretModel>>,
    proxy: EventLoopProxy<UserEvent>,
    logger: Logger,
) -> Presenter<impl FnMut(bool)> {
    let proxy_logger = logger.clone();
    let on_change = move |visible: bool| {
        if proxy.send_event(UserEvent::SecretVisible(visible)).is_err() {
            warn!(proxy_logger, "Event loop closed, can't show secret");
        }
    };
    Presenter::new(model_rx, on_change, logger)
}

/// Window initialization
fn init_window(event_loop: &EventLoop<UserEvent>, config: &AppConfig) -> Result<Window, OsError> {
    let window_builder = WindowBuilder::default()
        .with_title(config.title.as_str())
        .with_inner_size(PhysicalSize::new(800, 600));
    let window = window_builder.build(event_loop)?;
    Ok(window)
}

/// Logger initialization
fn init_logger(save_path: PathBuf, config: &AppConfig) -> Result<Logger, LogInitError> {
    let log_dir = save_path.join("logs");
    let log_path = log_dir.join("log");
    std::fs::create_dir_all(&log_dir)?;
    let logger = FileLoggerBuilder::new(log_path)
        .timezone(TimeZone::Local)
        .rotate_size(config.log_rotate_size)
        .level(config.log_level.clone())
        .build()?;
    Ok(logger)
}
