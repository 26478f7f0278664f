//! Slotbook - weekly slot booking
//!
//! Desktop front-end for booking Wednesday and Saturday time slots.

use std::rc::Rc;

use slint::ComponentHandle;
use slotbook_core::BookingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod state;
mod viewmodel;

slint::include_modules!();

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Slotbook");

    if let Ok(backend) = std::env::var("SLINT_BACKEND") {
        tracing::info!(backend = %backend, "Slint backend override");
    }

    let app_state = Rc::new(state::AppState::new(BookingConfig::default()));

    let main_window = match MainWindow::new() {
        Ok(window) => window,
        Err(e) => {
            tracing::error!("Failed to create main window: {}", e);
            std::process::exit(1);
        }
    };

    viewmodel::setup_bindings(&main_window, app_state);

    if let Err(e) = main_window.run() {
        tracing::error!("Event loop terminated: {}", e);
        std::process::exit(1);
    }
}
