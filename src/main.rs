//! countries-tui - A terminal dashboard for REST Countries data
//!
//! Loads the dataset once in the background, then offers search, filters,
//! pagination, a flag gallery, a comparison view and statistics.

mod action;
mod app;
mod component;
mod components;
mod config;
mod controller;
mod error;
mod logging;
mod model;
mod projection;
mod services;
mod tui;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::tui::Tui;
use anyhow::Result;
use crossterm::event::Event;
use tracing::{error, info};

fn main() -> Result<()> {
    let config = Config::load_or_init();

    if let Some(log_path) = Config::log_path() {
        if let Err(e) = logging::init_logging(&log_path, &config.log_level) {
            eprintln!("Logging disabled: {}", e);
        }
    }
    info!(version = env!("CARGO_PKG_VERSION"), "starting countries-tui");

    // Setup terminal
    let mut tui = Tui::new(config.tick_rate())?;
    tui.enter()?;

    let mut app = App::new(&config);
    app.init()?;

    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    if let Err(err) = result {
        error!(error = ?err, "exiting after error");
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    info!("bye");
    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        let mut draw_result = Ok(());
        tui.draw(|frame| {
            draw_result = app.draw(frame, frame.area());
        })?;
        draw_result?;

        let action = match tui.next_event()? {
            Some(Event::Key(key)) => app.handle_key_event(key)?,
            Some(Event::Resize(w, h)) => Some(Action::Resize(w, h)),
            Some(_) => None,
            // No event within the tick rate
            None => Some(Action::Tick),
        };

        // Action might produce a follow-up action
        let mut current_action = action;
        while let Some(a) = current_action {
            current_action = app.update(a)?;
        }
    }

    Ok(())
}
