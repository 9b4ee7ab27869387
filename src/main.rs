//! nav-drawer - terminal navigation-drawer demo
//!
//! Single screen: a top bar with a menu button, a slide-in drawer with three
//! menu items, and a text input form. Esc acts as the platform back signal;
//! an open drawer intercepts it, otherwise it exits the screen.

mod app;
mod config;
mod core;
mod frontend;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use std::path::PathBuf;
use std::time::Duration;

use crate::app::App;
use crate::config::Config;
use crate::core::{DrawerScreen, Host};
use crate::frontend::TuiFrontend;

#[derive(ClapParser)]
#[command(name = "nav-drawer")]
#[command(about = "Terminal navigation-drawer demo", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log file path
    #[arg(long, value_name = "FILE", default_value = "nav-drawer.log")]
    log_file: PathBuf,

    /// Event poll timeout in milliseconds
    #[arg(long, default_value_t = 16)]
    tick_rate: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("Failed to open log file {:?}", cli.log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let config = Config::load(cli.config.as_deref())?;
    run(config, Duration::from_millis(cli.tick_rate))
}

fn run(config: Config, tick_rate: Duration) -> Result<()> {
    // The host owns the back dispatcher; the screen must mount against it
    // before any events flow.
    let host = Host::new();
    let mut screen = DrawerScreen::new();
    screen.mount(&host)?;

    let mut frontend = TuiFrontend::new()?;
    frontend.set_poll_timeout(tick_rate);

    let mut app = App::new(&config, screen);
    tracing::info!("event loop started");

    let result = event_loop(&mut frontend, &mut app, &host);

    // Unmount before teardown so no back handler outlives the screen
    app.screen_mut().unmount();
    frontend.cleanup()?;
    result
}

fn event_loop(frontend: &mut TuiFrontend, app: &mut App, host: &Host) -> Result<()> {
    loop {
        for event in frontend.poll_events()? {
            app.handle_event(event, host);
        }
        frontend.render(|frame| app.draw(frame))?;
        if app.should_quit() {
            return Ok(());
        }
    }
}
