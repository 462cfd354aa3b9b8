use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::unbounded_channel;

use cmdhint::app::App;
use cmdhint::cli::Cli;
use cmdhint::config::{self, Config, ConfigResult};
use cmdhint::error::CmdhintError;
use cmdhint::gateway::{HttpGateway, spawn_worker};
use cmdhint::logging;

/// How long to wait for terminal input before checking for completions
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let cli = Cli::parse();

    let ConfigResult {
        mut config,
        warning,
    } = match &cli.config {
        Some(path) => ConfigResult {
            config: config::load_config_from_path(path)?,
            warning: None,
        },
        None => config::load_config(),
    };
    cli.apply_overrides(&mut config);

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Some(path) = &config.logging.file {
        logging::init_file_logger(path, &config.logging.level)?;
    }

    let mut app = App::new(&config);
    if let Some(warning) = warning {
        log::warn!("{}", warning);
        app.report_warning(&warning);
    }
    connect(&config, &mut app)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let mut terminal = ratatui::init();

    let result = execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)
        .map_err(Into::into)
        .and_then(|()| run(&mut terminal, &mut app));

    if let Err(e) = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste) {
        log::warn!("Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    result
}

/// Start the gateway worker and hand its channels to the controller
///
/// The worker thread is detached: once the app drops its request sender the
/// worker finishes whatever is in flight and exits.
fn connect(config: &Config, app: &mut App) -> Result<(), CmdhintError> {
    let gateway = HttpGateway::new(&config.server.base_url, config.server.timeout())?;

    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(gateway, request_rx, response_tx)?;

    app.controller.set_channels(request_tx, response_rx);
    log::info!("Using suggestion service at {}", config.server.base_url);
    Ok(())
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    let mut dirty = true;

    loop {
        if app.tick() {
            dirty = true;
        }

        if dirty {
            terminal.draw(|frame| app.render(frame))?;
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)? {
            app.handle_event(event::read()?);
            dirty = true;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
