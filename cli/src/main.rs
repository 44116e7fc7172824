//! Waybill CLI - binary entry point and terminal session management.
//!
//! The binary bridges [`waybill_engine`] (application state) and
//! [`waybill_tui`] (rendering), with RAII-based terminal cleanup. The event
//! loop runs on a fixed render cadence: wait for the frame tick, drain
//! pending key events, advance the app (`App::tick`), render.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::{
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use waybill_config::WaybillConfig;
use waybill_engine::App;
use waybill_tui::{UiOptions, draw, handle_key};

const FRAME_DURATION: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "waybill", version, about = "Terminal client for the Waybill shipping service")]
struct Args {
    /// Override the service base URL.
    #[arg(long)]
    base_url: Option<String>,
    /// Use ASCII-only glyphs.
    #[arg(long)]
    ascii_only: bool,
    /// Use a high-contrast color palette.
    #[arg(long)]
    high_contrast: bool,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Without a log file, prefer "no logs" over corrupting the TUI by
    // writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.waybill/logs/waybill.log
    if let Some(config_path) = WaybillConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("waybill.log"));
    }

    // Fallback for constrained environments.
    candidates.push(PathBuf::from(".waybill").join("logs").join("waybill.log"));

    candidates
}

/// Raw mode and the alternate screen, released on drop no matter how the
/// run loop exits.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(terminal) => terminal,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = match WaybillConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!("{err}");
            WaybillConfig::default()
        }
    };

    let base_url = args
        .base_url
        .or_else(|| config.base_url().map(str::to_string))
        .unwrap_or_else(|| waybill_api::DEFAULT_BASE_URL.to_string());
    let mut app = App::new(base_url, config.login_email());

    let ui = config.ui.unwrap_or_default();
    let options = UiOptions {
        ascii_only: args.ascii_only || ui.ascii_only,
        high_contrast: args.high_contrast || ui.high_contrast,
    };

    let mut session = TerminalSession::new()?;
    let result = run_app(&mut session.terminal, &mut app, options).await;
    drop(session);

    if let Err(err) = &result {
        eprintln!("Error: {err:?}");
    }
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    options: UiOptions,
) -> Result<()> {
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        frames.tick().await;

        // Drain pending input without blocking the frame.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        app.tick();
        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|frame| draw(frame, app, options))?;
    }
}
