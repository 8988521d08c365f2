mod config;
mod error;
mod input;
mod pump;
mod ui;

use std::io::Write;

use clap::Parser;
use stopwatch_core::{Clock, StopwatchSession, SystemClock, TickHandle};

use crate::config::Args;
use crate::error::AppError;
use crate::input::Command;
use crate::pump::PumpTicker;

#[derive(Debug)]
pub enum AppEvent {
    Key(char),
    Tick(TickHandle),
    InputClosed,
}

struct StopwatchApp {
    session: StopwatchSession<SystemClock, PumpTicker>,
    help_visible: bool,
    refresh_ms: u64,
    last_status_ms: u64,
}

impl StopwatchApp {
    fn new(session: StopwatchSession<SystemClock, PumpTicker>, refresh_ms: u64) -> Self {
        Self {
            session,
            help_visible: false,
            refresh_ms,
            last_status_ms: 0,
        }
    }

    fn redraw(&self) -> Result<(), AppError> {
        let mut out = std::io::stdout().lock();
        if self.help_visible {
            writeln!(out, "{}{}", ui::CLEAR_SCREEN, ui::HELP_TEXT)?;
        } else {
            writeln!(out, "{}{}", ui::CLEAR_SCREEN, ui::render_stopwatch(&self.session))?;
        }
        out.flush()?;
        Ok(())
    }

    /// Returns false when the app should exit.
    fn handle_command(&mut self, command: Command) -> Result<bool, AppError> {
        if command == Command::Quit {
            return Ok(false);
        }
        // If help screen is showing, any key dismisses it
        if self.help_visible {
            self.help_visible = false;
            self.redraw()?;
            return Ok(true);
        }
        match command {
            Command::ToggleStartPause => self.session.toggle_start_pause(),
            Command::Lap => {
                if self.session.record_lap().is_none() {
                    log::debug!("lap ignored in {:?}", self.session.state());
                }
            }
            Command::Reset => self.session.reset(),
            Command::Help => self.help_visible = true,
            Command::Quit => {}
        }
        self.redraw()?;
        Ok(true)
    }

    fn handle_tick(&mut self, handle: TickHandle) -> Result<(), AppError> {
        self.session.on_tick(handle);
        if self.help_visible || !self.session.is_running() {
            return Ok(());
        }
        let now = self.session.clock().now_ms();
        if now.saturating_sub(self.last_status_ms) >= self.refresh_ms {
            self.last_status_ms = now;
            let mut out = std::io::stdout().lock();
            write!(out, "\r{}", ui::render_status(&self.session))?;
            out.flush()?;
        }
        Ok(())
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level.into())
        .init();
    log::info!("stopwatch sampling every {} ms", args.interval_ms);

    let (event_tx, event_rx) = crossbeam_channel::unbounded();
    let (ticker, pump) = pump::spawn_pump(event_tx.clone())?;
    // Not joined: it stays blocked on stdin until the process exits
    input::spawn_input(event_tx)?;

    let session = StopwatchSession::with_interval(SystemClock::new(), ticker, args.interval_ms);
    let mut app = StopwatchApp::new(session, args.refresh_ms);
    app.redraw()?;

    for event in event_rx.iter() {
        match event {
            AppEvent::Key(key) => {
                if let Some(command) = Command::from_key(key) {
                    if !app.handle_command(command)? {
                        break;
                    }
                }
            }
            AppEvent::Tick(handle) => app.handle_tick(handle)?,
            AppEvent::InputClosed => break,
        }
    }

    // Clean up
    app.session.reset();
    app.session.ticker().quit();
    drop(app);
    pump.join().map_err(|_| AppError::PumpPanicked)?;
    println!();
    Ok(())
}
