use std::fmt::Write;

use stopwatch_core::{format_elapsed, format_time_of_day, Clock, StopwatchSession, StopwatchState, Ticker};

pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub const HELP_TEXT: &str = "STOPWATCH HELP\n\n\
     Enter  Start/Pause (also space or s)\n\
     l      Lap\n\
     r      Reset\n\
     h      Help\n\
     q      Quit\n\n\
     Any key closes this screen.";

fn state_label(state: StopwatchState) -> &'static str {
    match state {
        StopwatchState::Idle => "Ready",
        StopwatchState::Running => "Running",
        StopwatchState::Paused => "Paused",
    }
}

/// Whole screen: time, lap list (most recent first) and key hints.
pub fn render_stopwatch<C: Clock, T: Ticker>(session: &StopwatchSession<C, T>) -> String {
    let mut out = String::new();

    writeln!(out, "STOPWATCH").ok();
    writeln!(out).ok();
    writeln!(out, "  {}   {}", format_elapsed(session.elapsed_ms()), state_label(session.state())).ok();

    if session.lap_count() > 0 {
        let bw = session.best_worst();
        writeln!(out).ok();
        writeln!(out, "Lap Times ({})", session.lap_count()).ok();
        for lap in session.laps() {
            let mut marker = String::new();
            if bw.is_best(lap) {
                marker.push_str("  best");
            }
            if bw.is_worst(lap) {
                marker.push_str("  worst");
            }
            writeln!(
                out,
                "  #{:<3} {}  {}{}",
                lap.id,
                format_elapsed(lap.duration_ms),
                format_time_of_day(lap.recorded_at_ms),
                marker
            )
            .ok();
        }
    }

    writeln!(out).ok();
    write!(out, "Enter={}  r=reset", session.toggle_label().to_lowercase()).ok();
    if session.can_record_lap() {
        write!(out, "  l=lap").ok();
    }
    write!(out, "  h=help  q=quit").ok();
    out
}

/// Single line refreshed in place while running.
pub fn render_status<C: Clock, T: Ticker>(session: &StopwatchSession<C, T>) -> String {
    format!("  {}   {}", format_elapsed(session.elapsed_ms()), state_label(session.state()))
}
