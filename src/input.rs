use std::io::BufRead;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use crate::error::AppError;
use crate::AppEvent;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    ToggleStartPause,
    Lap,
    Reset,
    Help,
    Quit,
}

impl Command {
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '\n' | '\r' | ' ' | 's' => Some(Command::ToggleStartPause),
            'l' => Some(Command::Lap),
            'r' => Some(Command::Reset),
            'h' | '?' => Some(Command::Help),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Keys carried by one line of input. A bare Enter is itself a key.
pub fn keys_from_line(line: &str) -> Vec<char> {
    if line.trim().is_empty() && !line.contains(' ') {
        return vec!['\n'];
    }
    line.chars().map(|c| c.to_ascii_lowercase()).collect()
}

pub fn spawn_input(events: Sender<AppEvent>) -> Result<JoinHandle<()>, AppError> {
    let join = thread::Builder::new()
        .name("input".into())
        .spawn(move || input_thread(events))?;
    Ok(join)
}

fn input_thread(events: Sender<AppEvent>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("stdin read failed: {}", e);
                break;
            }
        };
        for key in keys_from_line(&line) {
            if events.send(AppEvent::Key(key)).is_err() {
                return;
            }
        }
    }
    events.send(AppEvent::InputClosed).ok();
}
