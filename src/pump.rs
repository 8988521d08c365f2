//! Pump thread: the wall-clock side of the session's ticker.
//!
//! The session asks [`PumpTicker`] to start or stop a schedule; the pump
//! thread then posts `AppEvent::Tick(handle)` into the main event channel at
//! the requested interval. Blocks on its control channel while stopped.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use stopwatch_core::{TickHandle, Ticker};

use crate::error::AppError;
use crate::AppEvent;

#[derive(Debug, PartialEq)]
pub enum PumpOp {
    Start { handle: TickHandle, interval_ms: u64 },
    Stop { handle: TickHandle },
    Quit,
}

pub struct PumpTicker {
    control: Sender<PumpOp>,
    next_id: u64,
}

impl PumpTicker {
    pub fn quit(&self) {
        if self.control.send(PumpOp::Quit).is_err() {
            log::warn!("pump already gone on quit");
        }
    }
}

impl Ticker for PumpTicker {
    fn schedule_every(&mut self, interval_ms: u64) -> TickHandle {
        self.next_id += 1;
        let handle = TickHandle::new(self.next_id);
        if self.control.send(PumpOp::Start { handle, interval_ms }).is_err() {
            log::error!("pump not running, {:?} will never fire", handle);
        }
        handle
    }

    fn cancel(&mut self, handle: TickHandle) {
        self.control.send(PumpOp::Stop { handle }).ok();
    }
}

pub fn spawn_pump(events: Sender<AppEvent>) -> Result<(PumpTicker, JoinHandle<()>), AppError> {
    let (control_tx, control_rx) = unbounded();
    let join = thread::Builder::new()
        .name("pump".into())
        .spawn(move || pump_thread(control_rx, events))?;
    Ok((
        PumpTicker {
            control: control_tx,
            next_id: 0,
        },
        join,
    ))
}

struct Schedule {
    handle: TickHandle,
    interval: Duration,
    next_fire: Instant,
}

fn pump_thread(control: Receiver<PumpOp>, events: Sender<AppEvent>) {
    let mut schedule: Option<Schedule> = None;

    loop {
        let op = match &schedule {
            Some(s) => match control.recv_deadline(s.next_fire) {
                Ok(op) => Some(op),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            },
            None => match control.recv() {
                Ok(op) => Some(op),
                Err(_) => break,
            },
        };

        match op {
            Some(PumpOp::Start { handle, interval_ms }) => {
                let interval = Duration::from_millis(interval_ms.max(1));
                schedule = Some(Schedule {
                    handle,
                    interval,
                    next_fire: Instant::now() + interval,
                });
            }
            Some(PumpOp::Stop { handle }) => {
                if schedule.as_ref().map(|s| s.handle) == Some(handle) {
                    schedule = None;
                }
            }
            Some(PumpOp::Quit) => break,
            None => {
                if let Some(s) = schedule.as_mut() {
                    if events.send(AppEvent::Tick(s.handle)).is_err() {
                        break;
                    }
                    // Keep cadence, but don't burst to catch up after a stall
                    s.next_fire += s.interval;
                    let now = Instant::now();
                    if s.next_fire < now {
                        s.next_fire = now + s.interval;
                    }
                }
            }
        }
    }
    log::debug!("pump thread exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn next_tick(rx: &Receiver<AppEvent>) -> Option<TickHandle> {
        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(AppEvent::Tick(h)) => Some(h),
            _ => None,
        }
    }

    #[test]
    fn test_ticks_carry_scheduled_handle() {
        let (tx, rx) = unbounded();
        let (mut ticker, join) = spawn_pump(tx).unwrap();

        let handle = ticker.schedule_every(5);
        for _ in 0..3 {
            assert_eq!(next_tick(&rx), Some(handle));
        }

        ticker.cancel(handle);
        ticker.quit();
        join.join().unwrap();
    }

    #[test]
    fn test_cancel_goes_quiet() {
        let (tx, rx) = unbounded();
        let (mut ticker, join) = spawn_pump(tx).unwrap();

        let handle = ticker.schedule_every(2);
        assert_eq!(next_tick(&rx), Some(handle));
        ticker.cancel(handle);

        // Let anything already in flight land, then expect silence
        thread::sleep(Duration::from_millis(50));
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());

        ticker.quit();
        join.join().unwrap();
    }

    #[test]
    fn test_restart_switches_handle() {
        let (tx, rx) = unbounded();
        let (mut ticker, join) = spawn_pump(tx).unwrap();

        let first = ticker.schedule_every(3);
        ticker.cancel(first);
        let second = ticker.schedule_every(3);
        assert_ne!(first, second);

        // Only the second schedule survives
        let mut seen_second = false;
        for _ in 0..5 {
            if let Some(h) = next_tick(&rx) {
                if h == second {
                    seen_second = true;
                }
            }
        }
        assert!(seen_second);

        ticker.quit();
        join.join().unwrap();
    }

    #[test]
    fn test_exits_when_ticker_dropped() {
        let (tx, _rx) = unbounded();
        let (ticker, join) = spawn_pump(tx).unwrap();
        drop(ticker);
        join.join().unwrap();
    }
}
