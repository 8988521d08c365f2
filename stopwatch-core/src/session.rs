use crate::clock::Clock;
use crate::laps::{best_worst, BestWorst, Lap, LapRecorder};
use crate::sampler::ElapsedSampler;
use crate::ticker::{TickHandle, Ticker};

pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StopwatchState {
    Idle,
    Running,
    Paused,
}

/// One stopwatch: lifecycle, elapsed time and laps.
///
/// All operations return immediately. While running, elapsed time only
/// advances when the owner of the ticker delivers a tick through
/// [`StopwatchSession::on_tick`]. At most one tick schedule is alive at any
/// time, and it is cancelled before any transition away from `Running`.
pub struct StopwatchSession<C: Clock, T: Ticker> {
    clock: C,
    ticker: T,
    interval_ms: u64,
    state: StopwatchState,
    sampler: ElapsedSampler,
    active_tick: Option<TickHandle>,
    laps: LapRecorder,
}

impl<C: Clock, T: Ticker> StopwatchSession<C, T> {
    pub fn new(clock: C, ticker: T) -> Self {
        Self::with_interval(clock, ticker, DEFAULT_SAMPLE_INTERVAL_MS)
    }

    pub fn with_interval(clock: C, ticker: T, interval_ms: u64) -> Self {
        Self {
            clock,
            ticker,
            interval_ms: interval_ms.max(1),
            state: StopwatchState::Idle,
            sampler: ElapsedSampler::new(),
            active_tick: None,
            laps: LapRecorder::new(),
        }
    }

    pub fn state(&self) -> StopwatchState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == StopwatchState::Running
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Start (or resume) when idle or paused, pause when running.
    pub fn toggle_start_pause(&mut self) {
        match self.state {
            StopwatchState::Idle | StopwatchState::Paused => self.start(),
            StopwatchState::Running => self.pause(),
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.state {
            StopwatchState::Running => "Pause",
            StopwatchState::Idle | StopwatchState::Paused => "Start",
        }
    }

    fn start(&mut self) {
        self.cancel_tick();
        let now = self.clock.now_ms();
        self.sampler.anchor(now);
        self.active_tick = Some(self.ticker.schedule_every(self.interval_ms));
        self.state = StopwatchState::Running;
        log::debug!("stopwatch started at {} with {} ms elapsed", now, self.sampler.elapsed_ms());
    }

    fn pause(&mut self) {
        self.cancel_tick();
        self.state = StopwatchState::Paused;
        log::debug!("stopwatch paused at {} ms", self.sampler.elapsed_ms());
    }

    /// Back to idle from any state: zero elapsed, no laps, ids restart at 1.
    pub fn reset(&mut self) {
        self.cancel_tick();
        self.sampler.clear();
        self.laps.clear();
        self.state = StopwatchState::Idle;
        log::debug!("stopwatch reset");
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.active_tick.take() {
            self.ticker.cancel(handle);
        }
    }

    /// Periodic re-sample. Ticks from cancelled schedules are ignored.
    pub fn on_tick(&mut self, handle: TickHandle) {
        if self.state != StopwatchState::Running || self.active_tick != Some(handle) {
            log::trace!("ignoring stale tick {:?}", handle);
            return;
        }
        self.sampler.sample(self.clock.now_ms());
    }

    /// Last sampled elapsed time.
    pub fn elapsed_ms(&self) -> u64 {
        self.sampler.elapsed_ms()
    }

    pub fn can_record_lap(&self) -> bool {
        self.is_running()
    }

    /// Record the current elapsed time as a lap. Does nothing unless running
    /// with a non-zero elapsed time.
    pub fn record_lap(&mut self) -> Option<Lap> {
        let elapsed = self.sampler.elapsed_ms();
        if !self.is_running() || elapsed == 0 {
            return None;
        }
        let lap = self.laps.record(elapsed, self.clock.now_ms());
        log::debug!("lap {} recorded at {} ms", lap.id, lap.duration_ms);
        Some(lap)
    }

    /// Recorded laps, newest first.
    pub fn laps(&self) -> impl ExactSizeIterator<Item = &Lap> + DoubleEndedIterator {
        self.laps.newest_first()
    }

    pub fn lap_count(&self) -> usize {
        self.laps.len()
    }

    pub fn best_worst(&self) -> BestWorst {
        best_worst(self.laps.newest_first())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }
}

impl<C: Clock, T: Ticker> Drop for StopwatchSession<C, T> {
    fn drop(&mut self) {
        self.cancel_tick();
    }
}
