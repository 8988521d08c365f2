//! Pure stopwatch timing engine with no platform dependencies.
//! Testable on host; the front end supplies the clock and the ticker.
//!
//! Time is plain `u64` milliseconds throughout.

pub mod clock;
pub mod format;
pub mod laps;
pub mod sampler;
pub mod session;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use format::{format_elapsed, format_time_of_day, parse_elapsed};
pub use laps::{best_worst, BestWorst, Lap, LapRecorder};
pub use sampler::ElapsedSampler;
pub use session::{StopwatchSession, StopwatchState, DEFAULT_SAMPLE_INTERVAL_MS};
pub use ticker::{ManualTicker, TickHandle, Ticker};
