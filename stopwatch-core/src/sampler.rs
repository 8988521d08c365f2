/// Derives elapsed time from a reference start and the current clock reading.
///
/// Elapsed is always recomputed as `now - reference_start` rather than
/// accumulated tick by tick, so late or missed ticks never cause drift.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ElapsedSampler {
    // Signed: a resume early on a clock that started near zero can put the
    // reference before the clock's origin.
    reference_start_ms: i64,
    elapsed_ms: u64,
}

impl ElapsedSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the reference start so that `now - reference_start` equals the
    /// elapsed time already accumulated.
    pub fn anchor(&mut self, now_ms: u64) {
        self.reference_start_ms = now_ms as i64 - self.elapsed_ms as i64;
    }

    /// Re-sample against `now_ms` and return the new elapsed value.
    ///
    /// A clock reading behind the reference never moves elapsed backwards.
    pub fn sample(&mut self, now_ms: u64) -> u64 {
        let candidate = (now_ms as i64 - self.reference_start_ms).max(0) as u64;
        if candidate > self.elapsed_ms {
            self.elapsed_ms = candidate;
        }
        self.elapsed_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn clear(&mut self) {
        self.reference_start_ms = 0;
        self.elapsed_ms = 0;
    }
}
