//! Lap recording and best/worst statistics.

/// One recorded split. Immutable once created.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Lap {
    pub id: u32,
    /// Elapsed time on the stopwatch when the lap was taken.
    pub duration_ms: u64,
    /// Clock reading at the moment of recording.
    pub recorded_at_ms: u64,
}

/// Holds laps in recording order and hands out sequential ids from 1.
pub struct LapRecorder {
    laps: Vec<Lap>,
    next_id: u32,
}

impl LapRecorder {
    pub fn new() -> Self {
        Self {
            laps: Vec::new(),
            next_id: 1,
        }
    }

    pub fn record(&mut self, duration_ms: u64, recorded_at_ms: u64) -> Lap {
        let lap = Lap {
            id: self.next_id,
            duration_ms,
            recorded_at_ms,
        };
        self.next_id += 1;
        self.laps.push(lap);
        lap
    }

    /// Laps newest first.
    pub fn newest_first(&self) -> impl ExactSizeIterator<Item = &Lap> + DoubleEndedIterator {
        self.laps.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.laps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laps.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Drop every lap and restart numbering at 1.
    pub fn clear(&mut self) {
        self.laps.clear();
        self.next_id = 1;
    }
}

impl Default for LapRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BestWorst {
    pub best: Option<Lap>,
    pub worst: Option<Lap>,
    lap_count: usize,
}

impl BestWorst {
    pub fn is_best(&self, lap: &Lap) -> bool {
        self.best.map_or(false, |b| b.id == lap.id)
    }

    /// A lone lap is never flagged as worst.
    pub fn is_worst(&self, lap: &Lap) -> bool {
        self.lap_count > 1 && self.worst.map_or(false, |w| w.id == lap.id)
    }

    pub fn lap_count(&self) -> usize {
        self.lap_count
    }
}

/// Shortest and longest lap of `laps`.
///
/// Ties go to the first lap encountered in iteration order. Sessions pass
/// their laps newest first, so among equal durations the most recent lap
/// wins.
pub fn best_worst<'a, I>(laps: I) -> BestWorst
where
    I: IntoIterator<Item = &'a Lap>,
{
    let mut result = BestWorst::default();
    for lap in laps {
        result.lap_count += 1;
        match result.best {
            Some(b) if b.duration_ms <= lap.duration_ms => {}
            _ => result.best = Some(*lap),
        }
        match result.worst {
            Some(w) if w.duration_ms >= lap.duration_ms => {}
            _ => result.worst = Some(*lap),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder_with(durations: &[u64]) -> LapRecorder {
        let mut r = LapRecorder::new();
        for (i, d) in durations.iter().enumerate() {
            r.record(*d, 1_000 * i as u64);
        }
        r
    }

    #[test]
    fn test_sequential_ids_newest_first() {
        let r = recorder_with(&[100, 200, 300]);
        let ids: Vec<u32> = r.newest_first().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(r.next_id(), 4);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_clear_restarts_ids() {
        let mut r = recorder_with(&[100, 200]);
        r.clear();
        assert!(r.is_empty());
        assert_eq!(r.record(50, 0).id, 1);
    }

    #[test]
    fn test_best_worst_empty() {
        let r = LapRecorder::new();
        let bw = best_worst(r.newest_first());
        assert_eq!(bw.best, None);
        assert_eq!(bw.worst, None);
        assert_eq!(bw.lap_count(), 0);
    }

    #[test]
    fn test_best_worst_basic() {
        let r = recorder_with(&[500, 1200, 300]);
        let bw = best_worst(r.newest_first());
        assert_eq!(bw.best.map(|l| l.duration_ms), Some(300));
        assert_eq!(bw.worst.map(|l| l.duration_ms), Some(1200));
        assert_eq!(bw.best.map(|l| l.id), Some(3));
        assert_eq!(bw.worst.map(|l| l.id), Some(2));
    }

    #[test]
    fn test_single_lap_not_flagged_worst() {
        let r = recorder_with(&[700]);
        let bw = best_worst(r.newest_first());
        let lap = *r.newest_first().next().unwrap();
        assert_eq!(bw.best, Some(lap));
        assert_eq!(bw.worst, Some(lap));
        assert!(bw.is_best(&lap));
        assert!(!bw.is_worst(&lap));
    }

    #[test]
    fn test_ties_go_to_first_encountered() {
        let r = recorder_with(&[400, 900, 400, 900]);
        let bw = best_worst(r.newest_first());
        // Newest first: ids 4 (900), 3 (400), 2 (900), 1 (400)
        assert_eq!(bw.best.map(|l| l.id), Some(3));
        assert_eq!(bw.worst.map(|l| l.id), Some(4));

        // Same data, same answer
        assert_eq!(best_worst(r.newest_first()), bw);
    }

    #[test]
    fn test_all_equal_laps_carry_both_flags() {
        let r = recorder_with(&[250, 250]);
        let bw = best_worst(r.newest_first());
        let newest = *r.newest_first().next().unwrap();
        assert!(bw.is_best(&newest));
        assert!(bw.is_worst(&newest));
    }
}
