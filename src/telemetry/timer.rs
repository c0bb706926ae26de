use std::time::{Duration, Instant};

use log::{info, trace};

use super::RunningStat;

/// Elapsed time as the harness reports it: whole microseconds, in ms.
fn as_millis(elapsed: Duration) -> f32 {
    elapsed.as_micros() as f32 / 1000.0
}

/// Times the scope it lives in and folds the sample into `stat` on drop.
pub struct AccuTimer<'a> {
    start: Instant,
    stat: &'a mut RunningStat,
}

impl<'a> AccuTimer<'a> {
    pub fn new(stat: &'a mut RunningStat) -> Self {
        Self {
            start: Instant::now(),
            stat,
        }
    }
}

impl Drop for AccuTimer<'_> {
    fn drop(&mut self) {
        let elapsed = as_millis(self.start.elapsed());
        self.stat.record(elapsed);
        trace!("{} took {}ms", self.stat.name, elapsed);
    }
}

/// One-shot timer. Logs the elapsed time when finished or dropped,
/// never accumulates.
pub struct Timer {
    name: &'static str,
    start: Option<Instant>,
}

impl Timer {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Some(Instant::now()),
        }
    }

    /// Stops the timer and returns the elapsed milliseconds.
    pub fn finish(mut self) -> f32 {
        self.report().unwrap_or_default()
    }

    fn report(&mut self) -> Option<f32> {
        let start = self.start.take()?;
        let elapsed = as_millis(start.elapsed());
        info!("  {} took {}ms", self.name, elapsed);
        Some(elapsed)
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        self.report();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accu_timer_records_on_drop() {
        let mut stat = RunningStat::new("display-read");
        {
            let _t = AccuTimer::new(&mut stat);
        }
        {
            let _t = AccuTimer::new(&mut stat);
        }
        assert_eq!(stat.sample_count, 2);
        assert!(stat.average_ms >= 0.0);
    }

    #[test]
    fn test_one_shot_timer_measures_sleep() {
        let t = Timer::new("sleep");
        std::thread::sleep(Duration::from_millis(2));
        assert!(t.finish() >= 2.0);
    }

    #[test]
    fn test_millis_conversion_truncates_to_micros() {
        assert_eq!(as_millis(Duration::from_nanos(1_500_999)), 1.5);
    }
}
