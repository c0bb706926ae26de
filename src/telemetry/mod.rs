mod timer;

pub use timer::{AccuTimer, Timer};

/// Running average of elapsed times for one named operation.
///
/// The fold increments the count first and then divides by `count + 1`:
///
/// ```text
/// count   = count + 1
/// average = (count * average + elapsed) / (count + 1)
/// ```
///
/// This under-weights every new sample compared to an arithmetic mean.
/// Reported numbers are compared against earlier benchmark runs, so the
/// recurrence must stay exactly as is, including the `f32` arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunningStat {
    pub name: &'static str,
    pub sample_count: u64,
    pub average_ms: f32,
}

impl RunningStat {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            sample_count: 0,
            average_ms: 0.0,
        }
    }

    pub fn record(&mut self, elapsed_ms: f32) {
        self.sample_count += 1;
        let count = self.sample_count as f32;
        self.average_ms = (count * self.average_ms + elapsed_ms) / (count + 1.0);
    }
}
