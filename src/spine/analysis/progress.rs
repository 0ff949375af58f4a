use std::sync::Mutex;

/// Caller-supplied progress callback, receiving percentages (0-100).
pub type ProgressCallback<'a> = &'a (dyn Fn(f32) + Send + Sync);

/// Forwards progress to an optional callback, never reporting a value lower
/// than one already reported.
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
    last: Mutex<f32>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new(callback: Option<ProgressCallback<'a>>) -> Self {
        Self {
            callback,
            last: Mutex::new(0.0),
        }
    }

    /// Reports `percent`, clamped to `[0, 100]` and to the last reported value.
    pub fn report(&self, percent: f32) {
        let Some(callback) = self.callback else {
            return;
        };

        let value = {
            let mut last = match self.last.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let value = percent.clamp(0.0, 100.0).max(*last);
            *last = value;
            value
        };

        callback(value);
    }

    /// Maps an engine's `[0, 1]` progress into `[start, end]` percent.
    pub fn report_scaled(&self, fraction: f32, start: f32, end: f32) {
        let fraction = fraction.clamp(0.0, 1.0);
        self.report(start + (end - start) * fraction);
    }
}
