//! Progress reporting for long-running mesh computations.
//!
//! Sinks are observers only: [`ProgressSink::report`] has no return value, so
//! nothing a sink does can stop or fail the computation it is watching.

/// A progress update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress<'a> {
    /// Number of completed steps, starting at 1.
    pub current: usize,
    /// Total number of steps.
    pub total: usize,
    /// Label shown before a progress bar.
    pub prefix: &'a str,
    /// Label shown after a progress bar.
    pub suffix: &'a str,
    /// Width of a progress bar in characters.
    pub length: usize,
}

impl Progress<'_> {
    /// Completed fraction in `0.0..=1.0`. An empty run counts as complete.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.total
    }
}

pub trait ProgressSink {
    fn report(&mut self, progress: &Progress<'_>);
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&mut self, _progress: &Progress<'_>) {}
}

impl<F> ProgressSink for F
where
    F: FnMut(&Progress<'_>),
{
    fn report(&mut self, progress: &Progress<'_>) {
        self(progress)
    }
}
