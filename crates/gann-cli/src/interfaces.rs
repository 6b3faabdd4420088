//! Presentation interfaces.

use std::time::Duration;

use gann_core::RunResult;

/// Trait for presenting level runs to the user.
pub trait RunPresenter {
    /// Present the level table.
    fn present_table(&self, result: &RunResult);

    /// Present the summary panel, with the computation time when known.
    fn present_summary(&self, result: &RunResult, duration: Option<Duration>);

    /// Present the degree chart.
    fn present_chart(&self, result: &RunResult);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Presenter that discards everything.
pub struct NullPresenter;

impl RunPresenter for NullPresenter {
    fn present_table(&self, _result: &RunResult) {}
    fn present_summary(&self, _result: &RunResult, _duration: Option<Duration>) {}
    fn present_chart(&self, _result: &RunResult) {}
    fn present_error(&self, _error: &str) {}
}
