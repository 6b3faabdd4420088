//! CLI run presenter.

use std::time::Duration;

use crate::chart::{render_degree_chart, DEFAULT_CHART_WIDTH};
use crate::interfaces::RunPresenter;
use crate::output::{format_duration, render_summary, render_table};
use crate::ui::{print_error, print_header};

use gann_core::RunResult;

/// CLI run presenter.
pub struct CliRunPresenter {
    verbose: bool,
    quiet: bool,
    color: bool,
}

impl CliRunPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, color: bool) -> Self {
        Self {
            verbose,
            quiet,
            color,
        }
    }
}

impl RunPresenter for CliRunPresenter {
    fn present_table(&self, result: &RunResult) {
        if !self.quiet {
            let p = &result.params;
            print_header(
                &format!(
                    "GANN Table: base {} factor {} levels {}",
                    p.base_value, p.factor, p.level_count
                ),
                self.color,
            );
        }
        print!("{}", render_table(result, self.color));
    }

    fn present_summary(&self, result: &RunResult, duration: Option<Duration>) {
        if self.quiet {
            return;
        }
        println!();
        print_header("Summary", self.color);
        print!("{}", render_summary(result));
        if self.verbose {
            if let Some(duration) = duration {
                println!("Computed in:     {}", format_duration(duration));
            }
        }
    }

    fn present_chart(&self, result: &RunResult) {
        if !self.quiet {
            println!();
            print_header("Degree Chart", self.color);
        }
        print!("{}", render_degree_chart(result, DEFAULT_CHART_WIDTH));
    }

    fn present_error(&self, error: &str) {
        print_error(error, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gann_core::gann_table;

    fn sample() -> RunResult {
        gann_table(3338.0, 0.11, 3, 5.0).unwrap()
    }

    #[test]
    fn presenter_modes() {
        let presenter = CliRunPresenter::new(true, false, false);
        assert!(presenter.verbose);
        assert!(!presenter.quiet);

        let presenter = CliRunPresenter::new(false, true, false);
        assert!(presenter.quiet);
    }

    #[test]
    fn present_normal() {
        let presenter = CliRunPresenter::new(false, false, false);
        let result = sample();
        presenter.present_table(&result);
        presenter.present_summary(&result, Some(Duration::from_micros(40)));
        presenter.present_chart(&result);
    }

    #[test]
    fn present_quiet_and_verbose() {
        let result = sample();
        CliRunPresenter::new(false, true, false).present_summary(&result, None);
        CliRunPresenter::new(true, false, true)
            .present_summary(&result, Some(Duration::from_millis(2)));
    }

    #[test]
    fn present_error_does_not_panic() {
        CliRunPresenter::new(false, false, false)
            .present_error("invalid input: level_count must be at least 1");
        CliRunPresenter::new(false, false, true).present_error("");
    }
}
