//! Application entry point and dispatch.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use gann_cli::export::{export_csv, timestamped_filename, to_json};
use gann_cli::interfaces::{NullPresenter, RunPresenter};
use gann_cli::presenter::CliRunPresenter;
use gann_cli::ui::print_success;
use gann_core::{generate_levels, RunResult};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        gann_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let params = config.params();
    if config.verbose && !config.json {
        println!("{}", full_version());
    }

    let start = Instant::now();
    let result = generate_levels(&params)?;
    let duration = start.elapsed();
    debug!(
        levels = result.records.len(),
        elapsed = ?duration,
        "Run complete"
    );

    // JSON mode owns stdout
    let presenter: Box<dyn RunPresenter> = if config.json {
        Box::new(NullPresenter)
    } else {
        Box::new(CliRunPresenter::new(
            config.verbose,
            config.quiet,
            config.use_color(),
        ))
    };
    if config.json {
        println!("{}", to_json(&result, !config.quiet)?);
    }
    presenter.present_table(&result);
    if config.chart {
        presenter.present_chart(&result);
    }
    presenter.present_summary(&result, Some(duration));

    export(config, &result)
}

/// Write the CSV exports requested on the command line.
fn export(config: &AppConfig, result: &RunResult) -> Result<()> {
    if let Some(ref path) = config.output {
        write_export(config, path, result)?;
    }
    if config.export {
        let path = timestamped_filename(&chrono::Local::now());
        write_export(config, &path, result)?;
    }
    Ok(())
}

fn write_export(config: &AppConfig, path: &Path, result: &RunResult) -> Result<()> {
    export_csv(path, result).with_context(|| format!("failed to export {}", path.display()))?;
    info!(path = %path.display(), "Export written");
    if !config.quiet && !config.json {
        print_success(
            &format!("Exported {} levels to {}", result.records.len(), path.display()),
            config.use_color(),
        );
    }
    Ok(())
}
