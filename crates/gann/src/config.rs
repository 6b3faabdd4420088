//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use gann_core::constants::MAX_CLI_LEVELS;
use gann_core::LevelParams;

/// GannTable-rs — GANN square-root level table with zodiac mapping.
#[derive(Parser, Debug)]
#[command(name = "gann", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Base price the ladder is built around.
    #[arg(
        short,
        long,
        default_value_t = gann_core::DEFAULT_BASE_VALUE,
        env = "GANN_BASE",
        allow_negative_numbers = true
    )]
    pub base: f64,

    /// Step added to the base square root per level (may be zero or negative).
    #[arg(
        short,
        long,
        default_value_t = gann_core::DEFAULT_FACTOR,
        env = "GANN_FACTOR",
        allow_negative_numbers = true
    )]
    pub factor: f64,

    /// Number of up/down levels (1-50).
    #[arg(
        short,
        long,
        default_value_t = gann_core::DEFAULT_LEVEL_COUNT,
        env = "GANN_LEVELS",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_CLI_LEVELS))
    )]
    pub levels: u32,

    /// Angle detection tolerance in degrees.
    #[arg(
        short,
        long,
        default_value_t = gann_core::DEFAULT_TOLERANCE,
        env = "GANN_TOLERANCE",
        allow_negative_numbers = true
    )]
    pub tolerance: f64,

    /// Write the table as CSV to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export the table as CSV under a timestamped file name.
    #[arg(long)]
    pub export: bool,

    /// Print the whole run as JSON instead of the table.
    #[arg(long)]
    pub json: bool,

    /// Show the degree chart below the table.
    #[arg(long)]
    pub chart: bool,

    /// Quiet mode (table rows only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Engine parameters for this invocation.
    #[must_use]
    pub fn params(&self) -> LevelParams {
        LevelParams::new(self.base, self.factor, self.levels, self.tolerance)
    }

    /// Whether styled output should be used.
    #[must_use]
    pub fn use_color(&self) -> bool {
        !self.json && gann_cli::ui::color_enabled()
    }
}
