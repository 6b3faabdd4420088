//! Error handling and exit codes.

use gann_cli::ui::print_error;
use gann_core::constants::exit_codes;
use gann_core::GannError;

use crate::config::AppConfig;

/// Map an engine error to its exit code.
pub fn exit_code(err: &GannError) -> i32 {
    match err {
        GannError::InvalidInput(_) => exit_codes::ERROR_CONFIG,
        GannError::Domain(_) => exit_codes::ERROR_DOMAIN,
    }
}

/// Print an application error and return the process exit code.
pub fn report(err: &anyhow::Error, config: &AppConfig) -> i32 {
    print_error(&format!("{err:#}"), config.use_color());
    err.downcast_ref::<GannError>()
        .map_or(exit_codes::ERROR_GENERIC, exit_code)
}
