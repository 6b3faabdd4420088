//! GannTable-rs — GANN square-root level calculator.

use gann_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        std::process::exit(errors::report(&err, &config));
    }
}
