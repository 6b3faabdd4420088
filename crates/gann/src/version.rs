//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line with the target platform, shown in verbose output.
#[must_use]
pub fn full_version() -> String {
    format!(
        "gann {} ({}-{})",
        version(),
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}
