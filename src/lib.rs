//! Workspace-level test harness for GannTable-rs.
//!
//! The golden tests in `tests/` exercise the engine through its public API.
