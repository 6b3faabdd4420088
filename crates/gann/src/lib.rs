//! GannTable-rs library — application logic for the GANN level calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
