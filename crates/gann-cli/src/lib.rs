//! # gann-cli
//!
//! Terminal presentation of level runs: table, summary panel, degree chart,
//! CSV/JSON export, and shell completion.

pub mod chart;
pub mod completion;
pub mod export;
pub mod interfaces;
pub mod output;
pub mod presenter;
pub mod ui;

pub use interfaces::RunPresenter;
pub use presenter::CliRunPresenter;
