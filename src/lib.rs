//! Theme-park review analysis: load a review CSV, query it, chart it and
//! export per-park summaries.
pub mod charts;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod output;
pub mod reports;
pub mod shell;
pub mod store;
pub mod summary;
pub mod types;
pub mod util;
