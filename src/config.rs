use clap::Parser;
use std::path::PathBuf;

/// Menu-driven analysis of theme-park review data
#[derive(Parser, Debug, Clone)]
#[command(name = "park_reviews", version)]
pub struct Settings {
    /// Review file (CSV with a header row)
    #[arg(long, env = "PARK_REVIEWS_DATA", default_value = "data/disneyland_reviews.csv")]
    pub data: PathBuf,

    /// Base file name for exports; the extension is added per format
    #[arg(long, default_value = "park_reviews_summary")]
    pub export_name: String,

    /// Number of locations in the top-locations chart
    #[arg(long, default_value = "10", value_parser = clap::value_parser!(u64).range(1..))]
    pub top_n: u64,

    /// Log filter, e.g. `warn`, `info`, `park_reviews=debug`
    #[arg(long, env = "PARK_REVIEWS_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data: PathBuf::from("data/disneyland_reviews.csv"),
            export_name: "park_reviews_summary".to_string(),
            top_n: crate::reports::DEFAULT_TOP_N as u64,
            log_level: "warn".to_string(),
        }
    }
}
