// Entry point and high-level CLI flow.
//
// - Load the review file once into a `RecordStore`.
// - Print how many reviews were read.
// - Hand the store to the interactive menu until the user exits.
use anyhow::Result;
use clap::Parser;
use park_reviews::config::Settings;
use park_reviews::shell::Shell;
use park_reviews::store::RecordStore;
use park_reviews::util::format_int;
use std::io;

fn main() -> Result<()> {
    let settings = Settings::parse();
    park_reviews::logging::setup_logging(&settings.log_level);

    let rule = "=".repeat(60);
    println!("{}\n  Disneyland Reviews Analysis System\n{}\n", rule, rule);

    let (store, report) = RecordStore::open(&settings.data);
    if store.is_empty() {
        eprintln!(
            "\n⚠ ERROR: Failed to load data from {}. Please check the file path.\n",
            settings.data.display()
        );
        return Ok(());
    }
    println!("✓ Data loaded successfully!");
    println!("✓ Total number of reviews: {}", format_int(store.len()));
    if report.skipped_rows > 0 {
        println!(
            "Note: {} rows skipped because they could not be decoded.",
            format_int(report.skipped_rows)
        );
    }

    let stdin = io::stdin();
    let mut shell = Shell::new(&store, &settings, stdin.lock(), io::stdout());
    shell.run()?;
    Ok(())
}
