//! Menu actions as data, and the single place that runs them.
//!
//! The shell only turns keystrokes into a [`Command`]; everything it can do
//! is reachable headlessly through [`execute`].
use crate::charts;
use crate::config::Settings;
use crate::export::ExportFormat;
use crate::output;
use crate::reports;
use crate::store::RecordStore;
use crate::summary::build_summary;
use std::io::{self, Write};

/// Parks shown in the table printed after a successful export.
const SUMMARY_PREVIEW_ROWS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ViewParkReviews { park: String },
    CountByLocation { park: String, location: String },
    AverageByYear { park: String, year: String },
    ParkLocationAverages,
    ChartParkShare,
    ChartTopLocations { park: String },
    ChartMonthly { park: String },
    Export(ExportFormat),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub fn display_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n⚠ ERROR: {}\n", message)
}

pub fn execute<W: Write>(store: &RecordStore, settings: &Settings, command: &Command, out: &mut W) -> io::Result<Flow> {
    tracing::debug!(?command, "executing");
    let data = store.records();
    match command {
        Command::ViewParkReviews { park } => {
            let reviews = reports::filter_by_park(data, park);
            output::print_reviews(&reviews, out)?;
        }
        Command::CountByLocation { park, location } => {
            let count = reports::count_by_park_and_location(data, park, location);
            writeln!(out, "\nNumber of reviews for {} from {}: {}", park, location, count)?;
        }
        Command::AverageByYear { park, year } => match reports::try_average_rating_by_year(data, park, year) {
            Some(avg) => writeln!(out, "\nAverage rating for {} in {}: {:.2}/5", park, year, avg)?,
            None => writeln!(out, "\nNo reviews found for {} in {}.", park, year)?,
        },
        Command::ParkLocationAverages => {
            writeln!(out, "Calculating average scores per park by location...")?;
            let parks = reports::park_location_averages(data);
            output::print_park_location_averages(&parks, out)?;
        }
        Command::ChartParkShare => {
            let counts = reports::count_per_park(data);
            writeln!(out, "Generating pie chart...")?;
            charts::render_park_share(&counts, out)?;
        }
        Command::ChartTopLocations { park } => {
            let ranked = reports::top_locations_by_rating(data, park, settings.top_n as usize);
            if ranked.is_empty() {
                writeln!(out, "No data found for park: {}", park)?;
            } else {
                writeln!(out, "Generating bar chart...")?;
                charts::render_top_locations(&ranked, park, out)?;
            }
        }
        Command::ChartMonthly { park } => {
            let months = reports::monthly_averages(data, park);
            if months.iter().all(|m| m.reviews == 0) {
                writeln!(out, "No data found for park: {}", park)?;
            } else {
                writeln!(out, "Generating bar chart...")?;
                charts::render_monthly(&months, park, out)?;
            }
        }
        Command::Export(format) => {
            let summary = build_summary(data);
            let outcome = format.exporter().export(&summary, &settings.export_name);
            if outcome.ok {
                writeln!(out, "✓ {}", outcome.message)?;
                output::preview_table_rows(&summary.rows(), SUMMARY_PREVIEW_ROWS, out)?;
            } else {
                display_error(out, &outcome.message)?;
            }
        }
        Command::Exit => {
            writeln!(out, "Thank you for using the Disneyland Reviews Analysis System!")?;
            writeln!(out, "Goodbye!")?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReviewRecord;

    fn store() -> RecordStore {
        RecordStore::new(vec![
            ReviewRecord::new("Disneyland_Paris", "France", "5", "2019-4"),
            ReviewRecord::new("Disneyland_Paris", "United Kingdom", "3", "2019-5"),
            ReviewRecord::new("Disneyland_HongKong", "Japan", "4", "2018-4"),
        ])
    }

    fn run(command: Command) -> (Flow, String) {
        run_with(&Settings::default(), command)
    }

    fn run_with(settings: &Settings, command: Command) -> (Flow, String) {
        let mut out = Vec::new();
        let flow = execute(&store(), settings, &command, &mut out).unwrap();
        (flow, String::from_utf8(out).unwrap())
    }

    #[test]
    fn view_and_count() {
        let (_, text) = run(Command::ViewParkReviews { park: "paris".into() });
        assert!(text.contains("Found 2 reviews:"));

        let (_, text) = run(Command::CountByLocation {
            park: "paris".into(),
            location: "united".into(),
        });
        assert!(text.contains("Number of reviews for paris from united: 1"));
    }

    #[test]
    fn average_by_year_distinguishes_no_data() {
        let (_, text) = run(Command::AverageByYear {
            park: "paris".into(),
            year: "2019".into(),
        });
        assert!(text.contains("Average rating for paris in 2019: 4.00/5"));

        let (_, text) = run(Command::AverageByYear {
            park: "paris".into(),
            year: "2010".into(),
        });
        assert!(text.contains("No reviews found for paris in 2010."));
    }

    #[test]
    fn charts_report_missing_park() {
        let (_, text) = run(Command::ChartTopLocations { park: "tokyo".into() });
        assert!(text.contains("No data found for park: tokyo"));
        let (_, text) = run(Command::ChartMonthly { park: "tokyo".into() });
        assert!(text.contains("No data found for park: tokyo"));

        let (_, text) = run(Command::ChartMonthly { park: "paris".into() });
        assert!(text.contains("Average Monthly Rating for paris"));
        let (_, text) = run(Command::ChartParkShare);
        assert!(text.contains("Disneyland_HongKong"));
    }

    #[test]
    fn top_n_comes_from_settings() {
        let settings = Settings {
            top_n: 1,
            ..Settings::default()
        };
        let (_, text) = run_with(&settings, Command::ChartTopLocations { park: "paris".into() });
        assert!(text.contains("Top 1 Locations by Average Rating for paris"));
        assert!(!text.contains("United Kingdom"));
    }

    #[test]
    fn export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            export_name: dir.path().join("summary").to_string_lossy().into_owned(),
            ..Settings::default()
        };
        let (flow, text) = run_with(&settings, Command::Export(ExportFormat::Json));
        assert_eq!(flow, Flow::Continue);
        assert!(text.starts_with("✓ Successfully exported to"));
        assert!(text.contains("| Disneyland_Paris"));
        assert!(dir.path().join("summary.json").exists());
    }

    #[test]
    fn exit_stops_the_loop() {
        let (flow, text) = run(Command::Exit);
        assert_eq!(flow, Flow::Exit);
        assert!(text.contains("Goodbye!"));
    }
}
