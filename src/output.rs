use crate::types::{ParkLocationAverages, ReviewRecord};
use crate::util::format_int;
use std::io::{self, Write};
use tabled::{settings::Style, Table, Tabled};

/// Locations listed per park before the rest are summarised.
pub const LOCATIONS_PER_PARK: usize = 5;

pub fn print_reviews<W: Write>(reviews: &[&ReviewRecord], out: &mut W) -> io::Result<()> {
    if reviews.is_empty() {
        return writeln!(out, "\nNo reviews found.");
    }
    writeln!(out, "\nFound {} reviews:", format_int(reviews.len()))?;
    writeln!(out, "{}", "-".repeat(60))?;
    for (i, r) in reviews.iter().enumerate() {
        writeln!(out, "Review #{}", i + 1)?;
        writeln!(out, "Park: {}", r.branch_or("N/A"))?;
        writeln!(out, "Rating: {}/5", r.rating.as_deref().unwrap_or("N/A"))?;
        writeln!(out, "Location: {}", r.location_or("N/A"))?;
        writeln!(out, "Date: {}", r.year_month_or("N/A"))?;
        writeln!(out, "{}", "-".repeat(30))?;
    }
    Ok(())
}

/// Per park, the first few locations alphabetically with their average.
pub fn print_park_location_averages<W: Write>(parks: &[ParkLocationAverages], out: &mut W) -> io::Result<()> {
    for p in parks {
        writeln!(out, "\nPARK: {}", p.park)?;
        writeln!(out, "{}", "-".repeat(30))?;
        let mut sorted: Vec<_> = p.locations.iter().collect();
        sorted.sort_by(|a, b| a.location.cmp(&b.location));
        for l in sorted.iter().take(LOCATIONS_PER_PARK) {
            writeln!(out, "{}: {:.2}/5", l.location, l.average)?;
        }
        if sorted.len() > LOCATIONS_PER_PARK {
            writeln!(out, "... and {} more locations.", sorted.len() - LOCATIONS_PER_PARK)?;
        }
    }
    Ok(())
}

pub fn preview_table_rows<T, W>(rows: &[T], max_rows: usize, out: &mut W) -> io::Result<()>
where
    T: Tabled + Clone,
    W: Write,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        return writeln!(out, "(no rows)\n");
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    writeln!(out, "{}\n", table_str)
}
