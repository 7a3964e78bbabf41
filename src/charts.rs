//! Terminal bar charts for the Visualise menu.
use crate::types::{LocationRating, MonthlyAverage};
use std::io::{self, Write};

/// Ratings are out of five; bars for averages are scaled to this.
pub const MAX_RATING: f64 = 5.0;

const BAR_WIDTH: usize = 40;

/// Render a horizontal bar proportional to `value / max_value`.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

fn title<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "\n{}", text)?;
    writeln!(out, "{}", "─".repeat(text.chars().count()))
}

/// Share of reviews per park.
pub fn render_park_share<W: Write>(counts: &[(String, usize)], out: &mut W) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "No data to visualize.");
    }
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    let width = label_width(counts.iter().map(|(p, _)| p.as_str()));

    title(out, "Distribution of Reviews per Park")?;
    for (park, count) in counts {
        let pct = if total == 0 { 0.0 } else { *count as f64 / total as f64 * 100.0 };
        writeln!(
            out,
            "{:<width$} {} {:>5.1}% ({})",
            park,
            format_bar(pct, 100.0, BAR_WIDTH),
            pct,
            count,
            width = width
        )?;
    }
    Ok(())
}

/// Ranked locations for one park.
pub fn render_top_locations<W: Write>(ranked: &[LocationRating], park_name: &str, out: &mut W) -> io::Result<()> {
    if ranked.is_empty() {
        return writeln!(out, "No data to visualize.");
    }
    let width = label_width(ranked.iter().map(|l| l.location.as_str()));

    title(
        out,
        &format!("Top {} Locations by Average Rating for {}", ranked.len(), park_name),
    )?;
    for l in ranked {
        writeln!(
            out,
            "{:<width$} {} {:.2}",
            l.location,
            format_bar(l.average, MAX_RATING, BAR_WIDTH),
            l.average,
            width = width
        )?;
    }
    Ok(())
}

/// Average rating per calendar month for one park.
///
/// Always draws all twelve months, even if every slot is zero; callers that
/// want a "no data" message check before calling.
pub fn render_monthly<W: Write>(months: &[MonthlyAverage], park_name: &str, out: &mut W) -> io::Result<()> {
    title(out, &format!("Average Monthly Rating for {}", park_name))?;
    for m in months {
        writeln!(
            out,
            "{} {} {:.2}",
            m.label(),
            format_bar(m.average, MAX_RATING, BAR_WIDTH),
            m.average
        )?;
    }
    Ok(())
}
