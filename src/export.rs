//! Summary exporters: plain text, CSV and JSON.
//!
//! All three share [`SummaryExporter::export`], which normalises the file
//! name and turns any write failure into an unsuccessful [`ExportOutcome`].
use crate::error::Result;
use crate::types::ParkSummaries;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Result of one export attempt, shown to the user as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub ok: bool,
    pub message: String,
    pub path: PathBuf,
}

/// Append `.{ext}` unless `target` already ends with exactly that suffix.
pub fn with_extension(target: &str, ext: &str) -> String {
    let suffix = format!(".{}", ext);
    if target.ends_with(&suffix) {
        target.to_string()
    } else {
        format!("{}{}", target, suffix)
    }
}

pub trait SummaryExporter {
    /// Extension without the leading dot.
    fn extension(&self) -> &'static str;

    fn write_to(&self, summary: &ParkSummaries, path: &Path) -> Result<()>;

    fn export(&self, summary: &ParkSummaries, target: &str) -> ExportOutcome {
        let filename = with_extension(target, self.extension());
        let path = PathBuf::from(&filename);
        match self.write_to(summary, &path) {
            Ok(()) => {
                tracing::info!(file = %filename, parks = summary.len(), "exported summary");
                ExportOutcome {
                    ok: true,
                    message: format!("Successfully exported to {}", filename),
                    path,
                }
            }
            Err(e) => {
                tracing::error!(file = %filename, error = %e, "export failed");
                ExportOutcome {
                    ok: false,
                    message: format!("Export failed: {}", e),
                    path,
                }
            }
        }
    }
}

pub struct TextExporter;

impl SummaryExporter for TextExporter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn write_to(&self, summary: &ParkSummaries, path: &Path) -> Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "DISNEYLAND REVIEWS ANALYSIS REPORT")?;
        writeln!(w, "{}\n", "=".repeat(40))?;
        for s in summary.iter() {
            writeln!(w, "PARK: {}", s.park)?;
            writeln!(w, "{}", "-".repeat(30))?;
            writeln!(w, "Total Reviews: {}", s.stats.total_reviews)?;
            writeln!(w, "Positive Reviews: {}", s.stats.positive_reviews)?;
            // Debug keeps the trailing `.0` on whole numbers.
            writeln!(w, "Average Rating: {:?}", s.stats.average_rating)?;
            writeln!(w, "Number of Countries: {}", s.stats.country_count)?;
            writeln!(w)?;
        }
        w.flush()?;
        Ok(())
    }
}

pub struct CsvExporter;

impl SummaryExporter for CsvExporter {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn write_to(&self, summary: &ParkSummaries, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;
        let rows = summary.rows();
        if rows.is_empty() {
            // serialize() only emits the header alongside the first row.
            wtr.write_record(["Park Name", "Total Reviews", "Positive Reviews", "Average Rating", "Country Count"])?;
        }
        for r in &rows {
            wtr.serialize(r)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

pub struct JsonExporter;

impl SummaryExporter for JsonExporter {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn write_to(&self, summary: &ParkSummaries, path: &Path) -> Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        let formatter = AsciiFormatter(PrettyFormatter::with_indent(b"    "));
        let mut ser = serde_json::Serializer::with_formatter(&mut w, formatter);
        summary.serialize(&mut ser)?;
        w.flush()?;
        Ok(())
    }
}

/// Pretty JSON with every non-ASCII character written as a `\uXXXX` escape
/// (UTF-16 code units, lowercase hex), so the file is pure ASCII.
struct AsciiFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn exporter(self) -> Box<dyn SummaryExporter> {
        match self {
            ExportFormat::Text => Box::new(TextExporter),
            ExportFormat::Csv => Box::new(CsvExporter),
            ExportFormat::Json => Box::new(JsonExporter),
        }
    }
}
