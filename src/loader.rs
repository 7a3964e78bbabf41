use crate::error::{AppError, Result};
use crate::types::ReviewRecord;
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub loaded_rows: usize,
    pub skipped_rows: usize,
}

/// Read every review row from a delimited file whose first row is the header.
pub fn load_reviews(path: &Path) -> Result<(Vec<ReviewRecord>, LoadReport)> {
    let rdr = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| AppError::Load {
            path: path.to_path_buf(),
            source,
        })?;
    let (data, report) = read_reviews(rdr);
    tracing::info!(
        path = %path.display(),
        loaded = report.loaded_rows,
        skipped = report.skipped_rows,
        "loaded review file"
    );
    Ok((data, report))
}

/// Like [`load_reviews`], but a missing or unreadable file yields an empty
/// dataset instead of an error.
pub fn load_or_empty(path: &Path) -> (Vec<ReviewRecord>, LoadReport) {
    match load_reviews(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::warn!(error = %e, "continuing with an empty dataset");
            (Vec::new(), LoadReport::default())
        }
    }
}

pub fn read_reviews<R: Read>(mut rdr: csv::Reader<R>) -> (Vec<ReviewRecord>, LoadReport) {
    let mut total_rows = 0usize;
    let mut skipped_rows = 0usize;
    let mut data: Vec<ReviewRecord> = Vec::new();

    for result in rdr.deserialize::<ReviewRecord>() {
        total_rows += 1;
        match result {
            Ok(r) => data.push(r),
            Err(e) => {
                tracing::debug!(row = total_rows, error = %e, "skipping undecodable row");
                skipped_rows += 1;
            }
        }
    }

    let report = LoadReport {
        total_rows,
        loaded_rows: data.len(),
        skipped_rows,
    };
    (data, report)
}
