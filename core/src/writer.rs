use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{ExportError, Result};
use crate::models::{decimal, NormalizedWorkout};

pub const HEADER: [&str; 5] = [
    "workoutActivityType",
    "duration",
    "distance",
    "calories",
    "startDate",
];

/// CRLF-linjeslutt, minimal quoting.
pub fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(inner)
}

/// Stabil kronologisk rekkefølge; like starttider beholder input-rekkefølgen.
pub fn sort_chronologically(workouts: &mut [NormalizedWorkout]) {
    workouts.sort_by_key(|w| w.start);
}

/// Steg 4. Radene skrives i gitt rekkefølge; sorter først.
pub fn write_rows<W: Write>(workouts: &[NormalizedWorkout], writer: &mut csv::Writer<W>) -> Result<()> {
    writer.write_record(HEADER)?;
    for w in workouts {
        writer.write_record([
            w.activity_label.clone(),
            decimal(w.duration),
            w.distance.to_string(),
            w.calories.to_string(),
            w.start_date(),
        ])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_csv(workouts: &[NormalizedWorkout], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = csv_writer(file);
    write_rows(workouts, &mut writer)
}

/// Samme tabell som streng, for forhåndsvisning og tester.
pub fn to_csv_string(workouts: &[NormalizedWorkout]) -> Result<String> {
    let mut writer = csv_writer(Vec::new());
    write_rows(workouts, &mut writer)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
