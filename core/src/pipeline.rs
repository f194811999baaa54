// core/src/pipeline.rs
use std::path::PathBuf;

use log::info;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::export_xml::parse_export;
use crate::measurements::extract_body_mass;
use crate::metrics::Metrics;
use crate::models::NormalizedWorkout;
use crate::normalize::Normalizer;
use crate::profile::IntensityProfile;
use crate::storage::read_export;
use crate::writer::{sort_chronologically, write_csv};

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub exported: usize,
    pub skipped: u64,
    pub unmapped: u64,
}

/// Kjører steg 1–3 på et dokument i minnet og returnerer radene i
/// utdata-rekkefølge.
pub fn convert_document(
    xml: &str,
    config: &ExportConfig,
    metrics: &Metrics,
) -> Result<Vec<NormalizedWorkout>> {
    let export = parse_export(xml)?;

    // 1️⃣ vekthistorikk
    let history = extract_body_mass(&export.records)?;
    // 2️⃣ METs-profil, ferdig før noen økt normaliseres
    let profile = IntensityProfile::build(&export.workouts, &config.activity_map)?;
    // 3️⃣ normalisering
    let mut workouts =
        Normalizer::new(config, &history, &profile, metrics).normalize_all(&export.workouts)?;

    sort_chronologically(&mut workouts);
    Ok(workouts)
}

/// Leser `config.input_path`, skriver `config.output_path`.
pub fn run_export(config: &ExportConfig, metrics: &Metrics) -> Result<ExportSummary> {
    info!("reading {}", config.input_path.display());
    let xml = read_export(&config.input_path)?;
    let workouts = convert_document(&xml, config, metrics)?;

    // 4️⃣ skriv CSV
    write_csv(&workouts, &config.output_path)?;
    metrics.workouts_exported.inc_by(workouts.len() as u64);
    info!(
        "wrote {} rows to {}",
        workouts.len(),
        config.output_path.display()
    );

    Ok(ExportSummary {
        output_path: config.output_path.clone(),
        exported: workouts.len(),
        skipped: metrics.skipped_workouts.get(),
        unmapped: metrics.unmapped_activity.get(),
    })
}
