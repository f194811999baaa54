// core/src/export_xml.rs
use log::debug;
use roxmltree::{Document, Node, ParsingOptions};

use crate::error::{ExportError, Result};
use crate::models::{MetadataEntry, QuantityRecord, WorkoutRecord, WorkoutStatistic};

/// Delene av `export.xml` konverteren bruker, i dokumentrekkefølge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthExport {
    pub records: Vec<QuantityRecord>,
    pub workouts: Vec<WorkoutRecord>,
}

/// Parser hele dokumentet i minnet. Apple legger ved en inline DTD, som
/// må tillates eksplisitt.
pub fn parse_export(xml: &str) -> Result<HealthExport> {
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, opts)?;

    let mut export = HealthExport::default();
    for node in doc.descendants().filter(Node::is_element) {
        match node.tag_name().name() {
            "Record" => export.records.push(read_record(node)),
            "Workout" => export.workouts.push(read_workout(node)?),
            _ => {}
        }
    }

    debug!(
        "parsed export: {} records, {} workouts",
        export.records.len(),
        export.workouts.len()
    );
    Ok(export)
}

fn read_record(node: Node) -> QuantityRecord {
    QuantityRecord {
        kind: node.attribute("type").unwrap_or_default().to_string(),
        start_date: node.attribute("startDate").map(str::to_string),
        value: node.attribute("value").map(str::to_string),
        unit: node.attribute("unit").map(str::to_string),
    }
}

fn read_workout(node: Node) -> Result<WorkoutRecord> {
    let duration = node
        .attribute("duration")
        .map(|raw| parse_number("duration", raw))
        .transpose()?;

    let mut statistics = Vec::new();
    let mut metadata = Vec::new();
    for child in node.descendants().skip(1).filter(Node::is_element) {
        match child.tag_name().name() {
            "WorkoutStatistics" => statistics.push(WorkoutStatistic {
                kind: child.attribute("type").unwrap_or_default().to_string(),
                sum: child.attribute("sum").map(str::to_string),
            }),
            "MetadataEntry" => metadata.push(MetadataEntry {
                key: child.attribute("key").unwrap_or_default().to_string(),
                value: child.attribute("value").unwrap_or_default().to_string(),
            }),
            _ => {}
        }
    }

    Ok(WorkoutRecord {
        activity_type: node
            .attribute("workoutActivityType")
            .unwrap_or_default()
            .to_string(),
        duration,
        start_date: node.attribute("startDate").map(str::to_string),
        statistics,
        metadata,
    })
}

/// Numerisk attributt; whitespace rundt tåles, alt annet er fatalt.
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ExportError::number(field, raw))
}

/// `"8.5 kcal/hr·kg"` → 8.5. Tom verdi regnes som ugyldig.
pub fn leading_number(field: &'static str, raw: &str) -> Result<f64> {
    let token = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| ExportError::number(field, raw))?;
    parse_number(field, token)
}
