use chrono::{DateTime, FixedOffset};
use log::info;

use crate::error::{ExportError, Result};
use crate::export_xml::parse_number;
use crate::models::{BodyMassMeasurement, QuantityRecord};
use crate::timestamps::parse_absolute;

pub const BODY_MASS_TYPE: &str = "HKQuantityTypeIdentifierBodyMass";

/// Steg 1: vekthistorikk, stigende etter tidspunkt.
///
/// Hver body-mass-record må ha tidspunkt med offset; mangler den, avbrytes
/// kjøringen. Like tidspunkt beholder dokumentrekkefølgen.
pub fn extract_body_mass(records: &[QuantityRecord]) -> Result<Vec<BodyMassMeasurement>> {
    let mut out = Vec::new();
    for rec in records.iter().filter(|r| r.kind == BODY_MASS_TYPE) {
        let raw_date = rec.start_date.as_deref().ok_or_else(|| ExportError::Timestamp {
            value: String::new(),
        })?;
        let timestamp = parse_absolute(raw_date)?;
        let value = match rec.value.as_deref() {
            Some(raw) => parse_number("value", raw)?,
            None => 0.0,
        };
        out.push(BodyMassMeasurement {
            timestamp,
            value,
            unit: rec.unit.clone().unwrap_or_default(),
        });
    }

    out.sort_by_key(|m| m.timestamp);
    info!("body mass: {} measurements", out.len());
    Ok(out)
}

/// Siste måling som ikke er etter `at`. Ved like tidspunkt vinner den siste
/// i sortert historikk. Forventer `history` sortert stigende.
pub fn latest_at_or_before<'a>(
    history: &'a [BodyMassMeasurement],
    at: &DateTime<FixedOffset>,
) -> Option<&'a BodyMassMeasurement> {
    let idx = history.partition_point(|m| m.timestamp <= *at);
    idx.checked_sub(1).map(|i| &history[i])
}
