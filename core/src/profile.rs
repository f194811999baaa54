use std::collections::HashMap;

use log::{debug, info};

use crate::activity::ActivityMap;
use crate::error::Result;
use crate::export_xml::leading_number;
use crate::models::WorkoutRecord;

pub const AVERAGE_METS_KEY: &str = "HKAverageMETs";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Accumulator {
    sum: f64,
    count: usize,
}

/// Snitt-METs per label, bygget kun fra verdier som finnes i eksporten.
/// Imputerte verdier mates aldri tilbake.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntensityProfile {
    by_label: HashMap<String, Accumulator>,
}

impl IntensityProfile {
    /// Steg 2. Går over alle økter før noen av dem normaliseres.
    pub fn build(workouts: &[WorkoutRecord], activities: &ActivityMap) -> Result<Self> {
        let mut profile = Self::default();
        for w in workouts {
            let label = activities.label(&w.activity_type);
            for entry in w.metadata.iter().filter(|m| m.key == AVERAGE_METS_KEY) {
                let mets = leading_number(AVERAGE_METS_KEY, &entry.value)?;
                profile.add(label, mets);
            }
        }

        for (label, acc) in &profile.by_label {
            debug!("METs profile {label}: {} readings", acc.count);
        }
        info!("METs profile: {} activity labels", profile.by_label.len());
        Ok(profile)
    }

    /// Verdier ≤ 0 ignoreres.
    pub fn add(&mut self, label: &str, mets: f64) {
        if mets > 0.0 {
            let acc = self.by_label.entry(label.to_string()).or_default();
            acc.sum += mets;
            acc.count += 1;
        }
    }

    pub fn mean(&self, label: &str) -> Option<f64> {
        self.by_label
            .get(label)
            .filter(|acc| acc.count > 0)
            .map(|acc| acc.sum / acc.count as f64)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.by_label.keys().map(String::as_str)
    }
}
