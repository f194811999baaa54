use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

use crate::error::Result;

/// Tellere for én eksportkjøring. Hver kjøring eier sitt eget registry.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub workouts_exported: IntCounter,
    pub skipped_workouts: IntCounter,
    pub unmapped_activity: IntCounter,
    pub imputed_intensity: IntCounter,
    pub default_weight: IntCounter,
}

fn counter(registry: &Registry, name: &str, help: &str) -> Result<IntCounter> {
    let c = IntCounter::new(name, help)?;
    registry.register(Box::new(c.clone()))?;
    Ok(c)
}

impl Metrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new_custom(Some("healthgraph".into()), None)?;
        Ok(Self {
            workouts_exported: counter(&registry, "workouts_exported_total", "Rows written to the CSV")?,
            skipped_workouts: counter(&registry, "skipped_workouts_total", "Workouts without a start date")?,
            unmapped_activity: counter(
                &registry,
                "unmapped_activity_total",
                "Workouts whose activity code is not in the remapping table",
            )?,
            imputed_intensity: counter(
                &registry,
                "imputed_intensity_total",
                "Workouts whose METs came from the per-activity mean",
            )?,
            default_weight: counter(
                &registry,
                "default_weight_total",
                "Workouts estimated with the fallback body weight",
            )?,
            registry,
        })
    }

    /// Prometheus tekstformat for alle tellere.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
