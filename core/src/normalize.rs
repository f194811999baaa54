// core/src/normalize.rs
use log::{debug, info, warn};

use crate::activity::Resolved;
use crate::config::ExportConfig;
use crate::energy::estimate_calories;
use crate::error::Result;
use crate::export_xml::{leading_number, parse_number};
use crate::measurements::latest_at_or_before;
use crate::metrics::Metrics;
use crate::models::{BodyMassMeasurement, Distance, NormalizedWorkout, WorkoutRecord};
use crate::profile::{IntensityProfile, AVERAGE_METS_KEY};
use crate::timestamps::{localize, parse_wall_clock};

pub const DISTANCE_STAT_TYPE: &str = "HKQuantityTypeIdentifierDistanceWalkingRunning";

/// Distanse fra walking/running-statistikken; siste treff vinner.
/// `Unrecorded` når økta mangler statistikken. Aldri negativ.
pub fn workout_distance(w: &WorkoutRecord) -> Result<Distance> {
    let mut distance = Distance::Unrecorded;
    for stat in w.statistics.iter().filter(|s| s.kind == DISTANCE_STAT_TYPE) {
        let sum = match stat.sum.as_deref() {
            Some(raw) => parse_number("sum", raw)?,
            None => 0.0,
        };
        distance = Distance::Recorded(sum.max(0.0));
    }
    Ok(distance)
}

/// Første `HKAverageMETs`-verdi på økta, slik den er registrert.
pub fn recorded_mets(w: &WorkoutRecord) -> Result<Option<f64>> {
    w.metadata
        .iter()
        .find(|m| m.key == AVERAGE_METS_KEY)
        .map(|m| leading_number(AVERAGE_METS_KEY, &m.value))
        .transpose()
}

/// Steg 3. Leser vekthistorikk og METs-profil, endrer dem aldri.
pub struct Normalizer<'a> {
    config: &'a ExportConfig,
    history: &'a [BodyMassMeasurement],
    profile: &'a IntensityProfile,
    metrics: &'a Metrics,
}

impl<'a> Normalizer<'a> {
    pub fn new(
        config: &'a ExportConfig,
        history: &'a [BodyMassMeasurement],
        profile: &'a IntensityProfile,
        metrics: &'a Metrics,
    ) -> Self {
        Self {
            config,
            history,
            profile,
            metrics,
        }
    }

    /// `Ok(None)` når økta mangler startDate; den kan ikke plasseres på
    /// tidslinjen og utelates fra eksporten.
    pub fn normalize(&self, w: &WorkoutRecord) -> Result<Option<NormalizedWorkout>> {
        let label = match self.config.activity_map.resolve(&w.activity_type) {
            Resolved::Mapped(label) => label,
            Resolved::Unmapped(raw) => {
                warn!("no mapping found for workout type {raw}");
                self.metrics.unmapped_activity.inc();
                raw
            }
        };

        let Some(raw_start) = w.start_date.as_deref() else {
            warn!("skipping {label} workout without startDate");
            self.metrics.skipped_workouts.inc();
            return Ok(None);
        };
        let start = parse_wall_clock(raw_start)?;

        let duration = w.duration.unwrap_or(0.0);
        let distance = workout_distance(w)?;

        // veggtid tolket i konfigurert tidssone
        let instant = localize(start, self.config.locale_timezone);
        let weight = match latest_at_or_before(self.history, &instant) {
            Some(m) => m.value,
            None => {
                self.metrics.default_weight.inc();
                self.config.default_weight
            }
        };

        let mets = match recorded_mets(w)? {
            Some(mets) if mets != 0.0 => mets,
            _ => {
                let mean = self.profile.mean(label).unwrap_or(0.0);
                if mean > 0.0 {
                    self.metrics.imputed_intensity.inc();
                }
                mean
            }
        };

        let calories = estimate_calories(duration, mets, weight, self.config.calorie_floor);
        debug!("{label} @ {start}: {duration} min, {mets:.2} MET, {weight} kg → {calories}");

        Ok(Some(NormalizedWorkout {
            activity_label: label.to_string(),
            duration,
            distance,
            calories,
            start,
        }))
    }

    /// Alle økter i input-rekkefølge; økter uten startDate droppes.
    pub fn normalize_all(&self, workouts: &[WorkoutRecord]) -> Result<Vec<NormalizedWorkout>> {
        let mut out = Vec::with_capacity(workouts.len());
        for w in workouts {
            if let Some(n) = self.normalize(w)? {
                out.push(n);
            }
        }
        info!("normalised {} of {} workouts", out.len(), workouts.len());
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MetadataEntry, WorkoutStatistic};

    fn stat(kind: &str, sum: Option<&str>) -> WorkoutStatistic {
        WorkoutStatistic {
            kind: kind.into(),
            sum: sum.map(str::to_string),
        }
    }

    #[test]
    fn distance_uses_last_matching_statistic() {
        let w = WorkoutRecord {
            statistics: vec![
                stat(DISTANCE_STAT_TYPE, Some("1200")),
                stat("HKQuantityTypeIdentifierActiveEnergyBurned", Some("oops")),
                stat(DISTANCE_STAT_TYPE, Some("3400.5")),
            ],
            ..Default::default()
        };
        assert_eq!(workout_distance(&w).unwrap(), Distance::Recorded(3400.5));
    }

    #[test]
    fn distance_without_sum_is_recorded_zero() {
        let w = WorkoutRecord {
            statistics: vec![stat(DISTANCE_STAT_TYPE, None)],
            ..Default::default()
        };
        assert_eq!(workout_distance(&w).unwrap(), Distance::Recorded(0.0));
    }

    #[test]
    fn distance_without_statistic_is_unrecorded() {
        let w = WorkoutRecord {
            statistics: vec![stat("HKQuantityTypeIdentifierActiveEnergyBurned", Some("250"))],
            ..Default::default()
        };
        assert_eq!(workout_distance(&w).unwrap(), Distance::Unrecorded);
        assert_eq!(workout_distance(&WorkoutRecord::default()).unwrap(), Distance::Unrecorded);
    }

    #[test]
    fn negative_distance_is_clamped() {
        let w = WorkoutRecord {
            statistics: vec![stat(DISTANCE_STAT_TYPE, Some("-12.5"))],
            ..Default::default()
        };
        assert_eq!(workout_distance(&w).unwrap(), Distance::Recorded(0.0));
    }

    #[test]
    fn recorded_mets_takes_first_entry() {
        let w = WorkoutRecord {
            metadata: vec![
                MetadataEntry {
                    key: "HKIndoorWorkout".into(),
                    value: "1".into(),
                },
                MetadataEntry {
                    key: AVERAGE_METS_KEY.into(),
                    value: "6.2 kcal/hr·kg".into(),
                },
                MetadataEntry {
                    key: AVERAGE_METS_KEY.into(),
                    value: "9.9 kcal/hr·kg".into(),
                },
            ],
            ..Default::default()
        };
        assert_eq!(recorded_mets(&w).unwrap(), Some(6.2));
        assert_eq!(recorded_mets(&WorkoutRecord::default()).unwrap(), None);
    }
}
