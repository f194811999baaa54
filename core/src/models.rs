use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Utdataformat for `startDate` (lokal veggtid, uten offset).
pub const START_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq)]
pub struct BodyMassMeasurement {
    pub timestamp: DateTime<FixedOffset>,
    pub value: f64, // enheten tas med som den er, ingen konvertering
    pub unit: String,
}

/// En generell `<Record>`, attributtene fortsatt som tekst.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuantityRecord {
    pub kind: String,
    pub start_date: Option<String>,
    pub value: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkoutStatistic {
    pub kind: String,
    pub sum: Option<String>, // parses først ved bruk; kun distanse-statistikken leses
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

/// Et `<Workout>`-element slik det står i eksporten, før defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkoutRecord {
    pub activity_type: String,
    pub duration: Option<f64>, // min
    pub start_date: Option<String>,
    pub statistics: Vec<WorkoutStatistic>,
    pub metadata: Vec<MetadataEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Calories {
    /// Avrundet MET-estimat.
    Estimated(i64),
    /// Plassholder så importverktøyet aldri ser en ren null.
    Floor(f64),
}

impl Calories {
    pub fn value(&self) -> f64 {
        match *self {
            Calories::Estimated(kcal) => kcal as f64,
            Calories::Floor(floor) => floor,
        }
    }

    pub fn is_estimated(&self) -> bool {
        matches!(self, Calories::Estimated(_))
    }
}

impl fmt::Display for Calories {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Calories::Estimated(kcal) => write!(f, "{kcal}"),
            Calories::Floor(floor) => write!(f, "{}", decimal(floor)),
        }
    }
}

/// Distanse fra walking/running-statistikken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    /// Ingen `DistanceWalkingRunning`-statistikk på økta; skrives som `0`.
    Unrecorded,
    /// Statistikken finnes (uten `sum` → 0.0); skrives som desimaltall.
    Recorded(f64),
}

impl Distance {
    pub fn value(&self) -> f64 {
        match *self {
            Distance::Unrecorded => 0.0,
            Distance::Recorded(d) => d,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Distance::Unrecorded => f.write_str("0"),
            Distance::Recorded(d) => f.write_str(&decimal(d)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedWorkout {
    pub activity_label: String,
    pub duration: f64,
    pub distance: Distance,
    pub calories: Calories,
    pub start: NaiveDateTime,
}

impl NormalizedWorkout {
    pub fn start_date(&self) -> String {
        self.start.format(START_DATE_FORMAT).to_string()
    }
}

/// Korteste round-trip-desimal, alltid med desimaldel (`30.0`, `12.5`).
/// Eksponenten skrives med fortegn og minst to sifre (`1e+16`, `1e-05`).
pub fn decimal(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    let repr = format!("{x:?}");
    let Some(pos) = repr.find('e') else {
        return repr;
    };
    let (mantissa, exp) = (&repr[..pos], &repr[pos + 1..]);
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}
