// core/src/config.rs
use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::activity::ActivityMap;
use crate::error::{ExportError, Result};

pub const DEFAULT_INPUT_PATH: &str = "export.xml";
pub const DEFAULT_OUTPUT_PATH: &str = "workouts_with_mets_and_weight.csv";
pub const DEFAULT_WEIGHT_KG: f64 = 71.2;
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Regina;
pub const DEFAULT_CALORIE_FLOOR: f64 = 0.1;

/// Alt pipelinen trenger, fast for hele kjøringen.
///
/// Alle felt er valgfrie i JSON; manglende felt får default-verdiene over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub default_weight: f64, // kg
    pub locale_timezone: Tz,
    pub activity_map: ActivityMap,
    pub calorie_floor: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            default_weight: DEFAULT_WEIGHT_KG,
            locale_timezone: DEFAULT_TIMEZONE,
            activity_map: ActivityMap::default(),
            calorie_floor: DEFAULT_CALORIE_FLOOR,
        }
    }
}

impl ExportConfig {
    /// Avviser verdier som ville brutt kravet calories > 0.
    pub fn validate(&self, origin: &Path) -> Result<()> {
        if !(self.default_weight.is_finite() && self.default_weight > 0.0) {
            return Err(ExportError::Config {
                path: origin.to_path_buf(),
                message: format!("default_weight must be > 0, got {}", self.default_weight),
            });
        }
        if !(self.calorie_floor.is_finite() && self.calorie_floor > 0.0) {
            return Err(ExportError::Config {
                path: origin.to_path_buf(),
                message: format!("calorie_floor must be > 0, got {}", self.calorie_floor),
            });
        }
        Ok(())
    }
}
