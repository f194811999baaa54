use std::path::PathBuf;

use chrono_tz::Tz;
use clap::Parser;

use crate::config::ExportConfig;

/// Convert an Apple Health export into a workout CSV with estimated calories.
#[derive(Debug, Parser)]
#[command(name = "healthgraph", version)]
pub struct Cli {
    /// JSON config file; missing file means built-in defaults
    #[arg(long, env = "HEALTHGRAPH_CONFIG", default_value = "healthgraph.json")]
    pub config: PathBuf,

    /// Health export document (export.xml)
    #[arg(long, env = "HEALTHGRAPH_INPUT")]
    pub input: Option<PathBuf>,

    /// Destination CSV
    #[arg(long, env = "HEALTHGRAPH_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Body weight (kg) used when no earlier measurement exists
    #[arg(long, env = "HEALTHGRAPH_DEFAULT_WEIGHT")]
    pub default_weight: Option<f64>,

    /// IANA zone the workout wall-clock times are read in
    #[arg(long, env = "HEALTHGRAPH_TIMEZONE")]
    pub timezone: Option<Tz>,

    /// Calories written when no estimate is possible
    #[arg(long, env = "HEALTHGRAPH_CALORIE_FLOOR")]
    pub calorie_floor: Option<f64>,

    /// Print the run's counters (prometheus text format) after export
    #[arg(long)]
    pub print_metrics: bool,

    /// Save the effective config to this file and exit
    #[arg(long)]
    pub write_config: Option<PathBuf>,
}

impl Cli {
    /// Flags win over the file.
    pub fn apply_overrides(&self, mut config: ExportConfig) -> ExportConfig {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(weight) = self.default_weight {
            config.default_weight = weight;
        }
        if let Some(tz) = self.timezone {
            config.locale_timezone = tz;
        }
        if let Some(floor) = self.calorie_floor {
            config.calorie_floor = floor;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_file_values() {
        let cli = Cli::parse_from([
            "healthgraph",
            "--input",
            "in.xml",
            "--timezone",
            "Europe/Oslo",
            "--default-weight",
            "80",
        ]);
        let cfg = cli.apply_overrides(ExportConfig::default());
        assert_eq!(cfg.input_path, PathBuf::from("in.xml"));
        assert_eq!(cfg.locale_timezone, chrono_tz::Europe::Oslo);
        assert_eq!(cfg.default_weight, 80.0);
        assert_eq!(cfg.calorie_floor, 0.1);
    }

    #[test]
    fn unknown_timezone_is_rejected() {
        assert!(Cli::try_parse_from(["healthgraph", "--timezone", "Mars/Olympus"]).is_err());
    }
}
