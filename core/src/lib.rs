//! HealthGraph core: Apple Health `export.xml` → økt-CSV.
//!
//! Pipeline: vekthistorikk → METs-profil → normaliserte økter →
//! kronologisk sortert CSV.

pub mod activity;
pub mod cli;
pub mod config;
pub mod energy;
pub mod error;
pub mod export_xml;
pub mod measurements;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod profile;
pub mod storage;
pub mod timestamps;
pub mod writer;

pub use activity::{ActivityMap, Resolved};
pub use config::ExportConfig;
pub use error::{ExportError, Result};
pub use metrics::Metrics;
pub use models::{BodyMassMeasurement, Calories, Distance, NormalizedWorkout, WorkoutRecord};
pub use pipeline::{convert_document, run_export, ExportSummary};
pub use storage::{load_config, save_config};
