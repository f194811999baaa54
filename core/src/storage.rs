// core/src/storage.rs
use std::path::Path;

use log::info;
use serde_path_to_error as spte;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};

/// Leser inn config fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-config.
pub fn load_config(path: &Path) -> Result<ExportConfig> {
    if !path.exists() {
        info!("no config at {}, using defaults", path.display());
        return Ok(ExportConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    let mut de = serde_json::Deserializer::from_str(&contents);
    let config: ExportConfig = spte::deserialize(&mut de).map_err(|e| ExportError::Config {
        path: path.to_path_buf(),
        message: format!("parse error at {}: {}", e.path(), e.inner()),
    })?;
    config.validate(path)?;

    info!(
        "config loaded from {} (timezone={}, default_weight={})",
        path.display(),
        config.locale_timezone,
        config.default_weight
    );
    Ok(config)
}

/// Lagrer config til disk som JSON (pretty-print).
pub fn save_config(config: &ExportConfig, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config).map_err(|e| ExportError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    std::fs::write(path, json).map_err(|e| ExportError::io(path, e))?;
    info!("config saved to {}", path.display());
    Ok(())
}

pub fn read_export(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| ExportError::io(path, e))
}
