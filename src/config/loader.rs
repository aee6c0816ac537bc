//! Multi-source config loading.
//!
//! Priority, lowest to highest: built-in defaults, `<project>/.wnjgraph.yaml`,
//! an explicit `--config` file, then `WNJGRAPH_*` environment variables.
//! CLI flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use super::schema::WnjGraphConfig;
use crate::error::{Result, WnjGraphError};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = ".wnjgraph.yaml";

pub const ENV_DB: &str = "WNJGRAPH_DB";
pub const ENV_BIND: &str = "WNJGRAPH_BIND";
pub const ENV_CORS: &str = "WNJGRAPH_CORS";

/// Load configuration from every source.
///
/// A missing project file is fine; a missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>, project_root: Option<&Path>) -> Result<WnjGraphConfig> {
    let mut config = WnjGraphConfig::default();

    if let Some(root) = project_root {
        let candidate = root.join(PROJECT_CONFIG_FILE);
        if candidate.is_file() {
            config = read_config_file(&candidate)?;
            tracing::debug!(path = %candidate.display(), "loaded project config");
        }
    }

    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(WnjGraphError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        config = read_config_file(path)?;
        tracing::debug!(path = %path.display(), "loaded explicit config");
    }

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

/// Parse one YAML config file.
pub fn read_config_file(path: &Path) -> Result<WnjGraphConfig> {
    let text = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&text).map_err(|e| {
        WnjGraphError::Config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Apply `WNJGRAPH_*` overrides, reading variables through `lookup`.
pub fn apply_env_overrides<F>(config: &mut WnjGraphConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(db) = lookup(ENV_DB).filter(|v| !v.trim().is_empty()) {
        config.database.path = PathBuf::from(db);
    }

    if let Some(bind) = lookup(ENV_BIND).filter(|v| !v.trim().is_empty()) {
        config.server.bind = bind
            .trim()
            .parse()
            .map_err(|e| WnjGraphError::Config(format!("invalid {ENV_BIND} {bind:?}: {e}")))?;
    }

    if let Some(cors) = lookup(ENV_CORS) {
        config.server.cors = parse_bool(&cors).ok_or_else(|| {
            WnjGraphError::Config(format!("invalid {ENV_CORS} {cors:?}: expected a boolean"))
        })?;
    }

    Ok(())
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
