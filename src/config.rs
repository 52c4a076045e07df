//! Configuration file support for iq-license-report.
//!
//! Provides YAML-based configuration through `iq-license-report.config.yml`
//! files, and resolves the effective settings from command-line values, the
//! config file and built-in defaults (in that order of precedence).

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::license_report::policies::{LicenseIdentity, NoiseBlocklist};
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "iq-license-report.config.yml";

/// IQ Server used when neither the command line nor the config names one
pub const DEFAULT_IQ_URL: &str = "http://localhost:8070";

/// Evaluation stage used when neither the command line nor the config names one
pub const DEFAULT_STAGE: &str = "build";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub iq_url: Option<String>,
    pub stage: Option<String>,
    pub identity: Option<String>,
    pub blocklist: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ReportError::configuration(
            format!("Failed to read config file {}: {}", path.display(), e),
            "Check that the file exists and is readable.",
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        ReportError::configuration(
            format!("Failed to parse config file {}: {}", path.display(), e),
            "Ensure the file contains valid YAML syntax.",
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref blocklist) = config.blocklist {
        for (i, entry) in blocklist.iter().enumerate() {
            if entry.trim().is_empty() {
                return Err(ReportError::configuration(
                    format!("Invalid config: blocklist[{}] must not be empty.", i),
                    "Each blocklist entry must be a license ID (e.g., \"Not-Declared\").",
                )
                .into());
            }
        }
    }
    if let Some(ref identity) = config.identity {
        parse_identity(identity)?;
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

fn parse_identity(value: &str) -> Result<LicenseIdentity> {
    value.parse::<LicenseIdentity>().map_err(|message| {
        ReportError::configuration(
            format!("Invalid config: identity: {}", message),
            "Use 'license-id' or 'license-id-and-name'.",
        )
        .into()
    })
}

/// Values given on the command line (or through environment variables)
///
/// `None` and an empty `blocklist` mean "not given", so the config file and
/// then the defaults apply.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub iq_url: Option<String>,
    pub stage: Option<String>,
    pub identity: Option<LicenseIdentity>,
    pub blocklist: Vec<String>,
    pub minimal_blocklist: bool,
}

/// Effective settings of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub iq_url: String,
    pub stage: String,
    pub identity: LicenseIdentity,
    pub blocklist: NoiseBlocklist,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            iq_url: DEFAULT_IQ_URL.to_string(),
            stage: DEFAULT_STAGE.to_string(),
            identity: LicenseIdentity::default(),
            blocklist: NoiseBlocklist::default(),
        }
    }
}

impl ReportSettings {
    /// Resolves the settings: command line, then config file, then defaults.
    pub fn resolve(overrides: SettingsOverrides, config: Option<&ConfigFile>) -> Result<Self> {
        let defaults = Self::default();

        let iq_url = overrides
            .iq_url
            .or_else(|| config.and_then(|c| c.iq_url.clone()))
            .unwrap_or(defaults.iq_url);

        let stage = overrides
            .stage
            .or_else(|| config.and_then(|c| c.stage.clone()))
            .unwrap_or(defaults.stage);

        let identity = match overrides.identity {
            Some(identity) => identity,
            None => match config.and_then(|c| c.identity.as_deref()) {
                Some(value) => parse_identity(value)?,
                None => defaults.identity,
            },
        };

        let blocklist = if overrides.minimal_blocklist {
            NoiseBlocklist::minimal()
        } else if !overrides.blocklist.is_empty() {
            NoiseBlocklist::new(overrides.blocklist)
        } else if let Some(ids) = config.and_then(|c| c.blocklist.as_ref()) {
            NoiseBlocklist::new(ids.iter().map(|id| id.trim()))
        } else {
            defaults.blocklist
        };

        if stage.trim().is_empty() {
            return Err(ReportError::configuration(
                "The stage must not be empty",
                "Pass --stage <STAGE> (e.g. build, release)",
            )
            .into());
        }

        Ok(Self {
            iq_url,
            stage,
            identity,
            blocklist,
        })
    }
}
