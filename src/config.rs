use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::builder::Annotator;
use crate::dispatch::DEFAULT_MAX_DEPTH;
use crate::error::AnnotatorError;
use crate::identifiers::{IdentifierResolver, default_suppressed_databases};

pub const DEFAULT_CONFIG_FILE: &str = "pathway-annotator.json";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub schema_version: Option<u32>,
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub suppressed_databases: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub schema_version: u32,
    pub max_depth: usize,
    pub suppressed_databases: Vec<String>,
}

impl ResolvedConfig {
    pub fn annotator(&self) -> Annotator {
        Annotator::new(
            IdentifierResolver::new(self.suppressed_databases.clone()),
            self.max_depth,
        )
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            schema_version: 1,
            max_depth: DEFAULT_MAX_DEPTH,
            suppressed_databases: default_suppressed_databases(),
        }
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// An explicit path must exist; without one, the default file in the
    /// current directory is used when present and built-in defaults otherwise.
    pub fn resolve(path: Option<&Utf8Path>) -> Result<ResolvedConfig, AnnotatorError> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Utf8PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        if !config_path.as_std_path().exists() {
            if path.is_some() {
                return Err(AnnotatorError::MissingConfig(config_path));
            }
            tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
            return Ok(ResolvedConfig::default());
        }

        let content = fs::read_to_string(config_path.as_std_path())
            .map_err(|_| AnnotatorError::ConfigRead(config_path.clone()))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|err| AnnotatorError::ConfigParse(err.to_string()))?;

        Self::resolve_config(config)
    }

    pub fn resolve_config(config: Config) -> Result<ResolvedConfig, AnnotatorError> {
        let schema_version = config.schema_version.unwrap_or(1);

        let max_depth = config.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth == 0 {
            return Err(AnnotatorError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }

        let suppressed_databases = config
            .suppressed_databases
            .unwrap_or_else(default_suppressed_databases)
            .into_iter()
            .map(|db| db.trim().to_string())
            .collect::<Vec<_>>();
        if let Some(blank) = suppressed_databases.iter().find(|db| db.is_empty()) {
            return Err(AnnotatorError::InvalidConfig(format!(
                "empty database name in suppressed_databases: {blank:?}"
            )));
        }

        Ok(ResolvedConfig {
            schema_version,
            max_depth,
            suppressed_databases,
        })
    }
}
