//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `fieldscope.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;
use uuid::Uuid;

use fieldscope_adapter_webapi_reqwest::WebApiConfig;
use fieldscope_domain::context::InspectionContext;
use fieldscope_domain::report::Verbosity;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which source adapter pair to wire.
    pub source: SourceKind,
    /// Web API connection settings, used when `source = "webapi"`.
    pub webapi: WebApiConfig,
    /// The field-and-entity context to inspect.
    pub inspection: InspectionConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Selects between the real record store and the canned demo sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Canned in-memory sources; runs without any remote endpoint.
    #[default]
    Virtual,
    /// The OData Web API readers.
    Webapi,
}

/// The inspected field's coordinates.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InspectionConfig {
    /// Logical name of the entity type.
    pub entity_type: String,
    /// Logical name of the inspected field.
    pub field_logical_name: String,
    /// Display label used in the report.
    pub field_display_name: String,
    /// The current form, as a UUID string.
    pub form_id: String,
    /// Rendering mode: `"simple"` or `"detailed"`, or the host's raw
    /// content level (`"0"` is simple, anything else detailed).
    pub verbosity: Verbosity,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `fieldscope.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("fieldscope.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FIELDSCOPE_SOURCE") {
            match val.as_str() {
                "virtual" => self.source = SourceKind::Virtual,
                "webapi" => self.source = SourceKind::Webapi,
                _ => {}
            }
        }
        if let Ok(val) = std::env::var("FIELDSCOPE_BASE_URL") {
            self.webapi.base_url = val;
        }
        if let Ok(val) = std::env::var("FIELDSCOPE_TOKEN") {
            self.webapi.access_token = Some(val);
        }
        if let Ok(val) = std::env::var("FIELDSCOPE_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source == SourceKind::Webapi && self.webapi.base_url.is_empty() {
            return Err(ConfigError::Validation(
                "webapi.base_url must be set when source is 'webapi'".to_string(),
            ));
        }
        if Uuid::parse_str(&self.inspection.form_id).is_err() {
            return Err(ConfigError::Validation(
                "inspection.form_id must be a UUID".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the [`InspectionContext`] this run inspects.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when `form_id` is not a UUID.
    pub fn inspection_context(&self) -> Result<InspectionContext, ConfigError> {
        let form_id = Uuid::parse_str(&self.inspection.form_id).map_err(|_| {
            ConfigError::Validation("inspection.form_id must be a UUID".to_string())
        })?;
        Ok(InspectionContext::new(
            &self.inspection.entity_type,
            &self.inspection.field_logical_name,
            &self.inspection.field_display_name,
            form_id,
        ))
    }
}

impl Default for InspectionConfig {
    fn default() -> Self {
        Self {
            entity_type: "account".to_string(),
            field_logical_name: "statuscode".to_string(),
            field_display_name: "Status".to_string(),
            form_id: Uuid::nil().to_string(),
            verbosity: Verbosity::Simple,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "fieldscope=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
