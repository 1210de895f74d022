use crate::error::ConfigError;
use crate::pool::swap::DEFAULT_MAX_ITERATIONS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Quoter configuration, loaded from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuoterConfig {
    /// Upper bound on swap loop iterations per quote.
    pub max_iterations: u32,

    /// `tracing_subscriber::EnvFilter` directive used by the CLI.
    pub log_filter: String,
}

impl Default for QuoterConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            log_filter: "info".to_string(),
        }
    }
}

impl QuoterConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: QuoterConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "max_iterations must be greater than 0".to_string(),
            ));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log_filter must not be empty".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = QuoterConfig::from_toml("").unwrap();
        assert_eq!(config, QuoterConfig::default());
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn values_override_defaults() {
        let config = QuoterConfig::from_toml(
            r#"
            max_iterations = 25
            log_filter = "clmm_swap_quote=trace"
            "#,
        )
        .unwrap();
        assert_eq!(config.max_iterations, 25);
        assert_eq!(config.log_filter, "clmm_swap_quote=trace");
    }

    #[test]
    fn zero_iterations_is_rejected() {
        assert!(matches!(
            QuoterConfig::from_toml("max_iterations = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            QuoterConfig::from_toml("max_iterations = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = QuoterConfig::load("/definitely/not/here/quoter.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn serialized_config_loads_back() {
        let config = QuoterConfig {
            max_iterations: 7,
            log_filter: "debug".to_string(),
        };
        let text = config.to_toml().unwrap();
        assert_eq!(QuoterConfig::from_toml(&text).unwrap(), config);
    }
}
