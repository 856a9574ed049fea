use serde::Deserialize;
use std::{error::Error, fs};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendConfig {
    pub server_address: String,
    pub log_level: String,
    /// Origin allowed by the CORS layer; no CORS layer is installed when absent.
    #[serde(default)]
    pub cors_origin: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    pub backend: BackendConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let config = serde_yml::from_str(contents)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
common:
  project_name: receipts
backend:
  server_address: 0.0.0.0:8080
  log_level: debug
  cors_origin: http://localhost:5173
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.common.project_name, "receipts");
        assert_eq!(config.backend.server_address, "0.0.0.0:8080");
        assert_eq!(config.backend.log_level, "debug");
        assert_eq!(config.backend.cors_origin.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn test_cors_origin_is_optional() {
        let yaml = r#"
common:
  project_name: receipts
backend:
  server_address: 127.0.0.1:3000
  log_level: info
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert!(config.backend.cors_origin.is_none());
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let yaml = "common:\n  project_name: receipts\n";
        assert!(Config::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(Config::load("/definitely/not/here.yaml").is_err());
    }
}
