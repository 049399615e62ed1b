use crate::utils::error::{PrimeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub run: RunSection,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSection {
    pub count: Option<i64>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PrimeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PrimeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PRIME_COUNT})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PrimeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn count(&self) -> Option<i64> {
        self.run.count
    }

    pub fn output_path(&self) -> Option<&str> {
        self.run.output_path.as_deref()
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // 空字串代表使用預設路徑，只檢查非空的值
        if let Some(path) = self.output_path().filter(|p| !p.is_empty()) {
            validation::validate_path("run.output_path", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[run]
count = 25
output_path = "./out/primes.json"

[monitoring]
enabled = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.count(), Some(25));
        assert_eq!(config.output_path(), Some("./out/primes.json"));
        assert!(config.monitoring_enabled());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.count(), None);
        assert_eq!(config.output_path(), None);
        assert!(!config.monitoring_enabled());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRIMES_JSON_TEST_COUNT", "12");

        let toml_content = r#"
[run]
count = ${PRIMES_JSON_TEST_COUNT}
output_path = "${PRIMES_JSON_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.count(), Some(12));
        assert_eq!(config.output_path(), Some("${PRIMES_JSON_TEST_UNSET_VAR}"));

        std::env::remove_var("PRIMES_JSON_TEST_COUNT");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[run]\ncount = \"many\"\n").unwrap_err();
        assert!(matches!(
            err,
            PrimeError::ConfigValidationError { ref field, .. } if field == "toml_parsing"
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig {
            run: RunSection {
                count: Some(1),
                output_path: Some("bad\0path".to_string()),
            },
            monitoring: None,
        };
        assert!(config.validate().is_err());

        let blank = TomlConfig::from_toml_str("[run]\noutput_path = \"\"\n").unwrap();
        assert!(blank.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[run]\ncount = 3\n").unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.count(), Some(3));
    }
}
