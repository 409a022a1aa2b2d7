use crate::core::PolicyProvider;
use crate::domain::model::NamePolicy;
use crate::utils::error::{NameListError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameConfig {
    #[serde(default)]
    pub parsing: NamePolicy,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "compact".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl NameConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: Self = toml::from_str(&processed_content)?;
        config.validate()?;
        tracing::debug!("Loaded name config: {:?}", config);
        Ok(config)
    }

    /// 替換環境變數 (例如 ${NAME_POLICY})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NameListError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for NameConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;
        Ok(())
    }
}

impl PolicyProvider for NameConfig {
    fn name_policy(&self) -> NamePolicy {
        self.parsing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MultiTokenPolicy, SingleTokenPolicy};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[parsing]
single_token = "reject"
multi_token = "second_token"

[logging]
level = "debug"
format = "json"
"#;

        let config = NameConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.parsing.single_token, SingleTokenPolicy::Reject);
        assert_eq!(config.parsing.multi_token, MultiTokenPolicy::SecondToken);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_empty_config_uses_lenient_defaults() {
        let config = NameConfig::from_toml_str("").unwrap();
        assert_eq!(config.name_policy(), NamePolicy::lenient());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let config = NameConfig::from_toml_str("[parsing]\nmulti_token = \"reject\"\n").unwrap();
        assert_eq!(config.parsing.single_token, SingleTokenPolicy::Allow);
        assert_eq!(config.parsing.multi_token, MultiTokenPolicy::Reject);
    }

    #[test]
    fn test_unknown_policy_is_parse_error() {
        let result = NameConfig::from_toml_str("[parsing]\nsingle_token = \"maybe\"\n");
        assert!(matches!(result, Err(NameListError::ConfigParseError(_))));
    }

    #[test]
    fn test_invalid_log_level() {
        let result = NameConfig::from_toml_str("[logging]\nlevel = \"loud\"\n");
        assert!(matches!(
            result,
            Err(NameListError::InvalidArgument { ref field, .. }) if field == "logging.level"
        ));
    }

    #[test]
    fn test_json_log_format_round_trips() {
        let config = NameConfig::from_toml_str("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.logging.format, "json");

        let serialized = toml::to_string(&config).unwrap();
        let reparsed = NameConfig::from_toml_str(&serialized).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_invalid_log_format() {
        let result = NameConfig::from_toml_str("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(NameListError::InvalidArgument { ref field, ref value, .. })
                if field == "logging.format" && value == "xml"
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NAME_LIST_OPS_TEST_MULTI", "second_token");
        let content = "[parsing]\nmulti_token = \"${NAME_LIST_OPS_TEST_MULTI}\"\n";
        let config = NameConfig::from_toml_str(content).unwrap();
        assert_eq!(config.parsing.multi_token, MultiTokenPolicy::SecondToken);
    }

    #[test]
    fn test_missing_env_var_left_verbatim() {
        let processed =
            NameConfig::substitute_env_vars("level = \"${NAME_LIST_OPS_TEST_UNSET_VAR}\"").unwrap();
        assert_eq!(processed, "level = \"${NAME_LIST_OPS_TEST_UNSET_VAR}\"");
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[parsing]\nsingle_token = \"reject\"").unwrap();

        let config = NameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.parsing.single_token, SingleTokenPolicy::Reject);
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let result = NameConfig::from_file("/nonexistent/name-list-ops.toml");
        assert!(matches!(result, Err(NameListError::IoError(_))));
    }
}
