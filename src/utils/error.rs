use thiserror::Error;

#[derive(Error, Debug)]
pub enum NameListError {
    #[error("Malformed name at index {index} ({name:?}): {reason}")]
    MalformedName {
        index: usize,
        name: String,
        reason: String,
    },

    #[error("Invalid argument '{field}' = {value:?}: {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("TOML parsing error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl NameListError {
    /// 錯誤是否由呼叫端的輸入造成（而非配置或環境）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NameListError::MalformedName { .. } | NameListError::InvalidArgument { .. }
        )
    }

    /// 給使用者的修正建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NameListError::MalformedName { .. } => {
                "Use \"First Last\" names, or relax [parsing] single_token / multi_token"
            }
            NameListError::InvalidArgument { .. } => "Check the argument passed to the operation",
            NameListError::ConfigError { .. } | NameListError::ConfigParseError(_) => {
                "Check the configuration file syntax and values"
            }
            NameListError::IoError(_) => "Check that the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, NameListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_name_message() {
        let err = NameListError::MalformedName {
            index: 2,
            name: "Cher".to_string(),
            reason: "missing last name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed name at index 2 (\"Cher\"): missing last name"
        );
        assert!(err.is_input_error());
    }

    #[test]
    fn test_config_error_is_not_input_error() {
        let err = NameListError::ConfigError {
            message: "bad".to_string(),
        };
        assert!(!err.is_input_error());
        assert!(err.recovery_suggestion().contains("configuration"));
    }

    #[test]
    fn test_recovery_suggestion_per_variant() {
        let malformed = NameListError::MalformedName {
            index: 0,
            name: "Cher".to_string(),
            reason: "missing last name".to_string(),
        };
        assert!(malformed.recovery_suggestion().contains("single_token"));

        let argument = NameListError::InvalidArgument {
            field: "letter".to_string(),
            value: "ab".to_string(),
            reason: "Expected exactly one character, got 2".to_string(),
        };
        assert!(argument.is_input_error());
        assert!(argument.recovery_suggestion().contains("argument"));

        let parse = toml::from_str::<toml::Value>("level = ").unwrap_err();
        let parse = NameListError::from(parse);
        assert!(!parse.is_input_error());
        assert!(parse.recovery_suggestion().contains("configuration"));

        let io = NameListError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(!io.is_input_error());
        assert!(io.recovery_suggestion().contains("readable"));
    }
}
