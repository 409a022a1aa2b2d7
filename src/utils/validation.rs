use crate::utils::error::{NameListError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 確認參數剛好是一個字元，並回傳該字元
pub fn validate_single_char(field_name: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        (None, _) => Err(NameListError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty".to_string(),
        }),
        (Some(_), Some(_)) => Err(NameListError::InvalidArgument {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!(
                "Expected exactly one character, got {}",
                value.chars().count()
            ),
        }),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(NameListError::InvalidArgument {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Valid values: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_single_char() {
        assert_eq!(validate_single_char("letter", "a").unwrap(), 'a');
        assert_eq!(validate_single_char("letter", "é").unwrap(), 'é');
        assert!(validate_single_char("letter", "").is_err());
        assert!(validate_single_char("letter", "ab").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "info", &["info", "debug"]).is_ok());
        let err = validate_one_of("logging.level", "loud", &["info", "debug"]).unwrap_err();
        assert!(err.to_string().contains("info, debug"));
    }
}
