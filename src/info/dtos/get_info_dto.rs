use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::prompts::enums::platform::Platform;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GetInfoDto {
    /// Looks up the platform entry for this platform instead of the
    /// session's current one.
    #[validate(custom(function = "validate_platform"))]
    pub platform: Option<String>,
}

impl GetInfoDto {
    pub fn platform(&self) -> Option<Platform> {
        self.platform.as_deref().and_then(Platform::from_value)
    }
}

fn validate_platform(value: &str) -> Result<(), ValidationError> {
    if Platform::from_value(value).is_none() {
        return Err(ValidationError::new("validate_platform"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platform_is_valid() {
        let dto = GetInfoDto {
            platform: Some("Midjourney".to_string()),
        };

        assert!(dto.validate().is_ok());
        assert_eq!(dto.platform(), Some(Platform::Midjourney));
    }

    #[test]
    fn test_unknown_platform_is_invalid() {
        let dto = GetInfoDto {
            platform: Some("Dalle".to_string()),
        };

        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_missing_platform_is_valid() {
        assert!(GetInfoDto::default().validate().is_ok());
    }
}
