//! Email configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key
    pub resend_api_key: Option<Secret<String>>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Inbox receiving each submission summary
    pub admin_recipient: Option<String>,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    pub fn api_key(&self) -> Option<&str> {
        self.resend_api_key.as_ref().map(|key| key.expose_secret().as_str())
    }

    /// Validate email configuration
    ///
    /// Key and recipient are only checked when `required` is set.
    pub fn validate(&self, required: bool) -> Result<(), ValidationError> {
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        if !required {
            return Ok(());
        }
        match self.api_key() {
            None | Some("") => return Err(ValidationError::MissingRequired("EMAIL__RESEND_API_KEY")),
            Some(key) if !key.starts_with("re_") => return Err(ValidationError::InvalidResendKey),
            Some(_) => {}
        }
        match self.admin_recipient.as_deref() {
            None | Some("") => Err(ValidationError::MissingRequired("EMAIL__ADMIN_RECIPIENT")),
            Some(addr) if !addr.contains('@') => Err(ValidationError::InvalidAdminRecipient),
            Some(_) => Ok(()),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            admin_recipient: None,
        }
    }
}

fn default_from_email() -> String {
    "noreply@threecontradictions.com".to_string()
}

fn default_from_name() -> String {
    "The Three Contradictions".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> EmailConfig {
        EmailConfig {
            resend_api_key: Some(Secret::new("re_abcd1234".to_string())),
            admin_recipient: Some("admin@example.com".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_email_config_defaults() {
        let config = EmailConfig::default();
        assert_eq!(config.from_email, "noreply@threecontradictions.com");
        assert_eq!(config.from_name, "The Three Contradictions");
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_from_header() {
        let config = EmailConfig {
            from_email: "support@example.com".to_string(),
            from_name: "Support Team".to_string(),
            ..Default::default()
        };
        assert_eq!(config.from_header(), "Support Team <support@example.com>");
    }

    #[test]
    fn test_defaults_valid_when_not_required() {
        assert!(EmailConfig::default().validate(false).is_ok());
    }

    #[test]
    fn test_validation_missing_api_key() {
        assert_eq!(
            EmailConfig::default().validate(true),
            Err(ValidationError::MissingRequired("EMAIL__RESEND_API_KEY"))
        );
    }

    #[test]
    fn test_validation_invalid_api_key_prefix() {
        let config = EmailConfig {
            resend_api_key: Some(Secret::new("sk_xxx".to_string())),
            ..valid()
        };
        assert_eq!(config.validate(true), Err(ValidationError::InvalidResendKey));
    }

    #[test]
    fn test_validation_missing_recipient() {
        let config = EmailConfig {
            admin_recipient: None,
            ..valid()
        };
        assert_eq!(
            config.validate(true),
            Err(ValidationError::MissingRequired("EMAIL__ADMIN_RECIPIENT"))
        );
    }

    #[test]
    fn test_validation_invalid_from_email() {
        let config = EmailConfig {
            from_email: "invalid-email".to_string(),
            ..valid()
        };
        assert_eq!(config.validate(true), Err(ValidationError::InvalidFromEmail));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(valid().validate(true).is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        assert!(!format!("{:?}", valid()).contains("re_abcd1234"));
    }
}
