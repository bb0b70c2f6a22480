use std::fmt;

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString};

/// Which transport carries outgoing mail.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    /// Resend transactional email HTTP API
    #[default]
    Resend,
    Smtp,
    /// Write emails to the log instead of delivering them
    Log,
}

#[derive(Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default)]
    pub contact_address: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            api_key: String::new(),
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            from_address: default_from_address(),
            contact_address: String::new(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
        }
    }
}

// Secrets stay out of logs and panics.
impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("provider", &self.provider)
            .field("api_key", &redact(&self.api_key))
            .field("api_url", &self.api_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("from_address", &self.from_address)
            .field("contact_address", &self.contact_address)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &redact(&self.smtp_password))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "[redacted]" }
}

fn default_api_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_from_address() -> String {
    "Marketside <noreply@marketside.agency>".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let config = EmailConfig {
            api_key: "re_live_123".to_owned(),
            smtp_password: "hunter2".to_owned(),
            ..Default::default()
        };

        let debug = format!("{config:?}");
        assert!(!debug.contains("re_live_123"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[redacted]"));
    }

    #[test]
    fn test_provider_parses_lowercase() {
        assert_eq!("smtp".parse::<Provider>().unwrap(), Provider::Smtp);
        assert_eq!(Provider::Log.to_string(), "log");
    }
}
