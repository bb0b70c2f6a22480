use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use marketside_notification::{EmailConfig, Provider};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Public identity of the site, shown in page chrome and emails.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_url")]
    pub url: String,
    #[serde(default = "default_site_phone")]
    pub phone: String,
    #[serde(default = "default_site_email")]
    pub email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            url: default_site_url(),
            phone: default_site_phone(),
            email: default_site_email(),
        }
    }
}

fn default_site_name() -> String {
    "Marketside".to_string()
}

fn default_site_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_site_phone() -> String {
    "(555) 010-2030".to_string()
}

fn default_site_email() -> String {
    "hello@marketside.agency".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (RESEND_API_KEY, CONTACT_EMAIL, FROM_EMAIL)
    /// 2. Environment variables (MARKETSIDE__EMAIL__API_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (MARKETSIDE__EMAIL__API_KEY, etc.)
        builder = builder.add_source(
            Environment::with_prefix("MARKETSIDE")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the plain variables hosting platforms usually set
        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }
        if let Ok(contact) = env::var("CONTACT_EMAIL") {
            builder = builder.set_override("email.contact_address", contact)?;
        }
        if let Ok(from) = env::var("FROM_EMAIL") {
            builder = builder.set_override("email.from_address", from)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// A missing delivery credential is a deployment error and stops startup.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.contact_address.trim().is_empty() {
            return Err("Email contact_address (operator mailbox) must be set".to_string());
        }
        if self.email.provider == Provider::Resend && self.email.api_key.trim().is_empty() {
            return Err("Email api_key is required when provider is resend".to_string());
        }
        if self.email.provider == Provider::Smtp && self.email.smtp_host.trim().is_empty() {
            return Err("Email smtp_host is required when provider is smtp".to_string());
        }
        Ok(())
    }
}
