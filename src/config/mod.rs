//! Configuration loading and management
//!
//! The application is configured from a single YAML file: bind address,
//! the shared admin credential, default page size and the initial site
//! settings. Everything has a default so a config file is optional in
//! development.

use crate::entities::settings::SiteSettings;
use anyhow::Result;
use serde::Deserialize;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, e.g. "127.0.0.1:3000"
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
        }
    }
}

/// The single shared admin credential
#[derive(Debug, Clone, Deserialize)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,

    #[serde(default = "default_admin_name")]
    pub name: String,
}

fn default_admin_name() -> String {
    "Admin User".to_string()
}

impl Default for AdminAccount {
    fn default() -> Self {
        Self {
            email: "admin@example.com".to_string(),
            password: "admin123".to_string(),
            name: default_admin_name(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub admin: AdminAccount,
    pub site: SiteSettings,

    /// Default page size for admin list screens
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            admin: AdminAccount::default(),
            site: SiteSettings::default(),
            page_size: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
