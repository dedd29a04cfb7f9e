//! Configuration loading from TOML files
//!
//! Config file is selected via the --config command line argument; loading
//! falls back to built-in defaults when the file is missing or malformed.
//! atmosfair credentials may also come from the ATMOS_ACCOUNT_ID and
//! ATMOS_PASSWORD environment variables.

use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AtmosfairConfig {
    #[serde(default = "default_atmos_host")]
    pub host: String,
    /// Account id for the calculation API; falls back to ATMOS_ACCOUNT_ID
    #[serde(default = "default_account_id")]
    pub account_id: String,
    /// Password for the calculation API; falls back to ATMOS_PASSWORD
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_atmos_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for AtmosfairConfig {
    fn default() -> Self {
        Self {
            host: default_atmos_host(),
            account_id: default_account_id(),
            password: default_password(),
            timeout_ms: default_atmos_timeout_ms(),
        }
    }
}

fn default_atmos_host() -> String {
    "https://api.atmosfair.de/api/emission/flight".to_string()
}

fn default_account_id() -> String {
    env::var("ATMOS_ACCOUNT_ID").unwrap_or_default()
}

fn default_password() -> String {
    env::var("ATMOS_PASSWORD").unwrap_or_default()
}

fn default_atmos_timeout_ms() -> u64 {
    30_000
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    #[serde(default = "default_roster_file")]
    pub file: String,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self { file: default_roster_file() }
    }
}

fn default_roster_file() -> String {
    "fixtures/roster.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_report_dir")]
    pub dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { dir: default_report_dir() }
    }
}

fn default_report_dir() -> String {
    "output/artist-pages".to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct TomlConfig {
    #[serde(default)]
    atmosfair: AtmosfairConfig,
    #[serde(default)]
    roster: RosterConfig,
    #[serde(default)]
    report: ReportConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    atmos_host: String,
    atmos_account_id: String,
    atmos_password: String,
    atmos_timeout_ms: u64,
    roster_file: String,
    report_dir: String,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            atmos_host: default_atmos_host(),
            atmos_account_id: default_account_id(),
            atmos_password: default_password(),
            atmos_timeout_ms: default_atmos_timeout_ms(),
            roster_file: default_roster_file(),
            report_dir: default_report_dir(),
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self {
            atmos_host: toml_config.atmosfair.host,
            atmos_account_id: toml_config.atmosfair.account_id,
            atmos_password: toml_config.atmosfair.password,
            atmos_timeout_ms: toml_config.atmosfair.timeout_ms,
            roster_file: toml_config.roster.file,
            report_dir: toml_config.report.dir,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    pub fn atmos_host(&self) -> &str {
        &self.atmos_host
    }

    pub fn atmos_account_id(&self) -> &str {
        &self.atmos_account_id
    }

    pub fn atmos_password(&self) -> &str {
        &self.atmos_password
    }

    pub fn atmos_timeout_ms(&self) -> u64 {
        self.atmos_timeout_ms
    }

    pub fn roster_file(&self) -> &str {
        &self.roster_file
    }

    pub fn report_dir(&self) -> &str {
        &self.report_dir
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.atmos_host(), "https://api.atmosfair.de/api/emission/flight");
        assert_eq!(config.atmos_timeout_ms(), 30_000);
        assert_eq!(config.roster_file(), "fixtures/roster.json");
        assert_eq!(config.report_dir(), "output/artist-pages");
    }

    #[test]
    fn test_partial_toml_uses_section_defaults() {
        let toml_config: TomlConfig = toml::from_str(
            r#"
            [atmosfair]
            account_id = "acct-1"
            password = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(toml_config.atmosfair.account_id, "acct-1");
        assert_eq!(toml_config.atmosfair.host, default_atmos_host());
        assert_eq!(toml_config.roster.file, default_roster_file());
        assert_eq!(toml_config.report.dir, default_report_dir());
    }
}
