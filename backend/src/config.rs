use anyhow::{bail, Context, Result};
use chrono::Weekday;
use log::info;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::domain::{default_month_names, default_weekday_labels, WeekStartConvention};

pub const CONFIG_PATH_ENV: &str = "SCHOOL_CALENDAR_CONFIG";
pub const PORT_ENV: &str = "SCHOOL_CALENDAR_PORT";

/// Service configuration, read from a YAML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Origin allowed to call the API from a browser
    pub cors_origin: String,
    /// First column of the calendar header
    pub week_start: Weekday,
    /// Monday-first weekday labels
    pub weekday_labels: Vec<String>,
    /// Month names, January first
    pub month_names: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            cors_origin: "http://localhost:8080".to_string(),
            week_start: Weekday::Mon,
            weekday_labels: default_weekday_labels(),
            month_names: default_month_names(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `SCHOOL_CALENDAR_CONFIG`, falling back to the
    /// per-user config directory. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                info!("No config file at {}, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };

        if let Ok(port) = std::env::var(PORT_ENV) {
            config.port = port
                .parse()
                .with_context(|| format!("Invalid {} value '{}'", PORT_ENV, port))?;
        }

        Ok(config)
    }

    /// Read and validate a YAML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.weekday_labels.len() != 7 {
            bail!("weekday_labels must have 7 entries, got {}", self.weekday_labels.len());
        }
        if self.month_names.len() != 12 {
            bail!("month_names must have 12 entries, got {}", self.month_names.len());
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn week_start_convention(&self) -> Result<WeekStartConvention> {
        WeekStartConvention::new(self.week_start, &self.weekday_labels)
            .context("Invalid weekday_labels")
    }
}

fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_PATH_ENV) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|dir| dir.join("school-calendar").join("config.yaml")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.week_start, Weekday::Mon);
        assert_eq!(config.week_start_convention().unwrap().labels()[0], "Seg");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml("port: 4100\nweek_start: Sun\n").unwrap();
        assert_eq!(config.port, 4100);
        assert_eq!(config.week_start, Weekday::Sun);
        assert_eq!(config.month_names, default_month_names());
        assert_eq!(config.week_start_convention().unwrap().labels()[0], "Dom");
    }

    #[test]
    fn test_rejects_wrong_label_count() {
        let result = AppConfig::from_yaml("weekday_labels: [Mon, Tue]\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("weekday_labels"));

        let result = AppConfig::from_yaml("month_names: [Jan]\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_week_start_convention_rejects_unvalidated_labels() {
        let config = AppConfig {
            weekday_labels: vec!["Seg".to_string()],
            ..AppConfig::default()
        };
        assert!(config.week_start_convention().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "host: 0.0.0.0\nport: 8081\nweekday_labels: [Mon, Tue, Wed, Thu, Fri, Sat, Sun]"
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8081");
        assert_eq!(config.weekday_labels[6], "Sun");
    }

    #[test]
    fn test_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::from_file(&dir.path().join("absent.yaml")).is_err());
    }
}
