use crate::errors::{AppError, AppResult};
use crate::models::DepartmentNames;
use crate::models::departments::default_department_names;
use crate::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Department code → friendly name shown next to the code
    #[serde(default = "default_department_names")]
    pub departments: BTreeMap<String, String>,
    /// Category request used when `report` gets no `--subject`
    #[serde(default = "default_subject")]
    pub default_subject: String,
    #[serde(default)]
    pub has_headers: bool,
    #[serde(default = "default_format")]
    pub default_format: ReportFormat,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_subject() -> String {
    "missed punch".to_string()
}
fn default_format() -> ReportFormat {
    ReportFormat::Text
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            departments: default_department_names(),
            default_subject: default_subject(),
            has_headers: false,
            default_format: default_format(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimesheets")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".rtimesheets")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimesheets.conf")
    }

    /// Load from `path` (or the default location); a missing file means defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Write the default configuration to `path` (or the default location).
    /// An existing file is kept unless `force` is set.
    pub fn init_file(path: Option<&Path>, force: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "configuration file already exists: {} (use --force to replace it)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }

        let yaml = Self::default().to_yaml()?;
        fs::write(&path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))?;

        Ok(path)
    }

    pub fn department_names(&self) -> DepartmentNames {
        DepartmentNames::new(self.departments.clone())
    }
}
