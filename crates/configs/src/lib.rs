use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the local storage file.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_storage_file")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), file_name: default_storage_file() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Artificial latency applied to login and signup.
    #[serde(default = "default_simulated_latency")]
    pub simulated_latency_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { simulated_latency_ms: default_simulated_latency() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    #[serde(default = "default_location_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
    /// Position reported by the built-in provider. When absent no provider is
    /// wired and the default location is used.
    #[serde(default)]
    pub fixed: Option<FixedPositionConfig>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_location_timeout(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            fixed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct FixedPositionConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    /// JSON catalog file; the built-in sample catalog is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

fn default_data_dir() -> String { "data".into() }
fn default_storage_file() -> String { "local_storage.json".into() }
fn default_simulated_latency() -> u64 { 1000 }
fn default_location_timeout() -> u64 { 5 }
fn default_latitude() -> f64 { 40.7128 }
fn default_longitude() -> f64 { -74.0060 }

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

/// Load `CONFIG_PATH` (default `config.toml`); a missing file yields the defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_or_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.location.validate()?;
        Ok(())
    }

    /// Full path of the local storage file.
    pub fn storage_path(&self) -> std::path::PathBuf {
        Path::new(&self.storage.data_dir).join(&self.storage.file_name)
    }
}

impl StorageConfig {
    pub fn normalize_from_env(&mut self) {
        if let Ok(dir) = std::env::var("DONOR_MATCH_DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
        if self.data_dir.trim().is_empty() {
            self.data_dir = "data".to_string();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() {
            return Err(anyhow!("storage.file_name must not be empty"));
        }
        if self.file_name.contains('/') || self.file_name.contains('\\') {
            return Err(anyhow!("storage.file_name must be a bare file name"));
        }
        Ok(())
    }
}

impl LocationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(anyhow!("location.timeout_secs must be a positive number of seconds"));
        }
        check_coordinates("location.default", self.default_latitude, self.default_longitude)?;
        if let Some(fixed) = self.fixed {
            check_coordinates("location.fixed", fixed.latitude, fixed.longitude)?;
        }
        Ok(())
    }
}

fn check_coordinates(name: &str, latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(anyhow!("{name} latitude must be within -90..=90"));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(anyhow!("{name} longitude must be within -180..=180"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let mut cfg: AppConfig = toml::from_str("").unwrap();
        cfg.location.validate().unwrap();
        assert_eq!(cfg.session.simulated_latency_ms, 1000);
        assert_eq!(cfg.location.timeout_secs, 5);
        assert_eq!(cfg.storage.file_name, "local_storage.json");
        assert!(cfg.catalog.path.is_none());
        cfg.storage.data_dir = "state".into();
        assert_eq!(cfg.storage_path(), Path::new("state").join("local_storage.json"));
    }

    #[test]
    fn sections_override_defaults() {
        let raw = r#"
            [storage]
            data_dir = "/tmp/dm"

            [session]
            simulated_latency_ms = 0

            [location]
            timeout_secs = 2
            fixed = { latitude = 28.6139, longitude = 77.2090 }
        "#;
        let cfg: AppConfig = toml::from_str(raw).unwrap();
        assert_eq!(cfg.storage.data_dir, "/tmp/dm");
        assert_eq!(cfg.session.simulated_latency_ms, 0);
        assert_eq!(cfg.location.timeout_secs, 2);
        assert_eq!(cfg.location.default_latitude, 40.7128);
        assert!(cfg.location.fixed.is_some());
    }

    #[test]
    fn rejects_bad_location_settings() {
        let mut loc = LocationConfig::default();
        loc.timeout_secs = 0;
        assert!(loc.validate().is_err());

        let mut loc = LocationConfig::default();
        loc.fixed = Some(FixedPositionConfig { latitude: 120.0, longitude: 0.0 });
        assert!(loc.validate().is_err());
    }

    #[test]
    fn rejects_nested_storage_file_name() {
        let storage = StorageConfig { data_dir: "data".into(), file_name: "a/b.json".into() };
        assert!(storage.validate().is_err());
    }
}
