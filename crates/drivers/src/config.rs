use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use template_picker_application::ApplicationError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub assets_dir: PathBuf,
    pub selection_db_path: PathBuf,
    pub log_filter: String,
    pub grid_columns: usize,
    pub narrow_breakpoint: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            selection_db_path: PathBuf::from("selection.sqlite3"),
            log_filter: "info".to_string(),
            grid_columns: 3,
            narrow_breakpoint: 768.0,
        }
    }
}

impl AppConfig {
    /// Reads a TOML config file; fields it omits keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ApplicationError> {
        let text = fs::read_to_string(path).map_err(|error| {
            ApplicationError::Io(format!("failed to read {}: {error}", path.display()))
        })?;
        let config: Self = toml::from_str(&text).map_err(|error| {
            ApplicationError::Config(format!("invalid config {}: {error}", path.display()))
        })?;
        if config.grid_columns == 0 {
            return Err(ApplicationError::Config(
                "grid_columns must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn with_overrides(mut self, assets_dir: Option<PathBuf>, db_path: Option<PathBuf>) -> Self {
        if let Some(assets_dir) = assets_dir {
            self.assets_dir = assets_dir;
        }
        if let Some(db_path) = db_path {
            self.selection_db_path = db_path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_uses_local_assets_and_database() {
        let config = AppConfig::default();
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.selection_db_path, PathBuf::from("selection.sqlite3"));
        assert_eq!(config.grid_columns, 3);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("picker.toml");
        fs::write(&path, "assets_dir = \"templates\"\ngrid_columns = 4\n").expect("write");

        let config = AppConfig::load(&path).expect("load");
        assert_eq!(config.assets_dir, PathBuf::from("templates"));
        assert_eq!(config.grid_columns, 4);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("picker.toml");
        fs::write(&path, "theme = \"dark\"\n").expect("write");

        assert!(matches!(
            AppConfig::load(&path),
            Err(ApplicationError::Config(_))
        ));
    }

    #[test]
    fn zero_columns_are_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("picker.toml");
        fs::write(&path, "grid_columns = 0\n").expect("write");

        assert!(matches!(
            AppConfig::load(&path),
            Err(ApplicationError::Config(_))
        ));
    }

    #[test]
    fn cli_overrides_win() {
        let config = AppConfig::default()
            .with_overrides(Some(PathBuf::from("elsewhere")), None);
        assert_eq!(config.assets_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.selection_db_path, PathBuf::from("selection.sqlite3"));
    }
}
