use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ThemeManager;

#[derive(Debug, Serialize, Deserialize, Default)]
struct ThemeConfig {
    theme: String,
}

/// Persists the chosen theme name under the user config dir so the next
/// launch starts where 't' left off. Read/write failures are non-fatal.
pub struct ThemeLoader {
    path: Option<PathBuf>,
}

impl ThemeLoader {
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join("samtal").join("theme.toml")),
        }
    }

    #[cfg(test)]
    fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    pub fn initialize_theme_manager(&self, preferred: &str) -> ThemeManager {
        let mut manager = ThemeManager::new();
        let name = self.load_theme_name().unwrap_or_else(|| preferred.to_string());
        if !manager.set_theme_by_name(&name) {
            tracing::debug!("unknown theme '{name}', keeping default");
        }
        manager
    }

    pub fn load_theme_name(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let raw = std::fs::read_to_string(path).ok()?;
        let config: ThemeConfig = toml::from_str(&raw).ok()?;
        Some(config.theme)
    }

    pub fn save_theme_name(&self, name: &str) -> std::io::Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config = ThemeConfig {
            theme: name.to_string(),
        };
        let raw = toml::to_string(&config).map_err(std::io::Error::other)?;
        std::fs::write(path, raw)
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ThemeLoader::with_path(dir.path().join("theme.toml"));

        loader.save_theme_name("Midnatt").unwrap();
        assert_eq!(loader.load_theme_name(), Some("Midnatt".to_string()));

        let manager = loader.initialize_theme_manager("Studio");
        assert_eq!(manager.current_theme_name(), "Midnatt");
    }

    #[test]
    fn test_missing_file_falls_back_to_preferred() {
        let dir = tempfile::tempdir().unwrap();
        let loader = ThemeLoader::with_path(dir.path().join("absent.toml"));
        let manager = loader.initialize_theme_manager("studio");
        assert_eq!(manager.current_theme_name(), "Studio");
    }
}
