use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::consts::APP_DIR;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
}

/// Result of searching the config locations
#[derive(Debug, Default)]
pub(crate) struct ConfigLoad {
    pub(crate) config: Config,
    /// File the config came from, if any
    pub(crate) path: Option<PathBuf>,
    /// Files that exist but failed to parse
    pub(crate) errors: Vec<(PathBuf, String)>,
}

impl ConfigLoad {
    /// Report what was loaded; call once logging is initialized.
    pub(crate) fn log(&self) {
        for (path, error) in &self.errors {
            tracing::warn!(path = %path.display(), error = %error, "failed to parse config");
        }
        if let Some(path) = &self.path {
            tracing::debug!(path = %path.display(), "loaded config");
        }
    }
}

impl Config {
    /// Load the first config file that exists and parses, or the defaults.
    pub(crate) fn load() -> ConfigLoad {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(paths: &[PathBuf]) -> ConfigLoad {
        let mut errors = Vec::new();

        for path in paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        return ConfigLoad {
                            config,
                            path: Some(path.clone()),
                            errors,
                        };
                    }
                    Err(e) => errors.push((path.clone(), e.to_string())),
                }
            }
        }

        ConfigLoad {
            errors,
            ..ConfigLoad::default()
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/studyplan/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.studyplan.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".studyplan.toml"));
        }

        paths
    }
}
