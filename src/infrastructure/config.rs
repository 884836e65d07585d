use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use serde::Deserialize;

use crate::presentation::{
    admin::{navigation::MenuEntry, users::UserRecord},
    config::keybindings,
};
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

const CONFIG_FILES: [(&str, config::FileFormat); 5] = [
    ("config.json5", config::FileFormat::Json5),
    ("config.json", config::FileFormat::Json),
    ("config.yaml", config::FileFormat::Yaml),
    ("config.toml", config::FileFormat::Toml),
    ("config.ini", config::FileFormat::Ini),
];

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Drop rows left empty after their last element is removed.
    #[serde(default)]
    pub prune_empty_rows: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub brand: String,
    /// Logo shown in the navigation drawer instead of the brand.
    #[serde(default)]
    pub menu_logo: Option<String>,
    #[serde(default)]
    pub menu: Vec<MenuEntry>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

impl Config {
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::load(&utils::get_config_dir(), &utils::get_data_dir())
    }

    /// Built-in defaults overlaid with any config file found in `config_dir`.
    /// Tables merge key by key.
    pub fn load(config_dir: &Path, data_dir: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let mut found_config = false;
        for (file, format) in &CONFIG_FILES {
            let path = config_dir.join(file);
            if path.exists() {
                found_config = true;
            }
            builder = builder.add_source(config::File::from(path).format(*format).required(false));
        }
        if !found_config {
            tracing::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        if cfg.brand.is_empty() {
            return Err(config::ConfigError::NotFound(String::from("brand")));
        }
        Ok(cfg)
    }
}
