use crate::configuration::constants::common::{
    DEFAULT_OUTPUT_FOLDER, DEFAULT_SUBTITLE, DEFAULT_TITLE, ENV_PREFIX,
};
use config::{Config, ConfigError, Environment, File};
use serde_derive::Deserialize;
use std::path::PathBuf;

/// Reporter options. Every key is optional, missing ones fall back to [`Default`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReporterSettings {
    /// Directory receiving `index.html` (and `report.json` when enabled).
    pub output_folder: PathBuf,
    pub title: String,
    pub subtitle: String,
    /// Also write a JSON rendition of the report.
    pub json: bool,
}

impl Default for ReporterSettings {
    fn default() -> Self {
        Self {
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            title: DEFAULT_TITLE.to_owned(),
            subtitle: DEFAULT_SUBTITLE.to_owned(),
            json: false,
        }
    }
}

impl ReporterSettings {
    /// Layers an optional settings file (YAML, JSON, TOML, HJSON) and
    /// `EXTENT_*` environment variables over the defaults.
    pub fn load(file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Config::new();
        if let Some(file) = file {
            config.merge(File::from(file))?;
        }
        config.merge(Environment::with_prefix(ENV_PREFIX))?;

        config.try_into()
    }

    pub fn with_output_folder<P: Into<PathBuf>>(mut self, output_folder: P) -> Self {
        self.output_folder = output_folder.into();
        self
    }
}
