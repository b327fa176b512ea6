// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub cache: CacheSettings,
}

impl Settings {
    /// Loads the embedded defaults overlaid with each of `files` in order.
    ///
    /// The format of each file is detected by its extension.
    pub fn load<I, P>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        for file in files {
            log::debug!("loading settings from {}", file.as_ref().display());
            builder = builder.add_source(File::from(file.as_ref()));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .and_then(Config::try_deserialize)
            .expect("embedded default settings must be valid")
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CacheSettings {
    pub initial_capacity: usize,
    #[serde(default)]
    pub preload: Vec<String>,
}
