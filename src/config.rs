// std imports
use std::path::{Path, PathBuf};

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::error::Result;
use crate::settings::Settings;

// ---

pub const APP_NAME: &str = "pathmatch";
pub const CONFIG_ENV: &str = "PATHMATCH_CONFIG";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the process-wide settings, see [`global`].
pub fn get() -> &'static Settings {
    global::get()
}

/// Returns the embedded default settings.
pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Loads settings from the file named by the `PATHMATCH_CONFIG` environment variable,
/// or returns the defaults if the variable is not set or empty.
pub fn load() -> Result<Settings> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => at([PathBuf::from(path)]).load(),
        _ => Ok(default().clone()),
    }
}

/// Creates a loader for the given configuration files.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader {
        paths: paths.into_iter().map(|p| p.as_ref().to_owned()).collect(),
    }
}

// ---

/// Loads settings from a list of configuration files layered over the defaults.
pub struct Loader {
    paths: Vec<PathBuf>,
}

impl Loader {
    pub fn load(self) -> Result<Settings> {
        Settings::load(&self.paths)
    }
}

// ---

pub mod global {
    // third-party imports
    use once_cell::sync::OnceCell;

    // local imports
    use crate::settings::Settings;

    static GLOBAL: OnceCell<Settings> = OnceCell::new();

    /// Installs the process-wide settings.
    ///
    /// Has no effect if the settings were already initialized or accessed.
    pub fn initialize(settings: Settings) {
        if GLOBAL.set(settings).is_err() {
            log::debug!("global settings already initialized, ignoring");
        }
    }

    /// Returns the process-wide settings, loading them on first access.
    pub fn get() -> &'static Settings {
        GLOBAL.get_or_init(|| {
            super::load().unwrap_or_else(|e| {
                log::warn!("{e}, using default settings");
                super::default().clone()
            })
        })
    }
}
