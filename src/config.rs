use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_DEVICE: &str = "/sys/class/backlight/intel_backlight";
pub const DEFAULT_MIN_PERCENT: f64 = 50.;
const CONFIG_FILE: &str = "config.json";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding `max_brightness` and `brightness`
    pub device: PathBuf,
    /// Lowest allowed brightness, in percent of the maximum
    pub min_percent: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            device: PathBuf::from(DEFAULT_DEVICE),
            min_percent: DEFAULT_MIN_PERCENT,
        }
    }
}

impl Config {
    /// Load from an explicit file, or from the per-user config directory if
    /// none is given. Only the per-user file is allowed to be missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Config::from_file(path),
            None => match default_path() {
                Some(path) => match Config::from_file(&path) {
                    Err(Error::Io { ref source, .. })
                        if source.kind() == io::ErrorKind::NotFound =>
                    {
                        debug!("no config at {}, using defaults", path.display());
                        Ok(Config::default())
                    }
                    res => res,
                },
                None => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Config = serde_json::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        check_floor(config.min_percent, || path.display().to_string())?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Apply command line overrides
    pub fn with_overrides(mut self, device: Option<PathBuf>, min_percent: Option<f64>) -> Result<Self> {
        if let Some(device) = device {
            self.device = device;
        }
        if let Some(min_percent) = min_percent {
            check_floor(min_percent, || "--min".to_owned())?;
            self.min_percent = min_percent;
        }
        Ok(self)
    }

    pub fn max_path(&self) -> PathBuf {
        self.device.join("max_brightness")
    }

    pub fn brightness_path(&self) -> PathBuf {
        self.device.join("brightness")
    }
}

fn check_floor(value: f64, origin: impl FnOnce() -> String) -> Result<()> {
    if (0. ..=100.).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidFloor {
            value,
            origin: origin(),
        })
    }
}

fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "brightness").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
