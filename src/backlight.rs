use std::fs::{self, OpenOptions};
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Error, Result};
use crate::util::parse_reading;

// &mut self is used because we want to cache file system accesses
pub trait BacklightDevice {
    /// Maximum brightness in native units
    fn max(&mut self) -> Result<f64>;
    /// Current brightness in native units
    fn current(&mut self) -> Result<f64>;
    /// Overwrite the current brightness
    fn write(&mut self, value: u64) -> Result<()>;
}

/// A device under /sys/class/backlight
pub struct Sysfs {
    path: PathBuf,
    max: Option<f64>,
    current: Option<f64>,
}

impl Sysfs {
    pub fn new(path: &Path) -> Self {
        Sysfs {
            path: PathBuf::from(path),
            max: None,
            current: None,
        }
    }

    fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    fn get_number(&self, name: &str) -> Result<f64> {
        let filename = self.file(name);
        let content = fs::read_to_string(&filename).map_err(|e| Error::io(&filename, e))?;
        let value = parse_reading(&content, &filename)?;
        debug!("read {} from {}", value, filename.display());
        Ok(value)
    }
}

impl BacklightDevice for Sysfs {
    fn max(&mut self) -> Result<f64> {
        match self.max {
            Some(max) => Ok(max),
            None => {
                let max = self.get_number("max_brightness")?;
                self.max = Some(max);
                Ok(max)
            }
        }
    }

    fn current(&mut self) -> Result<f64> {
        match self.current {
            Some(current) => Ok(current),
            None => {
                let current = self.get_number("brightness")?;
                self.current = Some(current);
                Ok(current)
            }
        }
    }

    fn write(&mut self, value: u64) -> Result<()> {
        let filename = self.file("brightness");
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&filename)
            .map_err(|e| Error::io(&filename, e))?;
        writeln!(file, "{}", value).map_err(|e| Error::io(&filename, e))?;
        debug!("wrote {} to {}", value, filename.display());
        self.current = Some(value as f64);
        Ok(())
    }
}
