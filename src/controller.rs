use crate::config::Config;
use crate::error::{Error, Result};
use crate::util::clamp;

/// A requested change of brightness, in percent of the maximum
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Absolute(f64),
    Relative(f64),
}

/// Computes brightness in device units, kept as `f64` until it is written.
#[derive(Debug)]
pub struct BrightnessController {
    max: f64,
    min: f64,
    current: f64,
}

impl BrightnessController {
    pub fn load(config: &Config, max: f64, current: f64) -> Result<Self> {
        if max <= 0. {
            return Err(Error::ZeroMax {
                path: config.max_path(),
            });
        }
        Ok(BrightnessController {
            max,
            min: max * config.min_percent / 100.,
            current,
        })
    }

    pub fn compute_absolute(&mut self, percentage: f64) {
        self.current = self.max * percentage / 100.;
    }

    pub fn compute_relative(&mut self, percentage: f64) {
        self.current += self.max * percentage / 100.;
    }

    pub fn clamp(&mut self) {
        self.current = clamp(self.current, self.min, self.max);
    }

    pub fn apply(&mut self, op: Operation) {
        match op {
            Operation::Absolute(p) => self.compute_absolute(p),
            Operation::Relative(p) => self.compute_relative(p),
        }
        self.clamp();
    }

    /// Current brightness in percent, rounded to the nearest integer
    pub fn query_percentage(&self) -> u64 {
        (self.current * 100. / self.max).round() as u64
    }

    /// Current brightness rounded to device units
    pub fn native(&self) -> u64 {
        self.current.round() as u64
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
