use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Rendered usage text or clap message
    #[error("{0}")]
    Usage(String),
    #[error("'{arg}' is not a valid percentage for {flag}")]
    InvalidPercentage { flag: &'static str, arg: String },
    #[error("minimum brightness {value} from {origin} is outside 0..=100")]
    InvalidFloor { value: f64, origin: String },
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid value '{value}' read from '{}'", path.display())]
    Malformed { value: String, path: PathBuf },
    #[error("maximum brightness in '{}' is zero", path.display())]
    ZeroMax { path: PathBuf },
    #[error("invalid config file '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, Error>;
