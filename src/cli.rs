use std::path::PathBuf;

use structopt::clap::{AppSettings, ArgGroup};
use structopt::StructOpt;

use crate::controller::Operation;
use crate::error::{Error, Result};
use crate::util::parse_percentage;

#[derive(StructOpt, Debug)]
#[structopt(
    name = "brightness",
    about = "Query or change backlight brightness",
    setting = AppSettings::AllowNegativeNumbers,
    group = ArgGroup::with_name("operation").required(true).multiple(true)
)]
pub struct Opt {
    #[structopt(
        short = "a",
        value_name = "percentage",
        group = "operation",
        allow_hyphen_values = true,
        help = "Set <percentage> as the absolute brightness"
    )]
    pub absolute: Option<String>,
    #[structopt(
        short = "r",
        value_name = "percentage",
        group = "operation",
        allow_hyphen_values = true,
        help = "Change brightness by relative <percentage>"
    )]
    pub relative: Option<String>,
    #[structopt(short = "q", group = "operation", help = "Print the current brightness percentage")]
    pub query: bool,
    #[structopt(
        short = "d",
        long = "device",
        parse(from_os_str),
        help = "Backlight device directory (default: /sys/class/backlight/intel_backlight)"
    )]
    pub device: Option<PathBuf>,
    #[structopt(short = "m", long = "min", help = "Lowest allowed brightness in percent")]
    pub min: Option<f64>,
    #[structopt(short = "c", long = "config", parse(from_os_str), help = "Read configuration from this file")]
    pub config: Option<PathBuf>,
    #[structopt(short = "v", parse(from_occurrences), help = "Increase log verbosity")]
    pub verbose: u8,
}

impl Opt {
    /// The requested change, if any
    pub fn operation(&self) -> Result<Option<Operation>> {
        match (&self.absolute, &self.relative) {
            (Some(_), Some(_)) => Err(Error::Usage(
                "the argument '-a <percentage>' cannot be used with '-r <percentage>'".to_owned(),
            )),
            (Some(arg), None) => Ok(Some(Operation::Absolute(parse_percentage("-a", arg)?))),
            (None, Some(arg)) => Ok(Some(Operation::Relative(parse_percentage("-r", arg)?))),
            (None, None) => Ok(None),
        }
    }
}
