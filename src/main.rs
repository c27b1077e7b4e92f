mod backlight;
mod cli;
mod config;
mod controller;
mod error;
mod util;

use std::process;

use log::{debug, info, LevelFilter};
use structopt::StructOpt;

use crate::backlight::{BacklightDevice, Sysfs};
use crate::cli::Opt;
use crate::config::Config;
use crate::controller::BrightnessController;
use crate::error::{Error, Result};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(opt: Opt) -> Result<()> {
    // Validate everything before touching the device
    let operation = opt.operation()?;
    let config = Config::load(opt.config.as_deref())?.with_overrides(opt.device, opt.min)?;
    debug!("using {:?}", config);

    let mut device = Sysfs::new(&config.device);
    let max = device.max()?;
    let current = device.current()?;

    let mut controller = BrightnessController::load(&config, max, current)?;
    match operation {
        Some(op) => controller.apply(op),
        None => controller.clamp(),
    }
    debug!(
        "max {} min {} current {} -> {}",
        controller.max(),
        controller.min(),
        current,
        controller.current()
    );

    if opt.query {
        println!("{}", controller.query_percentage());
    }

    if operation.is_some() {
        let value = controller.native();
        device.write(value)?;
        info!("brightness set to {} ({}%)", value, controller.query_percentage());
    }
    Ok(())
}

fn main() {
    let opt = match Opt::from_iter_safe(std::env::args_os()) {
        Ok(opt) => opt,
        Err(e) => {
            let err = Error::Usage(e.message);
            eprintln!("{}", err);
            process::exit(err.exit_code());
        }
    };
    init_logging(opt.verbose);

    if let Err(e) = run(opt) {
        eprintln!("error: {}", e);
        process::exit(e.exit_code());
    }
}
