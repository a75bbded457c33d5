use std::io::prelude::*;

use structopt::StructOpt;
use tracing::{debug, Level};

#[macro_use]
mod util;
mod backlight;
mod brightness;
mod cli;
mod command;
mod error;

use crate::backlight::{BacklightDevice, Sysfs, BRIGHTNESS, MAX_BRIGHTNESS};
use crate::brightness::{compute, Cap, Outcome};
use crate::command::{Command, Operation};
use crate::error::Error;

/// Interpret `args`, then read, adjust and report the device brightness.
/// Only device failures are errors; bad input is reported on `out`.
fn run<D: BacklightDevice>(device: &mut D, args: &[String], out: &mut impl Write) -> Result<(), Error> {
    let cmd = Command::interpret(args, out);

    let max = device.read_value(MAX_BRIGHTNESS)?;
    let current = device.read_value(BRIGHTNESS)?;

    let outcome = compute(&cmd, current, max);
    debug!(?cmd, current, max, ?outcome, "computed brightness");

    match outcome {
        Outcome::NoChange if cmd.operation == Operation::Query => {
            say!(out, "{} / {}", current, max);
        }
        Outcome::NoChange => {
            if cmd.verbose {
                say!(out, "Doing nothing");
            }
        }
        Outcome::RangeError => {
            say!(out, "Percentage out of range");
        }
        Outcome::Write { value, capped } => {
            if cmd.verbose {
                match capped {
                    Some(Cap::Max) => {
                        say!(out, "Capping to max brightness");
                    }
                    Some(Cap::Min) => {
                        say!(out, "Capping to min brightness");
                    }
                    None => {}
                }
                say!(out, "{} => {}", current, value);
            }
            device.write_value(BRIGHTNESS, value)?;
            if cmd.verbose {
                say!(out, "Written");
            }
        }
    }
    Ok(())
}

fn main() {
    let opt = cli::Opt::from_args();

    let level = if opt.debug { Level::TRACE } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut device = Sysfs::new(&opt.root, &opt.device);
    let stdout = std::io::stdout();
    if let Err(err) = run(&mut device, &opt.args, &mut stdout.lock()) {
        say!(std::io::stderr(), "backlight: {}", err);
        std::process::exit(1);
    }
}
