use std::time::Duration;

use clap::Parser;
use log::debug;
use srok_common::config::Config;
use srok_format::{DAY_UNITS, FULL_UNITS};

use super::formatter_for;

#[derive(Debug, Parser)]
pub struct Cmd {
    /// The number of seconds to format
    seconds: u64,

    /// Use the compact suffix notation
    #[arg(long, short)]
    concise: bool,

    /// Never report a unit larger than days
    #[arg(long, short)]
    days: bool,
}

impl Cmd {
    pub fn run(self, config: &Config) {
        println!("{}", self.render(config));
    }

    /// Builds the output line for the command.
    fn render(&self, config: &Config) -> String {
        let formatter = formatter_for(self.concise, config);
        debug!("formatting {}s with {formatter:?}", self.seconds);

        let units: &[_] = if self.days { &DAY_UNITS } else { &FULL_UNITS };
        formatter.format_with_units(units, Duration::from_secs(self.seconds))
    }
}
