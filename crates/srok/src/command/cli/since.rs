use clap::Parser;
use log::error;
use srok_common::config::Config;
use srok_format::{DurationFormatter, NegativeDuration};
use time::OffsetDateTime;

use super::formatter_for;

#[derive(Debug, Parser)]
pub struct Cmd {
    /// Unix timestamp (seconds since the epoch, UTC)
    timestamp: i64,

    /// Use the compact suffix notation
    #[arg(long, short)]
    concise: bool,
}

impl Cmd {
    pub fn run(self, config: &Config) {
        let Ok(then) = OffsetDateTime::from_unix_timestamp(self.timestamp) else {
            error!("timestamp {} is out of range", self.timestamp);
            std::process::exit(1);
        };

        match render_since(&OffsetDateTime::now_utc, then, formatter_for(self.concise, config)) {
            Ok(line) => println!("{line}"),
            Err(NegativeDuration) => {
                error!("timestamp {} is in the future", self.timestamp);
                std::process::exit(1);
            }
        }
    }
}

/// Get a duration string for how long it has been since `then`.
///
/// * `now`: Function which returns the current time
/// * `then`: The earlier timestamp
fn render_since(
    now: &dyn Fn() -> OffsetDateTime,
    then: OffsetDateTime,
    formatter: DurationFormatter,
) -> Result<String, NegativeDuration> {
    formatter.format_signed(now() - then)
}
