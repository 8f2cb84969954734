use clap::Subcommand;
use srok_common::config::Config;
use srok_format::DurationFormatter;

mod format;
mod since;

#[derive(Subcommand, Debug)]
#[command(infer_subcommands = true)]
pub enum Cmd {
    /// Format a number of seconds as a readable phrase.
    Format(format::Cmd),

    /// Format the time elapsed since a unix timestamp.
    Since(since::Cmd),
}

impl Cmd {
    pub fn run(self, config: &Config) {
        // CLI commands block the current thread until they resolve.
        match self {
            Self::Format(format) => format.run(config),
            Self::Since(since) => since.run(config),
        }
    }
}

/// Picks the formatter for a run. An explicit --concise flag wins,
/// otherwise the configured default applies.
pub(crate) fn formatter_for(concise_flag: bool, config: &Config) -> DurationFormatter {
    let concise = concise_flag || config.output.concise.unwrap_or(false);
    let builder = DurationFormatter::builder().concise(concise);

    match config.output.accuracy {
        Some(accuracy) => builder.accuracy(accuracy).build(),
        None => builder.build(),
    }
}
