use clap::Subcommand;
use srok_common::config::Config;

mod cli;

#[derive(Subcommand)]
#[command(infer_subcommands = true)]
pub enum SrokCmd {
    #[command(flatten)]
    Cli(cli::Cmd),
}

impl SrokCmd {
    pub fn run(self, config: &Config) {
        match self {
            Self::Cli(cli) => cli.run(config),
        }
    }
}
