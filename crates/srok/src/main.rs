use clap::Parser;
use command::SrokCmd;
use env_logger::{Builder, Env};
use log::debug;
use srok_common::config::load_config;
mod command;

const VERSION: &str = env!("CARGO_PKG_VERSION");

static HELP_TEMPLATE: &str = "\
    {before-help} {name} {version}
    {about}

    {usage-heading}
      {usage}


    {all-args}
    {after-help}";

#[derive(Parser)]
#[command(
    version = VERSION,
    help_template(HELP_TEMPLATE),
)]
struct Srok {
    #[command(subcommand)]
    srok: SrokCmd,
}

impl Srok {
    fn run(self) {
        let config = load_config().unwrap_or_default();
        debug!("config: {config:?}");
        self.srok.run(&config);
    }
}

fn main() {
    let env = Env::new().filter_or("SROK_LOG", "warn");
    Builder::from_env(env).init();

    Srok::parse().run();
}
