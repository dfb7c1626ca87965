use anyhow::Context;
use proxen_config::ProxenConfig;
use proxen_gen::Generator;

use crate::cli::{Commands, GlobalFlags};

pub mod check;
pub mod generate;
pub mod print;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, config: &ProxenConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let generator = Generator::new(config.conventions.clone())
        .context("invalid [conventions] configuration")?;

    match command {
        Commands::Generate(args) => generate::handle(args, &generator, config, flags),
        Commands::Check(args) => check::handle(args, &generator, config, flags),
        Commands::Print(args) => print::handle(args, &generator),
    }
}
