use clap::Parser;
use eyre::Result;
use splits_cli::{
    cmd, handler,
    opts::{Splits, SplitsSubcommand},
    utils,
};

fn main() -> Result<()> {
    handler::install();
    utils::subscriber();
    utils::enable_paint();

    let args = Splits::parse();
    let config = cmd::load(&args.env_file)?;
    match args.cmd {
        SplitsSubcommand::Show { section, reveal, compact } => {
            println!("{}", cmd::show(&config, section, reveal, compact)?);
        }
        SplitsSubcommand::Networks => {
            println!("{}", cmd::networks_table(&config));
        }
        SplitsSubcommand::Check => cmd::check(&config)?,
    }
    Ok(())
}
