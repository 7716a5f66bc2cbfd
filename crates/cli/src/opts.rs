use clap::{Parser, Subcommand, ValueEnum};
use splits_config::SECRET_FILE_NAME;
use std::path::PathBuf;

/// Resolve and inspect the deploy configuration of the splits contracts.
#[derive(Clone, Debug, Parser)]
#[command(name = "splits", version)]
pub struct Splits {
    /// Secret file to read, in dotenv format.
    ///
    /// Variables set in the process environment take precedence over the file.
    #[arg(long, global = true, env = "SPLITS_ENV_FILE", default_value = SECRET_FILE_NAME)]
    pub env_file: PathBuf,

    #[command(subcommand)]
    pub cmd: SplitsSubcommand,
}

#[derive(Clone, Debug, Subcommand)]
pub enum SplitsSubcommand {
    /// Print the resolved configuration as JSON.
    #[command(visible_alias = "s")]
    Show {
        /// Only print the given section.
        #[arg(long, value_enum, default_value_t = Section::All)]
        section: Section,

        /// Print private keys and API keys instead of a placeholder.
        #[arg(long)]
        reveal: bool,

        /// Print on a single line.
        #[arg(long)]
        compact: bool,
    },

    /// List every network and how it resolved.
    #[command(visible_alias = "n")]
    Networks,

    /// Check the configuration for shape defects.
    Check,
}

/// A top-level section of the configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Section {
    #[default]
    All,
    Solidity,
    Networks,
    Etherscan,
    NamedAccounts,
    GasReporter,
    Mocha,
    Dodoc,
}
