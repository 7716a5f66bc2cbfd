//! Subcommand implementations.

use crate::opts::Section;
use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS};
use eyre::{Result, WrapErr};
use splits_config::{Chain, Configuration, NetworkDescriptor, chain::find_network};
use std::path::Path;
use yansi::Paint;

/// Loads secrets from `env_file` and the environment and resolves the configuration.
pub fn load(env_file: &Path) -> Result<Configuration> {
    Configuration::load(env_file)
        .wrap_err_with(|| format!("failed to load configuration from `{}`", env_file.display()))
}

/// Renders the configuration, or one section of it, as JSON.
pub fn show(config: &Configuration, section: Section, reveal: bool, compact: bool) -> Result<String> {
    let config = if reveal { config.clone() } else { config.redacted() };
    let value = match section {
        Section::All => serde_json::to_value(&config)?,
        Section::Solidity => serde_json::to_value(&config.solidity)?,
        Section::Networks => serde_json::to_value(&config.networks)?,
        Section::Etherscan => serde_json::to_value(&config.etherscan)?,
        Section::NamedAccounts => serde_json::to_value(&config.named_accounts)?,
        Section::GasReporter => serde_json::to_value(&config.gas_reporter)?,
        Section::Mocha => serde_json::to_value(&config.mocha)?,
        Section::Dodoc => serde_json::to_value(&config.dodoc)?,
    };
    let json =
        if compact { serde_json::to_string(&value)? } else { serde_json::to_string_pretty(&value)? };
    Ok(json)
}

/// Builds the network overview table.
pub fn networks_table(config: &Configuration) -> Table {
    let mut table = Table::new();
    table.apply_modifier(UTF8_ROUND_CORNERS);
    table.set_header(vec![
        Cell::new("Network"),
        Cell::new("Chain"),
        Cell::new("Family"),
        Cell::new("RPC"),
        Cell::new("Accounts"),
        Cell::new("Verification"),
    ]);

    for network in config.networks.values() {
        let chain = network
            .chain_id
            .map(|id| format!("{} ({id})", Chain::from_id(id)))
            .unwrap_or_default();
        let family = find_network(&network.name)
            .map(|spec| spec.family.to_string())
            .unwrap_or_else(|| "local".to_string());
        let (rpc, rpc_color) = rpc_status(network);
        let verification = if config.etherscan.custom_chain(&network.name).is_some() {
            "custom chain"
        } else if network.is_local() {
            "-"
        } else {
            "built-in"
        };

        table.add_row([
            Cell::new(&network.name),
            Cell::new(chain),
            Cell::new(family),
            Cell::new(rpc).fg(rpc_color),
            Cell::new(network.accounts.to_string()),
            Cell::new(verification),
        ]);
    }

    table
}

fn rpc_status(network: &NetworkDescriptor) -> (String, Color) {
    match (&network.rpc_url, &network.fork) {
        (_, Some(fork)) if fork.source_rpc_url.is_some() => {
            (format!("fork @ {}", fork.block_number), Color::Reset)
        }
        (_, Some(_)) => ("fork source missing".to_string(), Color::Red),
        (Some(_), None) => ("set".to_string(), Color::Reset),
        (None, None) => ("missing".to_string(), Color::Yellow),
    }
}

/// Prints every shape defect and fails if there is any.
pub fn check(config: &Configuration) -> Result<()> {
    let errors = config.shape_errors();
    if errors.is_empty() {
        println!("{}", "configuration is consistent".green());
        return Ok(());
    }
    for err in &errors {
        println!("{} {err}", "error:".red().bold());
    }
    eyre::bail!("found {} shape defect(s)", errors.len())
}
