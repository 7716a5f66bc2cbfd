//! # splits-config
//!
//! Resolves the deploy and verification configuration of the splits contracts from environment
//! secrets.
//!
//! Resolution is a single pure pass over a [`Secrets`] record:
//!
//! ```text
//! Secrets ─► AccountSpec ─┬─► Networks
//!                         └─► EtherscanConfig ─► Configuration
//!                 SolidityConfig ─────────────►
//! ```
//!
//! The resulting [`Configuration`] is never mutated and can be shared freely between the build,
//! deploy and verify tooling.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate tracing;

use serde::Serialize;

pub mod accounts;
pub use accounts::AccountSpec;

pub mod chain;
pub use chain::{CHAINS, ChainFamily, ChainSpec};

mod check;

pub mod error;
pub use error::{ConfigError, ShapeError};

pub mod etherscan;
pub use etherscan::{CustomChain, EtherscanConfig, ExplorerKeySet};

pub mod extras;
use extras::{DodocConfig, GasReporterConfig, MochaConfig, NamedAccounts};

pub mod networks;
pub use networks::{ForkDescriptor, NetworkDescriptor, Networks};

pub mod secrets;
pub use secrets::{SECRET_FILE_NAME, SecretName, Secrets};

pub mod solc;
pub use solc::{CompilerProfile, SolidityConfig};

// reexport so consumers can name chains without depending on alloy directly
pub use alloy_chains::{Chain, NamedChain};

/// The resolved configuration.
///
/// Serializes to the shape the build tool reads: `solidity`, `namedAccounts`, `networks`,
/// `etherscan`, `gasReporter`, `mocha` and `dodoc`.
///
/// Fields are public for reading. A resolved value is never modified afterwards; views such as
/// [`Configuration::redacted`] return a new value, and nothing in this crate takes
/// `&mut Configuration`. Code that needs a different configuration resolves a new one from a
/// different [`Secrets`] record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Compiler profiles.
    pub solidity: SolidityConfig,
    pub named_accounts: NamedAccounts,
    /// Every live network plus the local fork.
    pub networks: Networks,
    /// Explorer keys and custom chains.
    pub etherscan: EtherscanConfig,
    pub gas_reporter: GasReporterConfig,
    pub mocha: MochaConfig,
    pub dodoc: DodocConfig,
}

impl Configuration {
    /// Resolves the configuration from `secrets`.
    ///
    /// Never fails: absent secrets yield unreachable networks, unauthenticated verification and
    /// the remote signer.
    pub fn resolve(secrets: &Secrets) -> Self {
        debug!(target: "config", ?secrets, "resolving configuration");
        let accounts = AccountSpec::from_private_key(secrets.get(SecretName::PrivateKey));
        Self {
            solidity: SolidityConfig::default(),
            named_accounts: NamedAccounts::default(),
            networks: Networks::resolve(secrets, &accounts),
            etherscan: EtherscanConfig::resolve(secrets),
            gas_reporter: GasReporterConfig::resolve(secrets),
            mocha: MochaConfig::default(),
            dodoc: DodocConfig::default(),
        }
    }

    /// Loads secrets from the file at `path` and the process environment, then resolves.
    ///
    /// See [`Secrets::load`].
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        Ok(Self::resolve(&Secrets::load(path)?))
    }

    /// Returns the network with the given name.
    pub fn network(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.get(name)
    }

    /// Returns a copy with private keys and API keys replaced by a placeholder.
    pub fn redacted(&self) -> Self {
        Self {
            networks: self.networks.redacted(),
            etherscan: self.etherscan.redacted(),
            ..self.clone()
        }
    }
}

/// Resolves the configuration from `secrets`, see [`Configuration::resolve`].
pub fn resolve(secrets: &Secrets) -> Configuration {
    Configuration::resolve(secrets)
}
