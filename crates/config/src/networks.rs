//! Network registry.

use crate::{
    accounts::AccountSpec,
    chain::{CHAINS, ChainSpec},
    secrets::{SecretName, Secrets},
};
use serde::Serialize;
use std::{collections::BTreeMap, ops::Deref};

/// Name of the local, forked network.
pub const LOCAL_NETWORK: &str = "hardhat";

/// Chain id of the local network. Distinct from every public chain so local signatures can't be
/// replayed on a live network.
pub const LOCAL_CHAIN_ID: u64 = 1337;

/// Mainnet block the local network forks from.
///
/// Pinned so forked state is identical across runs and machines.
pub const FORK_BLOCK_NUMBER: u64 = 13_852_105;

/// Forking settings of the local network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkDescriptor {
    /// RPC endpoint of the forked chain.
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub source_rpc_url: Option<String>,
    pub block_number: u64,
}

/// Connection and signer settings for one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescriptor {
    #[serde(skip)]
    pub name: String,
    /// Absent when the RPC secret isn't set. Connecting to the network then fails in the client.
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub rpc_url: Option<String>,
    pub accounts: AccountSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(rename = "forking", skip_serializing_if = "Option::is_none")]
    pub fork: Option<ForkDescriptor>,
}

impl NetworkDescriptor {
    fn live(spec: &ChainSpec, secrets: &Secrets, accounts: &AccountSpec) -> Self {
        let rpc_url = secrets.get(spec.rpc_url).map(str::to_string);
        if rpc_url.is_none() {
            debug!(target: "config::networks", network = spec.network, secret = %spec.rpc_url, "rpc url not set");
        }
        Self {
            name: spec.network.to_string(),
            rpc_url,
            accounts: accounts.clone(),
            chain_id: Some(spec.chain_id),
            fork: None,
        }
    }

    fn local(secrets: &Secrets, accounts: &AccountSpec) -> Self {
        let source_rpc_url = secrets.get(SecretName::MainnetRpcUrl).map(str::to_string);
        if source_rpc_url.is_none() {
            warn!(
                target: "config::networks",
                "{} is not set, the {LOCAL_NETWORK} network can't fork",
                SecretName::MainnetRpcUrl
            );
        }
        Self {
            name: LOCAL_NETWORK.to_string(),
            rpc_url: None,
            accounts: accounts.clone(),
            chain_id: Some(LOCAL_CHAIN_ID),
            fork: Some(ForkDescriptor { source_rpc_url, block_number: FORK_BLOCK_NUMBER }),
        }
    }

    /// Returns `true` if the network has an RPC endpoint or forks from one.
    pub fn is_reachable(&self) -> bool {
        self.rpc_url.is_some() ||
            self.fork.as_ref().is_some_and(|fork| fork.source_rpc_url.is_some())
    }

    /// Returns `true` for the local network.
    pub fn is_local(&self) -> bool {
        self.fork.is_some()
    }
}

/// All networks by name.
///
/// The set of names is fixed: every entry of [`CHAINS`] plus [`LOCAL_NETWORK`], regardless of which
/// secrets are set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Networks {
    networks: BTreeMap<String, NetworkDescriptor>,
}

impl Networks {
    /// Builds the registry. Every network shares `accounts`.
    pub fn resolve(secrets: &Secrets, accounts: &AccountSpec) -> Self {
        let networks = CHAINS
            .iter()
            .map(|spec| NetworkDescriptor::live(spec, secrets, accounts))
            .chain(std::iter::once(NetworkDescriptor::local(secrets, accounts)))
            .map(|network| (network.name.clone(), network))
            .collect::<BTreeMap<_, _>>();
        trace!(target: "config::networks", count = networks.len(), "resolved networks");
        Self { networks }
    }

    /// Returns the local network.
    pub fn local(&self) -> Option<&NetworkDescriptor> {
        self.networks.get(LOCAL_NETWORK)
    }

    /// Returns a copy with redacted signer material.
    pub fn redacted(&self) -> Self {
        let networks = self
            .networks
            .iter()
            .map(|(name, network)| {
                let network =
                    NetworkDescriptor { accounts: network.accounts.redacted(), ..network.clone() };
                (name.clone(), network)
            })
            .collect();
        Self { networks }
    }
}

impl Deref for Networks {
    type Target = BTreeMap<String, NetworkDescriptor>;

    fn deref(&self) -> &Self::Target {
        &self.networks
    }
}
