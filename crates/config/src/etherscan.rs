//! Block explorer keys and custom verification chains.

use crate::{
    accounts::REDACTED,
    chain::{CHAINS, ChainFamily, VERIFICATION_ALIASES},
    secrets::Secrets,
};
use serde::Serialize;
use std::{collections::BTreeMap, ops::Deref};

/// Explorer API keys by verification alias.
///
/// Several aliases share one family key, see [`VERIFICATION_ALIASES`]. An absent key is kept as
/// `None`; verification on that network then runs unauthenticated and fails in the explorer client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExplorerKeySet {
    keys: BTreeMap<String, Option<String>>,
}

impl ExplorerKeySet {
    /// Resolves every alias through its family key.
    pub fn resolve(secrets: &Secrets) -> Self {
        let family_keys: BTreeMap<ChainFamily, Option<&str>> = ChainFamily::ALL
            .iter()
            .map(|family| (*family, secrets.get(family.api_key_secret())))
            .collect();

        for (family, key) in &family_keys {
            if key.is_none() {
                debug!(target: "config::etherscan", %family, secret = %family.api_key_secret(), "explorer api key not set");
            }
        }

        let keys = VERIFICATION_ALIASES
            .iter()
            .map(|(alias, family)| {
                let key = family_keys.get(family).copied().flatten().map(str::to_string);
                (alias.to_string(), key)
            })
            .collect();
        Self { keys }
    }

    /// Returns the key for the given alias.
    pub fn key(&self, alias: &str) -> Option<&str> {
        self.keys.get(alias).and_then(Option::as_deref)
    }

    /// Returns a copy with every set key replaced by [`REDACTED`].
    pub fn redacted(&self) -> Self {
        let keys = self
            .keys
            .iter()
            .map(|(alias, key)| (alias.clone(), key.as_ref().map(|_| REDACTED.to_string())))
            .collect();
        Self { keys }
    }
}

impl Deref for ExplorerKeySet {
    type Target = BTreeMap<String, Option<String>>;

    fn deref(&self) -> &Self::Target {
        &self.keys
    }
}

/// Explorer endpoints of a [`CustomChain`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CustomChainUrls {
    #[serde(rename = "apiURL")]
    pub api_url: String,
    #[serde(rename = "browserURL")]
    pub browser_url: String,
}

/// A chain whose explorer the verification tool has to be told about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomChain {
    /// Name of the network this chain verifies for.
    pub network: String,
    pub chain_id: u64,
    pub urls: CustomChainUrls,
}

/// Resolves the custom chains.
///
/// Derived from the same table entries as the networks, so a custom chain's id always equals the
/// id of the network it is named after.
pub fn custom_chains() -> Vec<CustomChain> {
    CHAINS
        .iter()
        .filter_map(|spec| {
            let explorer = spec.explorer?;
            Some(CustomChain {
                network: spec.network.to_string(),
                chain_id: spec.chain_id,
                urls: CustomChainUrls {
                    api_url: explorer.api_url.to_string(),
                    browser_url: explorer.browser_url.to_string(),
                },
            })
        })
        .collect()
}

/// Verification settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtherscanConfig {
    pub api_key: ExplorerKeySet,
    pub custom_chains: Vec<CustomChain>,
}

impl EtherscanConfig {
    pub fn resolve(secrets: &Secrets) -> Self {
        Self { api_key: ExplorerKeySet::resolve(secrets), custom_chains: custom_chains() }
    }

    /// Returns the custom chain for the given network.
    pub fn custom_chain(&self, network: &str) -> Option<&CustomChain> {
        self.custom_chains.iter().find(|chain| chain.network == network)
    }

    /// Returns a copy with redacted API keys.
    pub fn redacted(&self) -> Self {
        Self { api_key: self.api_key.redacted(), custom_chains: self.custom_chains.clone() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chain::alias_family, secrets::SecretName};
    use similar_asserts::assert_eq;

    #[test]
    fn every_alias_is_present_without_secrets() {
        let keys = ExplorerKeySet::resolve(&Secrets::default());
        assert_eq!(keys.len(), VERIFICATION_ALIASES.len());
        assert!(keys.values().all(Option::is_none));
    }

    #[test]
    fn ethereum_aliases_share_the_mainnet_key() {
        let secrets = Secrets::default().with(SecretName::MainnetEtherscanApiKey, "eth-key");
        let keys = ExplorerKeySet::resolve(&secrets);
        for alias in ["mainnet", "ropsten", "rinkeby", "goerli", "kovan"] {
            assert_eq!(keys.key(alias), Some("eth-key"), "{alias}");
        }
        assert_eq!(keys.key("polygon"), None);
        assert_eq!(keys.key("arbitrumOne"), None);
    }

    // changing one family key changes exactly the aliases of that family
    #[test]
    fn family_key_changes_only_its_aliases() {
        for family in ChainFamily::ALL {
            let before = ExplorerKeySet::resolve(&Secrets::default());
            let after = ExplorerKeySet::resolve(
                &Secrets::default().with(family.api_key_secret(), format!("{family}-key")),
            );
            for (alias, key) in after.iter() {
                if alias_family(alias) == Some(*family) {
                    assert_eq!(key.as_deref(), Some(format!("{family}-key").as_str()), "{alias}");
                } else {
                    assert_eq!(key, &before[alias], "{alias}");
                }
            }
        }
    }

    #[test]
    fn custom_chain_urls_are_verbatim() {
        let config = EtherscanConfig::resolve(&Secrets::default());
        assert_eq!(config.custom_chains.len(), 6);

        let arbitrum_goerli = config.custom_chain("arbitrumGoerli").unwrap();
        assert_eq!(arbitrum_goerli.chain_id, 421_613);
        assert_eq!(arbitrum_goerli.urls.api_url, "https://goerli-rollup.arbitrum.io/rpc");
        assert_eq!(arbitrum_goerli.urls.browser_url, "https://goerli-rollup-explorer.arbitrum.io/");

        let chiado = config.custom_chain("gnosisChiado").unwrap();
        assert_eq!(chiado.chain_id, 10_200);
        assert_eq!(chiado.urls.api_url, "https://blockscout.com/gnosis/chiado/api");

        assert!(config.custom_chain("mainnet").is_none());
    }

    #[test]
    fn serializes_tool_shape() {
        let secrets = Secrets::default().with(SecretName::FtmEtherscanApiKey, "ftm-key");
        let json = serde_json::to_value(EtherscanConfig::resolve(&secrets)).unwrap();
        assert_eq!(json["apiKey"]["ftmTestnet"], "ftm-key");
        assert_eq!(json["apiKey"]["gnosis"], serde_json::Value::Null);
        assert_eq!(
            json["customChains"][0],
            serde_json::json!({
                "network": "optimisticGoerli",
                "chainId": 420,
                "urls": {
                    "apiURL": "https://api-goerli-optimistic.etherscan.io/api",
                    "browserURL": "https://goerli-optimism.etherscan.io/",
                },
            })
        );
    }

    #[test]
    fn redacted_keeps_absence() {
        let secrets = Secrets::default().with(SecretName::GnoEtherscanApiKey, "gno-key");
        let redacted = EtherscanConfig::resolve(&secrets).redacted();
        assert_eq!(redacted.api_key.key("gnosis"), Some(REDACTED));
        assert_eq!(redacted.api_key.key("ftm"), None);
        assert_eq!(redacted.custom_chains, custom_chains());
    }
}
