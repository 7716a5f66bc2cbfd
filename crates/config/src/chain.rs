//! The supported live networks.
//!
//! [`CHAINS`] is the only place a chain id is written down. Network descriptors and custom
//! verification chains are both derived from it.

use crate::secrets::SecretName;
use alloy_chains::Chain;
use serde::Serialize;
use std::fmt;

/// A chain and its test or L2 variants that share one block explorer API key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    Ethereum,
    Polygon,
    Optimism,
    Arbitrum,
    Gnosis,
    Fantom,
}

impl ChainFamily {
    /// All families.
    pub const ALL: &'static [Self] =
        &[Self::Ethereum, Self::Polygon, Self::Optimism, Self::Arbitrum, Self::Gnosis, Self::Fantom];

    /// Returns the secret holding the explorer API key of this family.
    pub const fn api_key_secret(self) -> SecretName {
        match self {
            Self::Ethereum => SecretName::MainnetEtherscanApiKey,
            Self::Polygon => SecretName::PolygonEtherscanApiKey,
            Self::Optimism => SecretName::OptEtherscanApiKey,
            Self::Arbitrum => SecretName::ArbEtherscanApiKey,
            Self::Gnosis => SecretName::GnoEtherscanApiKey,
            Self::Fantom => SecretName::FtmEtherscanApiKey,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Polygon => "polygon",
            Self::Optimism => "optimism",
            Self::Arbitrum => "arbitrum",
            Self::Gnosis => "gnosis",
            Self::Fantom => "fantom",
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explorer endpoints the verification tool does not know about.
///
/// Both URLs are passed through verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExplorerUrls {
    pub api_url: &'static str,
    pub browser_url: &'static str,
}

/// A supported live network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainSpec {
    /// Network name, unique across [`CHAINS`].
    pub network: &'static str,
    pub family: ChainFamily,
    /// EIP-155 chain id.
    pub chain_id: u64,
    /// Secret holding the RPC endpoint.
    pub rpc_url: SecretName,
    /// Set if verification on this network needs a custom chain entry.
    pub explorer: Option<ExplorerUrls>,
}

impl ChainSpec {
    const fn new(
        network: &'static str,
        family: ChainFamily,
        chain_id: u64,
        rpc_url: SecretName,
    ) -> Self {
        Self { network, family, chain_id, rpc_url, explorer: None }
    }

    const fn with_explorer(mut self, api_url: &'static str, browser_url: &'static str) -> Self {
        self.explorer = Some(ExplorerUrls { api_url, browser_url });
        self
    }

    /// Returns the chain as an [`alloy_chains::Chain`].
    pub fn chain(&self) -> Chain {
        Chain::from_id(self.chain_id)
    }
}

/// All supported live networks, grouped by family.
pub const CHAINS: &[ChainSpec] = &[
    // ethereum
    ChainSpec::new("mainnet", ChainFamily::Ethereum, 1, SecretName::MainnetRpcUrl),
    ChainSpec::new("goerli", ChainFamily::Ethereum, 5, SecretName::GoerliRpcUrl),
    // polygon
    ChainSpec::new("polygon", ChainFamily::Polygon, 137, SecretName::PolygonRpcUrl),
    ChainSpec::new("mumbai", ChainFamily::Polygon, 80_001, SecretName::PolygonMumbaiRpcUrl),
    // optimism
    ChainSpec::new("optimism", ChainFamily::Optimism, 10, SecretName::OptRpcUrl),
    ChainSpec::new("optimisticGoerli", ChainFamily::Optimism, 420, SecretName::OptGoerliRpcUrl)
        .with_explorer(
            "https://api-goerli-optimistic.etherscan.io/api",
            "https://goerli-optimism.etherscan.io/",
        ),
    // arbitrum
    ChainSpec::new("arbitrum", ChainFamily::Arbitrum, 42_161, SecretName::ArbRpcUrl),
    ChainSpec::new("arbitrumGoerli", ChainFamily::Arbitrum, 421_613, SecretName::ArbGoerliRpcUrl)
        .with_explorer(
            "https://goerli-rollup.arbitrum.io/rpc",
            "https://goerli-rollup-explorer.arbitrum.io/",
        ),
    // gnosis
    ChainSpec::new("gnosis", ChainFamily::Gnosis, 100, SecretName::GnoRpcUrl)
        .with_explorer("https://api.gnosisscan.io/api", "https://gnosisscan.io/"),
    ChainSpec::new("gnosisChiado", ChainFamily::Gnosis, 10_200, SecretName::GnoChiadoRpcUrl)
        .with_explorer(
            "https://blockscout.com/gnosis/chiado/api",
            "https://blockscout.com/gnosis/chiado/",
        ),
    // fantom
    ChainSpec::new("ftm", ChainFamily::Fantom, 250, SecretName::FtmRpcUrl)
        .with_explorer("https://api.ftmscan.com/api", "https://ftmscan.com"),
    ChainSpec::new("ftmTestnet", ChainFamily::Fantom, 4_002, SecretName::FtmTestRpcUrl)
        .with_explorer("https://api-testnet.ftmscan.com/api", "https://testnet.ftmscan.com"),
];

/// Names under which the verification tool looks up explorer API keys.
///
/// These differ from network names in places (`arbitrumOne`, `polygonMumbai`) and include
/// deprecated Ethereum testnets that still accept the Etherscan key.
pub const VERIFICATION_ALIASES: &[(&str, ChainFamily)] = &[
    // ethereum
    ("mainnet", ChainFamily::Ethereum),
    ("ropsten", ChainFamily::Ethereum),
    ("rinkeby", ChainFamily::Ethereum),
    ("goerli", ChainFamily::Ethereum),
    ("kovan", ChainFamily::Ethereum),
    // polygon
    ("polygon", ChainFamily::Polygon),
    ("polygonMumbai", ChainFamily::Polygon),
    // optimism
    ("optimisticEthereum", ChainFamily::Optimism),
    ("optimisticGoerli", ChainFamily::Optimism),
    // arbitrum
    ("arbitrumOne", ChainFamily::Arbitrum),
    ("arbitrumGoerli", ChainFamily::Arbitrum),
    // gnosis
    ("gnosis", ChainFamily::Gnosis),
    ("gnosisChiado", ChainFamily::Gnosis),
    // ftm
    ("ftm", ChainFamily::Fantom),
    ("ftmTestnet", ChainFamily::Fantom),
];

/// Returns the live network with the given name.
pub fn find_network(network: &str) -> Option<&'static ChainSpec> {
    CHAINS.iter().find(|spec| spec.network == network)
}

/// Returns the live network with the given chain id.
pub fn find_chain_id(chain_id: u64) -> Option<&'static ChainSpec> {
    CHAINS.iter().find(|spec| spec.chain_id == chain_id)
}

/// Returns the family a verification alias resolves its API key through.
pub fn alias_family(alias: &str) -> Option<ChainFamily> {
    VERIFICATION_ALIASES.iter().find(|(name, _)| *name == alias).map(|(_, family)| *family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn network_names_are_unique() {
        let names: HashSet<_> = CHAINS.iter().map(|spec| spec.network).collect();
        assert_eq!(names.len(), CHAINS.len());
    }

    #[test]
    fn chain_ids_are_unique() {
        let ids: HashSet<_> = CHAINS.iter().map(|spec| spec.chain_id).collect();
        assert_eq!(ids.len(), CHAINS.len());
    }

    #[test]
    fn rpc_secrets_are_unique() {
        let secrets: HashSet<_> = CHAINS.iter().map(|spec| spec.rpc_url).collect();
        assert_eq!(secrets.len(), CHAINS.len());
    }

    #[test]
    fn aliases_are_unique() {
        let aliases: HashSet<_> = VERIFICATION_ALIASES.iter().map(|(alias, _)| *alias).collect();
        assert_eq!(aliases.len(), VERIFICATION_ALIASES.len());
    }

    #[test]
    fn every_family_has_a_mainnet_and_a_testnet() {
        for family in ChainFamily::ALL {
            let count = CHAINS.iter().filter(|spec| spec.family == *family).count();
            assert_eq!(count, 2, "{family}");
            assert!(VERIFICATION_ALIASES.iter().any(|(_, f)| f == family), "{family}");
        }
    }

    #[test]
    fn known_chains_match_alloy() {
        assert_eq!(find_network("mainnet").unwrap().chain(), Chain::mainnet());
        assert_eq!(find_network("optimism").unwrap().chain(), Chain::optimism_mainnet());
        assert_eq!(find_chain_id(421_613).unwrap().network, "arbitrumGoerli");
        assert!(find_network("hardhat").is_none());
    }

    #[test]
    fn custom_explorers() {
        let custom: Vec<_> =
            CHAINS.iter().filter(|spec| spec.explorer.is_some()).map(|spec| spec.network).collect();
        assert_eq!(
            custom,
            ["optimisticGoerli", "arbitrumGoerli", "gnosis", "gnosisChiado", "ftm", "ftmTestnet"]
        );
        let ftm = find_network("ftm").unwrap().explorer.unwrap();
        assert_eq!(ftm.api_url, "https://api.ftmscan.com/api");
        assert_eq!(ftm.browser_url, "https://ftmscan.com");
    }

    #[test]
    fn aliases_resolve_to_families() {
        assert_eq!(alias_family("kovan"), Some(ChainFamily::Ethereum));
        assert_eq!(alias_family("arbitrumOne"), Some(ChainFamily::Arbitrum));
        assert_eq!(alias_family("arbitrum"), None);
    }
}
