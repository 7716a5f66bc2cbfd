//! Environment-provided secrets.
//!
//! Every value the resolver consumes is read exactly once into [`Secrets`], a plain record of
//! optional strings. Nothing below [`Secrets`] touches process state.

use crate::error::ConfigError;
use figment::providers::Env;
use std::{fmt, path::Path};
use strum::IntoEnumIterator;

/// Name of the local secret file, relative to the project root.
pub const SECRET_FILE_NAME: &str = ".env.local";

/// An environment variable recognized by the resolver.
///
/// Parses from and displays as its exact upper-case variable name.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SecretName {
    /// Ethereum mainnet RPC endpoint, also the source of the local fork.
    MainnetRpcUrl,
    /// Goerli RPC endpoint.
    GoerliRpcUrl,
    /// Polygon RPC endpoint.
    PolygonRpcUrl,
    /// Polygon Mumbai RPC endpoint.
    PolygonMumbaiRpcUrl,
    /// Optimism RPC endpoint.
    OptRpcUrl,
    /// Optimism Goerli RPC endpoint.
    OptGoerliRpcUrl,
    /// Arbitrum One RPC endpoint.
    ArbRpcUrl,
    /// Arbitrum Goerli RPC endpoint.
    ArbGoerliRpcUrl,
    /// Gnosis RPC endpoint.
    GnoRpcUrl,
    /// Gnosis Chiado RPC endpoint.
    GnoChiadoRpcUrl,
    /// Fantom opera RPC endpoint.
    FtmRpcUrl,
    /// Fantom testnet RPC endpoint.
    FtmTestRpcUrl,
    /// Etherscan key, shared by every Ethereum network.
    MainnetEtherscanApiKey,
    /// Polygonscan key.
    PolygonEtherscanApiKey,
    /// Optimistic Etherscan key.
    OptEtherscanApiKey,
    /// Arbiscan key.
    ArbEtherscanApiKey,
    /// Gnosisscan key.
    GnoEtherscanApiKey,
    /// Ftmscan key.
    FtmEtherscanApiKey,
    /// Hex encoded deployer key, with or without the `0x` prefix.
    PrivateKey,
    /// Enables gas reporting when set to any non-empty value.
    ReportGas,
}

impl SecretName {
    /// Returns the environment variable name.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

macro_rules! secrets {
    ($($variant:ident => $field:ident,)+) => {
        /// The raw inputs of a resolution pass.
        ///
        /// Absence is a valid state for every field. Empty and whitespace-only values are stored
        /// as absent.
        #[derive(Clone, Default, PartialEq, Eq)]
        pub struct Secrets {
            $(pub $field: Option<String>,)+
        }

        impl Secrets {
            /// Returns the value of the given secret, if set.
            pub fn get(&self, name: SecretName) -> Option<&str> {
                match name {
                    $(SecretName::$variant => self.$field.as_deref(),)+
                }
            }

            fn slot_mut(&mut self, name: SecretName) -> &mut Option<String> {
                match name {
                    $(SecretName::$variant => &mut self.$field,)+
                }
            }
        }
    };
}

secrets! {
    MainnetRpcUrl => mainnet_rpc_url,
    GoerliRpcUrl => goerli_rpc_url,
    PolygonRpcUrl => polygon_rpc_url,
    PolygonMumbaiRpcUrl => polygon_mumbai_rpc_url,
    OptRpcUrl => opt_rpc_url,
    OptGoerliRpcUrl => opt_goerli_rpc_url,
    ArbRpcUrl => arb_rpc_url,
    ArbGoerliRpcUrl => arb_goerli_rpc_url,
    GnoRpcUrl => gno_rpc_url,
    GnoChiadoRpcUrl => gno_chiado_rpc_url,
    FtmRpcUrl => ftm_rpc_url,
    FtmTestRpcUrl => ftm_test_rpc_url,
    MainnetEtherscanApiKey => mainnet_etherscan_api_key,
    PolygonEtherscanApiKey => polygon_etherscan_api_key,
    OptEtherscanApiKey => opt_etherscan_api_key,
    ArbEtherscanApiKey => arb_etherscan_api_key,
    GnoEtherscanApiKey => gno_etherscan_api_key,
    FtmEtherscanApiKey => ftm_etherscan_api_key,
    PrivateKey => private_key,
    ReportGas => report_gas,
}

impl Secrets {
    /// Builds the record from arbitrary `(name, value)` pairs.
    ///
    /// Unrecognized names are ignored. Later pairs override earlier ones.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut secrets = Self::default();
        secrets.extend(vars);
        secrets
    }

    /// Reads the recognized names from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(env_vars())
    }

    /// Reads the secret file at `path`, then overlays the process environment.
    ///
    /// The file is parsed without modifying the process environment. A variable present in the
    /// process environment takes precedence over the same variable in the file, even when it is
    /// empty. A missing file is treated as empty.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut secrets = match dotenvy::from_path_iter(path) {
            Ok(iter) => {
                let vars = iter.collect::<Result<Vec<_>, _>>().map_err(|source| {
                    ConfigError::SecretFile { path: path.to_path_buf(), source }
                })?;
                debug!(target: "config::secrets", path = %path.display(), vars = vars.len(), "read secret file");
                Self::from_vars(vars)
            }
            Err(err) if err.not_found() => {
                debug!(target: "config::secrets", path = %path.display(), "no secret file");
                Self::default()
            }
            Err(source) => {
                return Err(ConfigError::SecretFile { path: path.to_path_buf(), source });
            }
        };
        secrets.extend(env_vars());
        Ok(secrets)
    }

    /// Applies `(name, value)` pairs in order, see [`Secrets::set`].
    ///
    /// Unrecognized names are ignored.
    pub fn extend<K, V>(&mut self, vars: impl IntoIterator<Item = (K, V)>)
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let key = key.as_ref();
            match key.parse::<SecretName>() {
                Ok(name) => self.set(name, value),
                Err(_) => trace!(target: "config::secrets", %key, "ignoring unrecognized variable"),
            }
        }
    }

    /// Sets a secret. Empty values clear it.
    pub fn set(&mut self, name: SecretName, value: impl Into<String>) {
        let value = value.into();
        *self.slot_mut(name) = if value.trim().is_empty() { None } else { Some(value) };
    }

    /// Sets a secret and consumes the type.
    pub fn with(mut self, name: SecretName, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns `true` if the given secret is set.
    pub fn contains(&self, name: SecretName) -> bool {
        self.get(name).is_some()
    }

    /// Returns all set `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SecretName, &str)> + '_ {
        SecretName::iter().filter_map(|name| self.get(name).map(|value| (name, value)))
    }

}

// every recognized name present in the process environment, empty values included
fn env_vars() -> Vec<(String, String)> {
    let names: Vec<&str> = SecretName::iter().map(|name| name.as_str()).collect();
    Env::raw()
        .only(&names)
        .iter()
        .map(|(key, value)| (key.as_str().to_ascii_uppercase(), value))
        .collect()
}

impl fmt::Debug for SecretName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// never print values
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set: Vec<_> = self.iter().map(|(name, _)| name).collect();
        f.debug_struct("Secrets").field("set", &set).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use strum::EnumCount;

    #[test]
    fn names_round_trip() {
        for name in SecretName::iter() {
            assert_eq!(name.as_str().parse::<SecretName>().unwrap(), name);
            assert_eq!(name.to_string(), name.as_str());
        }
        assert!("ETHERSCAN_API_KEY".parse::<SecretName>().is_err());
        assert!("mainnet_rpc_url".parse::<SecretName>().is_err());
        assert_eq!(SecretName::COUNT, 20);
    }

    #[test]
    fn variable_names() {
        assert_eq!(SecretName::MainnetRpcUrl.as_str(), "MAINNET_RPC_URL");
        assert_eq!(SecretName::PolygonMumbaiRpcUrl.as_str(), "POLYGON_MUMBAI_RPC_URL");
        assert_eq!(SecretName::FtmTestRpcUrl.as_str(), "FTM_TEST_RPC_URL");
        assert_eq!(SecretName::MainnetEtherscanApiKey.as_str(), "MAINNET_ETHERSCAN_API_KEY");
        assert_eq!(SecretName::ReportGas.as_str(), "REPORT_GAS");
    }

    #[test]
    fn empty_values_are_absent() {
        let secrets = Secrets::from_vars([
            ("MAINNET_RPC_URL", "https://eth.example"),
            ("PRIVATE_KEY", ""),
            ("ARB_RPC_URL", "   "),
            ("UNRELATED", "value"),
        ]);
        assert_eq!(secrets.mainnet_rpc_url.as_deref(), Some("https://eth.example"));
        assert!(secrets.private_key.is_none());
        assert!(secrets.arb_rpc_url.is_none());
        assert_eq!(secrets.iter().count(), 1);
    }

    #[test]
    fn later_values_override() {
        let secrets = Secrets::from_vars([
            ("GNO_RPC_URL", "https://a.example"),
            ("GNO_RPC_URL", "https://b.example"),
        ]);
        assert_eq!(secrets.get(SecretName::GnoRpcUrl), Some("https://b.example"));
    }

    #[test]
    fn debug_hides_values() {
        let secrets = Secrets::default().with(SecretName::PrivateKey, "deadbeef");
        let debug = format!("{secrets:?}");
        assert!(debug.contains("PRIVATE_KEY"));
        assert!(!debug.contains("deadbeef"));
    }

    #[test]
    fn reads_secret_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                SECRET_FILE_NAME,
                "# local secrets\nMAINNET_RPC_URL=https://file.example\nPOLYGON_ETHERSCAN_API_KEY=\"polygon-key\"\n",
            )?;
            let secrets = Secrets::load(SECRET_FILE_NAME).unwrap();
            assert_eq!(secrets.mainnet_rpc_url.as_deref(), Some("https://file.example"));
            assert_eq!(secrets.polygon_etherscan_api_key.as_deref(), Some("polygon-key"));
            Ok(())
        });
    }

    #[test]
    fn process_env_wins_over_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(SECRET_FILE_NAME, "FTM_RPC_URL=https://file.example\n")?;
            jail.set_env("FTM_RPC_URL", "https://env.example");
            jail.set_env("REPORT_GAS", "1");
            let secrets = Secrets::load(SECRET_FILE_NAME).unwrap();
            assert_eq!(secrets.ftm_rpc_url.as_deref(), Some("https://env.example"));
            assert_eq!(secrets.report_gas.as_deref(), Some("1"));
            Ok(())
        });
    }

    #[test]
    fn empty_process_env_clears_file_value() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(SECRET_FILE_NAME, "PRIVATE_KEY=beef\nOPT_RPC_URL=https://file.example\n")?;
            jail.set_env("PRIVATE_KEY", "");
            let secrets = Secrets::load(SECRET_FILE_NAME).unwrap();
            assert!(secrets.private_key.is_none());
            assert_eq!(secrets.opt_rpc_url.as_deref(), Some("https://file.example"));
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_empty() {
        figment::Jail::expect_with(|_| {
            let secrets = Secrets::load("does-not-exist.env").unwrap();
            assert!(secrets.ftm_test_rpc_url.is_none());
            Ok(())
        });
    }
}
