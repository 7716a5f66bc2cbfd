//! Error types.

use semver::Version;
use std::path::PathBuf;

/// Errors that can occur while loading secrets.
///
/// Resolution itself never fails; a missing secret degrades the capability that needs it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read secret file `{}`", .path.display())]
    SecretFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// A defect in the static shape of the configuration.
///
/// These can only be introduced by editing the chain tables, never by the environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("network `{0}` is declared more than once")]
    DuplicateNetwork(String),

    #[error("verification alias `{0}` is declared more than once")]
    DuplicateAlias(String),

    #[error("chain id {0} is used by more than one custom chain")]
    DuplicateCustomChainId(u64),

    #[error("custom chain `{0}` has no matching network")]
    UnknownCustomChain(String),

    #[error(
        "custom chain `{network}` uses chain id {custom_chain_id} but the network uses {}",
        .network_chain_id.map(|id| id.to_string()).unwrap_or_else(|| "none".to_string())
    )]
    ChainIdMismatch { network: String, custom_chain_id: u64, network_chain_id: Option<u64> },

    #[error("local chain id {0} is also used by a live network")]
    LocalChainIdCollision(u64),

    #[error("no compiler profiles configured")]
    NoCompilerProfiles,

    #[error("compiler {0} enables the optimizer with zero runs")]
    ZeroOptimizerRuns(Version),
}
