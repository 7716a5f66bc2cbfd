//! Signer material shared by every network.

use serde::{Serialize, Serializer, ser::SerializeSeq};
use std::fmt;

/// Value written in place of the accounts list when signing is delegated.
pub const REMOTE_SIGNER: &str = "remote";

/// Placeholder used by [`AccountSpec::redacted`].
pub const REDACTED: &str = "<redacted>";

/// The signer material for a network.
///
/// The resolver never fails on a missing key: without one, signing is left to an externally managed
/// account and the network can still be used for reads.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum AccountSpec {
    /// Local private keys, `0x` prefixed. Always exactly one when built by the resolver.
    PrivateKeys(Vec<String>),
    /// Use the signer provided by the connected node or wallet.
    #[default]
    Remote,
}

impl AccountSpec {
    /// Resolves the raw `PRIVATE_KEY` secret.
    ///
    /// The key is only prefixed, not validated. A malformed key surfaces when the signing tool
    /// first uses it.
    pub fn from_private_key(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|key| !key.is_empty()) {
            Some(key) => Self::PrivateKeys(vec![normalize_private_key(key)]),
            None => {
                debug!(target: "config::accounts", "no private key set, using remote signer");
                Self::Remote
            }
        }
    }

    /// Returns `true` if signing is delegated.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote)
    }

    /// Returns the local keys, empty for [`AccountSpec::Remote`].
    pub fn private_keys(&self) -> &[String] {
        match self {
            Self::PrivateKeys(keys) => keys,
            Self::Remote => &[],
        }
    }

    /// Returns a copy with every key replaced by [`REDACTED`].
    pub fn redacted(&self) -> Self {
        match self {
            Self::PrivateKeys(keys) => Self::PrivateKeys(vec![REDACTED.to_string(); keys.len()]),
            Self::Remote => Self::Remote,
        }
    }
}

/// Prefixes a hex key with `0x`, leaving an existing prefix alone.
pub fn normalize_private_key(raw: &str) -> String {
    let key = raw.trim();
    let key = key.strip_prefix("0x").or_else(|| key.strip_prefix("0X")).unwrap_or(key);
    format!("0x{key}")
}

impl fmt::Debug for AccountSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKeys(keys) => write!(f, "PrivateKeys(<{} redacted>)", keys.len()),
            Self::Remote => f.write_str("Remote"),
        }
    }
}

impl fmt::Display for AccountSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKeys(keys) if keys.len() == 1 => f.write_str("local key"),
            Self::PrivateKeys(keys) => write!(f, "{} local keys", keys.len()),
            Self::Remote => f.write_str(REMOTE_SIGNER),
        }
    }
}

impl Serialize for AccountSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::PrivateKeys(keys) => {
                let mut seq = serializer.serialize_seq(Some(keys.len()))?;
                for key in keys {
                    seq.serialize_element(key)?;
                }
                seq.end()
            }
            Self::Remote => serializer.serialize_str(REMOTE_SIGNER),
        }
    }
}
