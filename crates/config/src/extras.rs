//! Pass-through settings for the test runner, gas reporter and documentation generator.

use crate::secrets::{SecretName, Secrets};
use serde::Serialize;

/// Test timeout in milliseconds. Forked tests fetch state lazily and need the headroom.
pub const TEST_TIMEOUT_MS: u64 = 50_000;

/// Contracts excluded from generated documentation.
pub const DOC_EXCLUDED_CONTRACTS: &[&str] = &["Clones", "ReverseRecords", "SafeTransferLib", "ERC20"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GasReporterConfig {
    pub enabled: bool,
}

impl GasReporterConfig {
    /// Enabled when `REPORT_GAS` is set to anything non-empty, including `false` or `0`.
    pub fn resolve(secrets: &Secrets) -> Self {
        Self { enabled: secrets.contains(SecretName::ReportGas) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MochaConfig {
    /// Milliseconds.
    pub timeout: u64,
}

impl Default for MochaConfig {
    fn default() -> Self {
        Self { timeout: TEST_TIMEOUT_MS }
    }
}

/// Account indices deploy scripts refer to by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NamedAccounts {
    pub deployer: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DodocConfig {
    pub exclude: Vec<String>,
}

impl Default for DodocConfig {
    fn default() -> Self {
        Self { exclude: DOC_EXCLUDED_CONTRACTS.iter().map(|name| name.to_string()).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_reporter_truthiness() {
        assert!(!GasReporterConfig::resolve(&Secrets::default()).enabled);
        assert!(!GasReporterConfig::resolve(&Secrets::from_vars([("REPORT_GAS", "")])).enabled);
        assert!(GasReporterConfig::resolve(&Secrets::from_vars([("REPORT_GAS", "true")])).enabled);
        assert!(GasReporterConfig::resolve(&Secrets::from_vars([("REPORT_GAS", "false")])).enabled);
    }

    #[test]
    fn defaults() {
        assert_eq!(MochaConfig::default().timeout, 50_000);
        assert_eq!(NamedAccounts::default().deployer, 0);
        assert_eq!(DodocConfig::default().exclude, ["Clones", "ReverseRecords", "SafeTransferLib", "ERC20"]);
    }
}
