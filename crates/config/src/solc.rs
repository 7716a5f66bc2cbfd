//! Compiler profiles.

use semver::Version;
use serde::Serialize;

/// Optimizer runs used by every profile.
pub const OPTIMIZER_RUNS: u32 = 200;

/// Optimizer settings of a compiler profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Optimizer {
    pub enabled: bool,
    /// Expected number of contract invocations. Positive whenever `enabled` is set.
    pub runs: u32,
}

impl Optimizer {
    pub const fn enabled(runs: u32) -> Self {
        Self { enabled: true, runs }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompilerSettings {
    pub optimizer: Optimizer,
}

/// A solc version and the settings sources pinned to it compile with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompilerProfile {
    pub version: Version,
    pub settings: CompilerSettings,
}

impl CompilerProfile {
    pub fn new(version: Version, optimizer: Optimizer) -> Self {
        Self { version, settings: CompilerSettings { optimizer } }
    }

    pub fn optimizer(&self) -> &Optimizer {
        &self.settings.optimizer
    }
}

/// The ordered compiler profile set.
///
/// Static: nothing here depends on the environment. Order is kept stable for reproducible builds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolidityConfig {
    pub compilers: Vec<CompilerProfile>,
}

impl SolidityConfig {
    /// Returns the profile for the given version.
    pub fn profile(&self, version: &Version) -> Option<&CompilerProfile> {
        self.compilers.iter().find(|profile| &profile.version == version)
    }
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            compilers: vec![
                CompilerProfile::new(Version::new(0, 8, 4), Optimizer::enabled(OPTIMIZER_RUNS)),
                // legacy contracts
                CompilerProfile::new(Version::new(0, 5, 17), Optimizer::enabled(OPTIMIZER_RUNS)),
            ],
        }
    }
}
