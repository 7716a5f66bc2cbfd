//! Shape checks over the static tables and a resolved [`Configuration`].

use crate::{
    Configuration,
    chain::{CHAINS, VERIFICATION_ALIASES},
    error::ShapeError,
    networks::{LOCAL_CHAIN_ID, LOCAL_NETWORK},
};
use std::collections::HashSet;

impl Configuration {
    /// Returns the first shape defect, if any.
    pub fn check(&self) -> Result<(), ShapeError> {
        match self.shape_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns every shape defect.
    pub fn shape_errors(&self) -> Vec<ShapeError> {
        let mut errors = table_errors();

        let mut custom_ids = HashSet::new();
        for custom in &self.etherscan.custom_chains {
            if !custom_ids.insert(custom.chain_id) {
                errors.push(ShapeError::DuplicateCustomChainId(custom.chain_id));
            }
            match self.networks.get(&custom.network) {
                None => errors.push(ShapeError::UnknownCustomChain(custom.network.clone())),
                Some(network) if network.chain_id != Some(custom.chain_id) => {
                    errors.push(ShapeError::ChainIdMismatch {
                        network: custom.network.clone(),
                        custom_chain_id: custom.chain_id,
                        network_chain_id: network.chain_id,
                    })
                }
                Some(_) => {}
            }
        }

        if self.solidity.compilers.is_empty() {
            errors.push(ShapeError::NoCompilerProfiles);
        }
        for profile in &self.solidity.compilers {
            let optimizer = profile.optimizer();
            if optimizer.enabled && optimizer.runs == 0 {
                errors.push(ShapeError::ZeroOptimizerRuns(profile.version.clone()));
            }
        }

        errors
    }
}

// defects the resolved maps can't show because they dedupe by name
fn table_errors() -> Vec<ShapeError> {
    let mut errors = Vec::new();

    let mut names = HashSet::from([LOCAL_NETWORK]);
    for spec in CHAINS {
        if !names.insert(spec.network) {
            errors.push(ShapeError::DuplicateNetwork(spec.network.to_string()));
        }
        if spec.chain_id == LOCAL_CHAIN_ID {
            errors.push(ShapeError::LocalChainIdCollision(LOCAL_CHAIN_ID));
        }
    }

    let mut aliases = HashSet::new();
    for (alias, _) in VERIFICATION_ALIASES {
        if !aliases.insert(*alias) {
            errors.push(ShapeError::DuplicateAlias(alias.to_string()));
        }
    }

    errors
}
