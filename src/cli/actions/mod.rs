mod run;

use crate::tlsa::{CertUsage, MatchingType, Selector, ZoneOwner};
use std::path::PathBuf;

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Generate {
        certfile: PathBuf,
        usage: CertUsage,
        selector: Selector,
        matching_type: MatchingType,
        owner: Option<ZoneOwner>,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub fn execute(self) -> anyhow::Result<()> {
        run::execute(self)
    }
}
