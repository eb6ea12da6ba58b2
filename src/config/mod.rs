pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "group-check")]
#[command(
    about = "Check whether proposed student groups repeat pairings from previous groups"
)]
pub struct CliConfig {
    /// Path to JSON file containing previous student groups
    pub previous_groups: String,

    /// Path to JSON file containing proposed student groups
    pub proposed_groups: String,

    #[arg(long, help = "Output results in JSON format")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn previous_path(&self) -> &str {
        &self.previous_groups
    }

    fn proposed_path(&self) -> &str {
        &self.proposed_groups
    }

    fn json_output(&self) -> bool {
        self.json
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("previous_groups", &self.previous_groups)?;
        validate_path("proposed_groups", &self.proposed_groups)?;
        Ok(())
    }
}
