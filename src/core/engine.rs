use crate::core::analyzer::analyze;
use crate::core::{AnalysisResult, ConfigProvider, GroupSource};
use crate::utils::error::Result;

/// Drives a full check: load both rosters through the source, then run the
/// analyzer. Holds no state between runs.
pub struct CheckEngine<S: GroupSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: GroupSource, C: ConfigProvider> CheckEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub fn run(&self) -> Result<AnalysisResult> {
        tracing::debug!(
            "Loading previous groups from: {}",
            self.config.previous_path()
        );
        let previous = self.source.load_groups(self.config.previous_path())?;
        tracing::info!("Loaded {} previous group(s)", previous.len());

        tracing::debug!(
            "Loading proposed groups from: {}",
            self.config.proposed_path()
        );
        let proposed = self.source.load_groups(self.config.proposed_path())?;
        tracing::info!("Loaded {} proposed group(s)", proposed.len());

        let result = analyze(&previous, &proposed);
        tracing::info!(
            "Analysis complete: {} conflict(s), {} missing student(s)",
            result.num_conflicts,
            result.num_missing
        );
        Ok(result)
    }
}
