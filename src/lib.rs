pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::FileSource, CliConfig};
pub use crate::core::{analyzer::analyze, engine::CheckEngine, report};
pub use crate::domain::model::{AnalysisResult, Conflict, Group, GroupConflict, Pair};
pub use crate::utils::error::{CheckError, Result};
