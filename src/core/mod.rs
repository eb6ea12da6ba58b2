pub mod analyzer;
pub mod engine;
pub mod report;

pub use crate::domain::model::{AnalysisResult, Conflict, Group, GroupConflict, Pair};
pub use crate::domain::ports::{ConfigProvider, GroupSource};
pub use crate::utils::error::Result;
