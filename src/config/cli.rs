use crate::domain::model::Group;
use crate::domain::ports::GroupSource;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::roster_from_value;
use std::fs;
use std::path::Path;

/// Filesystem adapter: reads a roster file and parses it into groups.
#[derive(Debug, Clone, Default)]
pub struct FileSource;

impl GroupSource for FileSource {
    fn load_groups(&self, path: &str) -> Result<Vec<Group>> {
        let file_path = Path::new(path);
        if !file_path.exists() {
            return Err(CheckError::FileNotFound {
                path: path.to_string(),
            });
        }

        let raw = fs::read_to_string(file_path)?;
        if raw.trim().is_empty() {
            return Err(CheckError::EmptyFile {
                path: path.to_string(),
            });
        }

        let value = serde_json::from_str(&raw).map_err(|source| CheckError::JsonError {
            path: path.to_string(),
            source,
        })?;

        roster_from_value(path, value)
    }
}
