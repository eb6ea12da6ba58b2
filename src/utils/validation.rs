use crate::domain::model::Group;
use crate::utils::error::{CheckError, Result};
use serde_json::Value;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CheckError::ConfigError {
            field: field_name.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CheckError::ConfigError {
            field: field_name.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Turns a parsed JSON document into group rosters, rejecting anything that
/// is not a list of lists of strings. Diagnostics name the offending group
/// index so a bad entry in a large file is easy to find.
pub fn roster_from_value(path: &str, value: Value) -> Result<Vec<Group>> {
    let Value::Array(raw_groups) = value else {
        return Err(CheckError::InvalidFormat {
            path: path.to_string(),
            reason: "Expected a list of groups".to_string(),
        });
    };

    let mut groups = Vec::with_capacity(raw_groups.len());
    for (i, raw_group) in raw_groups.into_iter().enumerate() {
        let Value::Array(raw_members) = raw_group else {
            return Err(CheckError::InvalidFormat {
                path: path.to_string(),
                reason: format!("Group {} is not a list", i),
            });
        };

        let mut members = Vec::with_capacity(raw_members.len());
        for member in raw_members {
            match member {
                Value::String(name) => members.push(name),
                other => {
                    return Err(CheckError::InvalidFormat {
                        path: path.to_string(),
                        reason: format!(
                            "Group {} contains a non-string member: {}",
                            i, other
                        ),
                    });
                }
            }
        }
        groups.push(members);
    }

    Ok(groups)
}
