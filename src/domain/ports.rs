use crate::domain::model::Group;
use crate::utils::error::Result;

/// Supplies parsed group rosters to the engine. The filesystem adapter lives
/// in `config::cli`; tests substitute in-memory sources.
pub trait GroupSource {
    fn load_groups(&self, path: &str) -> Result<Vec<Group>>;
}

pub trait ConfigProvider {
    fn previous_path(&self) -> &str;
    fn proposed_path(&self) -> &str;
    fn json_output(&self) -> bool;
    fn verbose(&self) -> bool;
}
