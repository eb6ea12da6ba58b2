use serde::Serialize;

/// An ordered roster of student names. Identity is the exact string value,
/// case-sensitive, with no trimming or normalization.
pub type Group = Vec<String>;

/// Unordered pair of two distinct students, stored in sorted order so that
/// (A, B) and (B, A) compare and hash identically. Serializes as a
/// two-element JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pair(String, String);

impl Pair {
    /// Builds the canonical pair for two names, or `None` when both names
    /// are textually identical. A name listed twice in one group therefore
    /// never pairs with itself.
    pub fn new(a: &str, b: &str) -> Option<Self> {
        if a == b {
            None
        } else if a < b {
            Some(Pair(a.to_string(), b.to_string()))
        } else {
            Some(Pair(b.to_string(), a.to_string()))
        }
    }

    pub fn first(&self) -> &str {
        &self.0
    }

    pub fn second(&self) -> &str {
        &self.1
    }
}

/// One repeated pairing found inside a proposed group. `students` keeps the
/// order the two names occupy in the group; `pair` is the canonical form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub students: [String; 2],
    pub pair: Pair,
}

/// All conflicts found in a single proposed group, tagged with the group's
/// position in the input and a snapshot of its members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupConflict {
    pub group_index: usize,
    pub group_members: Vec<String>,
    pub conflicts: Vec<Conflict>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub has_conflicts: bool,
    pub num_conflicts: usize,
    pub conflicts: Vec<GroupConflict>,
    pub missing_students: Vec<String>,
    pub num_missing: usize,
    pub has_missing: bool,
}
