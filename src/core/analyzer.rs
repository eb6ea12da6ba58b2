use crate::domain::model::{AnalysisResult, Conflict, Group, GroupConflict, Pair};
use std::collections::HashSet;

/// Collects every canonical pair of distinct students that has shared a
/// group. Deduplicated across groups; a group of n distinct members
/// contributes C(n, 2) pairs.
pub fn build_pair_set(groups: &[Group]) -> HashSet<Pair> {
    let mut pairs = HashSet::new();
    for group in groups {
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                if let Some(pair) = Pair::new(&group[i], &group[j]) {
                    pairs.insert(pair);
                }
            }
        }
    }
    pairs
}

/// Union of all student names across the given groups.
pub fn build_student_set(groups: &[Group]) -> HashSet<String> {
    groups
        .iter()
        .flat_map(|group| group.iter().cloned())
        .collect()
}

/// Checks every proposed group against the pairings observed in the previous
/// groups and reports which previously seen students the proposal leaves out.
///
/// Pure function of its inputs: no state survives between calls, and calling
/// it twice with the same rosters yields byte-identical results. Within each
/// group, conflicts are recorded in position order (i < j over the member
/// list). Groups with no conflicts are omitted from the conflict list but
/// still count toward the missing-students computation. Missing students are
/// sorted lexicographically, case-sensitive.
pub fn analyze(previous: &[Group], proposed: &[Group]) -> AnalysisResult {
    let previous_pairs = build_pair_set(previous);
    let previous_students = build_student_set(previous);

    let mut conflicts = Vec::new();
    let mut num_conflicts = 0;
    for (group_index, group) in proposed.iter().enumerate() {
        let mut group_conflicts = Vec::new();
        for i in 0..group.len() {
            for j in (i + 1)..group.len() {
                let Some(pair) = Pair::new(&group[i], &group[j]) else {
                    continue;
                };
                if previous_pairs.contains(&pair) {
                    group_conflicts.push(Conflict {
                        students: [group[i].clone(), group[j].clone()],
                        pair,
                    });
                }
            }
        }
        if !group_conflicts.is_empty() {
            num_conflicts += group_conflicts.len();
            conflicts.push(GroupConflict {
                group_index,
                group_members: group.clone(),
                conflicts: group_conflicts,
            });
        }
    }

    let proposed_students = build_student_set(proposed);
    let mut missing_students: Vec<String> = previous_students
        .difference(&proposed_students)
        .cloned()
        .collect();
    missing_students.sort();

    AnalysisResult {
        has_conflicts: !conflicts.is_empty(),
        num_conflicts,
        conflicts,
        num_missing: missing_students.len(),
        has_missing: !missing_students.is_empty(),
        missing_students,
    }
}
