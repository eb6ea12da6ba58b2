use crate::domain::model::AnalysisResult;
use crate::utils::error::Result;
use std::fmt::Write;

/// Renders a human-readable report of conflicts and missing students.
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    if result.conflicts.is_empty() {
        out.push_str("✓ No conflicts found! All proposed groups have novel member combinations.\n");
    } else {
        let _ = writeln!(
            out,
            "✗ Found conflicts in {} proposed group(s):\n",
            result.conflicts.len()
        );
        for group in &result.conflicts {
            let _ = writeln!(
                out,
                "Group {}: {:?}",
                group.group_index + 1,
                group.group_members
            );
            out.push_str("  Conflicts:\n");
            for conflict in &group.conflicts {
                let _ = writeln!(
                    out,
                    "    - {} and {} have previously been in a group together",
                    conflict.students[0], conflict.students[1]
                );
            }
            out.push('\n');
        }
    }

    if result.missing_students.is_empty() {
        out.push_str("✓ Every previously seen student appears in a proposed group.\n");
    } else {
        let _ = writeln!(
            out,
            "✗ {} student(s) from previous groups are missing from the proposal:",
            result.num_missing
        );
        for student in &result.missing_students {
            let _ = writeln!(out, "    - {}", student);
        }
    }

    out
}

/// Renders the result for machine consumption, mirroring the
/// `AnalysisResult` field names.
pub fn render_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
