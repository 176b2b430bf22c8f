//! Partitions candidate edits into runs of overlapping spans so that at most
//! one edit per run is ever applied.

use super::{CandidateEdit, EditGroup};

/// Group candidate edits by transitive span overlap.
///
/// Edits are sorted by offset and scanned once: an edit starts a new group
/// only when its offset lies strictly past the furthest end seen so far, so
/// touching spans (offset == current end) land in the same group. The
/// returned groups are ordered by start offset and pairwise disjoint.
pub fn group_overlapping(mut edits: Vec<CandidateEdit>) -> Vec<EditGroup> {
    edits.sort_by_key(|e| e.offset);

    let mut groups = Vec::new();
    let mut current: Vec<CandidateEdit> = Vec::new();
    let mut current_end = 0;

    for edit in edits {
        if !current.is_empty() && edit.offset > current_end {
            groups.push(EditGroup {
                edits: std::mem::take(&mut current),
            });
        }
        current_end = if current.is_empty() {
            edit.end()
        } else {
            current_end.max(edit.end())
        };
        current.push(edit);
    }

    if !current.is_empty() {
        groups.push(EditGroup { edits: current });
    }

    groups
}
