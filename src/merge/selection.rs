//! Picks the single edit that represents a group of overlapping candidates.

use super::{confidence, CandidateEdit, Category, EditGroup};

/// Choose one edit from a group via a left-to-right reduction.
///
/// Grammar edits displace a non-grammar incumbent outright. Failing that,
/// when `context_aware` is set and both sides actually have a replacement to
/// offer, the higher-confidence edit wins. Otherwise the wider span wins,
/// with the incumbent kept on ties. A singleton group short-circuits.
pub fn select_best(group: &EditGroup, context_aware: bool) -> &CandidateEdit {
    let mut best = &group.edits[0];
    if group.edits.len() == 1 {
        return best;
    }

    for candidate in &group.edits[1..] {
        if candidate.category == Category::Grammar && best.category != Category::Grammar {
            best = candidate;
        } else if context_aware
            && !candidate.replacements.is_empty()
            && !best.replacements.is_empty()
        {
            if confidence::estimate(candidate) > confidence::estimate(best) {
                best = candidate;
            }
        } else if candidate.length > best.length {
            best = candidate;
        }
    }

    best
}
