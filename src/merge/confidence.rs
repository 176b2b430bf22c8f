//! Heuristic confidence scoring for a single candidate edit.

use super::{CandidateEdit, Category};

const BASE_CONFIDENCE: f64 = 0.5;
const GRAMMAR_BONUS: f64 = 0.2;
const TYPO_BONUS: f64 = 0.15;
const ALTERNATIVE_PENALTY: f64 = 0.03;
const MAX_ALTERNATIVE_PENALTY: f64 = 0.3;
const LONG_SPAN_BONUS: f64 = 0.1;

/// Estimate how confident we are that an edit should be applied, in [0, 1].
///
/// The category bonuses are deliberately independent additions rather than
/// a single per-category bump; changing that would shift which edits clear
/// a caller's threshold. More alternatives mean the checker itself was less
/// sure, so each one costs a little, capped so a huge alternative list
/// cannot zero out an otherwise solid edit. An edit with no alternatives at
/// all has nothing to splice in and scores 0.
pub fn estimate(edit: &CandidateEdit) -> f64 {
    if edit.replacements.is_empty() {
        return 0.0;
    }

    let mut score = BASE_CONFIDENCE;

    if edit.category == Category::Grammar {
        score += GRAMMAR_BONUS;
    }
    if edit.category == Category::Typos {
        score += TYPO_BONUS;
    }

    score -= (edit.replacements.len() as f64 * ALTERNATIVE_PENALTY).min(MAX_ALTERNATIVE_PENALTY);

    if edit.length > 3 {
        score += LONG_SPAN_BONUS;
    }

    score.clamp(0.0, 1.0)
}
