//! Applies resolved edits to the original text and, on request, remembers
//! where each replacement landed in the final text.

use super::ResolvedEdit;

/// One applied edit, with `position` being the character index of the
/// replacement in the *final* text.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedEdit {
    pub original: String,
    pub replacement: String,
    pub position: usize,
}

/// Splice the edits into `text` in one ascending pass.
///
/// The edits must be disjoint and sorted by offset, which is what grouping
/// plus per-group selection guarantees. A running length delta translates
/// each edit's original-text offset into its position in the output, so a
/// single code path serves both plain splicing and highlight bookkeeping;
/// positions are only recorded when `record_positions` is set.
pub fn apply_edits(
    text: &str,
    edits: &[ResolvedEdit],
    record_positions: bool,
) -> (String, Option<Vec<AppliedEdit>>) {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut applied = record_positions.then(Vec::new);
    let mut cursor = 0;
    let mut delta: isize = 0;

    for edit in edits {
        out.extend(&chars[cursor..edit.offset]);
        if let Some(applied) = applied.as_mut() {
            applied.push(AppliedEdit {
                original: edit.original.clone(),
                replacement: edit.replacement.clone(),
                position: (edit.offset as isize + delta) as usize,
            });
        }
        out.push_str(&edit.replacement);
        delta += edit.replacement.chars().count() as isize - edit.length as isize;
        cursor = edit.end();
    }
    out.extend(&chars[cursor..]);

    (out, applied)
}

/// Wrap every applied replacement in `final_text` with the given markers.
///
/// Insertions run from the highest recorded position down so that earlier
/// positions stay valid while later spans are being wrapped.
pub fn render_highlights(
    final_text: &str,
    applied: &[AppliedEdit],
    open: &str,
    close: &str,
) -> String {
    let mut chars: Vec<char> = final_text.chars().collect();

    let mut by_position: Vec<&AppliedEdit> = applied.iter().collect();
    by_position.sort_by(|a, b| b.position.cmp(&a.position));

    for edit in by_position {
        let end = edit.position + edit.replacement.chars().count();
        chars.splice(end..end, close.chars());
        chars.splice(edit.position..edit.position, open.chars());
    }

    chars.into_iter().collect()
}

impl ResolvedEdit {
    fn end(&self) -> usize {
        self.offset + self.length
    }
}
