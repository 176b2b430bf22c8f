//! Drives one correction round-trip: provider call, overlap grouping,
//! per-group selection, confidence filtering, capitalization adjustment,
//! splicing.

use tracing::{debug, info, warn};

use crate::error::{CorrectionError, Result};
use crate::merge::splice::AppliedEdit;
use crate::merge::{casing, confidence, grouping, selection, splice, CandidateEdit, ResolvedEdit};
use crate::provider::CorrectionProvider;

/// Per-request knobs. The defaults apply every suggested edit, use
/// confidence to arbitrate inside overlap groups, and keep the original
/// capitalization.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionOptions {
    /// Edits scoring below this are dropped before splicing.
    pub confidence_threshold: f64,
    /// Use confidence scores to pick between overlapping candidates.
    pub context_aware: bool,
    /// Carry the replaced text's capitalization over to the replacement.
    pub preserve_capitalization: bool,
    /// Record where each replacement landed in the final text.
    pub highlight_corrections: bool,
}

impl Default for CorrectionOptions {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.0,
            context_aware: true,
            preserve_capitalization: true,
            highlight_corrections: false,
        }
    }
}

/// Outcome of one correction request. `applied` is `Some` only when
/// highlighting was requested; its entries are ordered by position.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionResult {
    pub corrected_text: String,
    pub applied: Option<Vec<AppliedEdit>>,
}

impl CorrectionResult {
    fn untouched(text: &str, highlight: bool) -> Self {
        Self {
            corrected_text: text.to_string(),
            applied: highlight.then(Vec::new),
        }
    }
}

/// Ties a provider to the merging engine. Stateless between calls; callers
/// are expected to serialize requests per editing session rather than run
/// several corrections of the same text concurrently.
pub struct Corrector<P> {
    provider: P,
}

impl<P: CorrectionProvider> Corrector<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Correct `text` in one provider round-trip.
    ///
    /// Blank input short-circuits to an untouched result without calling the
    /// provider. Provider failures surface as a single coarse error and no
    /// partial result. Matches with spans outside the text are logged and
    /// skipped, never applied.
    pub async fn correct(&self, text: &str, options: &CorrectionOptions) -> Result<CorrectionResult> {
        if text.trim().is_empty() {
            debug!("blank input, skipping provider call");
            return Ok(CorrectionResult::untouched(text, options.highlight_corrections));
        }

        // every provider-layer failure reaches the caller as the one
        // coarse Provider error, decode problems included
        let candidates = self.provider.check(text).await.map_err(|e| match e {
            CorrectionError::Provider { .. } => e,
            other => CorrectionError::Provider {
                details: other.to_string(),
            },
        })?;
        let candidates = drop_malformed(candidates, text.chars().count());
        if candidates.is_empty() {
            debug!("no usable matches");
            return Ok(CorrectionResult::untouched(text, options.highlight_corrections));
        }

        let chars: Vec<char> = text.chars().collect();
        let mut resolved = Vec::new();

        for group in grouping::group_overlapping(candidates) {
            let edit = selection::select_best(&group, options.context_aware);

            let score = confidence::estimate(edit);
            if score < options.confidence_threshold {
                debug!(
                    "dropping edit at {} (confidence {score:.2} below {:.2})",
                    edit.offset, options.confidence_threshold
                );
                continue;
            }
            let Some(best_replacement) = edit.replacements.first() else {
                continue;
            };

            let original: String = chars[edit.offset..edit.end()].iter().collect();
            let replacement = if options.preserve_capitalization {
                casing::preserve_capitalization(&original, best_replacement)
            } else {
                best_replacement.clone()
            };

            resolved.push(ResolvedEdit {
                offset: edit.offset,
                length: edit.length,
                original,
                replacement,
            });
        }

        let (corrected_text, applied) =
            splice::apply_edits(text, &resolved, options.highlight_corrections);
        info!("applied {} of the suggested edits", resolved.len());

        Ok(CorrectionResult {
            corrected_text,
            applied,
        })
    }
}

/// Spans are provider-supplied and untrusted: anything empty or reaching
/// past the end of the text would make the splicer panic, so it is skipped
/// here with a warning instead.
fn drop_malformed(candidates: Vec<CandidateEdit>, text_len: usize) -> Vec<CandidateEdit> {
    candidates
        .into_iter()
        .filter(|edit| {
            let ok = edit.length >= 1 && edit.end() <= text_len;
            if !ok {
                warn!(
                    "skipping malformed match: span {}..{} in text of {} chars",
                    edit.offset,
                    edit.end(),
                    text_len
                );
            }
            ok
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CorrectionError;
    use crate::merge::Category;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Provider that serves a fixed match list and counts calls.
    struct StubProvider {
        matches: Vec<CandidateEdit>,
        calls: AtomicUsize,
    }

    impl StubProvider {
        fn new(matches: Vec<CandidateEdit>) -> Self {
            Self {
                matches,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl CorrectionProvider for StubProvider {
        async fn check(&self, _text: &str) -> Result<Vec<CandidateEdit>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.matches.clone())
        }
    }

    struct FailingProvider;

    impl CorrectionProvider for FailingProvider {
        async fn check(&self, _text: &str) -> Result<Vec<CandidateEdit>> {
            Err(CorrectionError::Provider {
                details: "boom".to_string(),
            })
        }
    }

    /// Provider whose response body could not be decoded.
    struct GarbledProvider;

    impl CorrectionProvider for GarbledProvider {
        async fn check(&self, _text: &str) -> Result<Vec<CandidateEdit>> {
            Err(CorrectionError::InvalidResponse {
                details: "bad json".to_string(),
            })
        }
    }

    fn edit(offset: usize, length: usize, replacement: &str, category: Category) -> CandidateEdit {
        CandidateEdit {
            offset,
            length,
            replacements: vec![replacement.to_string()],
            category,
        }
    }

    #[tokio::test]
    async fn test_single_grammar_match_applied() {
        let provider = StubProvider::new(vec![edit(9, 7, "marché", Category::Grammar)]);
        let corrector = Corrector::new(provider);

        let result = corrector
            .correct("Il va au marcher.", &CorrectionOptions::default())
            .await
            .unwrap();
        assert_eq!(result.corrected_text, "Il va au marché.");
        assert!(result.applied.is_none());
    }

    #[tokio::test]
    async fn test_blank_input_skips_provider() {
        let provider = StubProvider::new(vec![edit(0, 1, "x", Category::Typos)]);
        let corrector = Corrector::new(provider);

        let result = corrector
            .correct("   ", &CorrectionOptions::default())
            .await
            .unwrap();
        assert_eq!(result.corrected_text, "   ");
        assert_eq!(corrector.provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_overlapping_matches_apply_only_one() {
        // [3, 8) and [5, 10) overlap and must collapse to one group; the
        // grammar edit wins the group
        let text = "0123456789abcdef";
        let provider = StubProvider::new(vec![
            edit(3, 5, "STYLE", Category::Style),
            edit(5, 5, "GRAM", Category::Grammar),
        ]);
        let corrector = Corrector::new(provider);

        let options = CorrectionOptions {
            preserve_capitalization: false,
            ..Default::default()
        };
        let result = corrector.correct(text, &options).await.unwrap();
        assert_eq!(result.corrected_text, "01234GRAMabcdef");
    }

    #[tokio::test]
    async fn test_threshold_drops_low_confidence_match() {
        // a style edit with one alternative scores 0.47 + 0.1 = 0.57 < 0.9
        let provider = StubProvider::new(vec![edit(0, 5, "autre", Category::Style)]);
        let corrector = Corrector::new(provider);

        let options = CorrectionOptions {
            confidence_threshold: 0.9,
            ..Default::default()
        };
        let result = corrector.correct("texte intact", &options).await.unwrap();
        assert_eq!(result.corrected_text, "texte intact");
    }

    #[tokio::test]
    async fn test_highlighting_records_positions() {
        let provider = StubProvider::new(vec![edit(11, 7, "marché", Category::Typos)]);
        let corrector = Corrector::new(provider);

        let options = CorrectionOptions {
            highlight_corrections: true,
            ..Default::default()
        };
        let result = corrector.correct("Je vais au marcher", &options).await.unwrap();
        assert_eq!(result.corrected_text, "Je vais au marché");

        let applied = result.applied.unwrap();
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].position, 11);
        assert_eq!(applied[0].original, "marcher");
        assert_eq!(applied[0].replacement, "marché");
    }

    #[tokio::test]
    async fn test_capitalization_preserved_end_to_end() {
        let provider = StubProvider::new(vec![edit(0, 7, "marché", Category::Typos)]);
        let corrector = Corrector::new(provider);

        let result = corrector
            .correct("Marcher est sain.", &CorrectionOptions::default())
            .await
            .unwrap();
        assert_eq!(result.corrected_text, "Marché est sain.");
    }

    #[tokio::test]
    async fn test_capitalization_can_be_disabled() {
        let provider = StubProvider::new(vec![edit(0, 7, "marché", Category::Typos)]);
        let corrector = Corrector::new(provider);

        let options = CorrectionOptions {
            preserve_capitalization: false,
            ..Default::default()
        };
        let result = corrector.correct("Marcher est sain.", &options).await.unwrap();
        assert_eq!(result.corrected_text, "marché est sain.");
    }

    #[tokio::test]
    async fn test_provider_failure_is_surfaced() {
        let corrector = Corrector::new(FailingProvider);
        let err = corrector
            .correct("du texte", &CorrectionOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CorrectionError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_decode_failure_surfaces_as_provider_error() {
        // callers match on Provider; a response the client could not decode
        // must not leak through as a different variant
        let corrector = Corrector::new(GarbledProvider);
        let err = corrector
            .correct("du texte", &CorrectionOptions::default())
            .await
            .unwrap_err();
        match err {
            CorrectionError::Provider { details } => assert!(details.contains("bad json")),
            other => panic!("expected a coarse provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_match_is_skipped() {
        // second match reaches past the end of the 8-char text
        let provider = StubProvider::new(vec![
            edit(0, 2, "Du", Category::Typos),
            edit(6, 10, "jamais", Category::Grammar),
            edit(3, 0, "vide", Category::Grammar),
        ]);
        let corrector = Corrector::new(provider);

        let result = corrector
            .correct("du texte", &CorrectionOptions::default())
            .await
            .unwrap();
        assert_eq!(result.corrected_text, "Du texte");
    }

    #[tokio::test]
    async fn test_match_without_replacements_never_applied() {
        let provider = StubProvider::new(vec![CandidateEdit {
            offset: 0,
            length: 2,
            replacements: vec![],
            category: Category::Grammar,
        }]);
        let corrector = Corrector::new(provider);

        let result = corrector
            .correct("du texte", &CorrectionOptions::default())
            .await
            .unwrap();
        assert_eq!(result.corrected_text, "du texte");
    }

    #[tokio::test]
    async fn test_length_delta_accounting() {
        let text = "aa bb cc";
        let provider = StubProvider::new(vec![
            edit(0, 2, "aaaa", Category::Typos),
            edit(3, 2, "b", Category::Typos),
        ]);
        let corrector = Corrector::new(provider);

        let options = CorrectionOptions {
            highlight_corrections: true,
            preserve_capitalization: false,
            ..Default::default()
        };
        let result = corrector.correct(text, &options).await.unwrap();
        assert_eq!(result.corrected_text, "aaaa b cc");

        let delta = result.corrected_text.chars().count() as isize
            - text.chars().count() as isize;
        assert_eq!(delta, (4 - 2) + (1 - 2));

        let applied = result.applied.unwrap();
        assert_eq!(applied[0].position, 0);
        assert_eq!(applied[1].position, 5); // 3 shifted by the +2 delta
    }
}
