//! Grammar and spell correction by splicing suggestions from a
//! LanguageTool-compatible checker into the original text.
//!
//! The interesting part is the merging engine in [`merge`]: the checker
//! returns edits anchored at character offsets that may overlap, so they are
//! grouped, arbitrated, confidence-filtered, and applied in an order that
//! keeps every offset valid. [`Corrector`] wires a provider to that engine.

pub mod config;
pub mod corrector;
pub mod error;
pub mod merge;
pub mod provider;

pub use corrector::{CorrectionOptions, CorrectionResult, Corrector};
pub use error::{CorrectionError, Result};
pub use merge::splice::{render_highlights, AppliedEdit};
pub use merge::{CandidateEdit, Category, EditGroup};
pub use provider::{CheckLevel, CorrectionProvider, LanguageToolClient, RuleConfig};
