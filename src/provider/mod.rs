//! The seam between the merging engine and the remote grammar checker.
//!
//! The engine only ever sees `CandidateEdit`s; where they come from is the
//! provider's business. Production uses the LanguageTool-compatible HTTP
//! client, tests substitute a stub.

pub mod language_tool;

pub use language_tool::LanguageToolClient;

use crate::error::Result;
use crate::merge::CandidateEdit;

/// A remote (or stubbed) source of correction suggestions.
///
/// One call per correction request, awaited sequentially; implementations
/// hold no per-request state. Any transport, HTTP, or decoding problem must
/// come back as a single coarse error, never a partial match list.
pub trait CorrectionProvider: Send + Sync {
    fn check(&self, text: &str) -> impl std::future::Future<Output = Result<Vec<CandidateEdit>>> + Send;
}

/// Thoroughness the checker is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckLevel {
    Default,
    Picky,
}

impl CheckLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckLevel::Default => "default",
            CheckLevel::Picky => "picky",
        }
    }
}

/// Which rules the checker should run.
///
/// The default enables the grammar and spelling rules we trust, turns off
/// the whitespace and typographic-quote rules (they fight with editors that
/// manage their own whitespace), and asks for the pickiest analysis level.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleConfig {
    pub enabled_rules: Vec<String>,
    pub disabled_rules: Vec<String>,
    pub level: CheckLevel,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled_rules: vec![
                "FR_SPELLING_RULE".to_string(),
                "ACCORD_SUJET_VERBE".to_string(),
            ],
            disabled_rules: vec![
                "WHITESPACE_RULE".to_string(),
                "FRENCH_WHITESPACE".to_string(),
                "APOS_TYP".to_string(),
            ],
            level: CheckLevel::Picky,
        }
    }
}
