//! HTTP client for a LanguageTool-compatible `/v2/check` endpoint.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{CorrectionProvider, RuleConfig};
use crate::error::{CorrectionError, Result};
use crate::merge::{CandidateEdit, Category};

/// The public LanguageTool endpoint, used when no server is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.languagetool.org/v2/check";

/// The texts we correct are French; the language tag is fixed, not an option.
pub const TARGET_LANGUAGE: &str = "fr";

/// Provider backed by a LanguageTool-style HTTP server.
///
/// One form-encoded POST per `check` call, no retries. The shared client
/// carries the only timeouts in play; nothing above this layer enforces one.
#[derive(Debug, Clone)]
pub struct LanguageToolClient {
    endpoint: String,
    language: String,
    rules: RuleConfig,
    client: reqwest::Client,
}

impl LanguageToolClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            endpoint: endpoint.into(),
            language: TARGET_LANGUAGE.to_string(),
            rules: RuleConfig::default(),
            client,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.rules = rules;
        self
    }

    fn form_params(&self, text: &str) -> [(&'static str, String); 5] {
        [
            ("text", text.to_string()),
            ("language", self.language.clone()),
            ("enabledRules", self.rules.enabled_rules.join(",")),
            ("disabledRules", self.rules.disabled_rules.join(",")),
            ("level", self.rules.level.as_str().to_string()),
        ]
    }
}

impl CorrectionProvider for LanguageToolClient {
    async fn check(&self, text: &str) -> Result<Vec<CandidateEdit>> {
        debug!("checking {} chars against {}", text.chars().count(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .form(&self.form_params(text))
            .send()
            .await
            .map_err(|e| CorrectionError::Provider {
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("checker returned {status}: {body}");
            return Err(CorrectionError::Provider {
                details: format!("checker returned {status}"),
            });
        }

        let body: CheckResponse =
            response
                .json()
                .await
                .map_err(|e| CorrectionError::InvalidResponse {
                    details: e.to_string(),
                })?;

        debug!("checker returned {} matches", body.matches.len());
        Ok(body.matches.into_iter().map(CandidateEdit::from).collect())
    }
}

/// Wire format of a `/v2/check` response, reduced to the fields we consume.
#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub matches: Vec<ApiMatch>,
}

#[derive(Debug, Deserialize)]
pub struct ApiMatch {
    pub offset: usize,
    pub length: usize,
    #[serde(default)]
    pub replacements: Vec<ApiReplacement>,
    pub rule: ApiRule,
}

#[derive(Debug, Deserialize)]
pub struct ApiReplacement {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiRule {
    pub id: String,
    pub category: ApiCategory,
}

#[derive(Debug, Deserialize)]
pub struct ApiCategory {
    pub id: String,
}

impl From<ApiMatch> for CandidateEdit {
    fn from(m: ApiMatch) -> Self {
        CandidateEdit {
            offset: m.offset,
            length: m.length,
            replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            category: Category::from_id(&m.rule.category.id),
        }
    }
}
