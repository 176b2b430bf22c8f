use std::fs;
use std::path::{Path, PathBuf};

use toml_edit::DocumentMut;

use crate::corrector::CorrectionOptions;
use crate::provider::language_tool::DEFAULT_ENDPOINT;
use crate::provider::language_tool::TARGET_LANGUAGE;

/// CLI-facing configuration, persisted as TOML. The library itself takes
/// `CorrectionOptions` directly and never reads this file.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_url: String,
    pub language: String,
    pub confidence_threshold: f64,
    pub context_aware: bool,
    pub preserve_capitalization: bool,
    pub highlight_corrections: bool,
    pub config_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
        Self {
            server_url: DEFAULT_ENDPOINT.to_string(),
            language: TARGET_LANGUAGE.to_string(),
            confidence_threshold: 0.0,
            context_aware: true,
            preserve_capitalization: true,
            highlight_corrections: false,
            config_path: PathBuf::from(&home).join(".config/correcteur/config.toml"),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let defaults = Config::default();
        let loaded = Self::load_from(&defaults.config_path);

        // First run: write the defaults so the file is there to edit
        if !loaded.config_path.exists() {
            let _ = loaded.save();
        }

        loaded
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();
        config.config_path = path.to_path_buf();

        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(parsed) = contents.parse::<DocumentMut>() {
                if let Some(url) = parsed.get("server_url").and_then(|v| v.as_str()) {
                    config.server_url = url.to_string();
                }
                if let Some(language) = parsed.get("language").and_then(|v| v.as_str()) {
                    config.language = language.to_string();
                }
                if let Some(threshold) = parsed.get("confidence_threshold").and_then(|v| v.as_float()) {
                    config.confidence_threshold = threshold;
                }
                if let Some(flag) = parsed.get("context_aware").and_then(|v| v.as_bool()) {
                    config.context_aware = flag;
                }
                if let Some(flag) = parsed.get("preserve_capitalization").and_then(|v| v.as_bool()) {
                    config.preserve_capitalization = flag;
                }
                if let Some(flag) = parsed.get("highlight_corrections").and_then(|v| v.as_bool()) {
                    config.highlight_corrections = flag;
                }
            }
        }

        config
    }

    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut doc = DocumentMut::new();
        doc["server_url"] = toml_edit::value(self.server_url.clone());
        doc["language"] = toml_edit::value(self.language.clone());
        doc["confidence_threshold"] = toml_edit::value(self.confidence_threshold);
        doc["context_aware"] = toml_edit::value(self.context_aware);
        doc["preserve_capitalization"] = toml_edit::value(self.preserve_capitalization);
        doc["highlight_corrections"] = toml_edit::value(self.highlight_corrections);

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, doc.to_string())?;
        Ok(())
    }

    /// The per-request options this configuration amounts to.
    pub fn options(&self) -> CorrectionOptions {
        CorrectionOptions {
            confidence_threshold: self.confidence_threshold,
            context_aware: self.context_aware,
            preserve_capitalization: self.preserve_capitalization,
            highlight_corrections: self.highlight_corrections,
        }
    }
}
