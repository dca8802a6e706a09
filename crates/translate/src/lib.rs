//! Optional translation of foreign-language briefing items.
//!
//! A remote LibreTranslate endpoint is tried first; when it is unconfigured or
//! fails, a fixed glossary substitution is used instead so an English item
//! always gets some Korean rendering.
//!
//! # Example
//!
//! ```rust,ignore
//! use translate::{TranslationConfig, Translator};
//!
//! let translator = Translator::new(TranslationConfig::glossary_only(), reqwest::Client::new());
//! let translation = translator.translate("Fed holds rates", "").await;
//! ```

mod detect;
mod error;
mod glossary;
mod libre;

pub use detect::is_english;
pub use error::TranslateError;
pub use glossary::glossary_translate;
pub use libre::LibreTranslateClient;

use serde::{Deserialize, Serialize};

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Remote backend used before the glossary fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorBackend {
    #[default]
    None,
    Libre,
}

impl TranslatorBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "libre" | "libretranslate" => Self::Libre,
            _ => Self::None,
        }
    }
}

/// Translation settings
#[derive(Debug, Clone)]
pub struct TranslationConfig {
    pub enabled: bool,
    pub backend: TranslatorBackend,
    pub target_lang: String,
    /// LibreTranslate `/translate` URL; empty disables the remote call
    pub url: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            backend: TranslatorBackend::None,
            target_lang: "ko".to_string(),
            url: String::new(),
        }
    }
}

impl TranslationConfig {
    /// Enabled, without a remote backend
    pub fn glossary_only() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }
}

/// A rendered translation alongside the text it was produced from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub original: String,
    pub rendered: String,
}

pub struct Translator {
    config: TranslationConfig,
    libre: Option<LibreTranslateClient>,
}

impl Translator {
    pub fn new(config: TranslationConfig, client: reqwest::Client) -> Self {
        let libre = match config.backend {
            TranslatorBackend::Libre if !config.url.trim().is_empty() => {
                Some(LibreTranslateClient::new(client, config.url.trim()))
            }
            _ => None,
        };
        Self { config, libre }
    }

    /// A translator that never produces anything
    pub fn disabled() -> Self {
        Self {
            config: TranslationConfig::default(),
            libre: None,
        }
    }

    /// Translate the summary, or the title when there is no summary.
    ///
    /// Returns `None` when disabled, when the text is not English, or when
    /// even the glossary fallback yields nothing.
    pub async fn translate(&self, title: &str, summary: &str) -> Option<Translation> {
        let source = if summary.trim().is_empty() { title } else { summary };
        let text = source.trim();
        if !self.config.enabled || !is_english(text) {
            return None;
        }

        let mut rendered = String::new();
        if let Some(libre) = &self.libre {
            match libre.translate(text, &self.config.target_lang).await {
                Ok(translated) => rendered = translated,
                Err(e) => tracing::warn!("Remote translation failed, using glossary: {}", e),
            }
        }
        if rendered.trim().is_empty() {
            rendered = glossary_translate(text);
        }

        if rendered.trim().is_empty() {
            return None;
        }

        Some(Translation {
            original: text.to_string(),
            rendered,
        })
    }
}
