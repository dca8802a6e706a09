use std::fmt;
use std::path::PathBuf;

use briefing::BriefProfile;
use notify::DeliveryPolicy;
use thiserror::Error;
use translate::{TranslationConfig, TranslatorBackend};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Which operating profile the run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Local run, credential kept in a token file
    #[default]
    Interactive,
    /// Scheduled run, credential derived from the environment
    Ci,
}

impl Mode {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "" | "interactive" | "local" => Ok(Self::Interactive),
            "ci" => Ok(Self::Ci),
            _ => Err(ConfigError::Invalid {
                key: "BRIEF_MODE",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interactive => write!(f, "interactive"),
            Self::Ci => write!(f, "ci"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: Mode,
    pub sources_path: PathBuf,
    pub token_file: PathBuf,
    pub rest_api_key: String,
    pub client_secret: Option<String>,
    /// Required in [`Mode::Ci`]
    pub refresh_token: Option<String>,
    pub translation: TranslationConfig,
    pub bilingual: bool,
    pub top_n: Option<usize>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let mode = Mode::parse(&get("BRIEF_MODE").unwrap_or_default())?;
        let rest_api_key =
            get("KAKAO_REST_API_KEY").ok_or(ConfigError::Missing("KAKAO_REST_API_KEY"))?;

        let refresh_token = get("KAKAO_REFRESH_TOKEN");
        if mode == Mode::Ci && refresh_token.is_none() {
            return Err(ConfigError::Missing("KAKAO_REFRESH_TOKEN"));
        }

        let top_n = match get("N_TOP") {
            Some(value) => Some(value.parse().map_err(|_| ConfigError::Invalid {
                key: "N_TOP",
                value,
            })?),
            None => None,
        };

        // Translation only runs in the scheduled profile
        let translation = TranslationConfig {
            enabled: mode == Mode::Ci && flag(get("AUTO_TRANSLATE"), false),
            backend: TranslatorBackend::from_str(&get("TRANSLATOR").unwrap_or_default()),
            target_lang: get("TARGET_LANG")
                .map(|l| l.to_lowercase())
                .unwrap_or_else(|| "ko".to_string()),
            url: get("TRANSLATE_URL").unwrap_or_default(),
        };

        Ok(Self {
            mode,
            sources_path: get("NEWS_SOURCES")
                .unwrap_or_else(|| "news_sources.yml".to_string())
                .into(),
            token_file: get("TOKEN_FILE")
                .unwrap_or_else(|| "token.json".to_string())
                .into(),
            rest_api_key,
            client_secret: get("KAKAO_CLIENT_SECRET"),
            refresh_token,
            translation,
            bilingual: flag(get("BILINGUAL"), true),
            top_n,
        })
    }

    pub fn profile(&self) -> BriefProfile {
        let profile = match self.mode {
            Mode::Interactive => BriefProfile::interactive(),
            Mode::Ci => BriefProfile::ci(self.bilingual),
        };
        match self.top_n {
            Some(top_n) => profile.with_top_n(top_n),
            None => profile,
        }
    }

    pub fn delivery_policy(&self) -> DeliveryPolicy {
        match self.mode {
            Mode::Interactive => DeliveryPolicy::interactive(),
            Mode::Ci => DeliveryPolicy::ci(),
        }
    }
}

fn flag(value: Option<String>, default: bool) -> bool {
    value.map_or(default, |v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use briefing::MessageStyle;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_interactive_defaults() {
        let config = config(&[("KAKAO_REST_API_KEY", "key")]).unwrap();
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.sources_path, PathBuf::from("news_sources.yml"));
        assert_eq!(config.token_file, PathBuf::from("token.json"));
        assert_eq!(config.client_secret, None);
        assert!(!config.translation.enabled);
        assert!(config.bilingual);
        assert_eq!(config.profile(), BriefProfile::interactive());
        assert_eq!(config.delivery_policy(), DeliveryPolicy::interactive());
    }

    #[test]
    fn test_missing_rest_key() {
        assert_eq!(
            config(&[("KAKAO_REST_API_KEY", "  ")]).unwrap_err(),
            ConfigError::Missing("KAKAO_REST_API_KEY")
        );
    }

    #[test]
    fn test_ci_requires_refresh_token() {
        assert_eq!(
            config(&[("BRIEF_MODE", "ci"), ("KAKAO_REST_API_KEY", "key")]).unwrap_err(),
            ConfigError::Missing("KAKAO_REFRESH_TOKEN")
        );
    }

    #[test]
    fn test_ci_profile_and_translation() {
        let config = config(&[
            ("BRIEF_MODE", "CI"),
            ("KAKAO_REST_API_KEY", "key"),
            ("KAKAO_REFRESH_TOKEN", "refresh"),
            ("AUTO_TRANSLATE", "True"),
            ("TRANSLATOR", "libre"),
            ("TRANSLATE_URL", "https://libre.example/translate"),
            ("BILINGUAL", "false"),
            ("N_TOP", "5"),
        ])
        .unwrap();

        assert_eq!(config.mode, Mode::Ci);
        assert!(config.translation.enabled);
        assert_eq!(config.translation.backend, TranslatorBackend::Libre);
        assert_eq!(config.translation.target_lang, "ko");

        let profile = config.profile();
        assert_eq!(profile.top_n, 5);
        assert_eq!(profile.style, MessageStyle::Annotated { bilingual: false });
        assert_eq!(config.delivery_policy(), DeliveryPolicy::ci());
    }

    #[test]
    fn test_translation_ignored_in_interactive_mode() {
        let config = config(&[("KAKAO_REST_API_KEY", "key"), ("AUTO_TRANSLATE", "true")]).unwrap();
        assert!(!config.translation.enabled);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config(&[("KAKAO_REST_API_KEY", "key"), ("N_TOP", "ten")]),
            Err(ConfigError::Invalid { key: "N_TOP", .. })
        ));
        assert!(matches!(
            config(&[("KAKAO_REST_API_KEY", "key"), ("BRIEF_MODE", "batch")]),
            Err(ConfigError::Invalid { key: "BRIEF_MODE", .. })
        ));
    }
}
