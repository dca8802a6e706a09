use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use briefing::{FeedSources, Section};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourcesError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid feed source YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Parse `section: [url, ...]` YAML.
///
/// Unknown sections are logged and dropped; a section with no list is empty.
pub fn parse_sources(yaml: &str) -> Result<FeedSources, SourcesError> {
    let raw: BTreeMap<String, Option<Vec<String>>> = serde_yaml::from_str(yaml)?;

    let mut sources = FeedSources::new();
    for (name, urls) in raw {
        let Some(section) = Section::from_name(&name) else {
            tracing::warn!("Ignoring unknown feed section '{}'", name);
            continue;
        };
        let urls: Vec<String> = urls
            .unwrap_or_default()
            .into_iter()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect();
        sources.entry(section).or_default().extend(urls);
    }

    Ok(sources)
}

pub async fn load_sources(path: &Path) -> Result<FeedSources, SourcesError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SourcesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let sources = parse_sources(&content)?;

    tracing::debug!(
        "Loaded {} feeds in {} sections from {}",
        sources.values().map(Vec::len).sum::<usize>(),
        sources.len(),
        path.display()
    );
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
korea:
  - https://kr.example/rss
  - "  "
us:
  - https://us.example/rss
  - https://us.example/markets
crypto:
  - https://crypto.example/rss
china:
"#;

    #[test]
    fn test_parse_sources() {
        let sources = parse_sources(YAML).unwrap();

        assert_eq!(sources[&Section::Korea], vec!["https://kr.example/rss"]);
        assert_eq!(sources[&Section::Us].len(), 2);
        assert!(sources[&Section::China].is_empty());
        assert!(!sources.contains_key(&Section::Global));
        // "crypto" is not a known section
        assert_eq!(sources.len(), 3);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            parse_sources("korea: [unclosed"),
            Err(SourcesError::Yaml(_))
        ));
        assert!(matches!(
            parse_sources("- just\n- a list\n"),
            Err(SourcesError::Yaml(_))
        ));
    }

    #[tokio::test]
    async fn test_load_sources_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("news_sources.yml");
        std::fs::write(&path, YAML).unwrap();

        let sources = load_sources(&path).await.unwrap();
        assert_eq!(sources[&Section::Us][1], "https://us.example/markets");

        let missing = load_sources(&dir.path().join("nope.yml")).await;
        assert!(matches!(missing, Err(SourcesError::Io { .. })));
    }
}
