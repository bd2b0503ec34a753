//! Search collaborators backed by JSON files.
//!
//! An external search tool writes its results to disk; these adapters replay
//! them through the same seams a live client would use.

use std::path::{Path, PathBuf};

use revlens_core::SearchResult;
use revlens_sentiment::{ReviewSearch, SearchError, TitleSearch};
use serde::Deserialize;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SearchError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| SearchError(format!("failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&raw)
        .map_err(|e| SearchError(format!("failed to parse {}: {e}", path.display())))
}

/// A JSON array of `{url|href, snippet|body}` objects.
#[derive(Debug, Clone)]
pub(crate) struct ResultsFile {
    path: PathBuf,
}

impl ResultsFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReviewSearch for ResultsFile {
    fn search(&self, query: &str, max_results: usize) -> Result<Vec<SearchResult>, SearchError> {
        let results: Vec<SearchResult> = read_json(&self.path)?;
        tracing::debug!(
            query,
            path = %self.path.display(),
            found = results.len(),
            "replaying search results from file"
        );
        Ok(results.into_iter().take(max_results).collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TitleEntry {
    Plain(String),
    Object { title: String },
}

/// A JSON array of titles, either bare strings or `{title}` objects.
#[derive(Debug, Clone)]
pub(crate) struct TitlesFile {
    path: PathBuf,
}

impl TitlesFile {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TitleSearch for TitlesFile {
    fn titles(&self, queries: &[String]) -> Result<Vec<String>, SearchError> {
        let entries: Vec<TitleEntry> = read_json(&self.path)?;
        tracing::debug!(
            queries = queries.len(),
            path = %self.path.display(),
            "replaying titles from file"
        );
        Ok(entries
            .into_iter()
            .map(|e| match e {
                TitleEntry::Plain(t) | TitleEntry::Object { title: t } => t,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_file_accepts_search_engine_keys_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(
            &path,
            r#"[
                {"href": "https://www.gsmarena.com/a", "body": "Great", "title": "A"},
                {"url": "https://www.techradar.com/b", "snippet": "Bad"},
                {"url": "https://www.theverge.com/c"}
            ]"#,
        )
        .unwrap();

        let results = ResultsFile::new(&path).search("PhoneX reviews", 2).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://www.gsmarena.com/a");
        assert_eq!(results[0].snippet, "Great");
        assert_eq!(results[1].snippet, "Bad");
    }

    #[test]
    fn results_file_with_both_url_keys_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        std::fs::write(
            &path,
            r#"[{"url": "https://x", "href": "https://www.gsmarena.com/a", "snippet": "s", "body": "Great"}]"#,
        )
        .unwrap();

        let results = ResultsFile::new(&path).search("q", 10).unwrap();
        assert_eq!(results[0].url, "https://www.gsmarena.com/a");
        assert_eq!(results[0].snippet, "Great");
    }

    #[test]
    fn missing_results_file_is_search_error() {
        let err = ResultsFile::new("/nonexistent/results.json")
            .search("q", 10)
            .unwrap_err();
        assert!(err.0.contains("failed to read"));
    }

    #[test]
    fn titles_file_accepts_strings_and_objects() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titles.json");
        std::fs::write(
            &path,
            r#"["iPhone 16 Pro Review - GSMArena.com", {"title": "Samsung Galaxy S25 | Tom's Guide", "href": "x"}]"#,
        )
        .unwrap();

        let titles = TitlesFile::new(&path).titles(&[]).unwrap();
        assert_eq!(
            titles,
            vec![
                "iPhone 16 Pro Review - GSMArena.com".to_string(),
                "Samsung Galaxy S25 | Tom's Guide".to_string(),
            ]
        );
    }

    #[test]
    fn malformed_titles_file_is_search_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("titles.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = TitlesFile::new(&path).titles(&[]).unwrap_err();
        assert!(err.0.contains("failed to parse"));
    }
}
