use serde::Deserialize;

use crate::analysis::AnalyzeError;

const STACKOVERFLOW_FAQ_URL: &str =
    "https://api.stackexchange.com/2.2/tags/highcharts/faq?site=stackoverflow";
const GITHUB_COMMITS_URL: &str = "https://api.github.com/repos/highcharts/highcharts/commits";

/// A registered data source.
///
/// Each variant carries its fixed endpoint URL and its extraction strategy,
/// selected by pattern match so adding a source forces both to be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Stackoverflow,
    Github,
}

impl Source {
    /// Resolve a source name to its registry entry.
    ///
    /// Only the exact registered literals resolve; anything else fails with
    /// `AnalyzeError::UnsupportedSource` before any network activity.
    pub fn resolve(name: &str) -> Result<Self, AnalyzeError> {
        match name {
            "Stackoverflow" => Ok(Source::Stackoverflow),
            "Github" => Ok(Source::Github),
            other => Err(AnalyzeError::UnsupportedSource(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Source::Stackoverflow => "Stackoverflow",
            Source::Github => "Github",
        }
    }

    /// The fixed API endpoint for this source.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Source::Stackoverflow => STACKOVERFLOW_FAQ_URL,
            Source::Github => GITHUB_COMMITS_URL,
        }
    }

    /// Extract the text strings for this source from a raw API payload.
    ///
    /// A payload whose overall shape does not match the source's API yields
    /// `AnalyzeError::Unexpected`; individual entries missing their text field
    /// are silently skipped, preserving the order of the rest.
    pub fn extract(&self, data: serde_json::Value) -> Result<Vec<String>, AnalyzeError> {
        match self {
            Source::Stackoverflow => extract_faq_titles(data),
            Source::Github => extract_commit_messages(data),
        }
    }
}

/// Stack Exchange tag-FAQ response envelope
#[derive(Debug, Deserialize)]
struct FaqResponse {
    #[serde(default)]
    items: Vec<FaqItem>,
}

#[derive(Debug, Deserialize)]
struct FaqItem {
    title: Option<String>,
}

/// GitHub commit-list entry
#[derive(Debug, Deserialize)]
struct CommitEntry {
    commit: Option<CommitDetail>,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: Option<String>,
}

fn extract_faq_titles(data: serde_json::Value) -> Result<Vec<String>, AnalyzeError> {
    let response: FaqResponse = serde_json::from_value(data)
        .map_err(|e| AnalyzeError::Unexpected(format!("Unexpected FAQ payload: {e}")))?;

    Ok(response
        .items
        .into_iter()
        .filter_map(|item| item.title)
        .collect())
}

fn extract_commit_messages(data: serde_json::Value) -> Result<Vec<String>, AnalyzeError> {
    let entries: Vec<CommitEntry> = serde_json::from_value(data)
        .map_err(|e| AnalyzeError::Unexpected(format!("Unexpected commit payload: {e}")))?;

    Ok(entries
        .into_iter()
        .filter_map(|entry| entry.commit.and_then(|c| c.message))
        .collect())
}
