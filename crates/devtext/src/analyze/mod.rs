use crate::prelude::{println, *};
use colored::Colorize;
use devtext_core::analysis::{finish_analysis, AnalysisRequest, AnalyzeError};
use devtext_core::pipeline::PipelineRegistry;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct Options {
    /// Data source name: Stackoverflow or Github
    #[arg(value_name = "SOURCE")]
    pub data_source_name: String,

    /// Analysis flow id (built-in: 1)
    #[arg(value_name = "FLOW")]
    pub analysis_flow_id: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Analyzing {} data...", options.data_source_name);
        println!();
    }

    let results = analyze_data(
        &options.data_source_name,
        options.analysis_flow_id.as_deref(),
    )
    .await;

    if options.json {
        output_json(&results)?;
    } else {
        output_formatted(&results);
    }

    Ok(())
}

/// Runs the full analysis and always comes back with a list of strings.
///
/// Validation happens before any network I/O, so an unknown source or flow id
/// returns its message without a request being sent. Fetch errors and
/// unexpected payload shapes are folded into a one-element list the same way.
pub async fn analyze_data(source_name: &str, flow_id: Option<&str>) -> Vec<String> {
    let registry = PipelineRegistry::default();

    let request = match AnalysisRequest::new(&registry, source_name, flow_id) {
        Ok(request) => request,
        Err(err) => return vec![err.to_string()],
    };

    let fetched = fetch_json(request.endpoint()).await;

    finish_analysis(&registry, &request, fetched)
}

/// GET the endpoint and parse the body as JSON.
///
/// Failures are soft: transport errors, non-2xx statuses, and unparseable
/// bodies come back as `AnalyzeError::Fetch` instead of aborting the run.
async fn fetch_json(url: &str) -> Result<serde_json::Value, AnalyzeError> {
    // The GitHub API rejects requests without a User-Agent.
    let client = reqwest::Client::builder()
        .user_agent(APP_USER_AGENT)
        .build()
        .map_err(|e| AnalyzeError::Fetch(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AnalyzeError::Fetch(e.to_string()))?;

    if !response.status().is_success() {
        return Err(AnalyzeError::Fetch(format!(
            "HTTP {} from {url}",
            response.status()
        )));
    }

    response
        .json()
        .await
        .map_err(|e| AnalyzeError::Fetch(e.to_string()))
}

/// Convert the result list to a JSON string
fn format_results_json(results: &[String]) -> Result<String> {
    serde_json::to_string_pretty(results).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert the result list to formatted text with colors
fn format_results_text(results: &[String]) -> String {
    let mut output = String::new();

    if results.is_empty() {
        output.push_str(&format!("{}\n", "No results.".yellow()));
        return output;
    }

    for (idx, result) in results.iter().enumerate() {
        output.push_str(&format!(
            "{} {}\n",
            format!("[{}]", idx + 1).yellow().bold(),
            result.white()
        ));
    }

    output
}

fn output_json(results: &[String]) -> Result<()> {
    let json = format_results_json(results)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(results: &[String]) {
    let formatted = format_results_text(results);
    print!("{}", formatted);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_results_json_basic() {
        let results = strings(&["first title", "second title"]);

        let json = format_results_json(&results).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, results);
    }

    #[test]
    fn test_format_results_json_empty() {
        let json = format_results_json(&[]).unwrap();

        assert_eq!(json, "[]");
    }

    #[test]
    fn test_format_results_text_basic() {
        let results = strings(&["first title", "second title"]);

        let formatted = format_results_text(&results);

        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("first title"));
        assert!(formatted.contains("[2]"));
        assert!(formatted.contains("second title"));
    }

    #[test]
    fn test_format_results_text_empty() {
        let formatted = format_results_text(&[]);

        assert!(formatted.contains("No results."));
    }

    #[test]
    fn test_format_results_text_single_error_message() {
        // Error results travel the same path as data: a one-element listing.
        let results = strings(&["Unsupported data source: Reddit"]);

        let formatted = format_results_text(&results);

        assert!(formatted.contains("[1]"));
        assert!(formatted.contains("Unsupported data source: Reddit"));
        assert_eq!(formatted.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_analyze_data_unknown_source_short_circuits() {
        let results = analyze_data("Reddit", None).await;

        assert_eq!(results, strings(&["Unsupported data source: Reddit"]));
    }

    #[tokio::test]
    async fn test_analyze_data_unknown_flow_short_circuits() {
        let results = analyze_data("Github", Some("99")).await;

        assert_eq!(results, strings(&["Invalid analysis flow: 99"]));
    }
}
