use crate::pipeline::PipelineRegistry;
use crate::source::Source;

/// Errors surfaced while validating or running an analysis.
///
/// Every variant is folded into a one-element result list at the analyzer
/// boundary; the typed form exists so callers and tests can check the kind
/// instead of matching on message text.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Unsupported data source: {0}")]
    UnsupportedSource(String),

    #[error("Invalid analysis flow: {0}")]
    InvalidFlow(String),

    #[error("An error occurred: {0}")]
    Fetch(String),

    #[error("{0}")]
    Unexpected(String),
}

/// A validated analysis request.
///
/// Construction resolves the source and checks the flow id against the
/// registry, so an invalid request fails here and never reaches the network.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    source: Source,
    flow_id: Option<String>,
}

impl AnalysisRequest {
    pub fn new(
        registry: &PipelineRegistry,
        source_name: &str,
        flow_id: Option<&str>,
    ) -> Result<Self, AnalyzeError> {
        let source = Source::resolve(source_name)?;

        if let Some(id) = flow_id {
            if !registry.contains(id) {
                return Err(AnalyzeError::InvalidFlow(id.to_string()));
            }
        }

        Ok(Self {
            source,
            flow_id: flow_id.map(str::to_string),
        })
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn flow_id(&self) -> Option<&str> {
        self.flow_id.as_deref()
    }

    /// The endpoint the shell should fetch for this request.
    pub fn endpoint(&self) -> &'static str {
        self.source.endpoint()
    }
}

/// Turn a completed fetch outcome into the final result list.
///
/// The HTTP request itself happens in the shell; this consumes its result. A
/// fetch error bypasses extraction entirely, and any extraction or pipeline
/// failure is likewise folded into a one-element list carrying the message.
/// The return value is always a plain list of strings.
pub fn finish_analysis(
    registry: &PipelineRegistry,
    request: &AnalysisRequest,
    fetched: Result<serde_json::Value, AnalyzeError>,
) -> Vec<String> {
    let data = match fetched {
        Ok(data) => data,
        Err(err) => return vec![err.to_string()],
    };

    match run_analysis(registry, request, data) {
        Ok(results) => results,
        Err(err) => vec![err.to_string()],
    }
}

fn run_analysis(
    registry: &PipelineRegistry,
    request: &AnalysisRequest,
    data: serde_json::Value,
) -> Result<Vec<String>, AnalyzeError> {
    let mut results = request.source().extract(data)?;

    if let Some(id) = request.flow_id() {
        results = registry.apply(id, results)?;
    }

    Ok(results)
}
