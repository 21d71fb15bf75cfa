use std::collections::BTreeMap;

use crate::analysis::AnalyzeError;

/// A single named cleanup step.
///
/// Steps are total transforms over an owned list of strings: they cannot fail,
/// so the executor has no partial-failure path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    /// Keep only strings longer than five characters.
    RemoveShortItems,
    /// Remove every ASCII space from each string. Other whitespace is kept.
    RemoveSpaces,
}

impl PipelineStep {
    /// Display name of this step.
    pub fn name(&self) -> &'static str {
        match self {
            PipelineStep::RemoveShortItems => "Remove short items",
            PipelineStep::RemoveSpaces => "Remove spaces",
        }
    }

    pub fn apply(&self, items: Vec<String>) -> Vec<String> {
        match self {
            PipelineStep::RemoveShortItems => items
                .into_iter()
                // Length is counted in characters, not bytes.
                .filter(|item| item.chars().count() > 5)
                .collect(),
            PipelineStep::RemoveSpaces => items
                .into_iter()
                .map(|item| item.replace(' ', ""))
                .collect(),
        }
    }
}

/// Registry of analysis flows, keyed by flow id.
///
/// [`PipelineRegistry::default`] installs the built-in flows; additional flows
/// composed from the existing step kinds can be registered on top.
#[derive(Debug, Clone)]
pub struct PipelineRegistry {
    flows: BTreeMap<String, Vec<PipelineStep>>,
}

impl PipelineRegistry {
    /// An empty registry with no flows.
    pub fn new() -> Self {
        Self {
            flows: BTreeMap::new(),
        }
    }

    /// Register (or replace) a flow under the given id.
    pub fn register(&mut self, id: impl Into<String>, steps: Vec<PipelineStep>) {
        self.flows.insert(id.into(), steps);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.flows.contains_key(id)
    }

    /// Registered flow ids, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.flows.keys().map(String::as_str)
    }

    /// Look up the ordered step list for a flow id.
    pub fn resolve(&self, id: &str) -> Result<&[PipelineStep], AnalyzeError> {
        self.flows
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| AnalyzeError::InvalidFlow(id.to_string()))
    }

    /// Fold the items through each step of the flow, in registry order.
    pub fn apply(&self, id: &str, items: Vec<String>) -> Result<Vec<String>, AnalyzeError> {
        let steps = self.resolve(id)?;
        Ok(steps.iter().fold(items, |items, step| step.apply(items)))
    }
}

impl Default for PipelineRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(
            "1",
            vec![PipelineStep::RemoveShortItems, PipelineStep::RemoveSpaces],
        );
        registry
    }
}
