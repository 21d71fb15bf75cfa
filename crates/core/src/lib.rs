//! Core library for devtext
//!
//! This crate implements the **Functional Core** of the devtext application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`devtext_core`** (this crate): pure transformation functions with zero I/O
//! - **`devtext`**: the HTTP fetch, CLI, and output formatting (the Imperative Shell)
//!
//! All functions in this crate are deterministic and side-effect free: the
//! source registry and extractors, the pipeline registry and executor, request
//! validation, and the pure tail of the analysis (turning an already-completed
//! fetch outcome into the final result list). Because nothing here performs
//! I/O, every code path is testable with fixture data and no mocking.
//!
//! # Module Organization
//!
//! - [`source`]: data source registry and per-source payload extraction
//! - [`pipeline`]: cleanup pipeline registry and executor
//! - [`analysis`]: request validation, error taxonomy, and orchestration
//!
//! # Example Usage
//!
//! ```rust
//! use devtext_core::analysis::{finish_analysis, AnalysisRequest};
//! use devtext_core::pipeline::PipelineRegistry;
//! use serde_json::json;
//!
//! let registry = PipelineRegistry::default();
//! let request = AnalysisRequest::new(&registry, "Stackoverflow", Some("1")).unwrap();
//!
//! // Feed a fixture payload instead of a live HTTP response.
//! let payload = json!({"items": [{"title": "How do I chart things?"}]});
//! let results = finish_analysis(&registry, &request, Ok(payload));
//!
//! assert_eq!(results, vec!["HowdoIchartthings?".to_string()]);
//! ```
//!
//! The key invariant lives at the [`analysis`] boundary: the analyzer always
//! produces a `Vec<String>`. Failures of any kind (unknown source or flow,
//! fetch error, unexpected payload shape) become a one-element list carrying
//! the human-readable message, never a panic or an escaping error.

pub mod analysis;
pub mod pipeline;
pub mod source;
