//! Validation report shaping.
//!
//! A validation collaborator reports failures as an ordered list of issues,
//! each carrying a path into the validated data and a message. This module
//! defines that collaborator contract as a serde-friendly data model and two
//! transformers over it: [`flatten_error`] produces a single-level mapping
//! keyed by joined path strings, and [`structured_error`] produces a nested
//! mirror of the validated data's shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod flatten;
mod structure;

pub use flatten::{FlatError, flatten_error};
pub use structure::{ErrorTree, structured_error};


/// One step of an issue path: an object key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// A string key into a mapping.
    Key(String),
    /// A numeric index into a sequence.
    Index(usize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// One structured validation failure: where it happened and what went wrong.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Path to the failing position. Empty for a whole-value failure.
    #[serde(default)]
    pub path: Vec<Segment>,
    /// Human-readable description of the failure.
    pub message: String,
}

impl Issue {
    /// Builds an issue from any sequence of path segments.
    #[must_use]
    pub fn new<S: Into<Segment>>(path: impl IntoIterator<Item = S>, message: &str) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            message: message.to_owned(),
        }
    }

    /// Builds a whole-value issue with an empty path.
    #[must_use]
    pub fn whole_value(message: &str) -> Self {
        Self {
            path: Vec::new(),
            message: message.to_owned(),
        }
    }
}

/// A failed validation: the ordered issues the collaborator detected, deepest
/// message per leaf, in detection order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Report {
    /// The issues, in the order they were detected.
    pub issues: Vec<Issue>,
}

impl Report {
    /// Wraps a list of issues as a report.
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

impl FromIterator<Issue> for Report {
    fn from_iter<I: IntoIterator<Item = Issue>>(issues: I) -> Self {
        Self {
            issues: issues.into_iter().collect(),
        }
    }
}

/// Failures while shaping a validation report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// The report carried no issues, so there is nothing to shape.
    #[error("validation report carries no issues")]
    Empty,
}
