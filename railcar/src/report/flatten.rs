//! Flattening a report into a single-level path-keyed mapping.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::maybe::Maybe;
use crate::report::{Report, ReportError, Segment};

/// The flat shape of a failed validation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FlatError {
    /// The whole value failed; there is no path to key by.
    Message(String),
    /// Field-level failures keyed by joined path.
    Fields(BTreeMap<String, String>),
}

impl FlatError {
    /// The whole-value message, when this is a [`FlatError::Message`].
    #[must_use]
    pub fn message(&self) -> Maybe<&str> {
        match self {
            Self::Message(message) => Maybe::Some(message.as_str()),
            Self::Fields(_) => Maybe::None,
        }
    }

    /// The message recorded under a joined path, when present.
    #[must_use]
    pub fn field(&self, path: &str) -> Maybe<&str> {
        match self {
            Self::Message(_) => Maybe::None,
            Self::Fields(fields) => match fields.get(path) {
                Some(message) => Maybe::Some(message.as_str()),
                None => Maybe::None,
            },
        }
    }
}

/// Flattens a report into a path-keyed mapping of messages.
///
/// When the first issue's path is empty the whole value failed and its
/// message is returned directly. Otherwise each issue is keyed by its joined
/// path: the first segment is emitted bare when it is a key and as `[index]`
/// when numeric; later segments append `.key` or `[index]`, with no separator
/// before a bracket. Issues sharing a joined path overwrite earlier ones.
///
/// # Errors
///
/// Returns [`ReportError::Empty`] when the report carries no issues.
pub fn flatten_error(report: &Report) -> Result<FlatError, ReportError> {
    let first = report.issues.first().ok_or(ReportError::Empty)?;
    if first.path.is_empty() {
        return Ok(FlatError::Message(first.message.clone()));
    }

    let mut fields = BTreeMap::new();
    for issue in &report.issues {
        let path = joined_path(&issue.path);
        if let Some(dropped) = fields.insert(path.clone(), issue.message.clone()) {
            tracing::debug!(%path, %dropped, "duplicate flat path, keeping the later message");
        }
    }
    Ok(FlatError::Fields(fields))
}

fn joined_path(path: &[Segment]) -> String {
    let mut joined = String::new();
    for (position, segment) in path.iter().enumerate() {
        match segment {
            Segment::Key(key) => {
                // Only the leading key goes without a separator.
                if position > 0 {
                    joined.push('.');
                }
                joined.push_str(key);
            }
            Segment::Index(index) => {
                let _ = write!(joined, "[{index}]");
            }
        }
    }
    joined
}
