//! Mirroring a report as a nested tree matching the validated data's shape.

use std::collections::BTreeMap;

use serde::ser::{Serialize, Serializer};

use crate::maybe::Maybe;
use crate::report::{Report, ReportError, Segment};

/// The nested shape of a failed validation.
///
/// Objects mirror mappings in the validated data and arrays mirror sequences.
/// Array positions no issue touched are holes (`None` slots); the `Serialize`
/// impl renders holes as JSON `null`, since JSON has no hole notion.
#[derive(Debug, Clone)]
pub enum ErrorTree {
    /// A leaf message at this position.
    Message(String),
    /// Failures nested under the keys of a mapping.
    Object(BTreeMap<String, ErrorTree>),
    /// Failures nested under the indices of a sequence, with holes.
    Array(Vec<Option<ErrorTree>>),
}

#[derive(Clone, Copy)]
enum Shape {
    Object,
    Array,
}

impl ErrorTree {
    /// The leaf message, when this node is one.
    #[must_use]
    pub fn message(&self) -> Maybe<&str> {
        match self {
            Self::Message(message) => Maybe::Some(message.as_str()),
            _ => Maybe::None,
        }
    }

    /// The child recorded under an object key, when present.
    #[must_use]
    pub fn get(&self, key: &str) -> Maybe<&Self> {
        match self {
            Self::Object(children) => match children.get(key) {
                Some(child) => Maybe::Some(child),
                None => Maybe::None,
            },
            _ => Maybe::None,
        }
    }

    /// The child recorded at an array index; a hole or out-of-range index is
    /// `None`.
    #[must_use]
    pub fn at(&self, index: usize) -> Maybe<&Self> {
        match self {
            Self::Array(slots) => match slots.get(index) {
                Some(Some(child)) => Maybe::Some(child),
                _ => Maybe::None,
            },
            _ => Maybe::None,
        }
    }

    fn make(shape: Shape) -> Self {
        match shape {
            Shape::Object => Self::Object(BTreeMap::new()),
            Shape::Array => Self::Array(Vec::new()),
        }
    }

    fn is_shape(&self, shape: Shape) -> bool {
        matches!(
            (self, shape),
            (Self::Object(_), Shape::Object) | (Self::Array(_), Shape::Array)
        )
    }

    fn entries(&mut self) -> &mut BTreeMap<String, Self> {
        if !matches!(self, Self::Object(_)) {
            *self = Self::Object(BTreeMap::new());
        }
        match self {
            Self::Object(children) => children,
            _ => unreachable!("node was just coerced to an object"),
        }
    }

    fn slots(&mut self) -> &mut Vec<Option<Self>> {
        if !matches!(self, Self::Array(_)) {
            *self = Self::Array(Vec::new());
        }
        match self {
            Self::Array(slots) => slots,
            _ => unreachable!("node was just coerced to an array"),
        }
    }
}

impl Serialize for ErrorTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Message(message) => serializer.serialize_str(message),
            Self::Object(children) => children.serialize(serializer),
            Self::Array(slots) => slots.serialize(serializer),
        }
    }
}

/// Builds a nested mirror of the validated data holding each issue's message
/// at its path.
///
/// When the first issue's path is empty the whole value failed and its
/// message is returned directly. Otherwise the root's shape follows the first
/// issue's first segment (key → object, index → array), and each issue's path
/// is walked segment by segment, creating an empty object when the *next*
/// segment is a key and an empty array when it is numeric, then assigning the
/// message at the final segment. Untouched array positions stay holes.
///
/// An interior position already holding a node of the wrong shape is replaced
/// by the needed empty container; the transformers otherwise trust the
/// collaborator to report paths consistent with one schema.
///
/// # Errors
///
/// Returns [`ReportError::Empty`] when the report carries no issues.
pub fn structured_error(report: &Report) -> Result<ErrorTree, ReportError> {
    let first = report.issues.first().ok_or(ReportError::Empty)?;
    let Some(root_segment) = first.path.first() else {
        return Ok(ErrorTree::Message(first.message.clone()));
    };

    let mut root = match root_segment {
        Segment::Key(_) => ErrorTree::make(Shape::Object),
        Segment::Index(_) => ErrorTree::make(Shape::Array),
    };
    for issue in &report.issues {
        insert_message(&mut root, &issue.path, &issue.message);
    }
    Ok(root)
}

fn insert_message(node: &mut ErrorTree, path: &[Segment], message: &str) {
    let Some((segment, rest)) = path.split_first() else {
        return;
    };
    match rest.first() {
        None => set_leaf(node, segment, message),
        Some(Segment::Key(_)) => insert_message(descend(node, segment, Shape::Object), rest, message),
        Some(Segment::Index(_)) => insert_message(descend(node, segment, Shape::Array), rest, message),
    }
}

/// Returns the child node under `segment`, creating (or reshaping) it as an
/// empty container of `shape`.
fn descend<'a>(node: &'a mut ErrorTree, segment: &Segment, shape: Shape) -> &'a mut ErrorTree {
    let child = match segment {
        Segment::Key(key) => node
            .entries()
            .entry(key.clone())
            .or_insert_with(|| ErrorTree::make(shape)),
        Segment::Index(index) => {
            let slots = node.slots();
            if slots.len() <= *index {
                slots.resize_with(index + 1, || None);
            }
            slots[*index].get_or_insert_with(|| ErrorTree::make(shape))
        }
    };
    if !child.is_shape(shape) {
        *child = ErrorTree::make(shape);
    }
    child
}

fn set_leaf(node: &mut ErrorTree, segment: &Segment, message: &str) {
    match segment {
        Segment::Key(key) => {
            node.entries()
                .insert(key.clone(), ErrorTree::Message(message.to_owned()));
        }
        Segment::Index(index) => {
            let slots = node.slots();
            if slots.len() <= *index {
                slots.resize_with(index + 1, || None);
            }
            slots[*index] = Some(ErrorTree::Message(message.to_owned()));
        }
    }
}
