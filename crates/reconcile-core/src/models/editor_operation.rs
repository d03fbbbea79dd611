//! Edit events as emitted by UI editor components.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorOpKind {
    Insert,
    Delete,
    Replace,
}

impl EditorOpKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Delete => "delete",
            Self::Replace => "replace",
        }
    }
}

/// An editor-shaped edit: every field beyond `type` and `position` is optional
/// on the wire, so it has to be validated before it becomes an `Operation`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorOperation {
    #[serde(rename = "type")]
    pub kind: EditorOpKind,
    pub position: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl EditorOperation {
    pub fn new(kind: EditorOpKind, position: usize) -> Self {
        Self {
            kind,
            position,
            length: None,
            content: None,
        }
    }

    #[must_use]
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}
