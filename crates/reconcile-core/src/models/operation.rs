//! Text-editing operations over a logical character buffer.
//!
//! Positions and lengths count Unicode scalar values (`char`s), not bytes.
//! A list of operations is ordered: array order is application order, and
//! each position is read against the buffer as already changed by the
//! operations before it.
//!
//! # Wire format
//!
//! `{ "type": "insert" | "delete" | "retain", "position", "length"?, "content"? }`
//!
//! An insert that came from an editor *replace* carries the replaced span in
//! `length`; plain inserts omit it.

use std::ops::Range;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Operation {
    /// Splice `content` in at `position`. With `replaces`, first remove
    /// that many characters starting at `position`.
    Insert {
        position: usize,
        content: String,
        #[serde(rename = "length", default, skip_serializing_if = "Option::is_none")]
        replaces: Option<usize>,
    },
    /// Remove `[position, position + length)`.
    Delete { position: usize, length: usize },
    /// Keep `[position, position + length)` unchanged. Used to keep operation
    /// lists index-aligned with a transform partner.
    Retain { position: usize, length: usize },
}

impl Operation {
    pub fn insert(position: usize, content: impl Into<String>) -> Self {
        Self::Insert {
            position,
            content: content.into(),
            replaces: None,
        }
    }

    /// An insert that overwrites `length` characters at `position`.
    pub fn replace(position: usize, length: usize, content: impl Into<String>) -> Self {
        Self::Insert {
            position,
            content: content.into(),
            replaces: Some(length),
        }
    }

    pub fn delete(position: usize, length: usize) -> Self {
        Self::Delete { position, length }
    }

    pub fn retain(position: usize, length: usize) -> Self {
        Self::Retain { position, length }
    }

    pub fn position(&self) -> usize {
        match self {
            Self::Insert { position, .. }
            | Self::Delete { position, .. }
            | Self::Retain { position, .. } => *position,
        }
    }

    /// A copy of this operation moved to `position`.
    #[must_use]
    pub fn with_position(&self, position: usize) -> Self {
        let mut moved = self.clone();
        match &mut moved {
            Self::Insert { position: p, .. }
            | Self::Delete { position: p, .. }
            | Self::Retain { position: p, .. } => *p = position,
        }
        moved
    }

    /// Number of characters the operation touches, starting at its position.
    ///
    /// Inserts span their content; a replace spans whichever is longer of its
    /// content and the span it overwrites.
    pub fn extent(&self) -> usize {
        match self {
            Self::Insert {
                content, replaces, ..
            } => content.chars().count().max(replaces.unwrap_or(0)),
            Self::Delete { length, .. } | Self::Retain { length, .. } => *length,
        }
    }

    /// Half-open range `[position, position + extent)`.
    pub fn range(&self) -> Range<usize> {
        let start = self.position();
        start..start.saturating_add(self.extent())
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, Self::Insert { replaces: Some(_), .. })
    }

    /// Lowercase wire tag of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "insert",
            Self::Delete { .. } => "delete",
            Self::Retain { .. } => "retain",
        }
    }
}
