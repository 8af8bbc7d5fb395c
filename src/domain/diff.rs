use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single line relates the original text to the modified one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Present in both texts at the walked position.
    Same,
    /// Only present in the modified text.
    Add,
    /// Only present in the original text.
    Remove,
}

impl DiffKind {
    /// Prefix used when rendering a unified diff.
    pub fn marker(self) -> char {
        match self {
            DiffKind::Same => ' ',
            DiffKind::Add => '+',
            DiffKind::Remove => '-',
        }
    }
}

impl fmt::Display for DiffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DiffKind::Same => "same",
            DiffKind::Add => "add",
            DiffKind::Remove => "remove",
        };
        write!(f, "{s}")
    }
}

/// One tagged line of a line diff.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub content: String,
}

impl DiffLine {
    pub fn same(content: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Same,
            content: content.into(),
        }
    }

    pub fn add(content: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Add,
            content: content.into(),
        }
    }

    pub fn remove(content: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Remove,
            content: content.into(),
        }
    }
}

/// Algorithm used to align the two texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffMode {
    /// Dual-cursor positional walk. Does not realign after an insertion.
    #[default]
    Positional,
    /// Edit-distance diff. Opt-in only.
    Minimal,
}

/// Split a document into its lines.
///
/// Splits on `\n` only, so an empty document is one empty line and a trailing
/// newline yields a trailing empty line.
pub fn source_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}
