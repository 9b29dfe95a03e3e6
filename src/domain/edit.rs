//! Patch edits and plans.
//!
//! A [`PatchPlan`] is an ordered list of [`Edit`]s aimed at one file. Plans
//! deserialize from TOML:
//!
//! ```toml
//! name = "fix-labels"
//! target = "public/js/tma-v2.js"
//!
//! [[edit]]
//! kind = "anchor"
//! find = 'createEl("span", "status ft", "FT")'
//! replace = 'createEl("span", "status ft", "انتهت")'
//!
//! [[edit]]
//! kind = "line"
//! index = 12
//! content = "    // patched"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single change to a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Edit {
    /// Overwrite one line by position.
    ///
    /// Positional edits assume a fixed file shape; any drift in line count
    /// before `index` lands the edit on an unrelated line.
    Line { index: usize, content: String },

    /// Replace the half-open line range `start..end` with `lines`.
    Splice {
        start: usize,
        end: usize,
        lines: Vec<String>,
    },

    /// Replace `find` with `replace` wherever the text appears.
    ///
    /// Without `all`, the anchor must occur exactly once.
    Anchor {
        find: String,
        replace: String,
        #[serde(default)]
        all: bool,
    },
}

impl Edit {
    pub fn line(index: usize, content: impl Into<String>) -> Self {
        Self::Line {
            index,
            content: content.into(),
        }
    }

    pub fn splice<I, S>(start: usize, end: usize, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Splice {
            start,
            end,
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn anchor(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self::Anchor {
            find: find.into(),
            replace: replace.into(),
            all: false,
        }
    }

    /// Short label used in logs and reports.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Line { index, .. } => format!("line {index}"),
            Self::Splice { start, end, lines } => {
                format!("lines {start}..{end} -> {} lines", lines.len())
            }
            Self::Anchor { find, .. } => {
                let first = find.lines().next().unwrap_or_default();
                let short: String = first.chars().take(48).collect();
                if short.len() < find.len() {
                    format!("anchor \"{short}…\"")
                } else {
                    format!("anchor \"{short}\"")
                }
            }
        }
    }

    /// Whether the edit addresses lines by position.
    #[must_use]
    pub const fn is_positional(&self) -> bool {
        matches!(self, Self::Line { .. } | Self::Splice { .. })
    }
}

/// Ordered edits for one target file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchPlan {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Default file the plan applies to, relative to the working directory.
    pub target: PathBuf,
    #[serde(rename = "edit", default)]
    pub edits: Vec<Edit>,
}

impl PatchPlan {
    pub fn new(name: impl Into<String>, target: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            target: target.into(),
            edits: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_edit(mut self, edit: Edit) -> Self {
        self.edits.push(edit);
        self
    }

    #[must_use]
    pub fn with_edits(mut self, edits: impl IntoIterator<Item = Edit>) -> Self {
        self.edits.extend(edits);
        self
    }

    /// True when every edit is positional. Such plans are not safe to
    /// re-run against their own output.
    #[must_use]
    pub fn is_positional(&self) -> bool {
        !self.edits.is_empty() && self.edits.iter().all(Edit::is_positional)
    }
}
