//! Applies patch plans to text and files.
//!
//! A plan is applied entirely in memory; the file is written only after
//! every edit succeeded. Positional edits see the line shape left by the
//! edits before them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{Edit, LineSequence, PatchPlan};
use crate::error::{PatchError, Result};

/// How missing anchors are handled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchOptions {
    /// Fail on a missing anchor instead of skipping the edit.
    pub strict: bool,
}

/// What happened to one edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditOutcome {
    Applied { replacements: usize },
    Skipped { reason: String },
}

/// Per-edit entry of a [`PatchReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditReport {
    /// 1-based position of the edit in the plan.
    pub number: usize,
    pub label: String,
    #[serde(flatten)]
    pub outcome: EditOutcome,
}

/// Summary of one plan application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub plan: String,
    pub target: Option<PathBuf>,
    pub lines_before: usize,
    pub lines_after: usize,
    pub changed: bool,
    pub written: bool,
    pub edits: Vec<EditReport>,
}

impl PatchReport {
    #[must_use]
    pub fn applied(&self) -> usize {
        self.edits
            .iter()
            .filter(|e| matches!(e.outcome, EditOutcome::Applied { .. }))
            .count()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.edits.len() - self.applied()
    }
}

/// Reject plans that can never apply cleanly.
pub fn validate_plan(plan: &PatchPlan) -> std::result::Result<(), PatchError> {
    if plan.edits.is_empty() {
        return Err(PatchError::InvalidPlan(format!(
            "plan '{}' has no edits",
            plan.name
        )));
    }
    for (i, edit) in plan.edits.iter().enumerate() {
        match edit {
            Edit::Splice { start, end, .. } if start > end => {
                return Err(PatchError::InvalidPlan(format!(
                    "edit #{}: range start {start} is after end {end}",
                    i + 1
                )));
            }
            Edit::Line { content, .. } if content.contains('\n') => {
                return Err(PatchError::InvalidPlan(format!(
                    "edit #{}: line content contains a newline; use a splice",
                    i + 1
                )));
            }
            Edit::Splice { lines, .. } => {
                if let Some(pos) = lines.iter().position(|line| line.contains('\n')) {
                    return Err(PatchError::InvalidPlan(format!(
                        "edit #{}: replacement line {pos} contains a newline",
                        i + 1
                    )));
                }
            }
            Edit::Anchor { find, .. } if find.is_empty() => {
                return Err(PatchError::InvalidPlan(format!(
                    "edit #{}: anchor text is empty",
                    i + 1
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Parse and validate a plan from TOML content.
pub fn parse_plan(content: &str) -> Result<PatchPlan> {
    let plan: PatchPlan = toml::from_str(content).map_err(PatchError::Parse)?;
    validate_plan(&plan)?;
    Ok(plan)
}

/// Apply `plan` to `text`, returning the new text and a report.
pub fn apply_to_text(
    plan: &PatchPlan,
    text: &str,
    options: PatchOptions,
) -> std::result::Result<(String, PatchReport), PatchError> {
    validate_plan(plan)?;

    let mut lines = LineSequence::parse(text);
    let lines_before = lines.len();
    let mut reports = Vec::with_capacity(plan.edits.len());

    for (i, edit) in plan.edits.iter().enumerate() {
        let number = i + 1;
        let outcome = apply_edit(&mut lines, edit, number, options)?;
        debug!(edit = number, label = %edit.describe(), ?outcome, "edit processed");
        reports.push(EditReport {
            number,
            label: edit.describe(),
            outcome,
        });
    }

    let patched = lines.join();
    let report = PatchReport {
        plan: plan.name.clone(),
        target: None,
        lines_before,
        lines_after: lines.len(),
        changed: patched != text,
        written: false,
        edits: reports,
    };
    Ok((patched, report))
}

fn apply_edit(
    lines: &mut LineSequence,
    edit: &Edit,
    number: usize,
    options: PatchOptions,
) -> std::result::Result<EditOutcome, PatchError> {
    match edit {
        Edit::Line { index, content } => {
            lines
                .set(*index, content.as_str())
                .map_err(|e| PatchError::LineOutOfRange {
                    edit: number,
                    index: *index,
                    len: e.len,
                })?;
            Ok(EditOutcome::Applied { replacements: 1 })
        }
        Edit::Splice {
            start,
            end,
            lines: replacement,
        } => {
            lines
                .splice(*start..*end, replacement.iter().cloned())
                .map_err(|e| PatchError::SpliceOutOfRange {
                    edit: number,
                    start: *start,
                    end: *end,
                    len: e.len,
                })?;
            Ok(EditOutcome::Applied { replacements: 1 })
        }
        Edit::Anchor { find, replace, all } => {
            let text = lines.join();
            let count = text.matches(find.as_str()).count();
            match count {
                0 if options.strict => Err(PatchError::AnchorNotFound {
                    edit: number,
                    anchor: edit.describe(),
                }),
                0 => {
                    debug!(edit = number, anchor = %edit.describe(), "anchor not found, skipping");
                    Ok(EditOutcome::Skipped {
                        reason: "anchor not found".to_string(),
                    })
                }
                n if n > 1 && !*all => Err(PatchError::AmbiguousAnchor {
                    edit: number,
                    anchor: edit.describe(),
                    count: n,
                }),
                n => {
                    *lines = LineSequence::parse(&text.replace(find.as_str(), replace));
                    Ok(EditOutcome::Applied { replacements: n })
                }
            }
        }
    }
}

/// A plan applied to a file's content, not yet written back.
#[derive(Debug, Clone)]
pub struct PendingPatch {
    path: PathBuf,
    patched: String,
    report: PatchReport,
}

impl PendingPatch {
    #[must_use]
    pub fn report(&self) -> &PatchReport {
        &self.report
    }

    /// Overwrite the file with the patched text. Unchanged files are left
    /// alone.
    pub fn write(self) -> Result<PatchReport> {
        let mut report = self.report;
        if report.changed {
            fs::write(&self.path, self.patched)?;
            report.written = true;
            info!(path = %self.path.display(), lines = report.lines_after, "patched file written");
        }
        Ok(report)
    }
}

/// Read the file at `path` and apply `plan` to its content in memory.
///
/// Nothing is written until [`PendingPatch::write`].
pub fn prepare_file(plan: &PatchPlan, path: &Path, options: PatchOptions) -> Result<PendingPatch> {
    let text = fs::read_to_string(path)?;
    let (patched, mut report) = apply_to_text(plan, &text, options)?;
    report.target = Some(path.to_path_buf());

    info!(
        plan = %plan.name,
        path = %path.display(),
        applied = report.applied(),
        skipped = report.skipped(),
        lines_before = report.lines_before,
        lines_after = report.lines_after,
        changed = report.changed,
        "patch plan processed"
    );
    Ok(PendingPatch {
        path: path.to_path_buf(),
        patched,
        report,
    })
}
