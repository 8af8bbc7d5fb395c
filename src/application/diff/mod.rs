//! Line diff between an original text and its optimized counterpart.
//!
//! The default walk is positional: two cursors advance over the line lists and
//! every mismatch emits a remove/add pair. It never realigns after an inserted
//! or deleted line, so one insertion near the top of a file reports every later
//! line as changed. Callers that want an edit-distance alignment must ask for
//! [`DiffMode::Minimal`] explicitly.

pub mod cache;
pub mod view;

#[cfg(test)]
mod tests;

use crate::domain::{DiffLine, DiffMode, source_lines};
use similar::{ChangeTag, TextDiff};

pub use cache::{DiffCache, diff_cached};
pub use view::{DiffStats, NumberedLine, number_lines, render_numbered, render_unified, stats};

/// Diff two documents with the default positional walk.
pub fn line_diff(original: &str, modified: &str) -> Vec<DiffLine> {
    let old = source_lines(original);
    let new = source_lines(modified);

    let mut out = Vec::with_capacity(old.len().max(new.len()));
    let (mut i, mut j) = (0usize, 0usize);

    while i < old.len() || j < new.len() {
        if i < old.len() && j < new.len() && old[i] == new[j] {
            out.push(DiffLine::same(old[i]));
            i += 1;
            j += 1;
            continue;
        }

        if i < old.len() {
            out.push(DiffLine::remove(old[i]));
            i += 1;
        }
        if j < new.len() {
            out.push(DiffLine::add(new[j]));
            j += 1;
        }
    }

    out
}

/// Diff two documents with the requested alignment.
pub fn diff(original: &str, modified: &str, mode: DiffMode) -> Vec<DiffLine> {
    match mode {
        DiffMode::Positional => line_diff(original, modified),
        DiffMode::Minimal => minimal_diff(original, modified),
    }
}

fn minimal_diff(original: &str, modified: &str) -> Vec<DiffLine> {
    let old = source_lines(original);
    let new = source_lines(modified);
    let diff = TextDiff::from_slices(&old, &new);

    diff.iter_all_changes()
        .map(|change| {
            let text = change.value();
            match change.tag() {
                ChangeTag::Equal => DiffLine::same(text),
                ChangeTag::Delete => DiffLine::remove(text),
                ChangeTag::Insert => DiffLine::add(text),
            }
        })
        .collect()
}
