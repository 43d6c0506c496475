use derive_more::Display;
use std::ops::Range;

use crate::engine::{DiffOp, DiffTag};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the status of a diff hunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiffHunkStatus {
    /// The hunk only adds lines
    #[display(fmt = "Added")]
    Added,

    /// The hunk only removes lines
    #[display(fmt = "Removed")]
    Removed,

    /// The hunk both removes and adds lines
    #[display(fmt = "Modified")]
    Modified,
}

/// Represents a range of lines in a diff
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffHunkRange {
    /// The starting line (0-based)
    pub start: usize,

    /// The number of lines
    pub count: usize,
}

impl DiffHunkRange {
    /// Create a new range from start and count
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Create a range from a start and end (exclusive)
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            count: range.end - range.start,
        }
    }

    /// Convert to a standard Range
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// Get the end of the range (exclusive)
    pub fn end(&self) -> usize {
        self.start + self.count
    }

    /// Check if this range is empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Check if this range contains the given line
    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end()
    }

    /// Format the range the way a unified diff header does
    ///
    /// Starts are 1-based; an empty range names the line before it.
    pub fn unified_header(&self) -> String {
        if self.count == 0 {
            format!("{},0", self.start)
        } else if self.count == 1 {
            format!("{}", self.start + 1)
        } else {
            format!("{},{}", self.start + 1, self.count)
        }
    }
}

/// A group of changed lines plus the unchanged lines around them
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffHunk {
    pub status: DiffHunkStatus,

    /// The range of lines in the original text
    pub old_range: DiffHunkRange,

    /// The range of lines in the modified text
    pub new_range: DiffHunkRange,

    /// The ops covered by this hunk, context included
    pub lines: Vec<DiffOp>,
}

impl DiffHunk {
    /// Build a hunk from a run of ops starting at the given line offsets
    pub fn new(old_start: usize, new_start: usize, lines: Vec<DiffOp>) -> Self {
        let old_count = lines.iter().filter(|op| op.in_original()).count();
        let new_count = lines.iter().filter(|op| op.in_modified()).count();

        let has_removed = lines.iter().any(|op| op.tag == DiffTag::Removed);
        let has_added = lines.iter().any(|op| op.tag == DiffTag::Added);
        let status = match (has_removed, has_added) {
            (true, false) => DiffHunkStatus::Removed,
            (false, true) => DiffHunkStatus::Added,
            _ => DiffHunkStatus::Modified,
        };

        Self {
            status,
            old_range: DiffHunkRange::new(old_start, old_count),
            new_range: DiffHunkRange::new(new_start, new_count),
            lines,
        }
    }

    /// Check if this hunk has any changes
    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(DiffOp::is_change)
    }

    /// Get the number of added lines in this hunk
    pub fn added_lines(&self) -> usize {
        self.count(DiffTag::Added)
    }

    /// Get the number of removed lines in this hunk
    pub fn removed_lines(&self) -> usize {
        self.count(DiffTag::Removed)
    }

    /// Get the number of unchanged (context) lines in this hunk
    pub fn unchanged_lines(&self) -> usize {
        self.count(DiffTag::Equal)
    }

    /// The `@@ -a,b +c,d @@` header line
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            self.old_range.unified_header(),
            self.new_range.unified_header()
        )
    }

    fn count(&self, tag: DiffTag) -> usize {
        self.lines.iter().filter(|op| op.tag == tag).count()
    }
}

/// Group a comparison into hunks with up to `context` unchanged lines
/// around every change
///
/// Changes whose context would overlap or touch end up in the same hunk.
pub fn hunks(ops: &[DiffOp], context: usize) -> Vec<DiffHunk> {
    // Op index ranges of the hunks, before context is attached
    let mut spans: Vec<Range<usize>> = Vec::new();

    for (index, op) in ops.iter().enumerate() {
        if !op.is_change() {
            continue;
        }
        let start = index.saturating_sub(context);
        let end = index.saturating_add(context).saturating_add(1).min(ops.len());

        match spans.last_mut() {
            Some(last) if start <= last.end => last.end = last.end.max(end),
            _ => spans.push(start..end),
        }
    }

    // Line offsets of every op boundary on both sides
    let mut old_offsets = Vec::with_capacity(ops.len() + 1);
    let mut new_offsets = Vec::with_capacity(ops.len() + 1);
    let (mut old_line, mut new_line) = (0, 0);
    for op in ops {
        old_offsets.push(old_line);
        new_offsets.push(new_line);
        if op.in_original() {
            old_line += 1;
        }
        if op.in_modified() {
            new_line += 1;
        }
    }
    old_offsets.push(old_line);
    new_offsets.push(new_line);

    spans
        .into_iter()
        .map(|span| {
            DiffHunk::new(
                old_offsets[span.start],
                new_offsets[span.start],
                ops[span].to_vec(),
            )
        })
        .collect()
}
