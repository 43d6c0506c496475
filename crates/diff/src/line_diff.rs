use std::time::Duration;

use log::debug;

use crate::engine::{compare_with_timeout, DiffAlgorithm, DiffOp, DiffTag, DEFAULT_TIMEOUT};
use crate::hunk::{hunks, DiffHunk};
use crate::lines::LineSequence;
use crate::projection::{project, side_by_side, ProjectedLine, Side, SideBySideRow};
use crate::render::{render_inline, unified_diff};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options for a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    algorithm: DiffAlgorithm,
    timeout: Duration,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::default(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl DiffConfig {
    /// Set the algorithm used to line up the texts
    pub fn algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the deadline for the LCS-family algorithms
    ///
    /// Past the deadline they fall back to a coarser but still valid diff.
    /// The positional walk ignores it.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Compare two texts
    pub fn diff(&self, old_text: &str, new_text: &str) -> LineDiff {
        LineDiff::compute(
            LineSequence::from_text(old_text),
            LineSequence::from_text(new_text),
            *self,
        )
    }

    /// Compare two already split sequences
    pub fn diff_lines(&self, original: LineSequence, modified: LineSequence) -> LineDiff {
        LineDiff::compute(original, modified, *self)
    }
}

/// Line counts of a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

/// The result of comparing two texts line by line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineDiff {
    original: LineSequence,
    modified: LineSequence,
    algorithm: DiffAlgorithm,
    ops: Vec<DiffOp>,
}

impl LineDiff {
    /// Compare two texts with the positional line walk
    pub fn new(old_text: &str, new_text: &str) -> Self {
        DiffConfig::default().diff(old_text, new_text)
    }

    fn compute(original: LineSequence, modified: LineSequence, config: DiffConfig) -> Self {
        let ops = compare_with_timeout(
            config.algorithm,
            original.as_slice(),
            modified.as_slice(),
            config.timeout,
        );
        debug!("{} produced {} ops", config.algorithm, ops.len());

        Self {
            original,
            modified,
            algorithm: config.algorithm,
            ops,
        }
    }

    /// Get the classified lines in emission order
    pub fn ops(&self) -> &[DiffOp] {
        &self.ops
    }

    /// Get the original lines
    pub fn original(&self) -> &LineSequence {
        &self.original
    }

    /// Get the modified lines
    pub fn modified(&self) -> &LineSequence {
        &self.modified
    }

    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }

    /// Project the comparison onto one side
    pub fn project(&self, side: Side) -> Vec<ProjectedLine> {
        project(&self.ops, side)
    }

    /// Lay out the comparison as rows of a split view
    pub fn side_by_side(&self) -> Vec<SideBySideRow> {
        side_by_side(&self.ops)
    }

    /// Group the changes into hunks
    pub fn hunks(&self, context: usize) -> Vec<DiffHunk> {
        hunks(&self.ops, context)
    }

    pub fn unified_diff(&self, context: usize, old_name: &str, new_name: &str) -> String {
        unified_diff(&self.ops, context, old_name, new_name)
    }

    pub fn render_inline(&self) -> String {
        render_inline(&self.ops)
    }

    /// Count the lines per tag
    pub fn stats(&self) -> DiffStats {
        self.ops
            .iter()
            .fold(DiffStats::default(), |mut stats, op| {
                match op.tag {
                    DiffTag::Equal => stats.unchanged += 1,
                    DiffTag::Removed => stats.removed += 1,
                    DiffTag::Added => stats.added += 1,
                }
                stats
            })
    }

    /// Check if the diff has any changes
    pub fn has_changes(&self) -> bool {
        self.ops.iter().any(DiffOp::is_change)
    }
}
