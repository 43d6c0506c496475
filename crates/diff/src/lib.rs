// Line diff library for the devtools workspace
// This crate compares two texts line by line and projects the result for display

mod engine;
mod hunk;
mod line_diff;
mod lines;
mod projection;
mod render;

pub use engine::{compare, compare_with, DiffAlgorithm, DiffOp, DiffTag, DEFAULT_TIMEOUT};
pub use hunk::{hunks, DiffHunk, DiffHunkRange, DiffHunkStatus};
pub use line_diff::{DiffConfig, DiffStats, LineDiff};
pub use lines::LineSequence;
pub use projection::{project, side_by_side, ChangeKind, ProjectedLine, Side, SideBySideRow};
pub use render::{inline_prefix, render_inline, unified_diff};
