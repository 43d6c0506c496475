use derive_more::Display;

use crate::engine::{DiffOp, DiffTag};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which of the two compared texts a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    #[display(fmt = "original")]
    Original,

    #[display(fmt = "modified")]
    Modified,
}

/// How a projected line should be highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChangeKind {
    #[display(fmt = "unchanged")]
    Unchanged,

    /// Only produced for the original side
    #[display(fmt = "removed")]
    Removed,

    /// Only produced for the modified side
    #[display(fmt = "added")]
    Added,
}

/// A line as shown in one pane, with its line number in that pane
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectedLine {
    /// 1-based line number within the side's text
    pub number: usize,

    pub text: String,

    pub kind: ChangeKind,
}

/// One row of a split view
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideBySideRow {
    pub left: Option<ProjectedLine>,
    pub right: Option<ProjectedLine>,
}

impl Side {
    /// Check if an op belongs to this side
    pub fn contains(self, op: &DiffOp) -> bool {
        match self {
            Side::Original => op.in_original(),
            Side::Modified => op.in_modified(),
        }
    }
}

impl From<DiffTag> for ChangeKind {
    fn from(tag: DiffTag) -> Self {
        match tag {
            DiffTag::Equal => ChangeKind::Unchanged,
            DiffTag::Removed => ChangeKind::Removed,
            DiffTag::Added => ChangeKind::Added,
        }
    }
}

/// Project a comparison onto one side
///
/// Lines that only belong to the other side are left out. Numbering starts at
/// 1 and has no gaps.
pub fn project(ops: &[DiffOp], side: Side) -> Vec<ProjectedLine> {
    ops.iter()
        .filter(|op| side.contains(op))
        .enumerate()
        .map(|(index, op)| ProjectedLine {
            number: index + 1,
            text: op.text.clone(),
            kind: op.tag.into(),
        })
        .collect()
}

/// Lay out a comparison as rows of a split view
///
/// Unchanged lines fill both cells. A run of removed lines followed by a run
/// of added lines is paired up row by row; the longer run leaves the other
/// cell empty.
pub fn side_by_side(ops: &[DiffOp]) -> Vec<SideBySideRow> {
    let mut rows = Vec::new();
    let mut old_number = 0;
    let mut new_number = 0;
    let mut index = 0;

    while index < ops.len() {
        if ops[index].tag == DiffTag::Equal {
            old_number += 1;
            new_number += 1;
            let text = &ops[index].text;
            rows.push(SideBySideRow {
                left: Some(ProjectedLine {
                    number: old_number,
                    text: text.clone(),
                    kind: ChangeKind::Unchanged,
                }),
                right: Some(ProjectedLine {
                    number: new_number,
                    text: text.clone(),
                    kind: ChangeKind::Unchanged,
                }),
            });
            index += 1;
            continue;
        }

        let removed_start = index;
        while index < ops.len() && ops[index].tag == DiffTag::Removed {
            index += 1;
        }
        let added_start = index;
        while index < ops.len() && ops[index].tag == DiffTag::Added {
            index += 1;
        }

        let removed = &ops[removed_start..added_start];
        let added = &ops[added_start..index];

        for row in 0..removed.len().max(added.len()) {
            let left = removed.get(row).map(|op| {
                old_number += 1;
                ProjectedLine {
                    number: old_number,
                    text: op.text.clone(),
                    kind: ChangeKind::Removed,
                }
            });
            let right = added.get(row).map(|op| {
                new_number += 1;
                ProjectedLine {
                    number: new_number,
                    text: op.text.clone(),
                    kind: ChangeKind::Added,
                }
            });
            rows.push(SideBySideRow { left, right });
        }
    }

    rows
}
