use std::time::Duration;

use derive_more::Display;
use log::{debug, trace};
use similar::{Algorithm, ChangeTag, TextDiff as SimilarTextDiff};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of a single line in a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffTag {
    /// The line exists unchanged in both texts
    #[display(fmt = "equal")]
    Equal,

    /// The line only exists in the original text
    #[display(fmt = "removed")]
    Removed,

    /// The line only exists in the modified text
    #[display(fmt = "added")]
    Added,
}

/// A classified line, in emission order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[display(fmt = "{} {}", tag, text)]
pub struct DiffOp {
    /// How the line changed
    pub tag: DiffTag,

    /// The line content, without its line break
    pub text: String,
}

impl DiffOp {
    pub fn new(tag: DiffTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(DiffTag::Equal, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(DiffTag::Removed, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(DiffTag::Added, text)
    }

    /// Check if this line is part of the original text
    pub fn in_original(&self) -> bool {
        matches!(self.tag, DiffTag::Equal | DiffTag::Removed)
    }

    /// Check if this line is part of the modified text
    pub fn in_modified(&self) -> bool {
        matches!(self.tag, DiffTag::Equal | DiffTag::Added)
    }

    /// Check if this line is a change (removed or added)
    pub fn is_change(&self) -> bool {
        self.tag != DiffTag::Equal
    }
}

/// The algorithm used to line up two texts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DiffAlgorithm {
    /// Positional line walk: lines are only compared at the same offset,
    /// and the sequences are never realigned after an insertion
    #[default]
    #[display(fmt = "positional")]
    Positional,

    /// Myers' O(ND) diff
    #[display(fmt = "myers")]
    Myers,

    /// Patience diff
    #[display(fmt = "patience")]
    Patience,

    /// Classic longest common subsequence
    #[display(fmt = "lcs")]
    Lcs,
}

impl DiffAlgorithm {
    fn to_similar(self) -> Option<Algorithm> {
        match self {
            DiffAlgorithm::Positional => None,
            DiffAlgorithm::Myers => Some(Algorithm::Myers),
            DiffAlgorithm::Patience => Some(Algorithm::Patience),
            DiffAlgorithm::Lcs => Some(Algorithm::Lcs),
        }
    }
}

/// Default deadline for the LCS-family algorithms
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Compare two line sequences with the positional line walk
///
/// Both sequences are walked in lockstep. Lines at the same offset that are
/// equal become `Equal`; lines that differ become a `Removed` followed by an
/// `Added`. Once one side runs out, the rest of the other side is `Removed`
/// or `Added`. An insertion near the start of a block therefore cascades into
/// removed/added pairs down to the end of the block.
pub fn compare<S: AsRef<str>>(original: &[S], modified: &[S]) -> Vec<DiffOp> {
    let mut ops = Vec::with_capacity(original.len().max(modified.len()));
    let mut i = 0;
    let mut j = 0;

    loop {
        let a = original.get(i).map(AsRef::as_ref);
        let b = modified.get(j).map(AsRef::as_ref);

        match (a, b) {
            (None, None) => break,
            (Some(a), Some(b)) if a == b => {
                ops.push(DiffOp::equal(a));
                i += 1;
                j += 1;
            }
            (Some(a), Some(b)) => {
                trace!("line mismatch at {}:{}", i, j);
                ops.push(DiffOp::removed(a));
                ops.push(DiffOp::added(b));
                i += 1;
                j += 1;
            }
            (Some(a), None) => {
                ops.push(DiffOp::removed(a));
                i += 1;
            }
            (None, Some(b)) => {
                ops.push(DiffOp::added(b));
                j += 1;
            }
        }
    }

    ops
}

/// Compare two line sequences with the given algorithm
pub fn compare_with<S: AsRef<str>>(
    algorithm: DiffAlgorithm,
    original: &[S],
    modified: &[S],
) -> Vec<DiffOp> {
    compare_with_timeout(algorithm, original, modified, DEFAULT_TIMEOUT)
}

pub(crate) fn compare_with_timeout<S: AsRef<str>>(
    algorithm: DiffAlgorithm,
    original: &[S],
    modified: &[S],
    timeout: Duration,
) -> Vec<DiffOp> {
    debug!(
        "comparing {} against {} lines with {}",
        original.len(),
        modified.len(),
        algorithm
    );

    let Some(algorithm) = algorithm.to_similar() else {
        return compare(original, modified);
    };

    let old: Vec<&str> = original.iter().map(AsRef::as_ref).collect();
    let new: Vec<&str> = modified.iter().map(AsRef::as_ref).collect();

    let diff = SimilarTextDiff::configure()
        .algorithm(algorithm)
        .timeout(timeout)
        .diff_slices(&old, &new);

    diff.iter_all_changes()
        .map(|change| {
            let tag = match change.tag() {
                ChangeTag::Equal => DiffTag::Equal,
                ChangeTag::Delete => DiffTag::Removed,
                ChangeTag::Insert => DiffTag::Added,
            };
            DiffOp::new(tag, change.value())
        })
        .collect()
}
