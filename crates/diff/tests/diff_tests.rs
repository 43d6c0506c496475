use line_diff::{
    compare, compare_with, DiffAlgorithm, DiffConfig, DiffOp, DiffTag, LineDiff, LineSequence,
};
use pretty_assertions::assert_eq;

#[test]
fn test_empty_files() {
    // Two empty texts produce no ops at all
    let diff = LineDiff::new("", "");

    assert!(diff.ops().is_empty());
    assert!(!diff.has_changes());
    assert_eq!(diff.stats().unchanged, 0);
}

#[test]
fn test_identical_files() {
    // Identical texts produce one equal op per line, in order
    let text = "Line 1\nLine 2\nLine 3\n";
    let diff = LineDiff::new(text, text);

    assert_eq!(
        diff.ops(),
        &[
            DiffOp::equal("Line 1"),
            DiffOp::equal("Line 2"),
            DiffOp::equal("Line 3"),
        ]
    );
    assert!(!diff.has_changes());
}

#[test]
fn test_added_file() {
    let ops = compare::<&str>(&[], &["x", "y"]);
    assert_eq!(ops, vec![DiffOp::added("x"), DiffOp::added("y")]);
}

#[test]
fn test_deleted_file() {
    let diff = LineDiff::new("Line 1\nLine 2\n", "");

    assert!(diff.ops().iter().all(|op| op.tag == DiffTag::Removed));
    assert_eq!(diff.stats().removed, 2);
    assert_eq!(diff.stats().added, 0);
}

#[test]
fn test_modified_line() {
    let ops = compare(&["a", "b", "c"], &["a", "x", "c"]);
    assert_eq!(
        ops,
        vec![
            DiffOp::equal("a"),
            DiffOp::removed("b"),
            DiffOp::added("x"),
            DiffOp::equal("c"),
        ]
    );
}

#[test]
fn test_trailing_line_removed() {
    let ops = compare(&["a", "b"], &["a"]);
    assert_eq!(ops, vec![DiffOp::equal("a"), DiffOp::removed("b")]);
}

#[test]
fn test_trailing_line_added() {
    let ops = compare(&["a"], &["a", "b"]);
    assert_eq!(ops, vec![DiffOp::equal("a"), DiffOp::added("b")]);
}

#[test]
fn test_insertion_cascades_through_block() {
    // The positional walk does not realign after an insertion
    let diff = LineDiff::new("one\ntwo\nthree\n", "zero\none\ntwo\nthree\n");
    let stats = diff.stats();

    assert_eq!(stats.unchanged, 0);
    assert_eq!(stats.removed, 3);
    assert_eq!(stats.added, 4);
    assert_eq!(diff.ops()[0], DiffOp::removed("one"));
    assert_eq!(diff.ops()[1], DiffOp::added("zero"));
}

#[test]
fn test_lcs_algorithms_find_single_insertion() {
    let original = ["one", "two", "three"];
    let modified = ["zero", "one", "two", "three"];

    for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
        let ops = compare_with(algorithm, &original, &modified);
        assert_eq!(
            ops,
            vec![
                DiffOp::added("zero"),
                DiffOp::equal("one"),
                DiffOp::equal("two"),
                DiffOp::equal("three"),
            ],
            "{} should realign",
            algorithm
        );
    }
}

#[test]
fn test_lcs_replacement_emits_removed_first() {
    let ops = compare_with(DiffAlgorithm::Myers, &["a", "b", "c"], &["a", "x", "c"]);
    assert_eq!(
        ops,
        vec![
            DiffOp::equal("a"),
            DiffOp::removed("b"),
            DiffOp::added("x"),
            DiffOp::equal("c"),
        ]
    );
}

#[test]
fn test_positional_is_the_default() {
    let diff = DiffConfig::default().diff("a\n", "b\n");
    assert_eq!(diff.algorithm(), DiffAlgorithm::Positional);

    let diff = DiffConfig::default()
        .algorithm(DiffAlgorithm::Patience)
        .diff("a\n", "b\n");
    assert_eq!(diff.algorithm(), DiffAlgorithm::Patience);
}

#[test]
fn test_duplicate_lines_match_positionally() {
    let ops = compare(&["x", "x", "y"], &["x", "y", "x"]);
    assert_eq!(
        ops,
        vec![
            DiffOp::equal("x"),
            DiffOp::removed("x"),
            DiffOp::added("y"),
            DiffOp::removed("y"),
            DiffOp::added("x"),
        ]
    );
}

#[test]
fn test_multi_change_stats() {
    let old = "Line 1\nLine 2\nLine 3\nLine 4\nLine 5\nLine 6\n";
    let new = "Line 1\nLine 2 modified\nLine 3\nLine 4\nLine 5\nLine 6 modified\n";

    let diff = LineDiff::new(old, new);
    let stats = diff.stats();

    assert_eq!(stats.added, 2);
    assert_eq!(stats.removed, 2);
    assert_eq!(stats.unchanged, 4);
    assert!(diff.has_changes());
}

#[test]
fn test_diff_presplit_lines() {
    let diff = DiffConfig::default().diff_lines(
        LineSequence::from_lines(["keep", "old"]),
        LineSequence::from_lines(vec!["keep".to_string(), "new".to_string()]),
    );

    assert_eq!(diff.original().len(), 2);
    assert_eq!(diff.modified().get(1), Some("new"));
    assert_eq!(
        diff.ops(),
        &[DiffOp::equal("keep"), DiffOp::removed("old"), DiffOp::added("new")]
    );
}
