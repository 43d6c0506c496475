use line_diff::{DiffOp, DiffTag, LineDiff, LineSequence};

#[test]
fn test_newlines_at_end() {
    // A missing trailing newline does not count as a change
    let with_newline = LineDiff::new("Line 1\nLine 2\n", "Line 1\nLine 2");
    assert!(!with_newline.has_changes());

    // Case 2: Old with trailing newline, new changed without
    let diff = LineDiff::new("Line 1\nLine 2\n", "Line 1\nLine X");
    assert_eq!(diff.stats().removed, 1);
    assert_eq!(diff.stats().added, 1);
}

#[test]
fn test_blank_lines_are_content() {
    let diff = LineDiff::new("a\n\nb\n", "a\nb\n");
    assert_eq!(
        diff.ops(),
        &[
            DiffOp::equal("a"),
            DiffOp::removed(""),
            DiffOp::added("b"),
            DiffOp::removed("b"),
        ]
    );
}

#[test]
fn test_windows_line_endings() {
    let diff = LineDiff::new("a\r\nb\r\n", "a\nb\n");
    assert!(!diff.has_changes());
}

#[test]
fn test_very_large_diff() {
    let mut old = String::new();
    let mut new = String::new();

    // 3000 lines
    for i in 0..3000 {
        old.push_str(&format!("Line {} of old text\n", i));

        // Make every 10th line different
        if i % 10 == 0 {
            new.push_str(&format!("MODIFIED Line {} of new text\n", i));
        } else {
            new.push_str(&format!("Line {} of old text\n", i));
        }
    }

    let diff = LineDiff::new(&old, &new);
    let stats = diff.stats();

    assert_eq!(stats.removed, 300);
    assert_eq!(stats.added, 300);
    assert_eq!(stats.unchanged, 2700);
}

#[test]
fn test_unicode_text() {
    let old = "Line 1\nLine 2 🚀\nLine 3 😊\n";
    let new = "Line 1\nLine 2 🚀\nLine 3 🎉\n";

    let diff = LineDiff::new(old, new);

    assert_eq!(diff.ops()[2], DiffOp::removed("Line 3 😊"));
    assert_eq!(diff.ops()[3], DiffOp::added("Line 3 🎉"));

    let unified = diff.unified_diff(1, "a", "b");
    assert!(unified.contains("😊"));
    assert!(unified.contains("🎉"));
}

#[test]
fn test_diff_with_only_whitespace_changes() {
    let diff = LineDiff::new("Line 1\nLine 2\n", "Line 1\nLine  2\n");

    assert!(diff.has_changes());
    assert_eq!(diff.ops()[1].tag, DiffTag::Removed);
}

#[test]
fn test_sequences_round_trip_to_text() {
    let lines = LineSequence::from_text("alpha\nbeta");
    assert_eq!(lines.to_text(), "alpha\nbeta\n");
    assert_eq!(LineSequence::from_text(&lines.to_text()), lines);
}

#[test]
fn test_trailing_carriage_return_without_newline() {
    let diff = LineDiff::new("x\r", "x");

    assert!(diff.has_changes());
    assert_eq!(diff.original().get(0), Some("x\r"));
}
