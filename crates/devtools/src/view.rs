//! Terminal rendering of a comparison

use colored::{ColoredString, Colorize};
use line_diff::{
    inline_prefix, ChangeKind, DiffAlgorithm, DiffOp, DiffStats, DiffTag, LineDiff,
    ProjectedLine, Side,
};
use serde::Serialize;

/// Widest left column of the split view, in characters
const MAX_SPLIT_WIDTH: usize = 60;

fn paint_tag(tag: DiffTag, text: String) -> ColoredString {
    match tag {
        DiffTag::Removed => text.red(),
        DiffTag::Added => text.green(),
        DiffTag::Equal => text.normal(),
    }
}

fn paint_kind(kind: ChangeKind, text: String) -> ColoredString {
    match kind {
        ChangeKind::Removed => text.red(),
        ChangeKind::Added => text.green(),
        ChangeKind::Unchanged => text.normal(),
    }
}

/// Every op on its own line
pub fn inline(diff: &LineDiff) -> String {
    let mut out = String::new();
    for op in diff.ops() {
        let line = format!("{}{}", inline_prefix(op.tag), op.text);
        out.push_str(&paint_tag(op.tag, line).to_string());
        out.push('\n');
    }
    out
}

/// Original on the left, modified on the right, with per-side line numbers
pub fn split(diff: &LineDiff) -> String {
    let rows = diff.side_by_side();
    let width = rows
        .iter()
        .filter_map(|row| row.left.as_ref())
        .map(|line| line.text.chars().count())
        .max()
        .unwrap_or(0)
        .min(MAX_SPLIT_WIDTH);

    let cell = |line: &Option<ProjectedLine>, pad: usize| match line {
        Some(line) => {
            let text = if pad > 0 {
                truncate(&line.text, pad)
            } else {
                line.text.clone()
            };
            let text = format!("{:>4} {:<pad$}", line.number, text, pad = pad);
            paint_kind(line.kind, text).to_string()
        }
        None => format!("{:>4} {:<pad$}", "", "", pad = pad),
    };

    let mut out = String::new();
    for row in &rows {
        let left = cell(&row.left, width);
        let right = cell(&row.right, 0);
        out.push_str(format!("{} │ {}", left, right).trim_end());
        out.push('\n');
    }
    out
}

/// Cut `text` to at most `width` characters, ending in `…` when cut
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Hunks with context lines and `@@` headers
pub fn unified(diff: &LineDiff, context: usize, old_name: &str, new_name: &str) -> String {
    let mut out = String::new();
    for line in diff.unified_diff(context, old_name, new_name).lines() {
        let painted = if line.starts_with("@@") {
            line.cyan()
        } else if line.starts_with("---") || line.starts_with("+++") {
            line.bold()
        } else if line.starts_with('-') {
            line.red()
        } else if line.starts_with('+') {
            line.green()
        } else {
            line.normal()
        };
        out.push_str(&painted.to_string());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct JsonView<'a> {
    algorithm: DiffAlgorithm,
    stats: DiffStats,
    ops: &'a [DiffOp],
    original: Vec<ProjectedLine>,
    modified: Vec<ProjectedLine>,
}

/// Ops, stats and both projections as pretty JSON
pub fn json(diff: &LineDiff) -> serde_json::Result<String> {
    let view = JsonView {
        algorithm: diff.algorithm(),
        stats: diff.stats(),
        ops: diff.ops(),
        original: diff.project(Side::Original),
        modified: diff.project(Side::Modified),
    };
    serde_json::to_string_pretty(&view)
}

/// One-line summary such as `2 removed, 3 added, 10 unchanged`
pub fn summary(stats: DiffStats) -> String {
    format!(
        "{} removed, {} added, {} unchanged",
        stats.removed, stats.added, stats.unchanged
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_inline_view() {
        plain();
        let diff = LineDiff::new("a\nb\n", "a\nc\n");
        assert_eq!(inline(&diff), "  a\n- b\n+ c\n");
    }

    #[test]
    fn test_split_view_pads_left_column() {
        plain();
        let diff = LineDiff::new("one\ntwo\nthree\n", "one\n2\n");
        assert_eq!(
            split(&diff),
            "   1 one   │    1 one\n   2 two   │    2 2\n   3 three │\n"
        );
    }

    #[test]
    fn test_split_view_truncates_long_left_lines() {
        plain();
        let long = "x".repeat(MAX_SPLIT_WIDTH + 10);
        let diff = LineDiff::new(&format!("{}\nb\n", long), "a\nb\n");
        let view = split(&diff);

        let separators: Vec<usize> = view
            .lines()
            .map(|line| line.chars().position(|c| c == '│').unwrap())
            .collect();
        assert!(separators.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(view.contains(&format!("{}…", "x".repeat(MAX_SPLIT_WIDTH - 1))));
        assert!(!view.contains(&long));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("ünïcödé text", 5), "ünïc…");
    }

    #[test]
    fn test_json_view() {
        let diff = LineDiff::new("a\n", "b\n");
        let value: serde_json::Value = serde_json::from_str(&json(&diff).unwrap()).unwrap();

        assert_eq!(value["algorithm"], "positional");
        assert_eq!(value["stats"]["removed"], 1);
        assert_eq!(value["ops"][0]["tag"], "removed");
        assert_eq!(value["modified"][0]["kind"], "added");
    }

    #[test]
    fn test_summary() {
        let diff = LineDiff::new("a\nb\n", "a\n");
        assert_eq!(summary(diff.stats()), "1 removed, 0 added, 1 unchanged");
    }
}
