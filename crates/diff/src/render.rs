use crate::engine::{DiffOp, DiffTag};
use crate::hunk::hunks;

/// Prefix used for a line in the inline view
pub fn inline_prefix(tag: DiffTag) -> &'static str {
    match tag {
        DiffTag::Removed => "- ",
        DiffTag::Added => "+ ",
        DiffTag::Equal => "  ",
    }
}

/// Render every op on its own line, prefixed with `- `, `+ ` or two spaces
pub fn render_inline(ops: &[DiffOp]) -> String {
    let mut result = String::new();

    for op in ops {
        result.push_str(inline_prefix(op.tag));
        result.push_str(&op.text);
        result.push('\n');
    }

    result
}

/// Generate a unified diff string (like git diff)
///
/// Returns an empty string when nothing changed.
pub fn unified_diff(ops: &[DiffOp], context: usize, old_name: &str, new_name: &str) -> String {
    let hunks = hunks(ops, context);
    if hunks.is_empty() {
        return String::new();
    }

    let mut result = format!("--- {}\n+++ {}\n", old_name, new_name);

    for hunk in &hunks {
        result.push_str(&hunk.header());
        result.push('\n');

        for op in &hunk.lines {
            let sign = match op.tag {
                DiffTag::Removed => '-',
                DiffTag::Added => '+',
                DiffTag::Equal => ' ',
            };
            result.push(sign);
            result.push_str(&op.text);
            result.push('\n');
        }
    }

    result
}
