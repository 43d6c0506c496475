use line_diff::{LineDiff, ProjectedLine, Side};

fn cell(line: &Option<ProjectedLine>) -> String {
    match line {
        Some(line) => format!("{:>3} {:<24}", line.number, line.text),
        None => format!("{:28}", ""),
    }
}

fn main() {
    let original = "alpha\nbeta\ngamma\ndelta\n";
    let modified = "alpha\nBETA\ngamma\n";

    let diff = LineDiff::new(original, modified);

    for row in diff.side_by_side() {
        println!("{} | {}", cell(&row.left), cell(&row.right));
    }

    println!();
    for line in diff.project(Side::Modified) {
        println!("{:>3} [{}] {}", line.number, line.kind, line.text);
    }
}
