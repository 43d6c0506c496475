use line_diff::{DiffAlgorithm, DiffConfig, DiffTag, LineDiff};

fn main() {
    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    let diff = LineDiff::new(text1, text2);

    println!("Inline diff:");
    print!("{}", diff.render_inline());

    // Print diff statistics
    let stats = diff.stats();
    println!("\nDiff statistics:");
    println!("  Added lines: {}", stats.added);
    println!("  Removed lines: {}", stats.removed);
    println!("  Unchanged lines: {}", stats.unchanged);

    // Print ops with color-coded tags
    println!("\nOps:");
    for (i, op) in diff.ops().iter().enumerate() {
        match op.tag {
            DiffTag::Removed => println!("  {}: \x1b[31mRemoved\x1b[0m {}", i, op.text),
            DiffTag::Added => println!("  {}: \x1b[32mAdded\x1b[0m {}", i, op.text),
            DiffTag::Equal => println!("  {}: \x1b[37mEqual\x1b[0m {}", i, op.text),
        }
    }

    // An insertion at the top shows the difference between the algorithms
    let file1 = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
    let file2 = "// greeting\nfn main() {\n    println!(\"Hello, world!\");\n}\n";

    for algorithm in [DiffAlgorithm::Positional, DiffAlgorithm::Myers] {
        let diff = DiffConfig::default().algorithm(algorithm).diff(file1, file2);
        println!("\nUnified diff ({}):", algorithm);
        print!("{}", diff.unified_diff(3, "a/main.rs", "b/main.rs"));
    }
}
