use ropey::Rope;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered sequence of text lines, without their line breaks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split a text on newline boundaries
    ///
    /// A `\r` directly before the `\n` belongs to the line break. The empty
    /// line a trailing newline would produce is dropped, so `"a\n"` holds a
    /// single line and `""` holds none.
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(text);

        let mut lines: Vec<String> = rope
            .lines()
            .map(|slice| strip_line_break(&slice.to_string()).to_string())
            .collect();

        // Rope::lines always yields a final (possibly empty) line after the last break
        if lines.last().is_some_and(|last| last.is_empty()) {
            lines.pop();
        }

        Self { lines }
    }

    /// Build a sequence from lines that are already split
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Get the number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Iterate over the lines
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Get the lines as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Join the lines back into a text, newline terminated
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl From<&str> for LineSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<Vec<String>> for LineSequence {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl AsRef<[String]> for LineSequence {
    fn as_ref(&self) -> &[String] {
        &self.lines
    }
}

// A `\r` is only part of the break when a `\n` follows it
fn strip_line_break(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => line,
    }
}
