//! Code fence detection for line-based content scanning.
//!
//! Diagram fences must not be lifted out of enclosing code blocks (e.g. a
//! documentation example showing how to author a diagram), so stages that
//! scan line by line track every fence they pass.

/// An open fenced code block.
///
/// `CommonMark` fences use backticks or tildes (three or more). The closing
/// fence must use the same character and be at least as long as the opening
/// fence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Fence {
    /// Fence character (backtick or tilde).
    ch: char,
    /// Length of the opening fence (minimum length for closing).
    len: usize,
}

impl Fence {
    /// Detect a fence opening on a line.
    ///
    /// Returns the fence and its trimmed info string (the language tag).
    pub(crate) fn open(line: &str) -> Option<(Self, &str)> {
        let trimmed = line.trim_start();
        let ch = trimmed.chars().next()?;
        if ch != '`' && ch != '~' {
            return None;
        }
        let len = trimmed.chars().take_while(|&c| c == ch).count();
        if len < 3 {
            return None;
        }
        Some((Self { ch, len }, trimmed[len..].trim()))
    }

    /// Whether a line closes this fence.
    ///
    /// The closing fence must use the same character, be at least as long
    /// as the opening, and carry nothing but whitespace after the fence
    /// characters.
    pub(crate) fn closes(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        if !trimmed.starts_with(self.ch) {
            return false;
        }
        let count = trimmed.chars().take_while(|&c| c == self.ch).count();
        count >= self.len && trimmed[count..].chars().all(char::is_whitespace)
    }
}
