//! Compilation-unit source buffer with line-start indexing.

use crate::span::Span;
use std::path::PathBuf;
use std::sync::Arc;

/// The character buffer of one compilation unit.
///
/// The contents are shared (`Arc<str>`) so the position scanner can be reset
/// onto them without copying. Line starts are computed once up front.
#[derive(Clone, Debug)]
pub struct SourceFile {
    /// The path of the unit (or a synthetic name for in-memory sources).
    pub path: PathBuf,
    contents: Arc<str>,
    /// Byte offsets of each line start (the first entry is always 0).
    line_starts: Vec<u32>,
}

impl SourceFile {
    /// Creates a new `SourceFile` with precomputed line starts.
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<Arc<str>>) -> Self {
        let contents = contents.into();
        let line_starts = compute_line_starts(&contents);
        Self {
            path: path.into(),
            contents,
            line_starts,
        }
    }

    /// Returns the full source text.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Returns a shared handle to the source text.
    pub fn shared_contents(&self) -> Arc<str> {
        Arc::clone(&self.contents)
    }

    /// Returns `true` if the unit has no characters.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Converts an offset into 1-indexed (line, column) coordinates.
    ///
    /// Offsets past the end of the buffer are clamped to the last position.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = offset.min(self.contents.len() as u32);
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the text covered by an inclusive span, or `""` when out of range.
    pub fn snippet(&self, span: Span) -> &str {
        let start = span.start as usize;
        let end = (span.end as usize + 1).min(self.contents.len());
        self.contents.get(start..end).unwrap_or("")
    }
}

/// Computes the byte offsets of each line start in the given text.
fn compute_line_starts(contents: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in contents.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
