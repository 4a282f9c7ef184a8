//! Byte↔character offset mapping.
//!
//! Scanners report spans in character offsets, but `regex` and string
//! slicing work in byte offsets. A `CharIndex` is built once per scanned
//! text and shared by everything that needs to translate.

/// Precomputed byte offsets of every character boundary in a text.
#[derive(Debug)]
pub struct CharIndex {
    /// `boundaries[i]` is the byte offset where character `i` starts.
    /// A final entry holds the total byte length, so every character
    /// span maps to `boundaries[start]..boundaries[end]`.
    boundaries: Vec<usize>,
}

impl CharIndex {
    pub fn new(text: &str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        boundaries.push(text.len());
        Self { boundaries }
    }

    /// Number of characters in the indexed text.
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Convert a character offset to a byte offset. Offsets past the end
    /// clamp to the total byte length.
    pub fn char_to_byte(&self, char_offset: usize) -> usize {
        let idx = char_offset.min(self.boundaries.len() - 1);
        self.boundaries[idx]
    }

    /// Convert a byte offset sitting on a character boundary back to its
    /// character offset. Non-boundary offsets round down to the previous
    /// boundary.
    pub fn byte_to_char(&self, byte_offset: usize) -> usize {
        match self.boundaries.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx.saturating_sub(1),
        }
    }

    /// Slice the original text by character offsets.
    pub fn slice<'t>(&self, text: &'t str, start: usize, end: usize) -> &'t str {
        &text[self.char_to_byte(start)..self.char_to_byte(end)]
    }
}
