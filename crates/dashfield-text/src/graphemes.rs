use unicode_segmentation::UnicodeSegmentation;

/// Byte offsets of every grapheme cluster boundary in a string.
///
/// Holds `n + 1` entries for `n` clusters: the first is `0`, the last is the
/// text length in bytes. Carets live on these boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphemeBoundaries {
    byte_offsets: Vec<usize>,
}

impl Default for GraphemeBoundaries {
    fn default() -> Self {
        Self {
            byte_offsets: vec![0],
        }
    }
}

impl GraphemeBoundaries {
    pub fn new(text: &str) -> Self {
        let mut byte_offsets: Vec<usize> = text.grapheme_indices(true).map(|(i, _)| i).collect();
        byte_offsets.push(text.len());
        Self { byte_offsets }
    }

    /// Builds a table from precomputed boundaries. An empty vector is treated
    /// as the boundaries of the empty string.
    pub fn from_offsets(mut byte_offsets: Vec<usize>) -> Self {
        if byte_offsets.is_empty() {
            byte_offsets.push(0);
        }
        Self { byte_offsets }
    }

    /// Number of grapheme clusters.
    pub fn len(&self) -> usize {
        self.byte_offsets.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cluster index for a byte position. A byte inside a cluster snaps to
    /// the following boundary; bytes past the end clamp to `len()`.
    pub fn index_for_byte(&self, byte: usize) -> usize {
        match self.byte_offsets.binary_search(&byte) {
            Ok(i) | Err(i) => i.min(self.len()),
        }
    }

    /// Byte position of the `index`-th boundary, clamped to the text end.
    pub fn byte_for_index(&self, index: usize) -> usize {
        self.byte_offsets
            .get(index.min(self.len()))
            .copied()
            .unwrap_or(0)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.byte_offsets
    }
}
