use std::ops::Range;

/// Translates caret positions between raw text and its displayed form.
///
/// Offsets count grapheme clusters on the raw side and display units
/// (clusters plus inserted separators) on the display side. Both directions
/// are total: out-of-range offsets clamp to the end of the target text.
pub trait OffsetMapping {
    fn raw_to_display(&self, offset: usize) -> usize;
    fn display_to_raw(&self, offset: usize) -> usize;

    fn raw_range_to_display(&self, range: Range<usize>) -> Range<usize> {
        let a = self.raw_to_display(range.start);
        let b = self.raw_to_display(range.end);
        a.min(b)..a.max(b)
    }

    fn display_range_to_raw(&self, range: Range<usize>) -> Range<usize> {
        let a = self.display_to_raw(range.start);
        let b = self.display_to_raw(range.end);
        a.min(b)..a.max(b)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OffsetMap {
    /// Display text equals raw text; offsets pass through, clamped to `len`.
    Identity { len: usize },
    /// Lookup lists built alongside the display text.
    Table {
        /// Indexed by raw offset: display index of that raw character.
        raw_to_display: Vec<usize>,
        /// Indexed by display offset: raw index the position belongs to.
        display_to_raw: Vec<usize>,
    },
}

impl OffsetMap {
    pub fn identity(len: usize) -> Self {
        OffsetMap::Identity { len }
    }

    /// Display units the map covers.
    pub fn display_len(&self) -> usize {
        match self {
            OffsetMap::Identity { len } => *len,
            OffsetMap::Table { display_to_raw, .. } => display_to_raw.len(),
        }
    }
}

impl Default for OffsetMap {
    fn default() -> Self {
        OffsetMap::identity(0)
    }
}

impl OffsetMapping for OffsetMap {
    fn raw_to_display(&self, offset: usize) -> usize {
        match self {
            OffsetMap::Identity { len } => offset.min(*len),
            OffsetMap::Table {
                raw_to_display,
                display_to_raw,
            } => raw_to_display
                .get(offset)
                .copied()
                .unwrap_or(display_to_raw.len()),
        }
    }

    fn display_to_raw(&self, offset: usize) -> usize {
        match self {
            OffsetMap::Identity { len } => offset.min(*len),
            OffsetMap::Table {
                raw_to_display,
                display_to_raw,
            } => display_to_raw
                .get(offset)
                .copied()
                .unwrap_or(raw_to_display.len()),
        }
    }
}
