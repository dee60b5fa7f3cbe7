use std::fmt::Debug;

use crate::error::TextTransformError;
use crate::graphemes::GraphemeBoundaries;
use crate::offset::{OffsetMap, OffsetMapping};

/// Turns the raw value of a text input into the text that is drawn.
///
/// Implementations must be pure: the host re-runs `filter` from scratch on
/// every edit and keeps no result around.
pub trait VisualTransformation: Debug {
    fn filter(&self, raw: &str) -> TransformedText;
}

/// Display text plus the mapping back to the raw value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransformedText {
    pub text: String,
    pub mapping: OffsetMap,
    /// Byte offsets of each display unit in `text`.
    pub boundaries: GraphemeBoundaries,
}

impl TransformedText {
    /// Untransformed text with a pass-through mapping.
    pub fn identity(raw: &str) -> Self {
        let boundaries = GraphemeBoundaries::new(raw);
        Self {
            text: raw.to_string(),
            mapping: OffsetMap::identity(boundaries.len()),
            boundaries,
        }
    }

    /// Number of display units (grapheme clusters and separators).
    pub fn display_len(&self) -> usize {
        self.boundaries.len()
    }

    /// Checks that `boundaries` describe `text`, that the mapping covers the
    /// same number of display units, and that every offset on either side
    /// maps inside the other text.
    ///
    /// Custom transformations are not trusted; hosts run this before using
    /// the mapping to place a caret.
    pub fn validate(&self, raw_len: usize) -> Result<(), TextTransformError> {
        let text_len = self.text.len();
        for &byte in self.boundaries.as_slice() {
            if !self.text.is_char_boundary(byte) {
                return Err(TextTransformError::InvalidBoundary { byte, text_len });
            }
        }
        let end = self.boundaries.byte_for_index(self.boundaries.len());
        if end != text_len {
            return Err(TextTransformError::BoundariesEndMismatch { end, text_len });
        }
        let display_len = self.display_len();
        if self.mapping.display_len() != display_len {
            return Err(TextTransformError::DisplayLengthMismatch {
                mapped: self.mapping.display_len(),
                boundaries: display_len,
            });
        }
        for offset in 0..=raw_len {
            let mapped = self.mapping.raw_to_display(offset);
            if mapped > display_len {
                return Err(TextTransformError::RawOffsetOutOfBounds {
                    offset,
                    mapped,
                    display_len,
                });
            }
        }
        for offset in 0..=display_len {
            let mapped = self.mapping.display_to_raw(offset);
            if mapped > raw_len {
                return Err(TextTransformError::DisplayOffsetOutOfBounds {
                    offset,
                    mapped,
                    raw_len,
                });
            }
        }
        Ok(())
    }
}

impl OffsetMapping for TransformedText {
    fn raw_to_display(&self, offset: usize) -> usize {
        self.mapping.raw_to_display(offset)
    }

    fn display_to_raw(&self, offset: usize) -> usize {
        self.mapping.display_to_raw(offset)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoTransformation;

impl VisualTransformation for NoTransformation {
    fn filter(&self, raw: &str) -> TransformedText {
        TransformedText::identity(raw)
    }
}
