use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextTransformError {
    #[error("mask stride must be at least 1")]
    ZeroStride,

    #[error("display boundary {byte} is not a char boundary of the {text_len}-byte display text")]
    InvalidBoundary { byte: usize, text_len: usize },

    #[error("display boundaries end at byte {end}, display text is {text_len} bytes")]
    BoundariesEndMismatch { end: usize, text_len: usize },

    #[error("offset map describes {mapped} display units, boundaries describe {boundaries}")]
    DisplayLengthMismatch { mapped: usize, boundaries: usize },

    #[error("raw offset {offset} maps to display offset {mapped}, outside 0..={display_len}")]
    RawOffsetOutOfBounds {
        offset: usize,
        mapped: usize,
        display_len: usize,
    },

    #[error("display offset {offset} maps to raw offset {mapped}, outside 0..={raw_len}")]
    DisplayOffsetOutOfBounds {
        offset: usize,
        mapped: usize,
        raw_len: usize,
    },
}
