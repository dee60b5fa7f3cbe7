//! # Visual text transformations
//!
//! A text input keeps editing its *raw* value while drawing a *display* value
//! derived from it. A [`VisualTransformation`] produces the display text plus
//! an [`OffsetMap`] so carets and selections can move between the two:
//!
//! ```rust
//! use dashfield_text::*;
//!
//! let t = MaskTransformation::dashed().filter("1234");
//! assert_eq!(t.text, "1-2-3-4");
//!
//! // caret after the second digit
//! assert_eq!(t.raw_to_display(2), 4);
//! // a click on the second dash lands before the third digit
//! assert_eq!(t.display_to_raw(3), 2);
//! ```
//!
//! Offsets count grapheme clusters, not bytes. Use [`GraphemeBoundaries`] to
//! move between cluster indices and byte positions in either string.
//!
//! Both lookups are total. Anything past the end maps to the end of the other
//! text, so a caret at the end of the raw value is drawn at the end of the
//! display value.

pub mod error;
pub mod graphemes;
pub mod mask;
pub mod offset;
pub mod transform;

pub use error::*;
pub use graphemes::*;
pub use mask::*;
pub use offset::*;
pub use transform::*;
