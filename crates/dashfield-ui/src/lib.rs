//! # Widget state
//!
//! Plain state owned by the host screen. Nothing here draws; a renderer reads
//! these values each frame and calls back into them on input.
//!
//! - [`TextFieldState`] edits a raw value by grapheme cluster.
//! - [`TextInput`] draws that value through a visual transformation and maps
//!   pointer positions back:
//!
//! ```rust
//! use dashfield_ui::*;
//!
//! let mut field = TextInput::new(InputKind::Masked);
//! field.type_text("0912");
//! let layout = field.layout();
//! assert_eq!(layout.display, "0-9-1-2");
//! assert_eq!(field.value(), "0912");
//! ```
//!
//! - [`CollapsibleState`] is the expanded flag of a collapsible block.
//! - [`ScreenModel`] picks a widget for every row of the screen.

pub mod collapsible;
pub mod input;
pub mod rows;
pub mod textfield;

pub use collapsible::*;
pub use input::*;
pub use rows::*;
pub use textfield::*;
