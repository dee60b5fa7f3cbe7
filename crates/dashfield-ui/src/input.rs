use std::ops::Range;

use dashfield_text::{
    GraphemeBoundaries, MaskTransformation, NoTransformation, OffsetMapping, TransformedText,
    VisualTransformation,
};

use crate::textfield::TextFieldState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Digits drawn with a dash between each one.
    Masked,
    Plain,
}

/// Soft keyboard the platform should offer. A hint only; input is not
/// filtered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyboardType {
    Text,
    Number,
}

impl InputKind {
    pub fn label(self) -> &'static str {
        match self {
            InputKind::Masked => "With dash mask",
            InputKind::Plain => "No mask",
        }
    }

    pub fn keyboard(self) -> KeyboardType {
        match self {
            InputKind::Masked => KeyboardType::Number,
            InputKind::Plain => KeyboardType::Text,
        }
    }

    pub fn transformation(self) -> Box<dyn VisualTransformation> {
        match self {
            InputKind::Masked => Box::new(MaskTransformation::dashed()),
            InputKind::Plain => Box::new(NoTransformation),
        }
    }
}

/// What the renderer needs: the display text with caret and selection in
/// display byte offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldLayout {
    pub display: String,
    pub caret: usize,
    pub selection: Range<usize>,
}

/// A text field whose raw value is drawn through a [`VisualTransformation`].
///
/// Edits and caret state live on the raw side in [`TextFieldState`]; pointer
/// input arrives in display coordinates and is mapped back before it touches
/// the state.
#[derive(Debug)]
pub struct TextInput {
    pub state: TextFieldState,
    kind: Option<InputKind>,
    transformation: Box<dyn VisualTransformation>,
}

impl TextInput {
    pub fn new(kind: InputKind) -> Self {
        Self {
            state: TextFieldState::new(),
            kind: Some(kind),
            transformation: kind.transformation(),
        }
    }

    pub fn with_transformation(transformation: Box<dyn VisualTransformation>) -> Self {
        Self {
            state: TextFieldState::new(),
            kind: None,
            transformation,
        }
    }

    pub fn kind(&self) -> Option<InputKind> {
        self.kind
    }

    pub fn label(&self) -> Option<&'static str> {
        self.kind.map(InputKind::label)
    }

    pub fn keyboard(&self) -> KeyboardType {
        self.kind.map_or(KeyboardType::Text, InputKind::keyboard)
    }

    pub fn value(&self) -> &str {
        &self.state.text
    }

    /// Runs the transformation on the current value. A mapping that points
    /// outside either text is discarded and the raw value is shown as is.
    pub fn transformed(&self) -> (TransformedText, GraphemeBoundaries) {
        let raw = GraphemeBoundaries::new(&self.state.text);
        let t = self.transformation.filter(&self.state.text);
        match t.validate(raw.len()) {
            Ok(()) => (t, raw),
            Err(e) => {
                log::error!("{:?}: invalid offset mapping: {e}", self.transformation);
                (TransformedText::identity(&self.state.text), raw)
            }
        }
    }

    pub fn layout(&self) -> FieldLayout {
        let (t, raw) = self.transformed();
        let to_display = |byte: usize| {
            let index = t.raw_to_display(raw.index_for_byte(byte));
            t.boundaries.byte_for_index(index)
        };
        let caret = to_display(self.state.caret_index());
        let sel = self.state.ordered_selection();
        let selection = to_display(sel.start)..to_display(sel.end);
        log::trace!(
            "layout: raw {} bytes -> display {} bytes, caret {caret}",
            self.state.text.len(),
            t.text.len()
        );
        FieldLayout {
            display: t.text,
            caret,
            selection,
        }
    }

    fn display_to_raw_byte(&self, display_byte: usize) -> usize {
        let (t, raw) = self.transformed();
        let index = t.display_to_raw(t.boundaries.index_for_byte(display_byte));
        raw.byte_for_index(index)
    }

    /// Pointer press at a display byte offset.
    pub fn click_at_display(&mut self, display_byte: usize, extend: bool) {
        let raw = self.display_to_raw_byte(display_byte);
        self.state.begin_drag(raw, extend);
    }

    pub fn drag_to_display(&mut self, display_byte: usize) {
        let raw = self.display_to_raw_byte(display_byte);
        self.state.drag_to(raw);
    }

    pub fn release(&mut self) {
        self.state.end_drag();
    }

    pub fn type_text(&mut self, text: &str) {
        self.state.insert_text(text);
    }

    pub fn backspace(&mut self) {
        self.state.delete_backward();
    }

    pub fn delete(&mut self) {
        self.state.delete_forward();
    }

    pub fn move_cursor(&mut self, delta: isize, extend_selection: bool) {
        self.state.move_cursor(delta, extend_selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashfield_text::OffsetMap;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn masked_field_draws_dashes() {
        init_logger();
        let mut input = TextInput::new(InputKind::Masked);
        input.type_text("1234");
        let l = input.layout();
        insta::assert_snapshot!(l.display.as_str(), @"1-2-3-4");
        assert_eq!(l.caret, 7);
        assert_eq!(input.value(), "1234");
    }

    #[test]
    fn caret_follows_raw_edits() {
        let mut input = TextInput::new(InputKind::Masked);
        input.type_text("123");
        input.move_cursor(-1, false);
        // between '2' and '3' in "1-2-3"
        assert_eq!(input.layout().caret, 4);
        input.backspace();
        assert_eq!(input.value(), "13");
        assert_eq!(input.layout().display, "1-3");
        assert_eq!(input.layout().caret, 2);
    }

    #[test]
    fn click_on_separator_lands_before_next_char() {
        let mut input = TextInput::new(InputKind::Masked);
        input.type_text("123");
        // "1-2-3": byte 3 is the second dash
        input.click_at_display(3, false);
        assert_eq!(input.state.caret_index(), 2);
        input.type_text("9");
        assert_eq!(input.layout().display, "1-2-9-3");
    }

    #[test]
    fn drag_selects_raw_range() {
        let mut input = TextInput::new(InputKind::Masked);
        input.type_text("12345");
        input.click_at_display(2, false); // before '2'
        input.drag_to_display(7); // the dash before '5'
        input.release();
        assert_eq!(input.state.selected_text(), "234");
        assert_eq!(input.layout().selection, 2..8);
    }

    #[test]
    fn plain_field_is_identity() {
        let mut input = TextInput::new(InputKind::Plain);
        input.type_text("héllo");
        let l = input.layout();
        assert_eq!(l.display, "héllo");
        assert_eq!(l.caret, "héllo".len());
        assert_eq!(input.label(), Some("No mask"));
        assert_eq!(input.keyboard(), KeyboardType::Text);
    }

    #[test]
    fn masked_field_hints() {
        let input = TextInput::new(InputKind::Masked);
        assert_eq!(input.label(), Some("With dash mask"));
        assert_eq!(input.keyboard(), KeyboardType::Number);
        assert_eq!(input.layout().display, "");
        assert_eq!(input.layout().caret, 0);
    }

    #[derive(Debug)]
    struct Broken;

    impl VisualTransformation for Broken {
        fn filter(&self, raw: &str) -> TransformedText {
            TransformedText {
                mapping: OffsetMap::Table {
                    raw_to_display: vec![40; raw.len()],
                    display_to_raw: vec![],
                },
                ..TransformedText::identity(raw)
            }
        }
    }

    #[test]
    fn invalid_mapping_falls_back_to_raw() {
        init_logger();
        let mut input = TextInput::with_transformation(Box::new(Broken));
        input.type_text("abc");
        let l = input.layout();
        assert_eq!(l.display, "abc");
        assert_eq!(l.caret, 3);
        assert_eq!(input.kind(), None);
    }

    #[derive(Debug)]
    struct Blank;

    impl VisualTransformation for Blank {
        fn filter(&self, _raw: &str) -> TransformedText {
            TransformedText::default()
        }
    }

    #[test]
    fn default_transformed_text_lays_out() {
        let input = TextInput::with_transformation(Box::new(Blank));
        let l = input.layout();
        assert_eq!(l.display, "");
        assert_eq!(l.caret, 0);
        assert_eq!(l.selection, 0..0);
    }

    /// Boundaries computed for a longer string than the one returned.
    #[derive(Debug)]
    struct StaleBoundaries;

    impl VisualTransformation for StaleBoundaries {
        fn filter(&self, raw: &str) -> TransformedText {
            TransformedText {
                boundaries: GraphemeBoundaries::new(&raw.repeat(3)),
                mapping: OffsetMap::identity(raw.len() * 3),
                ..TransformedText::identity(raw)
            }
        }
    }

    #[test]
    fn stale_boundaries_fall_back_to_raw() {
        init_logger();
        let mut input = TextInput::with_transformation(Box::new(StaleBoundaries));
        input.type_text("ab");
        let l = input.layout();
        assert_eq!(l.display, "ab");
        assert_eq!(l.caret, 2);
        assert!(l.display.get(..l.caret).is_some());
    }

    #[test]
    fn forward_delete_on_masked_field() {
        let mut input = TextInput::new(InputKind::Masked);
        input.type_text("123");
        input.move_cursor(-2, false);
        input.delete();
        assert_eq!(input.value(), "13");
        let l = input.layout();
        assert_eq!(l.display, "1-3");
        // before '3', after the dash
        assert_eq!(l.caret, 2);
    }
}
