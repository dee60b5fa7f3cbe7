use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// Editing state of a single-line text field.
///
/// `text` is always the raw value; any mask is applied when the field is laid
/// out. `selection` holds byte offsets into `text` with `end` as the caret; it
/// may run backwards after extending to the left.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextFieldState {
    pub text: String,
    pub selection: Range<usize>,
    pub drag_anchor: Option<usize>, // caret index where drag began
}

impl TextFieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value and puts the caret at its end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let end = self.text.len();
        self.selection = end..end;
        self.drag_anchor = None;
    }

    /// Selection with `start <= end`, clamped to the text and snapped to char
    /// boundaries.
    pub fn ordered_selection(&self) -> Range<usize> {
        let a = clamp_to_char_boundary(&self.text, self.selection.start);
        let b = clamp_to_char_boundary(&self.text, self.selection.end);
        a.min(b)..a.max(b)
    }

    pub fn has_selection(&self) -> bool {
        self.selection.start != self.selection.end
    }

    pub fn insert_text(&mut self, text: &str) {
        let range = self.ordered_selection();
        let start = range.start;
        self.text.replace_range(range, text);
        let new_pos = start + text.len();
        self.selection = new_pos..new_pos;
    }

    pub fn delete_backward(&mut self) {
        if self.has_selection() {
            self.insert_text("");
            return;
        }
        let pos = clamp_to_char_boundary(&self.text, self.selection.end);
        if pos > 0 {
            let prev = prev_grapheme_boundary(&self.text, pos);
            self.text.replace_range(prev..pos, "");
            self.selection = prev..prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.has_selection() {
            self.insert_text("");
            return;
        }
        let pos = clamp_to_char_boundary(&self.text, self.selection.end);
        if pos < self.text.len() {
            let next = next_grapheme_boundary(&self.text, pos);
            self.text.replace_range(pos..next, "");
        }
        self.selection = pos..pos;
    }

    /// Moves the caret by `delta` grapheme clusters.
    pub fn move_cursor(&mut self, delta: isize, extend_selection: bool) {
        let mut pos = clamp_to_char_boundary(&self.text, self.selection.end);
        if delta < 0 {
            for _ in 0..delta.unsigned_abs() {
                pos = prev_grapheme_boundary(&self.text, pos);
            }
        } else {
            for _ in 0..delta.unsigned_abs() {
                pos = next_grapheme_boundary(&self.text, pos);
            }
        }
        if extend_selection {
            self.selection.end = pos;
        } else {
            self.selection = pos..pos;
        }
    }

    pub fn select_all(&mut self) {
        self.selection = 0..self.text.len();
    }

    pub fn selected_text(&self) -> &str {
        &self.text[self.ordered_selection()]
    }

    // Begin a selection on press; if extend==true, keep existing anchor; else set new anchor
    pub fn begin_drag(&mut self, idx_byte: usize, extend: bool) {
        let idx = clamp_to_char_boundary(&self.text, idx_byte);
        let anchor = if extend {
            self.selection.start
        } else {
            idx
        };
        self.selection = anchor..idx;
        self.drag_anchor = Some(anchor);
    }

    pub fn drag_to(&mut self, idx_byte: usize) {
        if let Some(anchor) = self.drag_anchor {
            self.selection = anchor..clamp_to_char_boundary(&self.text, idx_byte);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn caret_index(&self) -> usize {
        clamp_to_char_boundary(&self.text, self.selection.end)
    }
}

/// find prev/next grapheme boundaries around a byte index
fn prev_grapheme_boundary(text: &str, byte: usize) -> usize {
    let mut last = 0usize;
    for (i, _) in text.grapheme_indices(true) {
        if i >= byte {
            break;
        }
        last = i;
    }
    last
}

fn next_grapheme_boundary(text: &str, byte: usize) -> usize {
    for (i, _) in text.grapheme_indices(true) {
        if i > byte {
            return i;
        }
    }
    text.len()
}

fn clamp_to_char_boundary(s: &str, i: usize) -> usize {
    if i >= s.len() {
        return s.len();
    }
    // walk back to previous valid boundary
    let mut j = i;
    while j > 0 && !s.is_char_boundary(j) {
        j -= 1;
    }
    j
}
