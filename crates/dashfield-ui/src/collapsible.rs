pub const EXPAND_HINT: &str = "Tap + to expand";
pub const COLLAPSE_HINT: &str = "Tap \u{2713} to collapse";

pub const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderIcon {
    Add,
    Done,
}

/// Expanded flag of a collapsible block. Starts collapsed; the header toggles
/// it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollapsibleState {
    pub expanded: bool,
}

impl CollapsibleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        log::debug!("collapsible block expanded={}", self.expanded);
    }

    pub fn header_text(&self) -> &'static str {
        if self.expanded {
            COLLAPSE_HINT
        } else {
            EXPAND_HINT
        }
    }

    pub fn header_icon(&self) -> HeaderIcon {
        if self.expanded {
            HeaderIcon::Done
        } else {
            HeaderIcon::Add
        }
    }

    /// Body text, present only while expanded.
    pub fn body(&self) -> Option<&'static str> {
        self.expanded.then_some(LOREM_IPSUM)
    }
}
