const ENTRIES: [&str; 2] = ["true", "false"];

/// Two-entry selector, "true" selected by default.
#[derive(Debug, Default)]
pub struct BooleanChoice {
    selected_index: usize,
    changed: bool,
}

impl BooleanChoice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &'static [&'static str] {
        &ENTRIES
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Selects an entry by index; out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= ENTRIES.len() {
            return false;
        }

        if self.selected_index != index {
            self.selected_index = index;
            self.changed = true;
        }
        true
    }

    pub fn select(&mut self, value: bool) {
        self.select_index(if value { 0 } else { 1 });
    }

    pub fn value(&self) -> bool {
        self.selected_index == 0
    }

    pub fn clear(&mut self) {
        self.selected_index = 0;
    }

    pub(super) fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
