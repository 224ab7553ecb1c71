use fastonosql_core::{StreamEntry, TypedValue};

/// Table of stream entries; each row is one entry with its fields.
#[derive(Debug, Default)]
pub struct StreamTableEditor {
    entries: Vec<StreamEntry>,
    changed: bool,
}

impl StreamTableEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: StreamEntry) {
        self.entries.push(entry);
        self.changed = true;
    }

    pub fn remove(&mut self, index: usize) -> Option<StreamEntry> {
        if index >= self.entries.len() {
            return None;
        }

        self.changed = true;
        Some(self.entries.remove(index))
    }

    pub fn entries(&self) -> &[StreamEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn materialize(&self) -> TypedValue {
        TypedValue::Stream(self.entries.clone())
    }

    pub(super) fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
