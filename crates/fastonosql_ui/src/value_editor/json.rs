use fastonosql_core::{CoreError, TypedValue};

/// Raw text editor for JSON values.
#[derive(Debug, Default)]
pub struct JsonEditor {
    text: String,
    changed: bool,
}

impl JsonEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.changed = true;
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn materialize(&self) -> Result<TypedValue, CoreError> {
        TypedValue::json(self.text.clone())
    }

    pub(super) fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
