use fastonosql_core::{CoreError, TypedValue, ValueType};
use indexmap::IndexSet;

/// Ordered list of items, used for Array and Set values.
#[derive(Debug, Default)]
pub struct ListEditor {
    items: Vec<String>,
    changed: bool,
}

impl ListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
        self.changed = true;
    }

    pub fn set_item(&mut self, index: usize, item: impl Into<String>) -> bool {
        let Some(slot) = self.items.get_mut(index) else {
            return false;
        };

        *slot = item.into();
        self.changed = true;
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }

        self.changed = true;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Builds an Array (order kept) or a Set (first occurrence of each item kept).
    ///
    /// An empty list yields an empty composite, not an error.
    pub fn materialize(&self, value_type: ValueType) -> Result<TypedValue, CoreError> {
        match value_type {
            ValueType::Array => Ok(TypedValue::Array(
                self.items.iter().cloned().map(TypedValue::String).collect(),
            )),
            ValueType::Set => {
                let unique: IndexSet<&String> = self.items.iter().collect();
                Ok(TypedValue::Set(
                    unique
                        .into_iter()
                        .map(|item| TypedValue::String(item.clone()))
                        .collect(),
                ))
            }
            other => Err(CoreError::contract_violation(format!(
                "list editor cannot build a {} value",
                other
            ))),
        }
    }

    pub(super) fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(items: &[&str]) -> ListEditor {
        let mut editor = ListEditor::new();
        for item in items {
            editor.insert(*item);
        }
        editor
    }

    #[test]
    fn array_keeps_order_and_duplicates() {
        let editor = editor_with(&["b", "a", "b"]);
        let value = editor.materialize(ValueType::Array).unwrap();
        assert_eq!(
            value,
            TypedValue::Array(vec![
                TypedValue::string("b"),
                TypedValue::string("a"),
                TypedValue::string("b"),
            ])
        );
    }

    #[test]
    fn set_drops_later_duplicates() {
        let editor = editor_with(&["b", "a", "b"]);
        let value = editor.materialize(ValueType::Set).unwrap();
        assert_eq!(
            value,
            TypedValue::Set(vec![TypedValue::string("b"), TypedValue::string("a")])
        );
    }

    #[test]
    fn empty_list_is_an_empty_array() {
        let editor = ListEditor::new();
        assert_eq!(
            editor.materialize(ValueType::Array).unwrap(),
            TypedValue::Array(Vec::new())
        );
    }

    #[test]
    fn refuses_non_list_types() {
        let editor = editor_with(&["x"]);
        assert!(matches!(
            editor.materialize(ValueType::Hash),
            Err(CoreError::ContractViolation(_))
        ));
    }

    #[test]
    fn edit_and_remove_items() {
        let mut editor = editor_with(&["a", "b"]);
        assert!(editor.set_item(1, "c"));
        assert!(!editor.set_item(5, "z"));
        assert_eq!(editor.remove(0).as_deref(), Some("a"));
        assert_eq!(editor.items(), ["c".to_string()]);
        assert!(editor.remove(3).is_none());
    }
}
