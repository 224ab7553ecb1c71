use fastonosql_core::{
    CoreError, EditorConfig, KeyName, KeyedValue, TypeIcon, TypedValue, ValueType, convert_value,
};
use log::{debug, error, warn};

use super::boolean::BooleanChoice;
use super::events::EditorEvent;
use super::json::JsonEditor;
use super::kv_table::KeyValueTableEditor;
use super::list_editor::ListEditor;
use super::mode::EditorMode;
use super::scalar::{InputFilter, ScalarEditor};
use super::stream_table::StreamTableEditor;

/// One entry of the type selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeEntry {
    pub value_type: ValueType,
    pub label: &'static str,
    pub icon: TypeIcon,
}

impl TypeEntry {
    fn new(value_type: ValueType) -> Self {
        Self {
            value_type,
            label: value_type.display_name(),
            icon: value_type.icon(),
        }
    }
}

/// Editor for a key and its typed value.
///
/// Owns one sub-editor per value shape. `active_mode` is the single source of
/// truth for which of them is shown; loading fills only that one and
/// extraction reads only that one.
pub struct TypedValueEditor {
    entries: Vec<TypeEntry>,
    current_type: ValueType,
    active_mode: EditorMode,

    key_name: String,
    /// Cleared while an existing key is edited so only its value can change.
    key_editable: bool,

    scalar: ScalarEditor,
    boolean: BooleanChoice,
    json: JsonEditor,
    list: ListEditor,
    table: KeyValueTableEditor,
    stream: StreamTableEditor,

    /// Separator for rendering composite elements when loading.
    delimiter: String,

    pending_events: Vec<EditorEvent>,
}

impl TypedValueEditor {
    /// Creates an editor offering `allowed_types` in the given order.
    ///
    /// Starts on the configured default type when it is allowed, otherwise on
    /// the first allowed type.
    pub fn new(allowed_types: &[ValueType], config: &EditorConfig) -> Result<Self, CoreError> {
        let Some(&first) = allowed_types.first() else {
            error!("Value editor created without any allowed type");
            return Err(CoreError::contract_violation(
                "value editor needs at least one allowed type",
            ));
        };

        let initial = if allowed_types.contains(&config.default_type) {
            config.default_type
        } else {
            first
        };

        let mut editor = Self {
            entries: allowed_types.iter().copied().map(TypeEntry::new).collect(),
            current_type: initial,
            active_mode: EditorMode::for_type(initial),
            key_name: String::new(),
            key_editable: true,
            scalar: ScalarEditor::new(),
            boolean: BooleanChoice::new(),
            json: JsonEditor::new(),
            list: ListEditor::new(),
            table: KeyValueTableEditor::new(),
            stream: StreamTableEditor::new(),
            delimiter: config.delimiter.clone(),
            pending_events: Vec::new(),
        };

        editor.on_type_changed(initial);
        editor.pending_events.clear();

        Ok(editor)
    }

    // --- Type selector ---

    pub fn type_entries(&self) -> &[TypeEntry] {
        &self.entries
    }

    pub fn is_allowed(&self, value_type: ValueType) -> bool {
        self.entries.iter().any(|e| e.value_type == value_type)
    }

    pub fn current_type(&self) -> ValueType {
        self.current_type
    }

    /// Index of the current type in [`Self::type_entries`].
    pub fn selected_index(&self) -> usize {
        self.entries
            .iter()
            .position(|e| e.value_type == self.current_type)
            .unwrap_or(0)
    }

    /// Selects a type in the selector. Re-selecting the current type keeps
    /// the editor contents.
    pub fn select_type(&mut self, value_type: ValueType) -> Result<(), CoreError> {
        if !self.is_allowed(value_type) {
            error!("Type {} is not offered by this editor", value_type);
            return Err(CoreError::TypeNotAllowed(value_type));
        }

        if value_type != self.current_type {
            self.on_type_changed(value_type);
        }
        Ok(())
    }

    pub fn select_index(&mut self, index: usize) -> Result<(), CoreError> {
        let value_type = self
            .entries
            .get(index)
            .map(|e| e.value_type)
            .ok_or_else(|| {
                CoreError::contract_violation(format!("no type entry at index {}", index))
            })?;
        self.select_type(value_type)
    }

    fn on_type_changed(&mut self, value_type: ValueType) {
        self.scalar.clear();
        self.boolean.clear();
        self.json.clear();
        self.list.clear();
        self.table.clear();
        self.stream.clear();

        self.current_type = value_type;
        self.active_mode = EditorMode::for_type(value_type);
        self.scalar.set_filter(InputFilter::for_type(value_type));
        self.reset_change_flags();

        self.pending_events.push(EditorEvent::TypeChanged(value_type));
    }

    // --- Visibility ---

    pub fn active_mode(&self) -> EditorMode {
        self.active_mode
    }

    pub fn is_visible(&self, mode: EditorMode) -> bool {
        self.active_mode == mode
    }

    // --- Key name ---

    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    /// Edits the key name. Refused while the name is locked.
    pub fn set_key_name(&mut self, name: &str) -> bool {
        if !self.key_editable {
            return false;
        }

        self.assign_key_name(name);
        true
    }

    pub fn is_key_editable(&self) -> bool {
        self.key_editable
    }

    pub fn set_key_editable(&mut self, editable: bool) {
        self.key_editable = editable;
    }

    fn assign_key_name(&mut self, name: &str) {
        if self.key_name != name {
            self.key_name = name.to_string();
            self.pending_events.push(EditorEvent::KeyNameChanged);
        }
    }

    // --- Sub-editors ---

    pub fn scalar(&self) -> &ScalarEditor {
        &self.scalar
    }

    pub fn scalar_mut(&mut self) -> &mut ScalarEditor {
        &mut self.scalar
    }

    pub fn boolean(&self) -> &BooleanChoice {
        &self.boolean
    }

    pub fn boolean_mut(&mut self) -> &mut BooleanChoice {
        &mut self.boolean
    }

    pub fn json(&self) -> &JsonEditor {
        &self.json
    }

    pub fn json_mut(&mut self) -> &mut JsonEditor {
        &mut self.json
    }

    pub fn list(&self) -> &ListEditor {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListEditor {
        &mut self.list
    }

    pub fn table(&self) -> &KeyValueTableEditor {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut KeyValueTableEditor {
        &mut self.table
    }

    pub fn stream(&self) -> &StreamTableEditor {
        &self.stream
    }

    pub fn stream_mut(&mut self) -> &mut StreamTableEditor {
        &mut self.stream
    }

    // --- Load ---

    /// Loads a key and its value into the editor.
    ///
    /// A key without a human readable form leaves the name field blank.
    /// Composite elements that render to an empty string are skipped.
    pub fn initialize(&mut self, keyed: &KeyedValue) -> Result<(), CoreError> {
        let value_type = keyed.value.value_type();
        if !self.is_allowed(value_type) {
            error!("Cannot load a {} value: type not offered", value_type);
            return Err(CoreError::contract_violation(format!(
                "value type {} is not allowed in this editor",
                value_type
            )));
        }

        let name = keyed.key.to_human_readable().unwrap_or_else(|| {
            warn!("Key has no human readable form, leaving name blank");
            String::new()
        });
        self.assign_key_name(&name);

        self.on_type_changed(value_type);
        self.populate(&keyed.value);
        self.reset_change_flags();

        Ok(())
    }

    fn populate(&mut self, value: &TypedValue) {
        match value {
            TypedValue::Array(items) | TypedValue::Set(items) => {
                for item in items {
                    let rendered = convert_value(item, &self.delimiter);
                    if rendered.is_empty() {
                        debug!("Skipping list element that renders empty");
                        continue;
                    }
                    self.list.insert(rendered);
                }
            }
            TypedValue::Hash(pairs) | TypedValue::ZSet(pairs) => {
                for (key, val) in pairs {
                    let key = convert_value(key, &self.delimiter);
                    let val = convert_value(val, &self.delimiter);
                    if key.is_empty() || val.is_empty() {
                        debug!("Skipping pair with an empty side");
                        continue;
                    }
                    self.table.insert(key, val);
                }
            }
            TypedValue::Stream(entries) => {
                for entry in entries {
                    self.stream.insert(entry.clone());
                }
            }
            TypedValue::Json(text) => self.json.set_text(text),
            TypedValue::Boolean(b) => self.boolean.select(*b),
            TypedValue::String(_)
            | TypedValue::Integer(_)
            | TypedValue::UnsignedInteger(_)
            | TypedValue::Double(_) => {
                let text = convert_value(value, &self.delimiter);
                if !self.scalar.set_text(&text) {
                    warn!(
                        "Value '{}' rejected by the {:?} filter",
                        text,
                        self.scalar.filter()
                    );
                }
            }
        }
    }

    // --- Extract ---

    /// Builds a value from the active sub-editor.
    pub fn create_item(&self) -> Result<TypedValue, CoreError> {
        match self.current_type {
            ValueType::Array | ValueType::Set => self.list.materialize(self.current_type),
            ValueType::Hash | ValueType::ZSet => self.table.materialize(self.current_type),
            ValueType::Stream => Ok(self.stream.materialize()),
            ValueType::Json => self.json.materialize(),
            ValueType::Boolean => Ok(TypedValue::Boolean(self.boolean.value())),
            ValueType::Integer | ValueType::UnsignedInteger | ValueType::Double => {
                self.parse_numeric()
            }
            ValueType::String => {
                if self.scalar.is_empty() {
                    return Err(CoreError::EmptyValue);
                }
                Ok(TypedValue::string(self.scalar.text()))
            }
        }
    }

    fn parse_numeric(&self) -> Result<TypedValue, CoreError> {
        let text = self.scalar.text();
        if text.is_empty() {
            return Err(CoreError::EmptyValue);
        }

        let parsed = match self.current_type {
            ValueType::Integer => text.parse().ok().map(TypedValue::Integer),
            ValueType::UnsignedInteger => text.parse().ok().map(TypedValue::UnsignedInteger),
            _ => text.parse().ok().map(TypedValue::Double),
        };

        parsed.ok_or_else(|| {
            // The input filter should have kept this out.
            error!(
                "Filtered text '{}' does not parse as {}",
                text, self.current_type
            );
            CoreError::InvalidNumber(text.to_string())
        })
    }

    /// Returns the key and its value, refusing an empty key name first.
    pub fn get_key(&self) -> Result<KeyedValue, CoreError> {
        if self.key_name.is_empty() {
            return Err(CoreError::EmptyKeyName);
        }

        let value = self.create_item()?;
        Ok(KeyedValue {
            key: KeyName::from_human_readable(&self.key_name),
            value,
        })
    }

    // --- Events ---

    /// Returns queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        if self.active_editor_changed() {
            self.pending_events.push(EditorEvent::ValueChanged);
        }
        std::mem::take(&mut self.pending_events)
    }

    fn active_editor_changed(&mut self) -> bool {
        match self.active_mode {
            EditorMode::ScalarText => self.scalar.take_changed(),
            EditorMode::BooleanChoice => self.boolean.take_changed(),
            EditorMode::JsonText => self.json.take_changed(),
            EditorMode::List => self.list.take_changed(),
            EditorMode::KeyValueTable => self.table.take_changed(),
            EditorMode::StreamTable => self.stream.take_changed(),
        }
    }

    fn reset_change_flags(&mut self) {
        self.scalar.take_changed();
        self.boolean.take_changed();
        self.json.take_changed();
        self.list.take_changed();
        self.table.take_changed();
        self.stream.take_changed();
    }
}
