use fastonosql_core::ValueType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// The type selector switched to a new tag.
    TypeChanged(ValueType),
    /// Contents of the active sub-editor changed.
    ValueChanged,
    KeyNameChanged,
}
