use fastonosql_core::ValueType;

/// Which sub-editor is authoritative for the current type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditorMode {
    ScalarText,
    BooleanChoice,
    JsonText,
    List,
    KeyValueTable,
    StreamTable,
}

impl EditorMode {
    pub fn all() -> &'static [EditorMode] {
        &[
            Self::ScalarText,
            Self::BooleanChoice,
            Self::JsonText,
            Self::List,
            Self::KeyValueTable,
            Self::StreamTable,
        ]
    }

    pub fn for_type(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Array | ValueType::Set => Self::List,
            ValueType::Hash | ValueType::ZSet => Self::KeyValueTable,
            ValueType::Boolean => Self::BooleanChoice,
            ValueType::Stream => Self::StreamTable,
            ValueType::Json => Self::JsonText,
            ValueType::String
            | ValueType::Integer
            | ValueType::UnsignedInteger
            | ValueType::Double => Self::ScalarText,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_tags_share_editors() {
        assert_eq!(EditorMode::for_type(ValueType::Array), EditorMode::List);
        assert_eq!(EditorMode::for_type(ValueType::Set), EditorMode::List);
        assert_eq!(
            EditorMode::for_type(ValueType::Hash),
            EditorMode::KeyValueTable
        );
        assert_eq!(
            EditorMode::for_type(ValueType::ZSet),
            EditorMode::KeyValueTable
        );
    }

    #[test]
    fn scalars_use_text_field() {
        for t in [
            ValueType::String,
            ValueType::Integer,
            ValueType::UnsignedInteger,
            ValueType::Double,
        ] {
            assert_eq!(EditorMode::for_type(t), EditorMode::ScalarText);
        }
    }
}
