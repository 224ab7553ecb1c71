use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of a [`TypedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    String,
    Integer,
    UnsignedInteger,
    Double,
    Boolean,
    Array,
    Set,
    Hash,
    #[serde(rename = "zset")]
    ZSet,
    Stream,
    Json,
}

impl ValueType {
    pub fn all() -> &'static [ValueType] {
        &[
            Self::String,
            Self::Integer,
            Self::UnsignedInteger,
            Self::Double,
            Self::Boolean,
            Self::Array,
            Self::Set,
            Self::Hash,
            Self::ZSet,
            Self::Stream,
            Self::Json,
        ]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::UnsignedInteger => "Unsigned Integer",
            Self::Double => "Double",
            Self::Boolean => "Boolean",
            Self::Array => "Array",
            Self::Set => "Set",
            Self::Hash => "Hash",
            Self::ZSet => "Sorted Set",
            Self::Stream => "Stream",
            Self::Json => "JSON",
        }
    }

    pub fn icon(self) -> TypeIcon {
        match self {
            Self::String => TypeIcon::Text,
            Self::Integer | Self::UnsignedInteger | Self::Double => TypeIcon::Number,
            Self::Boolean => TypeIcon::Toggle,
            Self::Array => TypeIcon::List,
            Self::Set => TypeIcon::Set,
            Self::Hash => TypeIcon::Hash,
            Self::ZSet => TypeIcon::SortedSet,
            Self::Stream => TypeIcon::Stream,
            Self::Json => TypeIcon::Json,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Icon shown next to a type in the type selector (enum for type-safety).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeIcon {
    Text,
    Number,
    Toggle,
    List,
    Set,
    Hash,
    SortedSet,
    Stream,
    Json,
}

impl TypeIcon {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "type-text",
            Self::Number => "hash-number",
            Self::Toggle => "toggle-left",
            Self::List => "list",
            Self::Set => "list-unique",
            Self::Hash => "table",
            Self::SortedSet => "list-ordered",
            Self::Stream => "activity",
            Self::Json => "braces",
        }
    }
}

/// One entry of a stream value: an id plus its field/value pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    pub id: String,
    pub fields: Vec<(String, String)>,
}

impl StreamEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }
}

/// Value stored under a key in a NoSQL database.
///
/// Composite variants keep insertion order. `Set` is semantically unique and
/// `ZSet` pairs map a member to its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TypedValue {
    String(String),
    Integer(i64),
    UnsignedInteger(u64),
    Double(f64),
    Boolean(bool),
    Array(Vec<TypedValue>),
    Set(Vec<TypedValue>),
    Hash(Vec<(TypedValue, TypedValue)>),
    #[serde(rename = "zset")]
    ZSet(Vec<(TypedValue, TypedValue)>),
    Stream(Vec<StreamEntry>),
    /// Raw JSON text, always valid when built through [`TypedValue::json`].
    Json(String),
}

impl TypedValue {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Builds a JSON value, refusing text that does not parse.
    ///
    /// This is the JSON-validity check used by the JSON editor.
    pub fn json(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        serde_json::from_str::<serde_json::Value>(&text)
            .map_err(|e| CoreError::InvalidJson(e.to_string()))?;
        Ok(Self::Json(text))
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Self::String(_) => ValueType::String,
            Self::Integer(_) => ValueType::Integer,
            Self::UnsignedInteger(_) => ValueType::UnsignedInteger,
            Self::Double(_) => ValueType::Double,
            Self::Boolean(_) => ValueType::Boolean,
            Self::Array(_) => ValueType::Array,
            Self::Set(_) => ValueType::Set,
            Self::Hash(_) => ValueType::Hash,
            Self::ZSet(_) => ValueType::ZSet,
            Self::Stream(_) => ValueType::Stream,
            Self::Json(_) => ValueType::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_constructor_validates_text() {
        assert!(TypedValue::json("{\"a\":1}").is_ok());
        assert!(matches!(
            TypedValue::json("{invalid"),
            Err(CoreError::InvalidJson(_))
        ));
        assert!(TypedValue::json("").is_err());
        assert!(TypedValue::json("[1, 2, 3]").is_ok());
    }

    #[test]
    fn numeric_tags_share_an_icon() {
        assert_eq!(ValueType::Integer.icon(), ValueType::Double.icon());
        assert_eq!(ValueType::ZSet.icon().name(), "list-ordered");
    }

    #[test]
    fn serde_uses_tagged_representation() {
        let value = TypedValue::ZSet(vec![(TypedValue::string("m"), TypedValue::Double(1.5))]);
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["type"], "zset");

        let back: TypedValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }
}
