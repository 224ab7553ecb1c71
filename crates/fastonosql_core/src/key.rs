use crate::TypedValue;

/// Name of a key in its internal (byte) encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyName(Vec<u8>);

impl KeyName {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn from_human_readable(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }

    /// Human readable form of the key, `None` when the bytes are not UTF-8.
    pub fn to_human_readable(&self) -> Option<String> {
        String::from_utf8(self.0.clone()).ok()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for KeyName {
    fn from(value: &str) -> Self {
        Self::from_human_readable(value)
    }
}

/// A key together with its value.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedValue {
    pub key: KeyName,
    pub value: TypedValue,
}

impl KeyedValue {
    pub fn new(key: impl Into<KeyName>, value: TypedValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}
