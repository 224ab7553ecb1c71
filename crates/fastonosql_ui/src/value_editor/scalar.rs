use fastonosql_core::ValueType;
use regex::Regex;
use std::sync::LazyLock;

static INTEGER_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*$").expect("valid integer pattern"));

static UNSIGNED_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*$").expect("valid unsigned pattern"));

static DOUBLE_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.?[0-9]*([eE][-+]?[0-9]*)?$").expect("valid double pattern")
});

/// Restricts what can be typed into the single-line field.
///
/// Numeric filters accept partial input such as `-` or `1e` so typing is
/// never blocked mid-number; such text still fails to parse on extraction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InputFilter {
    #[default]
    Unrestricted,
    Integer,
    UnsignedInteger,
    Double,
}

impl InputFilter {
    pub fn for_type(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Integer => Self::Integer,
            ValueType::UnsignedInteger => Self::UnsignedInteger,
            ValueType::Double => Self::Double,
            _ => Self::Unrestricted,
        }
    }

    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Integer => INTEGER_INPUT.is_match(text),
            Self::UnsignedInteger => UNSIGNED_INPUT.is_match(text),
            Self::Double => DOUBLE_INPUT.is_match(text),
        }
    }
}

#[derive(Debug, Default)]
pub struct ScalarEditor {
    text: String,
    filter: InputFilter,
    changed: bool,
}

impl ScalarEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text. Returns `false` and keeps the old text when the
    /// active filter refuses it.
    pub fn set_text(&mut self, text: &str) -> bool {
        if !self.filter.accepts(text) {
            return false;
        }

        if self.text != text {
            self.text = text.to_string();
            self.changed = true;
        }
        true
    }

    pub fn filter(&self) -> InputFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: InputFilter) {
        self.filter = filter;
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub(super) fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
