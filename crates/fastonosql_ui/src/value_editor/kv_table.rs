use fastonosql_core::{CoreError, TypedValue, ValueType};
use indexmap::IndexMap;

/// Two-column table of (key, value) rows, used for Hash and Sorted Set values.
///
/// For sorted sets the key column holds the member and the value column its score.
#[derive(Debug, Default)]
pub struct KeyValueTableEditor {
    rows: Vec<(String, String)>,
    changed: bool,
}

impl KeyValueTableEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.rows.push((key.into(), value.into()));
        self.changed = true;
    }

    pub fn set_row(
        &mut self,
        index: usize,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let Some(row) = self.rows.get_mut(index) else {
            return false;
        };

        *row = (key.into(), value.into());
        self.changed = true;
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<(String, String)> {
        if index >= self.rows.len() {
            return None;
        }

        self.changed = true;
        Some(self.rows.remove(index))
    }

    pub fn rows(&self) -> &[(String, String)] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Builds a Hash or a Sorted Set from the rows in insertion order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    /// Sorted set scores must parse as `f64`.
    pub fn materialize(&self, value_type: ValueType) -> Result<TypedValue, CoreError> {
        let mut merged: IndexMap<&str, &str> = IndexMap::with_capacity(self.rows.len());
        for (key, value) in &self.rows {
            merged.insert(key.as_str(), value.as_str());
        }

        match value_type {
            ValueType::Hash => Ok(TypedValue::Hash(
                merged
                    .into_iter()
                    .map(|(k, v)| (TypedValue::string(k), TypedValue::string(v)))
                    .collect(),
            )),
            ValueType::ZSet => {
                let mut members = Vec::with_capacity(merged.len());
                for (member, score) in merged {
                    let score: f64 = score
                        .trim()
                        .parse()
                        .map_err(|_| CoreError::InvalidScore(score.to_string()))?;
                    members.push((TypedValue::string(member), TypedValue::Double(score)));
                }
                Ok(TypedValue::ZSet(members))
            }
            other => Err(CoreError::contract_violation(format!(
                "key/value table cannot build a {} value",
                other
            ))),
        }
    }

    pub(super) fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
