use crate::TypedValue;

/// Renders a value, nested composites included, as a single human readable
/// string. Composite parts are separated by `delimiter`.
///
/// Only used to populate editors; extraction goes through the editors' own
/// typed materialization.
pub fn convert_value(value: &TypedValue, delimiter: &str) -> String {
    match value {
        TypedValue::String(s) | TypedValue::Json(s) => s.clone(),
        TypedValue::Integer(i) => i.to_string(),
        TypedValue::UnsignedInteger(u) => u.to_string(),
        TypedValue::Double(d) => d.to_string(),
        TypedValue::Boolean(b) => b.to_string(),
        TypedValue::Array(items) | TypedValue::Set(items) => items
            .iter()
            .map(|item| convert_value(item, delimiter))
            .collect::<Vec<_>>()
            .join(delimiter),
        TypedValue::Hash(pairs) | TypedValue::ZSet(pairs) => pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}{}{}",
                    convert_value(k, delimiter),
                    delimiter,
                    convert_value(v, delimiter)
                )
            })
            .collect::<Vec<_>>()
            .join(delimiter),
        TypedValue::Stream(entries) => entries
            .iter()
            .map(|entry| {
                let mut parts = vec![entry.id.clone()];
                for (field, value) in &entry.fields {
                    parts.push(field.clone());
                    parts.push(value.clone());
                }
                parts.join(delimiter)
            })
            .collect::<Vec<_>>()
            .join(delimiter),
    }
}
