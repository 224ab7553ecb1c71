use fastonosql_core::{KeyedValue, StreamEntry, TypedValue};

pub fn string_key(name: &str, value: &str) -> KeyedValue {
    KeyedValue::new(name, TypedValue::string(value))
}

pub fn text_items(items: &[&str]) -> Vec<TypedValue> {
    items.iter().map(|s| TypedValue::string(*s)).collect()
}

pub fn text_pairs(pairs: &[(&str, &str)]) -> Vec<(TypedValue, TypedValue)> {
    pairs
        .iter()
        .map(|(k, v)| (TypedValue::string(*k), TypedValue::string(*v)))
        .collect()
}

pub fn scored_members(members: &[(&str, f64)]) -> Vec<(TypedValue, TypedValue)> {
    members
        .iter()
        .map(|(m, score)| (TypedValue::string(*m), TypedValue::Double(*score)))
        .collect()
}

pub fn sensor_stream() -> TypedValue {
    TypedValue::Stream(vec![
        StreamEntry::new("1526919030474-55")
            .with_field("sensor", "1")
            .with_field("temp", "21.5"),
        StreamEntry::new("1526919030474-56").with_field("sensor", "2"),
    ])
}
