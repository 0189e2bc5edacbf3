use serde_json::Value;

/// Read-only view over a JSON value where every lookup succeeds. A missing
/// key, an out-of-range index or a value of the wrong type reads as empty.
#[derive(Debug, Clone, Copy)]
pub struct Document<'a>(Option<&'a Value>);

impl<'a> Document<'a> {
    pub fn new(value: &'a Value) -> Self {
        Document(Some(value))
    }

    pub fn get(&self, key: &str) -> Document<'a> {
        Document(self.0.and_then(|v| v.get(key)))
    }

    pub fn path(&self, keys: &[&str]) -> Document<'a> {
        keys.iter().fold(*self, |doc, key| doc.get(key))
    }

    pub fn as_str(&self) -> &'a str {
        self.0.and_then(Value::as_str).unwrap_or_default()
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.and_then(Value::as_u64)
    }

    pub fn as_u64_list(&self) -> Vec<u64> {
        self.0
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_u64).collect())
            .unwrap_or_default()
    }
}
