use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Second CSV column → first CSV column. Serializes as a flat JSON object
/// whose keys keep first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct KeyMapping {
    // 值永遠是 Value::String
    entries: Map<String, Value>,
}

impl KeyMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins; the key keeps its original position.
    /// Returns the value that was replaced, if any.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        match self.entries.insert(key, Value::String(value)) {
            Some(Value::String(previous)) => Some(previous),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|v| (k.as_str(), v)))
    }
}

impl Serialize for KeyMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl TryFrom<Map<String, Value>> for KeyMapping {
    type Error = String;

    fn try_from(entries: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some((key, _)) = entries.iter().find(|(_, v)| !v.is_string()) {
            return Err(format!("value for key '{}' is not a string", key));
        }
        Ok(Self { entries })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key.into(), value.into());
        }
        mapping
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub keys_overwritten: usize,
}
