//! Provider payload normalization
//!
//! [`Node`] is a get-with-default view over a `serde_json::Value`. Lookups
//! never fail: a missing key, a `null`, or a lookup on a non-object yields an
//! absent node, and the typed accessors substitute the caller's default.
//! Only list iteration is strict, because a non-list where a list belongs
//! means the payload is unusable.

use serde_json::Value;

use crate::providers::ProviderError;

/// Maximum number of items any search tool returns
pub const MAX_RESULTS: usize = 10;

/// Optional view of a JSON value
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(Option<&'a Value>);

impl<'a> Node<'a> {
    /// Wrap a value; `null` is treated as absent
    pub fn new(value: &'a Value) -> Self {
        if value.is_null() {
            Self(None)
        } else {
            Self(Some(value))
        }
    }

    /// An absent node
    pub fn absent() -> Self {
        Self(None)
    }

    /// Whether a non-null value is present
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    /// The underlying value, if present
    pub fn value(&self) -> Option<&'a Value> {
        self.0
    }

    /// Child by object key
    pub fn get(&self, key: &str) -> Node<'a> {
        match self.0.and_then(|value| value.get(key)) {
            Some(child) => Node::new(child),
            None => Node::absent(),
        }
    }

    /// Child by a path of object keys
    pub fn path(&self, keys: &[&str]) -> Node<'a> {
        keys.iter().fold(*self, |node, key| node.get(key))
    }

    /// Element by array index
    pub fn at(&self, index: usize) -> Node<'a> {
        match self.0.and_then(|value| value.get(index)) {
            Some(child) => Node::new(child),
            None => Node::absent(),
        }
    }

    /// String rendering of a scalar, or the default
    ///
    /// Numbers and booleans are rendered with their JSON text; objects and
    /// arrays fall back to the default.
    pub fn str_or(&self, default: &str) -> String {
        match self.0 {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => default.to_string(),
        }
    }

    /// First present string among several child keys, or the default
    pub fn first_str_or(&self, keys: &[&str], default: &str) -> String {
        keys.iter()
            .map(|key| self.get(key))
            .find(|node| matches!(node.0, Some(Value::String(_))))
            .map(|node| node.str_or(default))
            .unwrap_or_else(|| default.to_string())
    }

    /// The value itself (string or number passed through), or the default
    pub fn value_or(&self, default: impl Into<Value>) -> Value {
        match self.0 {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Array elements, strictly
    ///
    /// Absent yields an empty list; a present non-array is malformed.
    pub fn list(&self, what: &str) -> Result<Vec<Node<'a>>, ProviderError> {
        match self.0 {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.iter().map(Node::new).collect()),
            Some(other) => Err(ProviderError::malformed(format!(
                "expected a list for '{}', got {}",
                what,
                type_name(other)
            ))),
        }
    }

    /// String elements of an array, leniently
    ///
    /// Anything that is not an array of strings contributes nothing.
    pub fn string_list(&self) -> Vec<String> {
        match self.0 {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Require the node to be an object (used for list items)
    pub fn require_object(&self, what: &str) -> Result<Node<'a>, ProviderError> {
        match self.0 {
            Some(Value::Object(_)) => Ok(*self),
            Some(other) => Err(ProviderError::malformed(format!(
                "expected an object for '{}', got {}",
                what,
                type_name(other)
            ))),
            None => Err(ProviderError::malformed(format!("'{}' is null", what))),
        }
    }
}

/// Map every provider item, then keep the first [`MAX_RESULTS`]
///
/// `map` may drop an item by returning `None`. Provider order is preserved.
pub fn normalize_items<'a, T, F>(items: Vec<Node<'a>>, what: &str, mut map: F) -> Result<Vec<T>, ProviderError>
where
    F: FnMut(Node<'a>) -> Option<T>,
{
    let mut normalized = Vec::with_capacity(items.len());
    for item in items {
        let item = item.require_object(what)?;
        if let Some(mapped) = map(item) {
            normalized.push(mapped);
        }
    }

    normalized.truncate(MAX_RESULTS);
    Ok(normalized)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_use_defaults() {
        let value = json!({"name": null, "rate": {"lowest": "$120"}});
        let node = Node::new(&value);

        assert_eq!(node.get("name").str_or("Unknown Hotel"), "Unknown Hotel");
        assert_eq!(node.get("missing").str_or("N/A"), "N/A");
        assert_eq!(node.path(&["rate", "lowest"]).str_or("N/A"), "$120");
        assert_eq!(node.path(&["rate", "highest"]).value_or("N/A"), json!("N/A"));
    }

    #[test]
    fn test_lookup_on_scalar_is_absent() {
        let value = json!("just a string");
        let node = Node::new(&value);
        assert!(!node.get("anything").is_present());
        assert!(!node.at(0).is_present());
    }

    #[test]
    fn test_value_or_passes_numbers_through() {
        let value = json!({"price": 189.5, "rating": "8.7"});
        let node = Node::new(&value);
        assert_eq!(node.get("price").value_or("N/A"), json!(189.5));
        assert_eq!(node.get("rating").value_or("N/A"), json!("8.7"));
    }

    #[test]
    fn test_first_str_or() {
        let value = json!({"description": "Near the station", "address": 42});
        let node = Node::new(&value);
        assert_eq!(
            node.first_str_or(&["address", "description"], "Unknown Location"),
            "Near the station"
        );
        assert_eq!(node.first_str_or(&["city"], "Unknown Location"), "Unknown Location");
    }

    #[test]
    fn test_list_strictness() {
        let value = json!({"items": [1, 2], "broken": {"a": 1}});
        let node = Node::new(&value);

        assert_eq!(node.get("items").list("items").unwrap().len(), 2);
        assert!(node.get("absent").list("absent").unwrap().is_empty());
        assert!(matches!(
            node.get("broken").list("broken"),
            Err(ProviderError::Malformed(_))
        ));
    }

    #[test]
    fn test_string_list_is_lenient() {
        let value = json!({"tags": ["wifi", 3, "pool"], "oops": "wifi"});
        let node = Node::new(&value);
        assert_eq!(node.get("tags").string_list(), vec!["wifi", "pool"]);
        assert!(node.get("oops").string_list().is_empty());
    }

    #[test]
    fn test_normalize_items_truncates_after_mapping() {
        let value = json!((0..15).map(|i| json!({"n": i, "keep": i % 3 != 0})).collect::<Vec<_>>());
        let items = Node::new(&value).list("items").unwrap();

        let mapped = normalize_items(items, "item", |item| {
            (item.get("keep").value() == Some(&json!(true))).then(|| item.get("n").str_or("?"))
        })
        .unwrap();

        // 10 of the 15 are kept, and exactly MAX_RESULTS survive in provider order.
        assert_eq!(mapped.len(), MAX_RESULTS);
        assert_eq!(mapped.first().map(String::as_str), Some("1"));
        assert_eq!(mapped.last().map(String::as_str), Some("14"));
    }

    #[test]
    fn test_normalize_items_rejects_non_object_item() {
        let value = json!([{"n": 1}, "not an object"]);
        let items = Node::new(&value).list("items").unwrap();
        let result = normalize_items(items, "item", |item| Some(item.get("n").str_or("?")));
        assert!(matches!(result, Err(ProviderError::Malformed(_))));
    }
}
