//! Conversion between key/value pair lists and maps.
//!
//! Maps are `BTreeMap<String, V>`, so [`object_to_pairs`] yields pairs in
//! ascending key order, not in the order the keys were first inserted.

use std::collections::BTreeMap;

/// Builds a map from `(key, value)` pairs.
///
/// Keys are stringified with `ToString`. When a key repeats, the later value
/// wins.
///
/// # Example
///
/// ```rust
/// use utilkit_core::pairs_to_object;
///
/// let map = pairs_to_object([("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(map["a"], 3);
/// ```
pub fn pairs_to_object<K, V, I>(pairs: I) -> BTreeMap<String, V>
where
    K: ToString,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Lists every entry of `object` once, in ascending key order.
pub fn object_to_pairs<V: Clone>(object: &BTreeMap<String, V>) -> Vec<(String, V)> {
    object
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample_pairs() -> Vec<(&'static str, Value)> {
        vec![
            ("nome", json!("João")),
            ("idade", json!(30)),
            ("cidade", json!("São Paulo")),
        ]
    }

    #[test]
    fn test_pairs_to_object() {
        let object = pairs_to_object(sample_pairs());

        assert_eq!(object.len(), 3);
        assert_eq!(object["nome"], json!("João"));
        assert_eq!(object["idade"], json!(30));
        assert_eq!(object["cidade"], json!("São Paulo"));
    }

    #[test]
    fn test_last_write_wins() {
        let object = pairs_to_object([("k", 1), ("other", 2), ("k", 3)]);
        assert_eq!(object.len(), 2);
        assert_eq!(object["k"], 3);
    }

    #[test]
    fn test_keys_are_stringified() {
        let object = pairs_to_object([(1, "one"), (20, "twenty")]);
        assert_eq!(object["1"], "one");
        assert_eq!(object["20"], "twenty");
    }

    #[test]
    fn test_object_to_pairs_is_key_ordered() {
        let object = pairs_to_object(sample_pairs());

        assert_eq!(
            object_to_pairs(&object),
            vec![
                ("cidade".to_string(), json!("São Paulo")),
                ("idade".to_string(), json!(30)),
                ("nome".to_string(), json!("João")),
            ]
        );
    }

    #[test]
    fn test_round_trip_preserves_associations() {
        let pairs = sample_pairs();
        let object = pairs_to_object(pairs.clone());
        let back = object_to_pairs(&object);

        assert_eq!(back.len(), pairs.len());
        for (key, value) in &pairs {
            assert!(back.contains(&(key.to_string(), value.clone())));
        }
        assert_eq!(pairs_to_object(back), object);
    }

    #[test]
    fn test_empty() {
        let object: BTreeMap<String, i32> = pairs_to_object(Vec::<(String, i32)>::new());
        assert!(object.is_empty());
        assert!(object_to_pairs(&object).is_empty());
    }
}
