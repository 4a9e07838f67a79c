//! Serialization of lists.
//!
//! A list is encoded as a sequence of `[key, value]` pairs in order. Integer
//! keys are written as numbers and string keys as strings, so a
//! `serialize`/`deserialize` round trip restores key order, key types and
//! values exactly. The string form produced by `serialize` is JSON:
//!
//! ```text
//! [[0,"a"],["name","b"],[1,"c"]]
//! ```

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::de::{self, DeserializeOwned, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::list::object_list::ObjectList;
use crate::list::types::{Key, ListError, Result};

impl<V: Serialize> Serialize for ObjectList<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for entry in &self.entries {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for ObjectList<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_seq(EntriesVisitor(PhantomData))
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = ObjectList<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of [key, value] pairs")
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        // Cap the preallocation; the hint comes from untrusted input.
        let mut entries = IndexMap::with_capacity(seq.size_hint().unwrap_or(0).min(1024));

        while let Some((key, value)) = seq.next_element::<(Key, V)>()? {
            match entries.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(de::Error::custom(format_args!(
                        "duplicate key `{}`",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(value);
                }
            }
        }

        Ok(ObjectList::from_map(entries))
    }
}

impl<V: Serialize> ObjectList<V> {
    /// Encodes the list into its transportable string form.
    pub fn serialize(&self) -> Result<String> {
        serde_json::to_string(self).map_err(ListError::Encode)
    }
}

impl<V: DeserializeOwned> ObjectList<V> {
    /// Replaces the list's entries with those decoded from `blob`.
    ///
    /// On error the list is left exactly as it was.
    pub fn deserialize(&mut self, blob: &str) -> Result<()> {
        match serde_json::from_str::<ObjectList<V>>(blob) {
            Ok(decoded) => {
                debug!(count = decoded.count(), "Restored list from serialized form");
                *self = decoded;
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "Rejected malformed serialized list");
                Err(ListError::Decode(err))
            }
        }
    }

    /// Creates a list from its serialized string form.
    pub fn from_serialized(blob: &str) -> Result<Self> {
        serde_json::from_str(blob).map_err(ListError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> ObjectList<String> {
        ObjectList::from_entries([
            (Key::Int(0), "a".to_string()),
            (Key::from("name"), "b".to_string()),
            (Key::Int(1), "c".to_string()),
        ])
    }

    #[test]
    fn test_encoded_form() {
        assert_eq!(
            mixed().serialize().unwrap(),
            r#"[[0,"a"],["name","b"],[1,"c"]]"#
        );
        assert_eq!(ObjectList::<u8>::new().serialize().unwrap(), "[]");
    }

    #[test]
    fn test_round_trip_preserves_keys_and_order() {
        let original = mixed();
        let blob = original.serialize().unwrap();

        let mut restored: ObjectList<String> = ObjectList::new();
        restored.deserialize(&blob).unwrap();

        assert_eq!(restored, original);
        assert_eq!(restored.get("name").map(String::as_str), Some("b"));
        assert_eq!(restored.get(1u64).map(String::as_str), Some("c"));
    }

    #[test]
    fn test_deserialize_replaces_entries() {
        let mut list: ObjectList<u32> = vec![7, 8, 9].into();
        list.deserialize(r#"[["x",1]]"#).unwrap();

        assert_eq!(list.count(), 1);
        assert_eq!(list.get("x"), Some(&1));
    }

    #[test]
    fn test_malformed_input_leaves_list_untouched() {
        let mut list: ObjectList<u32> = vec![7, 8].into();
        let before = list.duplicate();

        for blob in [
            "",
            "not json",
            r#"{"0":1}"#,
            r#"[[0,1],[1]]"#,
            r#"[[0,"wrong type"]]"#,
            r#"[[-1,1]]"#,
            r#"[[0,1],[0,2]]"#,
        ] {
            let err = list.deserialize(blob).unwrap_err();
            assert!(err.is_decode_error(), "expected decode error for {blob:?}");
            assert_eq!(list, before);
        }
    }

    #[test]
    fn test_numeric_string_keys_decode_as_integers() {
        let list = ObjectList::<String>::from_serialized(r#"[["1","a"],["07","b"]]"#).unwrap();

        assert_eq!(
            list.keys().cloned().collect::<Vec<_>>(),
            [Key::Int(1), Key::from("07")]
        );
        assert!(list.exists("1"));
        assert_eq!(list.get("1").map(String::as_str), Some("a"));
        assert_eq!(list.get(1u64).map(String::as_str), Some("a"));
        assert_eq!(list.next_index(), 2);
    }

    #[test]
    fn test_integer_and_numeric_string_keys_collide() {
        let err = ObjectList::<String>::from_serialized(r#"[[1,"a"],["1","b"]]"#).unwrap_err();
        assert!(err.is_decode_error());
        assert!(err.to_string().contains("duplicate key `1`"));
    }

    #[test]
    fn test_deserialize_restores_auto_index() {
        let mut list: ObjectList<u32> = ObjectList::new();
        list.deserialize(r#"[[4,1],["k",2]]"#).unwrap();
        list.append(3);
        assert_eq!(list.get(5u64), Some(&3));
    }

    #[test]
    fn test_duplicate_key_error_message() {
        let err = ObjectList::<u8>::from_serialized(r#"[["k",1],["k",2]]"#).unwrap_err();
        assert!(err.to_string().contains("duplicate key `k`"));
    }

    #[test]
    fn test_nested_lists_round_trip() {
        let mut inner = ObjectList::new();
        inner.append(1).append(2);
        let mut outer = ObjectList::new();
        outer.insert("inner", inner);

        let blob = outer.serialize().unwrap();
        let restored = ObjectList::<ObjectList<i32>>::from_serialized(&blob).unwrap();
        assert_eq!(restored, outer);
    }

    #[test]
    fn test_encode_error() {
        use std::collections::HashMap;

        // JSON object keys must be strings.
        let mut value = HashMap::new();
        value.insert(vec![1u8], 1u8);
        let list: ObjectList<HashMap<Vec<u8>, u8>> = vec![value].into();

        assert!(list.serialize().unwrap_err().is_encode_error());
    }
}
