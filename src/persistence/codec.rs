//! JSON codec for the persisted to-do list
//!
//! Layout: `[{"id":1700000000000,"text":"buy milk"}, ...]` in list order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};
use crate::platform::storage::KeyValueStore;
use crate::todo::{MAX_ID, TodoId, TodoItem};

/// On-disk shape of a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTodo {
    pub id: u64,
    pub text: String,
}

impl From<&TodoItem> for StoredTodo {
    fn from(item: &TodoItem) -> Self {
        Self {
            id: item.id.get(),
            text: item.text.clone(),
        }
    }
}

impl From<StoredTodo> for TodoItem {
    fn from(stored: StoredTodo) -> Self {
        TodoItem::new(TodoId::new(stored.id), stored.text)
    }
}

/// Serialize items in list order
pub fn encode(items: &[TodoItem]) -> Result<String> {
    let stored: Vec<StoredTodo> = items.iter().map(StoredTodo::from).collect();
    serde_json::to_string(&stored).map_err(DashError::Encode)
}

/// Parse a stored list, rejecting malformed JSON, out-of-range ids and
/// repeated ids
pub fn decode(key: &str, json: &str) -> Result<Vec<TodoItem>> {
    let stored: Vec<StoredTodo> =
        serde_json::from_str(json).map_err(|source| DashError::StorageCorrupt {
            key: key.to_string(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(stored.len());
    for entry in &stored {
        if entry.id > MAX_ID {
            return Err(DashError::IdOutOfRange {
                key: key.to_string(),
                id: entry.id,
            });
        }
        if !seen.insert(entry.id) {
            return Err(DashError::DuplicateId {
                key: key.to_string(),
                id: entry.id,
            });
        }
    }

    Ok(stored.into_iter().map(TodoItem::from).collect())
}

/// Load the list stored under `key` (absent key = empty list)
pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Result<Vec<TodoItem>> {
    match store.get(key) {
        Some(json) => decode(key, &json),
        None => Ok(Vec::new()),
    }
}

/// Overwrite `key` with the full list
pub fn save<S: KeyValueStore + ?Sized>(store: &mut S, key: &str, items: &[TodoItem]) -> Result<()> {
    let json = encode(items)?;
    store.set(key, &json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::storage::MemoryStore;

    fn item(id: u64, text: &str) -> TodoItem {
        TodoItem::new(TodoId::new(id), text)
    }

    #[test]
    fn test_encode_layout() {
        let items = [item(1700000000000, "buy milk"), item(1700000000123, "walk dog")];
        assert_eq!(
            encode(&items).unwrap(),
            r#"[{"id":1700000000000,"text":"buy milk"},{"id":1700000000123,"text":"walk dog"}]"#
        );
        assert_eq!(encode(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_decode_keeps_order() {
        let items = decode("todos", r#"[{"id":2,"text":"b"},{"id":1,"text":"a"}]"#).unwrap();
        assert_eq!(items, vec![item(2, "b"), item(1, "a")]);
    }

    #[test]
    fn test_decode_accepts_empty_text() {
        let items = decode("todos", r#"[{"id":5,"text":""}]"#).unwrap();
        assert_eq!(items, vec![item(5, "")]);
    }

    #[test]
    fn test_decode_malformed() {
        for bad in ["", "{", "null", r#"{"id":1,"text":"x"}"#, r#"[{"id":"1","text":"x"}]"#, r#"[{"text":"x"}]"#] {
            let err = decode("todos", bad).unwrap_err();
            assert!(
                matches!(err, DashError::StorageCorrupt { ref key, .. } if key == "todos"),
                "expected corruption for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_decode_duplicate_id() {
        let err = decode("todos", r#"[{"id":1,"text":"x"},{"id":1,"text":"y"}]"#).unwrap_err();
        assert!(matches!(err, DashError::DuplicateId { id: 1, .. }));
    }

    #[test]
    fn test_decode_id_range() {
        let err = decode("todos", r#"[{"id":18446744073709551615,"text":"x"}]"#).unwrap_err();
        assert!(matches!(err, DashError::IdOutOfRange { id: u64::MAX, .. }));

        let at_limit = format!(r#"[{{"id":{},"text":"x"}}]"#, MAX_ID);
        assert_eq!(decode("todos", &at_limit).unwrap(), vec![item(MAX_ID, "x")]);

        let past_limit = format!(r#"[{{"id":{},"text":"x"}}]"#, MAX_ID + 1);
        assert!(decode("todos", &past_limit).unwrap_err().is_corrupt_storage());
    }

    #[test]
    fn test_load_absent_is_empty() {
        let store = MemoryStore::new();
        assert!(load(&store, "todos").unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let items = vec![item(1, "x"), item(2, "y")];
        save(&mut store, "todos", &items).unwrap();
        assert_eq!(store.write_count(), 1);
        assert_eq!(load(&store, "todos").unwrap(), items);
    }
}
