use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;
use crate::storage::kv_store::KvStore;

/// A `Vec<T>` persisted as one JSON array under a single key.
///
/// Reads and writes always move the whole list. An absent key (or JSON
/// `null`) reads as an empty list.
pub struct JsonList<T> {
    key: String,
    _items: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonList<T> {
    fn clone(&self) -> Self {
        Self { key: self.key.clone(), _items: PhantomData }
    }
}

impl<T> JsonList<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), _items: PhantomData }
    }

    /// Read the entire list.
    pub async fn load(&self, store: &dyn KvStore) -> Result<Vec<T>, ServiceError> {
        match store.get(&self.key).await? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value).map_err(|e| ServiceError::decode(&self.key, e)),
        }
    }

    /// Overwrite the entire list.
    pub async fn save(&self, store: &dyn KvStore, items: &[T]) -> Result<(), ServiceError> {
        let value = serde_json::to_value(items).map_err(|e| ServiceError::Store(e.to_string()))?;
        store.set(&self.key, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn absent_and_null_read_as_empty() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let list = JsonList::<String>::new("names");
        assert!(list.load(&store).await?.is_empty());

        store.set("names", Value::Null).await?;
        assert!(list.load(&store).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn whole_list_round_trips_in_order() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        let list = JsonList::<String>::new("names");
        list.save(&store, &["b".to_string(), "a".to_string()]).await?;
        assert_eq!(store.get("names").await?, Some(json!(["b", "a"])));
        assert_eq!(list.load(&store).await?, vec!["b", "a"]);
        Ok(())
    }

    #[tokio::test]
    async fn non_array_value_is_a_decode_error() -> Result<(), anyhow::Error> {
        let store = MemoryStore::new();
        store.set("names", json!({"not": "a list"})).await?;
        let err = JsonList::<String>::new("names").load(&store).await.unwrap_err();
        assert!(matches!(err, ServiceError::Decode { ref key, .. } if key == "names"));
        Ok(())
    }
}
