//! A named collection of schema-flexible documents.
//!
//! Documents are JSON objects keyed by generated ids. Each operation
//! takes the collection lock once, so individual writes are atomic;
//! there are no multi-document transactions.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde_json::{Map, Value};

use super::DocId;
use crate::errors::{AppError, AppResult};

/// One logical collection in the document store.
pub struct Collection {
    name: String,
    docs: RwLock<BTreeMap<DocId, Map<String, Value>>>,
}

impl Collection {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docs: RwLock::new(BTreeMap::new()),
        }
    }

    /// Collection name as resolved from configuration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All documents, in store-default order.
    pub fn find_all(&self) -> AppResult<Vec<(DocId, Value)>> {
        let docs = self.read_lock()?;
        Ok(docs
            .iter()
            .map(|(id, doc)| (*id, Value::Object(doc.clone())))
            .collect())
    }

    /// Look up a single document by id.
    pub fn find(&self, id: &DocId) -> AppResult<Option<Value>> {
        let docs = self.read_lock()?;
        Ok(docs.get(id).cloned().map(Value::Object))
    }

    /// Insert a new document and return its generated id.
    pub fn insert(&self, doc: Value) -> AppResult<DocId> {
        let fields = into_object(doc, &self.name)?;
        let id = DocId::new();
        let mut docs = self.write_lock()?;
        docs.insert(id, fields);
        Ok(id)
    }

    /// Merge the given fields into an existing document, leaving
    /// unspecified fields untouched. Fails with `NotFound` if the id
    /// does not resolve.
    pub fn set(&self, id: &DocId, fields: Value) -> AppResult<()> {
        let fields = into_object(fields, &self.name)?;
        let mut docs = self.write_lock()?;
        let doc = docs.get_mut(id).ok_or(AppError::NotFound)?;
        for (key, value) in fields {
            doc.insert(key, value);
        }
        Ok(())
    }

    /// Atomically add `delta` to an integer field of a document.
    ///
    /// The read-add-write happens under a single write lock, so
    /// concurrent increments against the same document cannot lose
    /// updates. No floor is enforced; the field may go negative.
    pub fn incr(&self, id: &DocId, field: &str, delta: i64) -> AppResult<()> {
        let mut docs = self.write_lock()?;
        let doc = docs.get_mut(id).ok_or(AppError::NotFound)?;
        let current = doc
            .get(field)
            .and_then(Value::as_i64)
            .ok_or_else(|| {
                AppError::store(format!(
                    "field '{}' in collection '{}' is not an integer",
                    field, self.name
                ))
            })?;
        doc.insert(field.to_string(), Value::from(current + delta));
        Ok(())
    }

    /// Remove a document. Removing an id that does not exist is a
    /// no-op: delete is idempotent.
    pub fn delete(&self, id: &DocId) -> AppResult<()> {
        let mut docs = self.write_lock()?;
        docs.remove(id);
        Ok(())
    }

    /// Number of documents in the collection.
    pub fn count(&self) -> AppResult<u64> {
        let docs = self.read_lock()?;
        Ok(docs.len() as u64)
    }

    fn read_lock(&self) -> AppResult<std::sync::RwLockReadGuard<'_, BTreeMap<DocId, Map<String, Value>>>> {
        self.docs
            .read()
            .map_err(|_| AppError::store(format!("collection '{}' lock poisoned", self.name)))
    }

    fn write_lock(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, BTreeMap<DocId, Map<String, Value>>>> {
        self.docs
            .write()
            .map_err(|_| AppError::store(format!("collection '{}' lock poisoned", self.name)))
    }
}

fn into_object(value: Value, collection: &str) -> AppResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::store(format!(
            "collection '{}' only stores documents, got {}",
            collection,
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_and_find() {
        let coll = Collection::new("products");
        let id = coll.insert(json!({"name": "T-Shirt", "stock": 100})).unwrap();

        let doc = coll.find(&id).unwrap().unwrap();
        assert_eq!(doc["name"], "T-Shirt");
        assert_eq!(coll.count().unwrap(), 1);
    }

    #[test]
    fn test_set_merges_partial_fields() {
        let coll = Collection::new("products");
        let id = coll
            .insert(json!({"name": "Jeans", "sku": "JNS-001", "price": 1499.0}))
            .unwrap();

        coll.set(&id, json!({"price": 1299.0})).unwrap();

        let doc = coll.find(&id).unwrap().unwrap();
        assert_eq!(doc["price"], 1299.0);
        // Unspecified fields are untouched
        assert_eq!(doc["sku"], "JNS-001");
    }

    #[test]
    fn test_set_missing_id_is_not_found() {
        let coll = Collection::new("products");
        let err = coll.set(&DocId::new(), json!({"price": 1.0})).unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[test]
    fn test_incr_goes_negative() {
        let coll = Collection::new("products");
        let id = coll.insert(json!({"stock": 2})).unwrap();

        coll.incr(&id, "stock", -5).unwrap();

        let doc = coll.find(&id).unwrap().unwrap();
        assert_eq!(doc["stock"], -3);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let coll = Collection::new("customers");
        let id = coll.insert(json!({"name": "Amit"})).unwrap();

        coll.delete(&id).unwrap();
        // Second delete of the same id is a silent no-op
        coll.delete(&id).unwrap();
        assert_eq!(coll.count().unwrap(), 0);
    }

    #[test]
    fn test_non_object_document_rejected() {
        let coll = Collection::new("sales");
        let err = coll.insert(json!(42)).unwrap_err();
        assert!(matches!(err, AppError::Store(_)));
    }
}
