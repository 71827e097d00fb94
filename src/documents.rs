//! Document CRUD. Batch calls return the server's per-item result array as is.

use serde::Serialize;
use serde_json::Value;

use crate::error::{extract_messages, RestError, Result};
use crate::rest::Client;
use crate::types::{Page, PageParams};

impl Client {
    /// List documents of an engine, one page at a time
    pub fn list_documents(&self, engine_name: &str, page: Page) -> Result<Value> {
        self.get_with(
            &format!("engines/{}/documents/list", engine_name),
            &PageParams::from(page),
        )
    }

    /// Retrieve documents by id.
    ///
    /// The result array has one entry per requested id, `null` for ids that
    /// do not exist.
    pub fn get_documents<S: AsRef<str>>(&self, engine_name: &str, ids: &[S]) -> Result<Value> {
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        self.get_with(&format!("engines/{}/documents", engine_name), &ids)
    }

    /// Retrieve a single document by id, `null` if it does not exist
    pub fn get_document(&self, engine_name: &str, id: &str) -> Result<Value> {
        let result = self.get_documents(engine_name, &[id])?;
        Ok(first_item(result))
    }

    /// Index (create or replace) a batch of documents.
    ///
    /// Per-document failures are reported in the returned array, not as an error.
    pub fn index_documents<D: Serialize>(&self, engine_name: &str, documents: &[D]) -> Result<Value> {
        self.post(&format!("engines/{}/documents", engine_name), documents)
    }

    /// Index a single document and return its result entry.
    ///
    /// Fails with [`RestError::InvalidDocument`] when the server rejects it.
    pub fn index_document<D: Serialize>(&self, engine_name: &str, document: &D) -> Result<Value> {
        let result = first_item(self.index_documents(engine_name, std::slice::from_ref(document))?);
        let errors = extract_messages(&result);
        if !errors.is_empty() {
            return Err(RestError::InvalidDocument(errors));
        }
        Ok(result)
    }

    /// Partially update a batch of documents; each must carry its `id`
    pub fn update_documents<D: Serialize>(&self, engine_name: &str, documents: &[D]) -> Result<Value> {
        self.patch(&format!("engines/{}/documents", engine_name), documents)
    }

    /// Delete documents by id
    pub fn destroy_documents<S: AsRef<str>>(&self, engine_name: &str, ids: &[S]) -> Result<Value> {
        let ids: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        self.delete_with(&format!("engines/{}/documents", engine_name), &ids)
    }
}

fn first_item(value: Value) -> Value {
    match value {
        Value::Array(items) => items.into_iter().next().unwrap_or(Value::Null),
        other => other,
    }
}
