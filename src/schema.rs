//! Schema: the type of every document field in an engine.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::rest::Client;

impl Client {
    /// Show the schema of an engine, e.g. `{"title": "text", "year": "number"}`
    pub fn get_schema(&self, engine_name: &str) -> Result<Value> {
        self.get(&format!("engines/{}/schema", engine_name))
    }

    /// Add fields to or change field types of an engine's schema.
    ///
    /// The update may be partial; the full new schema is returned.
    pub fn update_schema<S: Serialize + ?Sized>(&self, engine_name: &str, schema: &S) -> Result<Value> {
        self.post(&format!("engines/{}/schema", engine_name), schema)
    }
}
