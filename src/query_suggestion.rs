//! Query suggestions: autocomplete for partial queries.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::rest::Client;
use crate::search::query_params;

impl Client {
    /// Autocomplete suggestions for a partial query.
    ///
    /// `options` may restrict `types` (e.g. `{"types": {"documents": {"fields": ["title"]}}}`)
    /// or set `size`; pass `()` for server defaults.
    pub fn query_suggestion<O: Serialize>(&self, engine_name: &str, query: &str, options: O) -> Result<Value> {
        let params = query_params(query, options)?;
        self.post(&format!("engines/{}/query_suggestion", engine_name), &params)
    }
}
