//! Single and multi query search.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::error::{RestError, Result};
use crate::rest::Client;

impl Client {
    /// Search an engine.
    ///
    /// # Arguments
    /// * `engine_name` - Engine to search
    /// * `query` - Query text
    /// * `options` - Extra search parameters (`page`, `filters`, `boosts`, ...);
    ///   any value serializing to a JSON object, or `()` for none
    ///
    /// # Example
    ///
    /// ```no_run
    /// use swiftype_app_search::{Client, ClientOptions};
    /// use serde_json::json;
    ///
    /// let client = Client::new(ClientOptions::new("host-c5s2mj", "search-xxxxxxxx"))?;
    /// let results = client.search("books", "dune", json!({"page": {"size": 5}}))?;
    /// println!("{}", results["meta"]["page"]["total_results"]);
    /// # Ok::<(), swiftype_app_search::RestError>(())
    /// ```
    pub fn search<O: Serialize>(&self, engine_name: &str, query: &str, options: O) -> Result<Value> {
        let params = query_params(query, options)?;
        self.post(&format!("engines/{}/search", engine_name), &params)
    }

    /// Run several searches against an engine in one request.
    ///
    /// Each entry is a search body such as `{"query": "dune", "page": {"size": 5}}`;
    /// the response holds one result set per entry, in order.
    pub fn multi_search<S: Serialize>(&self, engine_name: &str, searches: &[S]) -> Result<Value> {
        self.post(
            &format!("engines/{}/multi_search", engine_name),
            &json!({ "queries": serde_json::to_value(searches)? }),
        )
    }
}

/// Merge `{"query": query}` with caller options; the options may not override the query.
pub(crate) fn query_params<O: Serialize>(query: &str, options: O) -> Result<Map<String, Value>> {
    let mut params = match serde_json::to_value(options)? {
        Value::Null => Map::new(),
        Value::Object(map) => map,
        other => {
            return Err(RestError::Argument(format!(
                "options must be an object, got {}",
                other
            )))
        }
    };
    params.insert("query".to_string(), Value::String(query.to_string()));
    Ok(params)
}
