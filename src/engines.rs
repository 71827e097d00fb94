//! Engine lifecycle: list, get, create and destroy search engines.

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::rest::Client;
use crate::types::{Page, PageParams};

#[derive(Serialize)]
struct CreateEngine<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

impl Client {
    /// List engines, one page at a time
    pub fn list_engines(&self, page: Page) -> Result<Value> {
        self.get_with("engines", &PageParams::from(page))
    }

    /// Get an engine by name
    pub fn get_engine(&self, engine_name: &str) -> Result<Value> {
        self.get(&format!("engines/{}", engine_name))
    }

    /// Create an engine.
    ///
    /// # Arguments
    /// * `engine_name` - Unique engine name
    /// * `language` - Optional language code, e.g. `"en"`; `None` creates a universal engine
    pub fn create_engine(&self, engine_name: &str, language: Option<&str>) -> Result<Value> {
        self.post(
            "engines",
            &CreateEngine {
                name: engine_name,
                language,
            },
        )
    }

    /// Delete an engine and all of its documents
    pub fn destroy_engine(&self, engine_name: &str) -> Result<Value> {
        self.delete(&format!("engines/{}", engine_name))
    }
}
