//! Search settings: per-engine field weights, boosts and result fields.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::rest::Client;
use crate::types::{Page, PageParams};

impl Client {
    /// Show the current search settings of an engine
    pub fn get_search_settings(&self, engine_name: &str) -> Result<Value> {
        self.get(&format!("engines/{}/search_settings", engine_name))
    }

    /// Replace the search settings of an engine
    pub fn update_search_settings<S: Serialize + ?Sized>(&self, engine_name: &str, settings: &S) -> Result<Value> {
        self.put(&format!("engines/{}/search_settings", engine_name), settings)
    }

    /// Restore the default search settings of an engine
    pub fn reset_search_settings(&self, engine_name: &str) -> Result<Value> {
        self.request(
            Method::POST,
            &format!("engines/{}/search_settings/reset", engine_name),
            None::<&()>,
        )
    }

    /// List previous revisions of an engine's search settings, one page at a time
    pub fn list_search_settings_history(&self, engine_name: &str, page: Page) -> Result<Value> {
        self.get_with(
            &format!("engines/{}/search_settings/history", engine_name),
            &PageParams::from(page),
        )
    }
}
