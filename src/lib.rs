//! # swiftype-app-search - Swiftype App Search client for Rust
//!
//! A blocking client for the App Search REST API. Each operation builds a
//! request path and JSON body, performs one HTTP call with fixed connect and
//! overall timeouts, and returns the decoded JSON response.
//!
//! ## Features
//!
//! - Engine lifecycle, document CRUD, search, multi search and query suggestions
//! - Schema and search settings management
//! - Signed search keys (HS256 JWT) restricting what a search may do
//! - Typed errors carrying the HTTP status and server messages
//!
//! ## Basic Usage
//!
//! ```no_run
//! use swiftype_app_search::{Client, ClientOptions, Page};
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientOptions::new("host-c5s2mj", "private-xxxxxxxx"))?;
//!
//!     client.create_engine("books", Some("en"))?;
//!     client.index_documents("books", &[json!({"id": "1", "title": "Dune"})])?;
//!
//!     let results = client.search("books", "dune", ())?;
//!     println!("{}", results["results"]);
//!
//!     let engines = client.list_engines(Page::default())?;
//!     println!("{}", engines["meta"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Signed Search Keys
//!
//! ```
//! use swiftype_app_search::Client;
//! use serde_json::json;
//!
//! let token = Client::create_signed_search_key(
//!     "search-xxxxxxxx",
//!     "search-key",
//!     json!({"filters": {"genre": "fantasy"}}),
//! )?;
//! # Ok::<(), swiftype_app_search::RestError>(())
//! ```

pub mod client;
pub mod documents;
pub mod engines;
pub mod error;
pub mod query_suggestion;
pub mod rest;
pub mod schema;
pub mod search;
pub mod search_settings;
pub mod signed_search;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientOptions, Config, DEFAULT_TIMEOUT};
pub use error::{RestError, Result};
pub use rest::Client;
pub use signed_search::create_signed_search_key;
pub use types::Page;

pub use reqwest::Method;
// Re-export serde_json for convenience
pub use serde_json::{json, Value};
