use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{RestError, Result};
use crate::rest::Client;

/// Signing algorithm for signed search keys
pub const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claim that scopes a signed search key to the API key that signed it
pub const API_KEY_NAME_CLAIM: &str = "api_key_name";

/// Build a signed search key.
///
/// The search options are merged with the `api_key_name` claim (which wins on
/// collision) and signed with `api_key` using HS256. The result can be used in
/// place of a public search key to restrict what a search request may do.
///
/// # Arguments
/// * `api_key` - The API key to sign the token with
/// * `api_key_name` - The unique name of that API key
/// * `options` - Search options to enforce, e.g. `search_fields` or `filters`;
///   any value serializing to a JSON object, or `()` for none
///
/// # Example
///
/// ```
/// use swiftype_app_search::create_signed_search_key;
/// use serde_json::json;
///
/// let token = create_signed_search_key(
///     "search-xxxxxxxx",
///     "search-key",
///     json!({"search_fields": {"title": {}}}),
/// )?;
/// assert_eq!(token.split('.').count(), 3);
/// # Ok::<(), swiftype_app_search::RestError>(())
/// ```
pub fn create_signed_search_key<O>(api_key: &str, api_key_name: &str, options: O) -> Result<String>
where
    O: Serialize,
{
    if api_key.is_empty() {
        return Err(RestError::Argument("api_key is required".to_string()));
    }
    if api_key_name.is_empty() {
        return Err(RestError::Argument("api_key_name is required".to_string()));
    }

    let mut claims = normalize_options(serde_json::to_value(options)?)?;
    claims.insert(
        API_KEY_NAME_CLAIM.to_string(),
        Value::String(api_key_name.to_string()),
    );

    let token = encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(api_key.as_bytes()),
    )?;

    Ok(token)
}

/// Turn caller options into a claims map with canonical keys.
fn normalize_options(options: Value) -> Result<Map<String, Value>> {
    match options {
        Value::Null => Ok(Map::new()),
        Value::Object(map) => {
            let mut claims = Map::new();
            for (key, value) in map {
                let key = key.trim();
                if key.is_empty() {
                    return Err(RestError::Argument("search option names must not be empty".to_string()));
                }
                claims.insert(key.to_string(), value);
            }
            Ok(claims)
        }
        other => Err(RestError::Argument(format!(
            "search options must be an object, got {}",
            other
        ))),
    }
}

impl Client {
    /// Build a signed search key; see [`create_signed_search_key`].
    ///
    /// No client instance is needed, the token is built locally.
    pub fn create_signed_search_key<O>(api_key: &str, api_key_name: &str, options: O) -> Result<String>
    where
        O: Serialize,
    {
        create_signed_search_key(api_key, api_key_name, options)
    }
}
