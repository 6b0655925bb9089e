use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{request::Parts, Uri},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

/// Query-string extractor for filter parameters that never rejects.
///
/// The first occurrence of a repeated key wins, and a query string that
/// cannot be read at all yields `T::default()`.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for FilterQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(first_values(&parts.uri)))
    }
}

pub fn first_values<T>(uri: &Uri) -> T
where
    T: DeserializeOwned + Default,
{
    let pairs = match Query::<Vec<(String, String)>>::try_from_uri(uri) {
        Ok(Query(pairs)) => pairs,
        Err(err) => {
            warn!("Ignoring unreadable query string: {}", err);
            return T::default();
        }
    };

    let mut fields = Map::new();
    for (key, value) in pairs {
        fields.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).unwrap_or_else(|err| {
        warn!("Ignoring query parameters: {}", err);
        T::default()
    })
}
