use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use super::parse_id;
use crate::errors::CatalogError;
use crate::query::RecordFilter;
use crate::server::app::AppState;
use crate::server::extract::FilterQuery;

/// Query string accepted by `GET /producers`.
#[derive(Debug, Default, Deserialize)]
pub struct ProducerQuery {
    pub producer_id: Option<String>,
    pub p_id: Option<String>,
    pub producer: Option<String>,
    pub city: Option<String>,
    pub store_name: Option<String>,
    pub ccc: Option<String>,
    #[serde(rename = "type")]
    pub producer_type: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

impl ProducerQuery {
    fn into_filter(self) -> RecordFilter {
        RecordFilter::new()
            .with("producer_id", self.producer_id)
            .with("p_id", self.p_id)
            .with("producer", self.producer)
            .with("city", self.city)
            .with("store_name", self.store_name)
            .with("ccc", self.ccc)
            .with("type", self.producer_type)
            .sort_by(self.sort_by)
            .sort_order(self.sort_order)
    }
}

pub async fn list_producers(
    State(state): State<AppState>,
    FilterQuery(query): FilterQuery<ProducerQuery>,
) -> Result<Json<Value>, CatalogError> {
    if let Some(producer_id) = query.producer_id.as_deref().filter(|id| !id.trim().is_empty()) {
        let producer = state.producers.find_by_producer_id(producer_id).await?;
        if producer.is_empty() {
            return Err(CatalogError::not_found("Producer"));
        }
        return Ok(Json(json!({ "producer": producer })));
    }

    let data = state.producers.find_all(&query.into_filter()).await?;
    let count = data.len();
    Ok(Json(json!({ "data": data, "count": count })))
}

pub async fn get_producer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, CatalogError> {
    let id = parse_id(&id).ok_or_else(|| CatalogError::not_found("Producer"))?;
    let details = state
        .producers
        .find_by_id_with_details(id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Producer"))?;

    Ok(Json(json!({ "data": details })))
}

pub async fn list_cities(State(state): State<AppState>) -> Result<Json<Value>, CatalogError> {
    let cities = state.producers.distinct_cities().await?;
    Ok(Json(json!({ "data": cities })))
}

pub async fn list_stores(State(state): State<AppState>) -> Result<Json<Value>, CatalogError> {
    let stores = state.producers.distinct_stores().await?;
    Ok(Json(json!({ "data": stores })))
}
