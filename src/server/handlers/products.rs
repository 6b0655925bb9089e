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

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub product_id: Option<String>,
    pub p_id: Option<String>,
    pub sku: Option<String>,
    pub brand_name: Option<String>,
    pub manufacturer: Option<String>,
    pub main_image: Option<String>,
    pub quantity: Option<String>,
    pub weight: Option<String>,
    pub weight_unit: Option<String>,
    pub equivalency: Option<String>,
    pub created_at: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

impl ProductQuery {
    fn into_filter(self) -> RecordFilter {
        RecordFilter::new()
            .with("product_id", self.product_id)
            .with("p_id", self.p_id)
            .with("sku", self.sku)
            .with("brand_name", self.brand_name)
            .with("manufacturer", self.manufacturer)
            .with("main_image", self.main_image)
            .with("quantity", self.quantity)
            .with("weight", self.weight)
            .with("weight_unit", self.weight_unit)
            .with("equivalency", self.equivalency)
            .with("created_at", self.created_at)
            .sort_by(self.sort_by)
            .sort_order(self.sort_order)
    }
}

pub async fn list_products(
    State(state): State<AppState>,
    FilterQuery(query): FilterQuery<ProductQuery>,
) -> Result<Json<Value>, CatalogError> {
    if let Some(product_id) = query.product_id.as_deref().filter(|id| !id.trim().is_empty()) {
        let product = state.products.find_by_product_id(product_id).await?;
        if product.is_empty() {
            return Err(CatalogError::not_found("Product"));
        }
        return Ok(Json(json!({ "product": product })));
    }

    let data = state.products.find_all(&query.into_filter()).await?;
    let count = data.len();
    Ok(Json(json!({ "data": data, "count": count })))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, CatalogError> {
    let id = parse_id(&id).ok_or_else(|| CatalogError::not_found("Product"))?;
    let details = state
        .products
        .find_by_id_with_details(id)
        .await?
        .ok_or_else(|| CatalogError::not_found("Product"))?;

    Ok(Json(json!({ "data": details })))
}

pub async fn list_brands(State(state): State<AppState>) -> Result<Json<Value>, CatalogError> {
    let brands = state.products.distinct_brands().await?;
    Ok(Json(json!({ "data": brands })))
}

pub async fn list_manufacturers(
    State(state): State<AppState>,
) -> Result<Json<Value>, CatalogError> {
    let manufacturers = state.products.distinct_manufacturers().await?;
    Ok(Json(json!({ "data": manufacturers })))
}
