use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;

use crate::database::entities::{
    attributes, categories, descriptions, images, options, pricing, products, reviews, stocks,
};
use crate::query::RecordFilter;
use crate::services::repository::Repository;

/// A product with every child relation attached.
///
/// One-to-one relations serialize as `null` when the product has none.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProductDetails {
    #[serde(flatten)]
    pub product: products::Model,
    pub attributes: Vec<attributes::Model>,
    pub categories: Vec<categories::Model>,
    pub descriptions: Option<descriptions::Model>,
    pub images: Vec<images::Model>,
    pub options: Vec<options::Model>,
    pub pricing: Vec<pricing::Model>,
    pub reviews: Option<reviews::Model>,
    pub stocks: Option<stocks::Model>,
}

#[derive(Clone)]
pub struct ProductService {
    db: DatabaseConnection,
}

impl ProductService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self, filter: &RecordFilter) -> Result<Vec<products::Model>, DbErr> {
        Repository::<products::Entity>::find_all(&self.db, filter).await
    }

    /// Products whose `product_id` equals the raw request value.
    pub async fn find_by_product_id(
        &self,
        product_id: &str,
    ) -> Result<Vec<products::Model>, DbErr> {
        let Ok(id) = product_id.trim().parse::<i32>() else {
            return Ok(Vec::new());
        };
        Ok(self.find_by_id(id).await?.into_iter().collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<products::Model>, DbErr> {
        Repository::<products::Entity>::find_by_id(&self.db, id).await
    }

    pub async fn find_by_id_with_details(
        &self,
        id: i32,
    ) -> Result<Option<ProductDetails>, DbErr> {
        let Some(product) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let (attributes, categories, descriptions, images, options, pricing, reviews, stocks) =
            tokio::try_join!(
                Repository::<attributes::Entity>::find_by_parent_id(&self.db, id),
                Repository::<categories::Entity>::find_by_parent_id(&self.db, id),
                Repository::<descriptions::Entity>::find_one_by_parent_id(&self.db, id),
                Repository::<images::Entity>::find_by_parent_id(&self.db, id),
                Repository::<options::Entity>::find_by_parent_id(&self.db, id),
                Repository::<pricing::Entity>::find_by_parent_id(&self.db, id),
                Repository::<reviews::Entity>::find_one_by_parent_id(&self.db, id),
                Repository::<stocks::Entity>::find_one_by_parent_id(&self.db, id)
            )?;

        Ok(Some(ProductDetails {
            product,
            attributes,
            categories,
            descriptions,
            images,
            options,
            pricing,
            reviews,
            stocks,
        }))
    }

    pub async fn create(&self, input: products::NewProduct) -> Result<String, DbErr> {
        Repository::<products::Entity>::create(&self.db, products::ActiveModel::from(input)).await
    }

    pub async fn create_attribute(
        &self,
        input: attributes::NewAttribute,
    ) -> Result<String, DbErr> {
        Repository::<attributes::Entity>::create(&self.db, attributes::ActiveModel::from(input))
            .await
    }

    pub async fn create_category(&self, input: categories::NewCategory) -> Result<String, DbErr> {
        Repository::<categories::Entity>::create(&self.db, categories::ActiveModel::from(input))
            .await
    }

    pub async fn create_description(
        &self,
        input: descriptions::NewDescription,
    ) -> Result<String, DbErr> {
        Repository::<descriptions::Entity>::create(
            &self.db,
            descriptions::ActiveModel::from(input),
        )
        .await
    }

    pub async fn create_image(&self, input: images::NewImage) -> Result<String, DbErr> {
        Repository::<images::Entity>::create(&self.db, images::ActiveModel::from(input)).await
    }

    pub async fn create_option(&self, input: options::NewOption) -> Result<String, DbErr> {
        Repository::<options::Entity>::create(&self.db, options::ActiveModel::from(input)).await
    }

    pub async fn create_pricing(&self, input: pricing::NewPricing) -> Result<String, DbErr> {
        Repository::<pricing::Entity>::create(&self.db, pricing::ActiveModel::from(input)).await
    }

    pub async fn create_review(&self, input: reviews::NewReview) -> Result<String, DbErr> {
        Repository::<reviews::Entity>::create(&self.db, reviews::ActiveModel::from(input)).await
    }

    pub async fn create_stock(&self, input: stocks::NewStock) -> Result<String, DbErr> {
        Repository::<stocks::Entity>::create(&self.db, stocks::ActiveModel::from(input)).await
    }

    /// Price history, newest first.
    pub async fn pricing_history(&self, product_id: i32) -> Result<Vec<pricing::Model>, DbErr> {
        Repository::<pricing::Entity>::find_by_parent_id(&self.db, product_id).await
    }

    pub async fn distinct_brands(&self) -> Result<Vec<String>, DbErr> {
        products::Entity::find()
            .select_only()
            .column(products::Column::BrandName)
            .distinct()
            .filter(products::Column::BrandName.is_not_null())
            .filter(products::Column::BrandName.ne(""))
            .order_by_asc(products::Column::BrandName)
            .into_tuple::<String>()
            .all(&self.db)
            .await
    }

    pub async fn distinct_manufacturers(&self) -> Result<Vec<String>, DbErr> {
        products::Entity::find()
            .select_only()
            .column(products::Column::Manufacturer)
            .distinct()
            .filter(products::Column::Manufacturer.is_not_null())
            .filter(products::Column::Manufacturer.ne(""))
            .order_by_asc(products::Column::Manufacturer)
            .into_tuple::<String>()
            .all(&self.db)
            .await
    }
}
