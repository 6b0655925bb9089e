use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, DbErr, IntoActiveModel, Value,
};
use tracing::debug;

use crate::query::{translate, CatalogEntity, QueryTranslator, RecordFilter};

/// Read and create operations shared by every catalog entity.
///
/// Works against any [`ConnectionTrait`], so the same calls run on the pool or
/// inside a transaction.
pub struct Repository<E>(PhantomData<E>);

impl<E: CatalogEntity> Repository<E> {
    /// All rows matching `filter`, in the requested (allow-listed) order.
    pub async fn find_all<C>(conn: &C, filter: &RecordFilter) -> Result<Vec<E::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = translate(conn.get_database_backend(), E::DESCRIPTOR, filter);
        debug!(table = E::DESCRIPTOR.table, sql = %stmt.sql, "find_all");

        E::find().from_raw_sql(stmt).all(conn).await
    }

    pub async fn find_by_id<C>(conn: &C, id: i32) -> Result<Option<E::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let descriptor = E::DESCRIPTOR;
        let stmt = QueryTranslator::new(conn.get_database_backend(), descriptor)
            .where_eq(descriptor.primary_key, Value::from(id))
            .limit_one()
            .build();
        debug!(table = descriptor.table, sql = %stmt.sql, "find_by_id");

        E::find().from_raw_sql(stmt).one(conn).await
    }

    /// Children of one parent, in the entity's own child ordering.
    pub async fn find_by_parent_id<C>(conn: &C, parent_id: i32) -> Result<Vec<E::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let descriptor = E::DESCRIPTOR;
        let parent_key = parent_key(descriptor.table, descriptor.parent_key)?;
        let (order_column, order) = descriptor.child_ordering();

        let stmt = QueryTranslator::new(conn.get_database_backend(), descriptor)
            .where_eq(parent_key, Value::from(parent_id))
            .order_by(order_column, order)
            .build();
        debug!(table = descriptor.table, sql = %stmt.sql, "find_by_parent_id");

        E::find().from_raw_sql(stmt).all(conn).await
    }

    /// The single child of one parent, for one-to-one relations.
    pub async fn find_one_by_parent_id<C>(
        conn: &C,
        parent_id: i32,
    ) -> Result<Option<E::Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        let descriptor = E::DESCRIPTOR;
        let parent_key = parent_key(descriptor.table, descriptor.parent_key)?;
        let (order_column, order) = descriptor.child_ordering();

        let stmt = QueryTranslator::new(conn.get_database_backend(), descriptor)
            .where_eq(parent_key, Value::from(parent_id))
            .order_by(order_column, order)
            .limit_one()
            .build();
        debug!(table = descriptor.table, sql = %stmt.sql, "find_one_by_parent_id");

        E::find().from_raw_sql(stmt).one(conn).await
    }

    /// Insert a row and return its new primary key.
    ///
    /// Parent existence is left to the foreign-key constraint.
    pub async fn create<C, A>(conn: &C, model: A) -> Result<String, DbErr>
    where
        C: ConnectionTrait,
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let inserted = model.insert(conn).await?;
        let id = E::record_id(&inserted);
        debug!(table = E::DESCRIPTOR.table, id, "created");

        Ok(id.to_string())
    }
}

fn parent_key(table: &str, key: Option<&'static str>) -> Result<&'static str, DbErr> {
    key.ok_or_else(|| DbErr::Custom(format!("{} has no parent relation", table)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::{contacts, images, pricing, producers, products, reviews};
    use crate::database::test_utils::setup_test_db;
    use chrono::{Duration, Utc};

    fn producer(p_id: &str, name: &str, city: &str, store: &str) -> producers::ActiveModel {
        producers::NewProducer {
            p_id: Some(p_id.to_string()),
            producer: Some(name.to_string()),
            city: Some(city.to_string()),
            store_name: Some(store.to_string()),
            active: Some(true),
            ..Default::default()
        }
        .into()
    }

    #[tokio::test]
    async fn test_create_then_find_by_id_round_trips() {
        let db = setup_test_db().await;

        let input = producers::NewProducer {
            p_id: Some("0".to_string()),
            producer: Some("Value Buds 112 Street".to_string()),
            city: Some("Calgary".to_string()),
            store_name: Some("Test A".to_string()),
            description: Some("Low-cost high-value".to_string()),
            producer_type: Some("1".to_string()),
            ccc: Some("0".to_string()),
            active: Some(true),
            comment: Some("test comments".to_string()),
        };
        let id = Repository::<producers::Entity>::create(
            &db,
            producers::ActiveModel::from(input.clone()),
        )
        .await
        .unwrap();

        let found = Repository::<producers::Entity>::find_by_id(&db, id.parse().unwrap())
            .await
            .unwrap()
            .expect("producer should exist");

        assert_eq!(found.producer_id.to_string(), id);
        assert_eq!(found.p_id, input.p_id);
        assert_eq!(found.producer, input.producer);
        assert_eq!(found.city, input.city);
        assert_eq!(found.store_name, input.store_name);
        assert_eq!(found.description, input.description);
        assert_eq!(found.producer_type, input.producer_type);
        assert_eq!(found.ccc, input.ccc);
        assert_eq!(found.active, input.active);
        assert_eq!(found.comment, input.comment);
    }

    #[tokio::test]
    async fn test_product_defaults_applied_on_create() {
        let db = setup_test_db().await;

        let id = Repository::<products::Entity>::create(
            &db,
            products::ActiveModel::from(products::NewProduct {
                sku: Some("SKU-000".to_string()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

        let product = Repository::<products::Entity>::find_by_id(&db, id.parse().unwrap())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(product.sku.as_deref(), Some("SKU-000"));
        assert_eq!(product.quantity, 0);
        assert_eq!(product.weight, 0.0);
        assert_eq!(product.weight_unit, "kg");
        assert_eq!(product.equivalency, None);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let db = setup_test_db().await;

        let found = Repository::<products::Entity>::find_by_id(&db, 999).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_all_filters_and_sorts() {
        let db = setup_test_db().await;
        for (p_id, name, city, store) in [
            ("A-1", "Value Buds 112 Street", "Calgary", "Test A"),
            ("B-2", "112 Street", "Toronto", "Test B"),
            ("A-3", "Green Leaf", "Calgary", "Test C"),
        ] {
            Repository::<producers::Entity>::create(&db, producer(p_id, name, city, store))
                .await
                .unwrap();
        }

        let all = Repository::<producers::Entity>::find_all(&db, &RecordFilter::new())
            .await
            .unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].producer_id < w[1].producer_id));

        let calgary = RecordFilter::eq("city", "Calgary")
            .sort_by(Some("store_name".to_string()))
            .sort_order(Some("desc".to_string()));
        let rows = Repository::<producers::Entity>::find_all(&db, &calgary)
            .await
            .unwrap();
        let stores: Vec<_> = rows.iter().filter_map(|r| r.store_name.as_deref()).collect();
        assert_eq!(stores, vec!["Test C", "Test A"]);

        // contains on p_id, AND with exact city
        let narrowed = RecordFilter::new()
            .with("p_id", Some("A-".to_string()))
            .with("city", Some("Calgary".to_string()))
            .with("producer", Some("Street".to_string()));
        let rows = Repository::<producers::Entity>::find_all(&db, &narrowed)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].p_id.as_deref(), Some("A-1"));
    }

    #[tokio::test]
    async fn test_unknown_sort_field_falls_back_to_primary_key() {
        let db = setup_test_db().await;
        for (p_id, name) in [("2", "Zed"), ("1", "Alpha")] {
            Repository::<producers::Entity>::create(&db, producer(p_id, name, "Calgary", "S"))
                .await
                .unwrap();
        }

        let filter = RecordFilter::new()
            .sort_by(Some("comment; DROP TABLE producers".to_string()))
            .sort_order(Some("sideways".to_string()));
        let rows = Repository::<producers::Entity>::find_all(&db, &filter)
            .await
            .unwrap();

        let names: Vec<_> = rows.iter().filter_map(|r| r.producer.as_deref()).collect();
        assert_eq!(names, vec!["Zed", "Alpha"]);
    }

    #[tokio::test]
    async fn test_child_create_returns_own_id() {
        let db = setup_test_db().await;
        let producer_id: i32 =
            Repository::<producers::Entity>::create(&db, producer("0", "P", "Calgary", "S"))
                .await
                .unwrap()
                .parse()
                .unwrap();

        let mut ids = Vec::new();
        for name in ["first", "second"] {
            let id = Repository::<contacts::Entity>::create(
                &db,
                contacts::ActiveModel::from(contacts::NewContact {
                    producer_id,
                    contact_name: Some(name.to_string()),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();
            ids.push(id);
        }
        assert_ne!(ids[0], ids[1]);

        let contacts = Repository::<contacts::Entity>::find_by_parent_id(&db, producer_id)
            .await
            .unwrap();
        let found: Vec<_> = contacts.iter().map(|c| c.contact_id.to_string()).collect();
        assert_eq!(found, ids);
    }

    #[tokio::test]
    async fn test_child_create_with_missing_parent_fails() {
        let db = setup_test_db().await;

        let result = Repository::<contacts::Entity>::create(
            &db,
            contacts::ActiveModel::from(contacts::NewContact {
                producer_id: 4242,
                ..Default::default()
            }),
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_pricing_history_is_newest_first() {
        let db = setup_test_db().await;
        let product_id: i32 = Repository::<products::Entity>::create(
            &db,
            products::ActiveModel::from(products::NewProduct::default()),
        )
        .await
        .unwrap()
        .parse()
        .unwrap();

        let now = Utc::now();
        for (price, age_days) in [(15.0, 10), (12.5, 0), (20.0, 5)] {
            Repository::<pricing::Entity>::create(
                &db,
                pricing::ActiveModel::from(pricing::NewPricing {
                    product_id,
                    price: Some(price),
                    currency: Some("cad".to_string()),
                    recorded_at: Some(now - Duration::days(age_days)),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();
        }

        let history = Repository::<pricing::Entity>::find_by_parent_id(&db, product_id)
            .await
            .unwrap();
        let prices: Vec<_> = history.iter().filter_map(|p| p.price).collect();
        assert_eq!(prices, vec![12.5, 20.0, 15.0]);
    }

    #[tokio::test]
    async fn test_images_follow_sort_order() {
        let db = setup_test_db().await;
        let product_id: i32 = Repository::<products::Entity>::create(
            &db,
            products::ActiveModel::from(products::NewProduct::default()),
        )
        .await
        .unwrap()
        .parse()
        .unwrap();

        for (url, order) in [("c.jpg", 3), ("a.jpg", 1), ("b.jpg", 2)] {
            Repository::<images::Entity>::create(
                &db,
                images::ActiveModel::from(images::NewImage {
                    product_id,
                    image_url: Some(url.to_string()),
                    sort_order: Some(order),
                    ..Default::default()
                }),
            )
            .await
            .unwrap();
        }

        let images = Repository::<images::Entity>::find_by_parent_id(&db, product_id)
            .await
            .unwrap();
        let urls: Vec<_> = images.iter().filter_map(|i| i.image_url.as_deref()).collect();
        assert_eq!(urls, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[tokio::test]
    async fn test_singleton_child_lookup() {
        let db = setup_test_db().await;
        let product_id: i32 = Repository::<products::Entity>::create(
            &db,
            products::ActiveModel::from(products::NewProduct::default()),
        )
        .await
        .unwrap()
        .parse()
        .unwrap();

        let missing = Repository::<reviews::Entity>::find_one_by_parent_id(&db, product_id)
            .await
            .unwrap();
        assert!(missing.is_none());

        Repository::<reviews::Entity>::create(
            &db,
            reviews::ActiveModel::from(reviews::NewReview {
                product_id,
                reviews_count: Some(100),
                rating: Some(5.0),
                review_link: Some("testurl.com".to_string()),
            }),
        )
        .await
        .unwrap();

        let review = Repository::<reviews::Entity>::find_one_by_parent_id(&db, product_id)
            .await
            .unwrap()
            .expect("review should exist");
        assert_eq!(review.reviews_count, Some(100));
        assert_eq!(review.rating, Some(5.0));
    }

    #[tokio::test]
    async fn test_root_entity_has_no_parent_lookup() {
        let db = setup_test_db().await;

        let result = Repository::<producers::Entity>::find_by_parent_id(&db, 1).await;
        assert!(matches!(result, Err(DbErr::Custom(_))));
    }
}
