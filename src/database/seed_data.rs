use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, TransactionTrait,
};
use tracing::info;

use crate::database::entities::{
    attributes, categories, contacts, descriptions, images, licenses, locations, media, options,
    pricing, producers, products, reviews, stocks,
};
use crate::services::repository::Repository;

const SAMPLE_DESCRIPTION: &str = "Value Buds is Canada's newest low-cost high-value";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub producers: usize,
    pub products: usize,
}

/// Load the sample catalog: two producers and three products, each with one
/// record in every child table.
///
/// Does nothing when either root table already has rows. With
/// `transactional` set, each root record and its children commit together.
pub async fn seed_catalog(db: &DatabaseConnection, transactional: bool) -> Result<SeedSummary> {
    if producers::Entity::find().one(db).await?.is_some()
        || products::Entity::find().one(db).await?.is_some()
    {
        info!("Catalog already contains data, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut summary = SeedSummary::default();

    for producer in sample_producers() {
        let producer_id = if transactional {
            let txn = db.begin().await?;
            let id = seed_producer(&txn, producer).await?;
            txn.commit().await?;
            id
        } else {
            seed_producer(db, producer).await?
        };
        info!("Seeded producer {}", producer_id);
        summary.producers += 1;
    }

    for product in sample_products() {
        let product_id = if transactional {
            let txn = db.begin().await?;
            let id = seed_product(&txn, product).await?;
            txn.commit().await?;
            id
        } else {
            seed_product(db, product).await?
        };
        info!("Seeded product {}", product_id);
        summary.products += 1;
    }

    info!(
        "Seed completed: {} producers, {} products",
        summary.producers, summary.products
    );
    Ok(summary)
}

async fn seed_producer<C>(conn: &C, input: producers::NewProducer) -> Result<i32>
where
    C: ConnectionTrait,
{
    let producer_id = producers::ActiveModel::from(input)
        .insert(conn)
        .await?
        .producer_id;

    Repository::<contacts::Entity>::create(
        conn,
        contacts::ActiveModel::from(contacts::NewContact {
            producer_id,
            contact_name: text("Value Buds 112 Street"),
            phone: text(SAMPLE_DESCRIPTION),
            phone_2: text("1"),
            email: text("aa@gmail.com"),
            email_private: text("aa1@gmail.com"),
        }),
    )
    .await?;

    Repository::<licenses::Entity>::create(
        conn,
        licenses::ActiveModel::from(licenses::NewLicense {
            producer_id,
            license_type: text("Value Buds 112 Street"),
            date_licensed: text(SAMPLE_DESCRIPTION),
        }),
    )
    .await?;

    Repository::<locations::Entity>::create(
        conn,
        locations::ActiveModel::from(locations::NewLocation {
            producer_id,
            store_name: None,
            address: text("8th Ave SW Calgary"),
            full_address: text("8th Ave SW"),
            city: None,
            province: text("Alberta"),
            postal_code: text("T2P 3V4"),
            country: text("Canada"),
            longitude: Some(11111111.0),
            latitude: Some(0.0),
            ccc: text("abc"),
        }),
    )
    .await?;

    Repository::<media::Entity>::create(
        conn,
        media::ActiveModel::from(media::NewMedia {
            producer_id,
            page_url: text("Value Buds 112 Street"),
            link: text(SAMPLE_DESCRIPTION),
            social: text("xyz"),
        }),
    )
    .await?;

    Ok(producer_id)
}

async fn seed_product<C>(conn: &C, input: products::NewProduct) -> Result<i32>
where
    C: ConnectionTrait,
{
    let product_id = products::ActiveModel::from(input)
        .insert(conn)
        .await?
        .product_id;

    Repository::<attributes::Entity>::create(
        conn,
        attributes::ActiveModel::from(attributes::NewAttribute {
            product_id,
            attribute_name: text("Value Buds 112 Street"),
            attribute_value: text(SAMPLE_DESCRIPTION),
        }),
    )
    .await?;

    Repository::<categories::Entity>::create(
        conn,
        categories::ActiveModel::from(categories::NewCategory {
            product_id,
            tree_number: text("112"),
            parent: text(SAMPLE_DESCRIPTION),
            level_1: text("xyz"),
            level_2: text("xyz"),
            level_3: text("xyz"),
        }),
    )
    .await?;

    Repository::<descriptions::Entity>::create(
        conn,
        descriptions::ActiveModel::from(descriptions::NewDescription {
            product_id,
            description: text("Value Buds 112 Street"),
            additional_information: text(SAMPLE_DESCRIPTION),
            meta_title: text("xyz"),
            meta_description: text("xyztest"),
        }),
    )
    .await?;

    Repository::<images::Entity>::create(
        conn,
        images::ActiveModel::from(images::NewImage {
            product_id,
            image_url: text("Value Buds 112 Street"),
            image_type: text(SAMPLE_DESCRIPTION),
            sort_order: Some(1),
        }),
    )
    .await?;

    Repository::<options::Entity>::create(
        conn,
        options::ActiveModel::from(options::NewOption {
            product_id,
            option_name: text("Value Buds 112 Street"),
            option_type: text(SAMPLE_DESCRIPTION),
            option_value: text("xyz"),
            option_image: text("xyz"),
            option_price_prefix: text("xyz"),
        }),
    )
    .await?;

    Repository::<pricing::Entity>::create(
        conn,
        pricing::ActiveModel::from(pricing::NewPricing {
            product_id,
            price: Some(15.0),
            old_price: Some(20.0),
            currency: text("cad"),
            ccc: text("xyz"),
            recorded_at: None,
        }),
    )
    .await?;

    Repository::<reviews::Entity>::create(
        conn,
        reviews::ActiveModel::from(reviews::NewReview {
            product_id,
            reviews_count: Some(100),
            rating: Some(5.0),
            review_link: text("testurl.com"),
        }),
    )
    .await?;

    Repository::<stocks::Entity>::create(
        conn,
        stocks::ActiveModel::from(stocks::NewStock {
            product_id,
            quantity: Some(100),
            weight: Some(5.0),
            weight_unit: text("2"),
            out_of_stock_status: text("false"),
            equivalency: text("yes"),
        }),
    )
    .await?;

    Ok(product_id)
}

fn sample_producers() -> Vec<producers::NewProducer> {
    vec![
        producers::NewProducer {
            p_id: text("0"),
            producer: text("Value Buds 112 Street"),
            city: text("Calgary"),
            store_name: text("Test A"),
            description: text(SAMPLE_DESCRIPTION),
            producer_type: text("1"),
            ccc: text("0"),
            active: Some(true),
            comment: text("test comments"),
        },
        producers::NewProducer {
            p_id: text("1"),
            producer: text("112 Street"),
            city: text("Toronto"),
            store_name: text("Test B"),
            description: text(SAMPLE_DESCRIPTION),
            producer_type: text("2"),
            ccc: text("1"),
            active: Some(true),
            comment: text("comments testing"),
        },
    ]
}

fn sample_products() -> Vec<products::NewProduct> {
    let stamp = Utc::now().timestamp_millis();
    let rows = [
        (
            "SKU-000",
            "Value Buds",
            "Value Buds Inc",
            "https://valuebuds.com/products/sample-product",
            "https://valuebuds.com/images/sample-product.jpg",
            10,
            1.5,
            "kg",
        ),
        (
            "SKU-001",
            "Green Leaf Cannabis",
            "Green Leaf Co",
            "https://greenleaf.com/products/premium-indica",
            "https://greenleaf.com/images/indica-product.jpg",
            25,
            3.5,
            "g",
        ),
        (
            "SKU-002",
            "Pure Essence",
            "Pure Essence Ltd",
            "https://pureessence.com/products/hybrid-special",
            "https://pureessence.com/images/hybrid-special.jpg",
            50,
            7.0,
            "g",
        ),
    ];

    rows.into_iter()
        .enumerate()
        .map(
            |(i, (sku, brand, manufacturer, page_url, main_image, quantity, weight, unit))| {
                products::NewProduct {
                    p_id: Some(format!("PROD-{}-{:03}", stamp, i + 1)),
                    sku: text(sku),
                    brand_name: text(brand),
                    manufacturer: text(manufacturer),
                    page_url: text(page_url),
                    main_image: text(main_image),
                    quantity: Some(quantity),
                    weight: Some(weight),
                    weight_unit: text(unit),
                    equivalency: Some(format!("{:.1}", weight)),
                }
            },
        )
        .collect()
}

fn text(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;
    use crate::query::RecordFilter;
    use crate::services::{ProducerService, ProductService};

    #[tokio::test]
    async fn test_seed_creates_sample_catalog() {
        let db = setup_test_db().await;

        let summary = seed_catalog(&db, true).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                producers: 2,
                products: 3
            }
        );

        let producers = ProducerService::new(db.clone());
        assert_eq!(
            producers.distinct_cities().await.unwrap(),
            vec!["Calgary", "Toronto"]
        );
        let calgary = producers
            .find_all(&RecordFilter::eq("city", "Calgary"))
            .await
            .unwrap();
        let details = producers
            .find_by_id_with_details(calgary[0].producer_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(details.contacts.len(), 1);
        assert_eq!(details.licenses.len(), 1);
        assert_eq!(details.locations.len(), 1);
        assert_eq!(details.media.len(), 1);

        let products = ProductService::new(db.clone());
        let all = products.find_all(&RecordFilter::new()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|p| p.p_id.as_deref().unwrap_or("").starts_with("PROD-")));

        let details = products
            .find_by_id_with_details(all[0].product_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(details.pricing[0].price, Some(15.0));
        assert!(details.descriptions.is_some());
        assert!(details.reviews.is_some());
        assert!(details.stocks.is_some());
    }

    #[tokio::test]
    async fn test_seed_skips_populated_catalog() {
        let db = setup_test_db().await;

        seed_catalog(&db, false).await.unwrap();
        let second = seed_catalog(&db, true).await.unwrap();
        assert_eq!(second, SeedSummary::default());

        let products = ProductService::new(db);
        assert_eq!(
            products.find_all(&RecordFilter::new()).await.unwrap().len(),
            3
        );
    }
}
