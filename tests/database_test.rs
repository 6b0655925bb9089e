//! Database functionality tests
//!
//! Schema bootstrap, foreign keys and one-to-one constraints

use anyhow::Result;
use catalog::database::entities::{
    attributes, categories, contacts, descriptions, images, licenses, locations, media, options,
    pricing, producers, products, reviews, stocks,
};
use catalog::database::migrations::Migrator;
use catalog::database::{establish_connection, get_database_url, setup_database};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait};
use sea_orm_migration::MigratorTrait;
use tempfile::TempDir;

async fn setup_test_db() -> Result<(DatabaseConnection, TempDir)> {
    let temp_dir = TempDir::new()?;
    let db_url = get_database_url(Some(&temp_dir.path().join("catalog.db").display().to_string()));

    let db = establish_connection(&db_url).await?;
    setup_database(&db).await?;

    Ok((db, temp_dir))
}

async fn insert_product(db: &DatabaseConnection, sku: &str) -> Result<products::Model> {
    let product = products::ActiveModel::from(products::NewProduct {
        sku: Some(sku.to_string()),
        ..Default::default()
    })
    .insert(db)
    .await?;
    Ok(product)
}

#[tokio::test]
async fn test_database_migrations() -> Result<()> {
    let (db, _dir) = setup_test_db().await?;

    assert!(producers::Entity::find().all(&db).await?.is_empty());
    assert!(contacts::Entity::find().all(&db).await?.is_empty());
    assert!(licenses::Entity::find().all(&db).await?.is_empty());
    assert!(locations::Entity::find().all(&db).await?.is_empty());
    assert!(media::Entity::find().all(&db).await?.is_empty());

    assert!(products::Entity::find().all(&db).await?.is_empty());
    assert!(attributes::Entity::find().all(&db).await?.is_empty());
    assert!(categories::Entity::find().all(&db).await?.is_empty());
    assert!(descriptions::Entity::find().all(&db).await?.is_empty());
    assert!(images::Entity::find().all(&db).await?.is_empty());
    assert!(options::Entity::find().all(&db).await?.is_empty());
    assert!(pricing::Entity::find().all(&db).await?.is_empty());
    assert!(reviews::Entity::find().all(&db).await?.is_empty());
    assert!(stocks::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_migrations_are_idempotent_and_reversible() -> Result<()> {
    let (db, _dir) = setup_test_db().await?;

    // A second run has nothing left to apply
    setup_database(&db).await?;

    Migrator::down(&db, None).await?;
    assert!(products::Entity::find().all(&db).await.is_err());

    Migrator::up(&db, None).await?;
    assert!(products::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_deleting_product_cascades_to_children() -> Result<()> {
    let (db, _dir) = setup_test_db().await?;
    let product = insert_product(&db, "SKU-CASCADE").await?;

    images::ActiveModel::from(images::NewImage {
        product_id: product.product_id,
        image_url: Some("https://valuebuds.com/images/a.jpg".to_string()),
        ..Default::default()
    })
    .insert(&db)
    .await?;
    pricing::ActiveModel::from(pricing::NewPricing {
        product_id: product.product_id,
        price: Some(15.0),
        ..Default::default()
    })
    .insert(&db)
    .await?;

    product.delete(&db).await?;

    assert!(images::Entity::find().all(&db).await?.is_empty());
    assert!(pricing::Entity::find().all(&db).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_one_to_one_children_are_unique_per_product() -> Result<()> {
    let (db, _dir) = setup_test_db().await?;
    let product = insert_product(&db, "SKU-ONE").await?;

    let description = || descriptions::NewDescription {
        product_id: product.product_id,
        meta_title: Some("xyz".to_string()),
        ..Default::default()
    };

    descriptions::ActiveModel::from(description()).insert(&db).await?;
    let duplicate = descriptions::ActiveModel::from(description()).insert(&db).await;
    assert!(duplicate.is_err());

    Ok(())
}

#[tokio::test]
async fn test_child_requires_existing_parent() -> Result<()> {
    let (db, _dir) = setup_test_db().await?;

    let orphan = contacts::ActiveModel::from(contacts::NewContact {
        producer_id: 404,
        email: Some("aa@gmail.com".to_string()),
        ..Default::default()
    })
    .insert(&db)
    .await;

    assert!(orphan.is_err());
    Ok(())
}
