use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;

use crate::database::entities::{contacts, licenses, locations, media, producers};
use crate::query::RecordFilter;
use crate::services::repository::Repository;

/// A producer with every child relation attached.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProducerDetails {
    #[serde(flatten)]
    pub producer: producers::Model,
    pub locations: Vec<locations::Model>,
    pub contacts: Vec<contacts::Model>,
    pub licenses: Vec<licenses::Model>,
    pub media: Vec<media::Model>,
}

#[derive(Clone)]
pub struct ProducerService {
    db: DatabaseConnection,
}

impl ProducerService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_all(&self, filter: &RecordFilter) -> Result<Vec<producers::Model>, DbErr> {
        Repository::<producers::Entity>::find_all(&self.db, filter).await
    }

    /// Producers whose `producer_id` equals the raw request value.
    ///
    /// A value that is not an integer matches nothing.
    pub async fn find_by_producer_id(
        &self,
        producer_id: &str,
    ) -> Result<Vec<producers::Model>, DbErr> {
        let Ok(id) = producer_id.trim().parse::<i32>() else {
            return Ok(Vec::new());
        };
        Ok(self.find_by_id(id).await?.into_iter().collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<producers::Model>, DbErr> {
        Repository::<producers::Entity>::find_by_id(&self.db, id).await
    }

    /// Producer plus locations, contacts, licenses and media.
    ///
    /// Child lookups run concurrently once the producer is known to exist;
    /// the first failing lookup fails the whole call.
    pub async fn find_by_id_with_details(
        &self,
        id: i32,
    ) -> Result<Option<ProducerDetails>, DbErr> {
        let Some(producer) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let (locations, contacts, licenses, media) = tokio::try_join!(
            Repository::<locations::Entity>::find_by_parent_id(&self.db, id),
            Repository::<contacts::Entity>::find_by_parent_id(&self.db, id),
            Repository::<licenses::Entity>::find_by_parent_id(&self.db, id),
            Repository::<media::Entity>::find_by_parent_id(&self.db, id)
        )?;

        Ok(Some(ProducerDetails {
            producer,
            locations,
            contacts,
            licenses,
            media,
        }))
    }

    pub async fn create(&self, input: producers::NewProducer) -> Result<String, DbErr> {
        Repository::<producers::Entity>::create(&self.db, producers::ActiveModel::from(input))
            .await
    }

    pub async fn create_contact(&self, input: contacts::NewContact) -> Result<String, DbErr> {
        Repository::<contacts::Entity>::create(&self.db, contacts::ActiveModel::from(input)).await
    }

    pub async fn create_license(&self, input: licenses::NewLicense) -> Result<String, DbErr> {
        Repository::<licenses::Entity>::create(&self.db, licenses::ActiveModel::from(input)).await
    }

    pub async fn create_location(&self, input: locations::NewLocation) -> Result<String, DbErr> {
        Repository::<locations::Entity>::create(&self.db, locations::ActiveModel::from(input))
            .await
    }

    pub async fn create_media(&self, input: media::NewMedia) -> Result<String, DbErr> {
        Repository::<media::Entity>::create(&self.db, media::ActiveModel::from(input)).await
    }

    pub async fn distinct_cities(&self) -> Result<Vec<String>, DbErr> {
        producers::Entity::find()
            .select_only()
            .column(producers::Column::City)
            .distinct()
            .filter(producers::Column::City.is_not_null())
            .filter(producers::Column::City.ne(""))
            .order_by_asc(producers::Column::City)
            .into_tuple::<String>()
            .all(&self.db)
            .await
    }

    pub async fn distinct_stores(&self) -> Result<Vec<String>, DbErr> {
        producers::Entity::find()
            .select_only()
            .column(producers::Column::StoreName)
            .distinct()
            .filter(producers::Column::StoreName.is_not_null())
            .filter(producers::Column::StoreName.ne(""))
            .order_by_asc(producers::Column::StoreName)
            .into_tuple::<String>()
            .all(&self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_utils::setup_test_db;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn new_producer(city: &str, store: &str) -> producers::NewProducer {
        producers::NewProducer {
            producer: Some(format!("{} {}", store, city)),
            city: Some(city.to_string()),
            store_name: Some(store.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_details_for_missing_producer() {
        let service = ProducerService::new(setup_test_db().await);

        let details = service.find_by_id_with_details(12345).await.unwrap();
        assert!(details.is_none());
    }

    #[tokio::test]
    async fn test_missing_producer_runs_only_the_parent_lookup() {
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([Vec::<producers::Model>::new()])
            .into_connection();
        let service = ProducerService::new(db.clone());

        assert!(service.find_by_id_with_details(12345).await.unwrap().is_none());

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        assert!(format!("{:?}", log[0]).contains("producers"));
    }

    #[tokio::test]
    async fn test_existing_producer_fetches_each_relation_once() {
        let now = Utc::now();
        let producer = producers::Model {
            producer_id: 7,
            p_id: None,
            producer: Some("Value Buds 112 Street".to_string()),
            city: Some("Calgary".to_string()),
            store_name: Some("Test A".to_string()),
            description: None,
            producer_type: None,
            ccc: None,
            active: Some(true),
            comment: None,
            created_at: now,
            updated_at: now,
        };
        let db = MockDatabase::new(DatabaseBackend::Sqlite)
            .append_query_results([vec![producer]])
            .append_query_results([Vec::<locations::Model>::new()])
            .append_query_results([Vec::<contacts::Model>::new()])
            .append_query_results([Vec::<licenses::Model>::new()])
            .append_query_results([Vec::<media::Model>::new()])
            .into_connection();
        let service = ProducerService::new(db.clone());

        let details = service.find_by_id_with_details(7).await.unwrap().unwrap();
        assert_eq!(details.producer.producer_id, 7);

        assert_eq!(db.into_transaction_log().len(), 5);
    }

    #[tokio::test]
    async fn test_details_without_children_has_empty_collections() {
        let service = ProducerService::new(setup_test_db().await);
        let id: i32 = service
            .create(new_producer("Calgary", "Test A"))
            .await
            .unwrap()
            .parse()
            .unwrap();

        let details = service
            .find_by_id_with_details(id)
            .await
            .unwrap()
            .expect("producer exists");

        assert_eq!(details.producer.producer_id, id);
        assert!(details.locations.is_empty());
        assert!(details.contacts.is_empty());
        assert!(details.licenses.is_empty());
        assert!(details.media.is_empty());

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["producer_id"], id);
        assert_eq!(json["city"], "Calgary");
        for key in ["locations", "contacts", "licenses", "media"] {
            assert_eq!(json[key], serde_json::json!([]), "{} should be []", key);
        }
    }

    #[tokio::test]
    async fn test_details_collect_children_of_that_producer_only() {
        let service = ProducerService::new(setup_test_db().await);
        let first: i32 = service
            .create(new_producer("Calgary", "Test A"))
            .await
            .unwrap()
            .parse()
            .unwrap();
        let second: i32 = service
            .create(new_producer("Toronto", "Test B"))
            .await
            .unwrap()
            .parse()
            .unwrap();

        service
            .create_contact(contacts::NewContact {
                producer_id: first,
                email: Some("aa@gmail.com".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        service
            .create_license(licenses::NewLicense {
                producer_id: first,
                license_type: Some("retail".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        service
            .create_location(locations::NewLocation {
                producer_id: first,
                province: Some("Alberta".to_string()),
                latitude: Some(51.04),
                longitude: Some(-114.07),
                ..Default::default()
            })
            .await
            .unwrap();
        service
            .create_media(media::NewMedia {
                producer_id: second,
                social: Some("xyz".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let details = service.find_by_id_with_details(first).await.unwrap().unwrap();
        assert_eq!(details.contacts.len(), 1);
        assert_eq!(details.contacts[0].email.as_deref(), Some("aa@gmail.com"));
        assert_eq!(details.licenses.len(), 1);
        assert_eq!(details.locations.len(), 1);
        assert_eq!(details.locations[0].latitude, Some(51.04));
        assert!(details.media.is_empty());

        let details = service.find_by_id_with_details(second).await.unwrap().unwrap();
        assert_eq!(details.media.len(), 1);
        assert!(details.contacts.is_empty());
    }

    #[tokio::test]
    async fn test_distinct_cities_are_unique() {
        let service = ProducerService::new(setup_test_db().await);
        for (city, store) in [
            ("Calgary", "Test A"),
            ("Toronto", "Test B"),
            ("Calgary", "Test C"),
            ("", "Test D"),
        ] {
            service.create(new_producer(city, store)).await.unwrap();
        }
        service
            .create(producers::NewProducer::default())
            .await
            .unwrap();

        let cities = service.distinct_cities().await.unwrap();
        assert_eq!(cities, vec!["Calgary".to_string(), "Toronto".to_string()]);
        assert_eq!(cities.iter().filter(|c| *c == "Calgary").count(), 1);

        let stores = service.distinct_stores().await.unwrap();
        assert_eq!(stores, vec!["Test A", "Test B", "Test C", "Test D"]);
    }

    #[tokio::test]
    async fn test_find_by_producer_id_binds_the_value() {
        let service = ProducerService::new(setup_test_db().await);
        let id = service
            .create(new_producer("Calgary", "Test A"))
            .await
            .unwrap();
        service
            .create(new_producer("Toronto", "Test B"))
            .await
            .unwrap();

        let found = service.find_by_producer_id(&id).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].producer_id.to_string(), id);

        let injected = service
            .find_by_producer_id("1 OR 1=1")
            .await
            .unwrap();
        assert!(injected.is_empty());
    }
}
