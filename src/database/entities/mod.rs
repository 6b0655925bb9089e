pub mod producers;
pub mod contacts;
pub mod licenses;
pub mod locations;
pub mod media;

pub mod products;
pub mod attributes;
pub mod categories;
pub mod descriptions;
pub mod images;
pub mod options;
pub mod pricing;
pub mod reviews;
pub mod stocks;
