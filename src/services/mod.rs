pub mod producer_service;
pub mod product_service;
pub mod repository;

pub use producer_service::{ProducerDetails, ProducerService};
pub use product_service::{ProductDetails, ProductService};
pub use repository::Repository;
