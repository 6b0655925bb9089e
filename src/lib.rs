pub mod config;
pub mod database;
pub mod errors;
pub mod query;
pub mod server;
pub mod services;
