//! Filtered-query engine shared by every catalog entity.
//!
//! An entity describes itself once with an [`EntityDescriptor`] (table, keys,
//! sortable columns, filterable columns). The [`QueryTranslator`] turns a
//! [`RecordFilter`] into a parameterized [`sea_orm::Statement`] for that
//! entity: caller-supplied values only ever travel as bound parameters, and
//! caller-supplied column names only reach the SQL text after being matched
//! against the descriptor.

pub mod descriptor;
pub mod filter;
pub mod translator;

pub use descriptor::{CatalogEntity, EntityDescriptor, FilterField, MatchStyle, ValueKind};
pub use filter::{RecordFilter, SortOrder};
pub use translator::{translate, QueryTranslator};
