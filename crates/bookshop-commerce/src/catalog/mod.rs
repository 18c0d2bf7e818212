//! Product catalog module.
//!
//! Contains the book type, the in-memory catalog, its query/sort options and
//! the admin product filter.

mod product;
mod query;

pub use product::{Catalog, Product};
pub use query::{CatalogQuery, ProductFilter, SortOption};
