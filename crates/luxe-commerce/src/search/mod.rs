//! Search module.
//!
//! Contains product filters and sort modes.

mod filter;
mod sort;

pub use filter::{filter_products, PriceRange, ProductFilters};
pub use sort::{sort_products, SortOption};
