//! Mock catalog sources with simulated network latency.
//!
//! This crate provides:
//! - `ProductService` - Async product source used by the storefront
//! - `MockProductService` - Static in-memory catalog behind a fixed delay
//! - `SimulatedLatency` - The delay every mock call waits before resolving

mod latency;
mod product;

pub use latency::*;
pub use product::*;
