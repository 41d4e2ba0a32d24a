//! Product catalog module.
//!
//! Contains product types and variant identity.

mod product;
mod variant;

pub use product::{Product, ProductVariants};
pub use variant::{VariantKey, VariantSelection, DEFAULT_VARIANT_TOKEN};

#[cfg(test)]
pub(crate) use product::fixtures;
