//! Product sources.

use async_trait::async_trait;
use luxe_commerce::catalog::Product;
use luxe_commerce::{CommerceError, ProductId};
use tracing::debug;

use crate::latency::SimulatedLatency;

/// Built-in jewellery catalog.
const CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Asynchronous product source.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Fetch the full catalog, in catalog order.
    async fn get_products(&self) -> Result<Vec<Product>, CommerceError>;

    /// Fetch a single product.
    async fn get_product_by_id(&self, id: &ProductId) -> Result<Option<Product>, CommerceError>;
}

/// Static in-memory catalog behind a simulated delay.
#[derive(Debug, Clone)]
pub struct MockProductService {
    products: Vec<Product>,
    latency: SimulatedLatency,
}

impl MockProductService {
    /// Serve an explicit list of products.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products,
            latency: SimulatedLatency::default(),
        }
    }

    /// Serve products parsed from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Ok(Self::with_products(products))
    }

    /// Serve the built-in jewellery catalog.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_json(CATALOG_JSON)
    }

    /// Set the simulated latency.
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Number of products served.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductService for MockProductService {
    async fn get_products(&self) -> Result<Vec<Product>, CommerceError> {
        self.latency.wait().await;
        debug!(count = self.products.len(), "serving mock catalog");
        Ok(self.products.clone())
    }

    async fn get_product_by_id(&self, id: &ProductId) -> Result<Option<Product>, CommerceError> {
        self.latency.wait().await;
        Ok(self.products.iter().find(|p| &p.id == id).cloned())
    }
}
