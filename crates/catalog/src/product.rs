use std::sync::Arc;

use serde::{Deserialize, Serialize};

use quickorder_core::{DomainError, DomainResult, Entity, Phrase, ProductId};

/// Product status as configured in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Enabled,
    Disabled,
}

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    /// Price in smallest currency unit (e.g., cents).
    price: u64,
    status: ProductStatus,
}

impl Product {
    pub fn new(id: ProductId, sku: impl Into<String>, name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            sku: sku.into(),
            name: name.into(),
            price,
            status: ProductStatus::Enabled,
        }
    }

    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    /// Disabled products cannot be added to a cart.
    pub fn is_salable(&self) -> bool {
        self.status == ProductStatus::Enabled
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Error returned for an unknown (or unparseable) product id.
pub fn product_not_found() -> DomainError {
    DomainError::not_found(Phrase::new(
        "The product that was requested doesn't exist. Verify the product and try again.",
    ))
}

/// Product lookup port.
pub trait ProductCatalog: Send + Sync {
    fn get_by_id(&self, id: ProductId) -> DomainResult<Product>;
}

impl<S> ProductCatalog for Arc<S>
where
    S: ProductCatalog + ?Sized,
{
    fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        (**self).get_by_id(id)
    }
}
