use std::collections::HashMap;
use std::sync::Mutex;

use quickorder_catalog::{Product, ProductCatalog, StockLine, StockManagement, product_not_found};
use quickorder_core::{DomainError, DomainResult, Entity, Phrase, ProductId};

use crate::store::{InMemoryStore, KeyValueStore};

/// In-memory catalog with optional stock tracking per product.
///
/// Products added with [`InMemoryProductCatalog::add`] have unmanaged stock and
/// never run out.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    products: InMemoryStore<ProductId, Product>,
    stock: Mutex<HashMap<ProductId, u64>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, product: Product) {
        self.products.upsert(product.id(), product);
    }

    pub fn add_with_stock(&self, product: Product, qty: u64) {
        let id = product.id();
        self.add(product);
        if let Ok(mut stock) = self.stock.lock() {
            stock.insert(id, qty);
        }
    }

    /// Available quantity; `None` when stock is not managed for the product.
    pub fn stock_of(&self, id: ProductId) -> Option<u64> {
        self.stock.lock().ok()?.get(&id).copied()
    }
}

impl ProductCatalog for InMemoryProductCatalog {
    fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        self.products.get(&id).ok_or_else(product_not_found)
    }
}

impl StockManagement for InMemoryProductCatalog {
    fn deduct(&self, lines: &[StockLine]) -> DomainResult<()> {
        let mut stock = self
            .stock
            .lock()
            .map_err(|_| DomainError::internal("stock registry lock poisoned"))?;

        let mut requested: HashMap<ProductId, u64> = HashMap::new();
        for line in lines {
            *requested.entry(line.product_id).or_default() += u64::from(line.qty);
        }

        for (product_id, qty) in &requested {
            if let Some(available) = stock.get(product_id) {
                if qty > available {
                    return Err(DomainError::localized(
                        Phrase::new("The requested qty is not available"),
                    ));
                }
            }
        }

        for (product_id, qty) in requested {
            if let Some(available) = stock.get_mut(&product_id) {
                *available -= qty;
            }
        }
        Ok(())
    }
}
