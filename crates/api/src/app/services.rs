use std::sync::Arc;

use quickorder_catalog::{Product, ProductStatus};
use quickorder_core::{AddressId, CustomerId, DomainResult, Entity, ProductId, StoreContext};
use quickorder_customers::{Address, CustomerDirectory, NewCustomer, Password};
use quickorder_infra::{InMemoryCartManagement, InMemoryCustomerDirectory, InMemoryProductCatalog};
use quickorder_purchase::PurchaseManagement;

use crate::config::AppConfig;

pub type Directory = Arc<InMemoryCustomerDirectory>;
pub type Catalog = Arc<InMemoryProductCatalog>;
pub type Carts = Arc<InMemoryCartManagement<Catalog>>;
pub type Purchases = PurchaseManagement<Directory, Directory, Catalog, Carts>;

/// Host services shared by every request.
#[derive(Debug)]
pub struct AppServices {
    pub store: StoreContext,
    pub directory: Directory,
    pub catalog: Catalog,
    pub carts: Carts,
    pub purchases: Purchases,
}

impl AppServices {
    /// Wire the orchestrator over the in-memory host services.
    pub fn in_memory(config: &AppConfig) -> DomainResult<Self> {
        let directory: Directory = Arc::new(InMemoryCustomerDirectory::new());
        let catalog: Catalog = Arc::new(InMemoryProductCatalog::new());
        let carts: Carts = Arc::new(InMemoryCartManagement::new(catalog.clone()));

        let purchases = PurchaseManagement::new(
            directory.clone(),
            directory.clone(),
            catalog.clone(),
            carts.clone(),
        )
        .with_policy(config.policy.clone());

        let services = Self {
            store: config.store.clone(),
            directory,
            catalog,
            carts,
            purchases,
        };

        if config.seed_demo {
            let customer_id = services.seed_demo()?;
            tracing::info!(customer_id = %customer_id, "demo data seeded");
        }
        Ok(services)
    }

    /// Demo catalog (two salable products with stock, one disabled) and one
    /// customer with default billing and shipping addresses.
    pub fn seed_demo(&self) -> DomainResult<CustomerId> {
        self.catalog
            .add_with_stock(Product::new(ProductId::new(101), "QO-MUG", "Enamel mug", 1_250), 100);
        self.catalog
            .add_with_stock(Product::new(ProductId::new(102), "QO-TEE", "Logo t-shirt", 2_400), 50);
        self.catalog.add(
            Product::new(ProductId::new(103), "QO-CAP", "Retired cap", 900)
                .with_status(ProductStatus::Disabled),
        );

        let customer = self.directory.save(
            NewCustomer::new(self.store.website_id, self.store.store_id)
                .firstname("Ada")
                .lastname("Lovelace")
                .email("ada@example.com")
                .password(Some(Password::new("ada@example.com"))),
        )?;
        self.directory
            .add_address(customer.id(), demo_address(), true, true)?;
        Ok(customer.id())
    }
}

fn demo_address() -> Address {
    Address {
        id: AddressId::new(0),
        customer_id: None,
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        company: None,
        street: vec!["12 Analytical Row".to_string()],
        city: "London".to_string(),
        region: None,
        postcode: "N1 7AA".to_string(),
        country_id: "GB".to_string(),
        telephone: "020 7946 0000".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickorder_catalog::ProductCatalog;

    #[test]
    fn in_memory_without_seed_is_empty() {
        let services = AppServices::in_memory(&AppConfig::default()).unwrap();
        assert!(services.directory.is_empty());
        assert!(services.catalog.get_by_id(ProductId::new(101)).is_err());
    }

    #[test]
    fn seeded_customer_has_default_addresses() {
        let config = AppConfig {
            seed_demo: true,
            ..AppConfig::default()
        };
        let services = AppServices::in_memory(&config).unwrap();

        let customer = services.directory.get_by_id(CustomerId::new(1)).unwrap();
        assert!(customer.default_billing().is_some());
        assert!(customer.default_shipping().is_some());
        assert_eq!(services.catalog.stock_of(ProductId::new(101)), Some(100));
    }
}
