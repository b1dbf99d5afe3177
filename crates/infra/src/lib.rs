//! Infrastructure layer: in-memory implementations of the host platform
//! services (customer directory, catalog and stock, carts and orders).
//!
//! They back the HTTP service in development and the end-to-end tests; a
//! production deployment plugs its own adapters into the same ports.

pub mod carts;
pub mod catalog;
pub mod customers;
pub mod store;

pub use carts::InMemoryCartManagement;
pub use catalog::InMemoryProductCatalog;
pub use customers::InMemoryCustomerDirectory;
pub use store::{IdSequence, InMemoryStore, KeyValueStore};
