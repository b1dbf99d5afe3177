//! Product catalog: the read side the cart needs (product lookup) and the
//! stock port used when an order is placed.

pub mod product;
pub mod stock;

pub use product::{Product, ProductCatalog, ProductStatus, product_not_found};
pub use stock::{StockLine, StockManagement};
