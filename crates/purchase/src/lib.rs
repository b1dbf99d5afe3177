//! Purchase orchestration: create a customer (or reuse one) and place an
//! order for a list of products in a single call.
//!
//! The orchestrator owns no data. Customers, products, carts and orders all
//! live in the host platform and are reached through the ports declared in
//! the domain crates.

pub mod error;
pub mod management;
pub mod policy;
pub mod request;
pub mod response;

pub use error::{
    DEFAULT_BILLING_ADDRESS_ERROR, DEFAULT_SHIPPING_ADDRESS_ERROR, INIT_CUSTOMER_ERROR,
    PurchaseError,
};
pub use management::PurchaseManagement;
pub use policy::{InitialPassword, PurchasePolicy};
pub use request::{CustomerData, ItemsData, RawId, ShippingName};
pub use response::ResponsePayload;
