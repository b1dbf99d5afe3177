//! `quickorder-core` — shared building blocks for the storefront domain crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! identifiers, the platform error model, store context and the entity/value
//! object markers.

pub mod entity;
pub mod error;
pub mod id;
pub mod store;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, Phrase};
pub use id::{AddressId, CartId, CustomerId, OrderId, ProductId, StoreId, WebsiteId};
pub use store::StoreContext;
pub use value_object::ValueObject;
