//! Cart lifecycle port: create, load, submit.

use std::sync::Arc;

use quickorder_core::{CartId, DomainResult};

use crate::order::Order;
use crate::quote::Quote;

/// Cart lifecycle service of the host platform.
pub trait CartManagement: Send + Sync {
    /// Create an empty cart and return its id.
    fn create_empty_cart(&self) -> DomainResult<CartId>;

    /// Load a cart by id.
    fn get(&self, id: CartId) -> DomainResult<Quote>;

    /// Place an order from the cart.
    ///
    /// The cart is consumed; whatever the outcome, the caller no longer owns it.
    fn submit(&self, quote: Quote) -> DomainResult<Order>;
}

impl<S> CartManagement for Arc<S>
where
    S: CartManagement + ?Sized,
{
    fn create_empty_cart(&self) -> DomainResult<CartId> {
        (**self).create_empty_cart()
    }

    fn get(&self, id: CartId) -> DomainResult<Quote> {
        (**self).get(id)
    }

    fn submit(&self, quote: Quote) -> DomainResult<Order> {
        (**self).submit(quote)
    }
}
