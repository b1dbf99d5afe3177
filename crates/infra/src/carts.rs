use chrono::Utc;

use quickorder_catalog::{StockLine, StockManagement};
use quickorder_core::{CartId, DomainError, DomainResult, Entity, OrderId};
use quickorder_quote::{CartManagement, Order, Quote};

use crate::store::{IdSequence, InMemoryStore, KeyValueStore};

/// In-memory carts and order placement.
///
/// Submission validates the cart, deducts stock when the cart's inventory was
/// not processed yet, stores the order and deactivates the cart.
#[derive(Debug)]
pub struct InMemoryCartManagement<S> {
    quotes: InMemoryStore<CartId, Quote>,
    orders: InMemoryStore<OrderId, Order>,
    cart_ids: IdSequence,
    order_ids: IdSequence,
    stock: S,
}

impl<S> InMemoryCartManagement<S>
where
    S: StockManagement,
{
    pub fn new(stock: S) -> Self {
        Self {
            quotes: InMemoryStore::new(),
            orders: InMemoryStore::new(),
            cart_ids: IdSequence::new(),
            order_ids: IdSequence::new(),
            stock,
        }
    }

    pub fn order(&self, id: OrderId) -> Option<Order> {
        self.orders.get(&id)
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.list()
    }

    pub fn quotes(&self) -> Vec<Quote> {
        self.quotes.list()
    }
}

impl<S> CartManagement for InMemoryCartManagement<S>
where
    S: StockManagement,
{
    fn create_empty_cart(&self) -> DomainResult<CartId> {
        let id = CartId::new(self.cart_ids.next());
        self.quotes.upsert(id, Quote::new(id));
        Ok(id)
    }

    fn get(&self, id: CartId) -> DomainResult<Quote> {
        self.quotes
            .get(&id)
            .ok_or_else(|| DomainError::no_such_entity(CartId::FIELD, id))
    }

    fn submit(&self, quote: Quote) -> DomainResult<Order> {
        let cart_id = quote.id();
        // The stored cart stays write-locked until it is deactivated, so a
        // cart yields at most one order.
        let placed = self.quotes.update(&cart_id, |stored| -> DomainResult<Order> {
            if !stored.is_active() {
                return Err(DomainError::conflict("The cart isn't active."));
            }
            quote.validate_for_submission()?;

            if !quote.inventory_processed() {
                let lines: Vec<StockLine> = quote
                    .items()
                    .iter()
                    .map(|i| StockLine {
                        product_id: i.product_id,
                        qty: i.qty,
                    })
                    .collect();
                self.stock.deduct(&lines)?;
            }

            let mut submitted = quote.clone();
            submitted.set_inventory_processed(true);
            submitted.deactivate();

            let order_id = OrderId::new(self.order_ids.next());
            let increment_id = format!("{:09}", order_id.get());
            let order = Order::from_quote(order_id, increment_id, quote, Utc::now())?;

            *stored = submitted;
            self.orders.upsert(order_id, order.clone());
            Ok(order)
        });

        let order = placed
            .unwrap_or_else(|| Err(DomainError::no_such_entity(CartId::FIELD, cart_id)))?;
        tracing::debug!(order_id = %order.id(), increment_id = order.increment_id(), "order stored");
        Ok(order)
    }
}
