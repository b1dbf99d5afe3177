use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quickorder_core::{
    CartId, CustomerId, DomainError, DomainResult, Entity, OrderId, ProductId, StoreId,
};
use quickorder_customers::Address;

use crate::quote::{Quote, Totals};

/// Order line copied from a cart item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub line_no: u32,
    pub product_id: ProductId,
    pub sku: String,
    pub qty: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
    pub row_total: u64,
}

/// Immutable order placed from a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    increment_id: String,
    quote_id: CartId,
    store_id: Option<StoreId>,
    customer_id: CustomerId,
    customer_email: String,
    currency_code: Option<String>,
    lines: Vec<OrderLine>,
    billing_address: Address,
    shipping_address: Address,
    shipping_method: String,
    payment_method: String,
    totals: Totals,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Build an order from a validated cart. The cart is consumed.
    pub fn from_quote(
        id: OrderId,
        increment_id: impl Into<String>,
        quote: Quote,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        quote.validate_for_submission()?;

        let missing = |what: &str| DomainError::internal(format!("validated cart lost its {what}"));

        let customer = quote.customer().ok_or_else(|| missing("customer"))?;
        let billing_address = quote
            .billing_address()
            .address()
            .cloned()
            .ok_or_else(|| missing("billing address"))?;
        let shipping_address = quote
            .shipping_address()
            .address()
            .cloned()
            .ok_or_else(|| missing("shipping address"))?;
        let shipping_method = quote
            .shipping_address()
            .shipping_method()
            .ok_or_else(|| missing("shipping method"))?
            .to_string();
        let payment_method = quote
            .payment()
            .method()
            .ok_or_else(|| missing("payment method"))?
            .to_string();

        let lines = quote
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| OrderLine {
                line_no: (i as u32) + 1,
                product_id: item.product_id,
                sku: item.sku.clone(),
                qty: item.qty,
                price: item.price,
                row_total: item.row_total(),
            })
            .collect();

        Ok(Self {
            id,
            increment_id: increment_id.into(),
            quote_id: quote.id(),
            store_id: quote.store_id(),
            customer_id: customer.id,
            customer_email: customer.email.clone(),
            currency_code: quote.currency().map(|c| c.quote_currency_code.clone()),
            lines,
            billing_address,
            shipping_address,
            shipping_method,
            payment_method,
            totals: quote.totals(),
            created_at,
        })
    }

    pub fn increment_id(&self) -> &str {
        &self.increment_id
    }

    pub fn quote_id(&self) -> CartId {
        self.quote_id
    }

    pub fn store_id(&self) -> Option<StoreId> {
        self.store_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn billing_address(&self) -> &Address {
        &self.billing_address
    }

    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    pub fn shipping_method(&self) -> &str {
        &self.shipping_method
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cart_cannot_become_an_order() {
        let quote = Quote::new(CartId::new(3));
        let err = Order::from_quote(OrderId::new(1), "000000001", quote, Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "The cart has no items.");
    }
}
