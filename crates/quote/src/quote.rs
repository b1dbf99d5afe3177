use serde::{Deserialize, Serialize};

use quickorder_catalog::Product;
use quickorder_core::{
    CartId, CustomerId, DomainError, DomainResult, Entity, Phrase, ProductId, StoreContext,
    StoreId,
};
use quickorder_customers::Customer;

use crate::address::{AddressType, QuoteAddress};
use crate::payment::Payment;

/// Cart line: product snapshot, quantity, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteItem {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    pub qty: u32,
    /// Price in smallest currency unit (e.g., cents).
    pub price: u64,
}

impl QuoteItem {
    pub fn row_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.qty))
    }
}

/// Currency codes of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub base_currency_code: String,
    pub quote_currency_code: String,
}

/// Customer snapshot associated with a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCustomer {
    pub id: CustomerId,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
}

/// Computed cart totals (smallest currency unit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: u64,
    pub shipping_amount: u64,
    pub grand_total: u64,
}

/// Aggregate root: Quote (cart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    id: CartId,
    store: Option<StoreContext>,
    currency: Option<Currency>,
    customer: Option<QuoteCustomer>,
    items: Vec<QuoteItem>,
    billing_address: QuoteAddress,
    shipping_address: QuoteAddress,
    payment_method: Option<String>,
    payment: Payment,
    inventory_processed: bool,
    totals: Totals,
    is_active: bool,
}

impl Quote {
    /// A fresh, empty and active cart.
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            store: None,
            currency: None,
            customer: None,
            items: Vec::new(),
            billing_address: QuoteAddress::new(AddressType::Billing),
            shipping_address: QuoteAddress::new(AddressType::Shipping),
            payment_method: None,
            payment: Payment::default(),
            inventory_processed: false,
            totals: Totals::default(),
            is_active: true,
        }
    }

    pub fn set_store(&mut self, store: &StoreContext) -> &mut Self {
        self.store = Some(store.clone());
        self
    }

    pub fn store_id(&self) -> Option<StoreId> {
        self.store.as_ref().map(|s| s.store_id)
    }

    /// Take the currency codes from the bound store's defaults.
    pub fn set_currency(&mut self) -> DomainResult<()> {
        let store = self
            .store
            .as_ref()
            .ok_or_else(|| DomainError::internal("cart is not bound to a store"))?;

        self.currency = Some(Currency {
            base_currency_code: store.base_currency.clone(),
            quote_currency_code: store.default_currency.clone(),
        });
        Ok(())
    }

    pub fn currency(&self) -> Option<&Currency> {
        self.currency.as_ref()
    }

    pub fn assign_customer(&mut self, customer: &Customer) -> &mut Self {
        self.customer = Some(QuoteCustomer {
            id: customer.id(),
            email: customer.email().to_string(),
            firstname: customer.firstname().to_string(),
            lastname: customer.lastname().to_string(),
        });
        self
    }

    pub fn customer(&self) -> Option<&QuoteCustomer> {
        self.customer.as_ref()
    }

    /// Add `qty` units of a product; repeated products are merged into one line.
    pub fn add_product(&mut self, product: &Product, qty: u32) -> DomainResult<&QuoteItem> {
        if qty == 0 {
            return Err(DomainError::validation(
                "Please specify a quantity greater than zero.",
            ));
        }
        if !product.is_salable() {
            return Err(DomainError::localized(Phrase::new(
                "Product that you are trying to add is not available.",
            )));
        }

        let product_id = product.id();
        let index = match self.items.iter().position(|i| i.product_id == product_id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.qty = item.qty.saturating_add(qty);
                index
            }
            None => {
                self.items.push(QuoteItem {
                    product_id,
                    sku: product.sku().to_string(),
                    name: product.name().to_string(),
                    qty,
                    price: product.price(),
                });
                self.items.len() - 1
            }
        };

        Ok(&self.items[index])
    }

    pub fn items(&self) -> &[QuoteItem] {
        &self.items
    }

    pub fn items_qty(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.qty)).sum()
    }

    pub fn billing_address(&self) -> &QuoteAddress {
        &self.billing_address
    }

    pub fn billing_address_mut(&mut self) -> &mut QuoteAddress {
        &mut self.billing_address
    }

    pub fn shipping_address(&self) -> &QuoteAddress {
        &self.shipping_address
    }

    pub fn shipping_address_mut(&mut self) -> &mut QuoteAddress {
        &mut self.shipping_address
    }

    pub fn set_payment_method(&mut self, code: impl Into<String>) -> &mut Self {
        self.payment_method = Some(code.into());
        self
    }

    pub fn payment_method(&self) -> Option<&str> {
        self.payment_method.as_deref()
    }

    pub fn payment(&self) -> &Payment {
        &self.payment
    }

    pub fn payment_mut(&mut self) -> &mut Payment {
        &mut self.payment
    }

    /// `false` leaves stock deduction to order placement.
    pub fn set_inventory_processed(&mut self, processed: bool) -> &mut Self {
        self.inventory_processed = processed;
        self
    }

    pub fn inventory_processed(&self) -> bool {
        self.inventory_processed
    }

    /// Recompute subtotal, shipping and grand total.
    ///
    /// Shipping is the price of the rate matching the selected shipping method,
    /// or zero when no such rate is attached.
    pub fn collect_totals(&mut self) -> Totals {
        let subtotal = self
            .items
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.row_total()));

        let shipping_amount = self
            .shipping_address
            .shipping_method()
            .and_then(|code| self.shipping_address.shipping_rate_by_code(code))
            .map(|r| r.price)
            .unwrap_or(0);

        self.totals = Totals {
            subtotal,
            shipping_amount,
            grand_total: subtotal.saturating_add(shipping_amount),
        };
        self.totals
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Checks an order can be placed from this cart.
    pub fn validate_for_submission(&self) -> DomainResult<()> {
        if !self.is_active {
            return Err(DomainError::conflict("The cart isn't active."));
        }
        if self.items.is_empty() {
            return Err(DomainError::validation("The cart has no items."));
        }
        if self.customer.is_none() {
            return Err(DomainError::validation(
                "The customer is not assigned to the cart.",
            ));
        }
        if !self.billing_address.is_filled() {
            return Err(DomainError::validation(
                "Please check the billing address information.",
            ));
        }
        if !self.shipping_address.is_filled() {
            return Err(DomainError::validation(
                "Please check the shipping address information.",
            ));
        }
        if self.shipping_address.shipping_method().is_none()
            || self.shipping_address.shipping_rates().is_empty()
        {
            return Err(DomainError::validation(
                "The shipping method is missing. Select the shipping method and try again.",
            ));
        }
        if self.payment.method().is_none() {
            return Err(DomainError::validation(
                "Enter a valid payment method and try again.",
            ));
        }
        Ok(())
    }
}

impl Entity for Quote {
    type Id = CartId;

    fn id(&self) -> CartId {
        self.id
    }
}
