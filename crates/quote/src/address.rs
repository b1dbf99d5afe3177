use serde::{Deserialize, Serialize};

use quickorder_core::ValueObject;
use quickorder_customers::Address;

/// Which side of the cart an address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    Billing,
    Shipping,
}

/// A shipping rate offered for an address: `<carrier>_<method>` plus price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRate {
    pub code: String,
    pub carrier: String,
    pub method: String,
    /// Price in smallest currency unit.
    pub price: u64,
}

impl ShippingRate {
    /// Build a rate from its full code, e.g. `freeshipping_freeshipping`.
    pub fn from_code(code: impl Into<String>, price: u64) -> Self {
        let code = code.into();
        let (carrier, method) = match code.split_once('_') {
            Some((c, m)) => (c.to_string(), m.to_string()),
            None => (code.clone(), code.clone()),
        };
        Self {
            code,
            carrier,
            method,
            price,
        }
    }
}

impl ValueObject for ShippingRate {}

/// Billing or shipping address attached to a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteAddress {
    address_type: AddressType,
    address: Option<Address>,
    collect_shipping_rates: bool,
    shipping_method: Option<String>,
    shipping_rates: Vec<ShippingRate>,
}

impl QuoteAddress {
    pub fn new(address_type: AddressType) -> Self {
        Self {
            address_type,
            address: None,
            collect_shipping_rates: false,
            shipping_method: None,
            shipping_rates: Vec::new(),
        }
    }

    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// Copy an address-book entry onto this cart address.
    pub fn add_data(&mut self, address: &Address) -> &mut Self {
        self.address = Some(address.clone());
        self
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_filled(&self) -> bool {
        self.address.is_some()
    }

    pub fn set_collect_shipping_rates(&mut self, flag: bool) -> &mut Self {
        self.collect_shipping_rates = flag;
        self
    }

    pub fn collect_shipping_rates_requested(&self) -> bool {
        self.collect_shipping_rates
    }

    /// Refresh the rate list when a collection was requested.
    ///
    /// Carrier rate computation lives outside the cart; collecting drops rates
    /// gathered for a previous state of the address and clears the request.
    pub fn collect_shipping_rates(&mut self) -> &mut Self {
        if self.collect_shipping_rates {
            self.shipping_rates.clear();
            self.collect_shipping_rates = false;
        }
        self
    }

    pub fn set_shipping_method(&mut self, code: impl Into<String>) -> &mut Self {
        self.shipping_method = Some(code.into());
        self
    }

    pub fn shipping_method(&self) -> Option<&str> {
        self.shipping_method.as_deref()
    }

    /// Attach a rate; a rate with the same code is replaced.
    pub fn add_shipping_rate(&mut self, rate: ShippingRate) -> &mut Self {
        self.shipping_rates.retain(|r| r.code != rate.code);
        self.shipping_rates.push(rate);
        self
    }

    pub fn shipping_rates(&self) -> &[ShippingRate] {
        &self.shipping_rates
    }

    pub fn shipping_rate_by_code(&self, code: &str) -> Option<&ShippingRate> {
        self.shipping_rates.iter().find(|r| r.code == code)
    }
}

impl ValueObject for QuoteAddress {}
