//! Fixed shipping/payment selection and account defaults applied to every
//! purchase.

use serde::{Deserialize, Serialize};

use quickorder_quote::ShippingRate;

pub const DEFAULT_PAYMENT_METHOD: &str = "checkmo";
pub const DEFAULT_SHIPPING_RATE_CODE: &str = "freeshipping_freeshipping";
pub const DEFAULT_SHIPPING_METHOD: &str = "flatrate_flatrate";

/// Initial password given to accounts created by a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitialPassword {
    /// The account password is the customer's email address.
    ///
    /// Anyone who knows the address can sign in; only keep this where the
    /// legacy contract requires it.
    Email,
    /// The account is created without a password (reset flow required).
    None,
}

impl core::str::FromStr for InitialPassword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "none" => Ok(Self::None),
            other => Err(format!("unknown initial password policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchasePolicy {
    /// Code of the rate attached to the shipping address.
    pub shipping_rate_code: String,
    /// Price of that rate, smallest currency unit.
    pub shipping_rate_price: u64,
    /// Shipping method selected on the cart.
    pub shipping_method: String,
    pub payment_method: String,
    pub initial_password: InitialPassword,
}

impl PurchasePolicy {
    pub fn shipping_rate(&self) -> ShippingRate {
        ShippingRate::from_code(self.shipping_rate_code.clone(), self.shipping_rate_price)
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            shipping_rate_code: DEFAULT_SHIPPING_RATE_CODE.to_string(),
            shipping_rate_price: 0,
            shipping_method: DEFAULT_SHIPPING_METHOD.to_string(),
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
            initial_password: InitialPassword::Email,
        }
    }
}
