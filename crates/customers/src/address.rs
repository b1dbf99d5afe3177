use serde::{Deserialize, Serialize};

use quickorder_core::{AddressId, CustomerId, Entity};

/// An address-book entry owned by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub customer_id: Option<CustomerId>,
    pub firstname: String,
    pub lastname: String,
    pub company: Option<String>,
    pub street: Vec<String>,
    pub city: String,
    pub region: Option<String>,
    pub postcode: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_id: String,
    pub telephone: String,
}

impl Entity for Address {
    type Id = AddressId;

    fn id(&self) -> AddressId {
        self.id
    }
}
