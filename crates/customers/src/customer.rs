use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quickorder_core::{AddressId, CustomerId, Entity, StoreId, WebsiteId};

/// Account password as handed to the customer directory.
///
/// `Debug` is redacted so the value never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for Password {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// A customer record that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub website_id: WebsiteId,
    pub store_id: StoreId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: Option<Password>,
}

impl NewCustomer {
    pub fn new(website_id: WebsiteId, store_id: StoreId) -> Self {
        Self {
            website_id,
            store_id,
            firstname: String::new(),
            lastname: String::new(),
            email: String::new(),
            password: None,
        }
    }

    pub fn firstname(mut self, value: impl Into<String>) -> Self {
        self.firstname = value.into();
        self
    }

    pub fn lastname(mut self, value: impl Into<String>) -> Self {
        self.lastname = value.into();
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = value.into();
        self
    }

    pub fn password(mut self, value: Option<Password>) -> Self {
        self.password = value;
        self
    }
}

/// A persisted customer account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    website_id: WebsiteId,
    store_id: StoreId,
    firstname: String,
    lastname: String,
    email: String,
    default_billing: Option<AddressId>,
    default_shipping: Option<AddressId>,
    created_at: DateTime<Utc>,
}

impl Customer {
    /// Materialize a persisted record from a new one (directory-side).
    pub fn from_new(id: CustomerId, new: NewCustomer, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            website_id: new.website_id,
            store_id: new.store_id,
            firstname: new.firstname,
            lastname: new.lastname,
            email: new.email,
            default_billing: None,
            default_shipping: None,
            created_at,
        }
    }

    pub fn with_default_billing(mut self, address_id: Option<AddressId>) -> Self {
        self.default_billing = address_id;
        self
    }

    pub fn with_default_shipping(mut self, address_id: Option<AddressId>) -> Self {
        self.default_shipping = address_id;
        self
    }

    pub fn website_id(&self) -> WebsiteId {
        self.website_id
    }

    pub fn store_id(&self) -> StoreId {
        self.store_id
    }

    pub fn firstname(&self) -> &str {
        &self.firstname
    }

    pub fn lastname(&self) -> &str {
        &self.lastname
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn default_billing(&self) -> Option<AddressId> {
        self.default_billing
    }

    pub fn default_shipping(&self) -> Option<AddressId> {
        self.default_shipping
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_debug_is_redacted() {
        let new = NewCustomer::new(WebsiteId::new(1), StoreId::new(1))
            .email("a@b.com")
            .password(Some(Password::new("a@b.com")));

        let rendered = format!("{new:?}");
        assert!(rendered.contains("Password(***)"));
        assert_eq!(rendered.matches("a@b.com").count(), 1);
    }

    #[test]
    fn from_new_starts_without_default_addresses() {
        let new = NewCustomer::new(WebsiteId::new(1), StoreId::new(2))
            .firstname("A")
            .lastname("B")
            .email("a@b.com");
        let customer = Customer::from_new(CustomerId::new(9), new, Utc::now());

        assert_eq!(customer.id(), CustomerId::new(9));
        assert_eq!(customer.store_id(), StoreId::new(2));
        assert_eq!(customer.default_billing(), None);
        assert_eq!(customer.default_shipping(), None);
    }
}
