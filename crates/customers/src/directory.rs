//! Ports to the host platform's customer subsystem.

use std::sync::Arc;

use quickorder_core::{AddressId, CustomerId, DomainResult};

use crate::{Address, Customer, NewCustomer};

/// Customer accounts, keyed by id.
pub trait CustomerDirectory: Send + Sync {
    /// Fails with `DomainError::NotFound` when no such customer exists.
    fn get_by_id(&self, id: CustomerId) -> DomainResult<Customer>;

    /// Validate and persist a new account, returning the stored record.
    fn save(&self, customer: NewCustomer) -> DomainResult<Customer>;
}

/// Customer address book, keyed by address id.
pub trait AddressDirectory: Send + Sync {
    fn get_by_id(&self, id: AddressId) -> DomainResult<Address>;
}

impl<S> CustomerDirectory for Arc<S>
where
    S: CustomerDirectory + ?Sized,
{
    fn get_by_id(&self, id: CustomerId) -> DomainResult<Customer> {
        (**self).get_by_id(id)
    }

    fn save(&self, customer: NewCustomer) -> DomainResult<Customer> {
        (**self).save(customer)
    }
}

impl<S> AddressDirectory for Arc<S>
where
    S: AddressDirectory + ?Sized,
{
    fn get_by_id(&self, id: AddressId) -> DomainResult<Address> {
        (**self).get_by_id(id)
    }
}
