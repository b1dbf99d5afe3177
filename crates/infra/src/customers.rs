use chrono::Utc;

use quickorder_core::{AddressId, CustomerId, DomainError, DomainResult, Entity, Phrase};
use quickorder_customers::{Address, AddressDirectory, Customer, CustomerDirectory, NewCustomer, Password};

use crate::store::{IdSequence, InMemoryStore, KeyValueStore};

/// In-memory customer accounts and address book.
#[derive(Debug, Default)]
pub struct InMemoryCustomerDirectory {
    customers: InMemoryStore<CustomerId, Customer>,
    passwords: InMemoryStore<CustomerId, Password>,
    addresses: InMemoryStore<AddressId, Address>,
    customer_ids: IdSequence,
    address_ids: IdSequence,
}

impl InMemoryCustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored customer accounts.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Password the account was created with, if any.
    pub fn password_for(&self, id: CustomerId) -> Option<Password> {
        self.passwords.get(&id)
    }

    /// Add an address to a customer's address book, optionally making it the
    /// default billing and/or shipping address. The template's id and owner
    /// are replaced.
    pub fn add_address(
        &self,
        customer_id: CustomerId,
        mut address: Address,
        default_billing: bool,
        default_shipping: bool,
    ) -> DomainResult<AddressId> {
        if self.customers.get(&customer_id).is_none() {
            return Err(DomainError::no_such_entity(CustomerId::FIELD, customer_id));
        }

        let address_id = AddressId::new(self.address_ids.next());
        address.id = address_id;
        address.customer_id = Some(customer_id);
        self.addresses.upsert(address_id, address);

        self.customers.update(&customer_id, |customer| {
            let mut updated = customer.clone();
            if default_billing {
                updated = updated.with_default_billing(Some(address_id));
            }
            if default_shipping {
                updated = updated.with_default_shipping(Some(address_id));
            }
            *customer = updated;
        });

        Ok(address_id)
    }

}

fn required(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(
            Phrase::new("\"%fieldName\" is a required value.").arg("fieldName", field),
        ));
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl CustomerDirectory for InMemoryCustomerDirectory {
    fn get_by_id(&self, id: CustomerId) -> DomainResult<Customer> {
        self.customers
            .get(&id)
            .ok_or_else(|| DomainError::no_such_entity(CustomerId::FIELD, id))
    }

    fn save(&self, customer: NewCustomer) -> DomainResult<Customer> {
        required("firstname", &customer.firstname)?;
        required("lastname", &customer.lastname)?;
        required("email", &customer.email)?;
        if !looks_like_email(&customer.email) {
            return Err(DomainError::Validation(
                Phrase::new("Invalid value of \"%value\" provided for the %fieldName field.")
                    .arg("value", &customer.email)
                    .arg("fieldName", "email"),
            ));
        }

        let website_id = customer.website_id;
        let email = customer.email.clone();
        let password = customer.password.clone();

        let mut stored = None;
        let inserted = self.customers.insert_unless(
            |c| c.website_id() == website_id && c.email().eq_ignore_ascii_case(&email),
            || {
                let id = CustomerId::new(self.customer_ids.next());
                let customer = Customer::from_new(id, customer, Utc::now());
                stored = Some(customer.clone());
                (id, customer)
            },
        );

        let stored = match (inserted, stored) {
            (Some(true), Some(stored)) => stored,
            (Some(false), _) => {
                return Err(DomainError::conflict(
                    "A customer with the same email address already exists in an associated website.",
                ));
            }
            _ => return Err(DomainError::internal("customer registry lock poisoned")),
        };
        let id = stored.id();

        if let Some(password) = password {
            self.passwords.upsert(id, password);
        }
        tracing::debug!(customer_id = %stored.id(), "customer account stored");
        Ok(stored)
    }
}

impl AddressDirectory for InMemoryCustomerDirectory {
    fn get_by_id(&self, id: AddressId) -> DomainResult<Address> {
        self.addresses
            .get(&id)
            .ok_or_else(|| DomainError::no_such_entity(AddressId::FIELD, id))
    }
}
