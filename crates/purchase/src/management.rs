//! Purchase orchestration.
//!
//! ```text
//! customer data ──► init_customer ──► (lookup | create)
//!                         │
//!                         ▼
//! items data ──► cart: create → load → store/currency/customer
//!                         │
//!                         ▼
//!               add products (qty > 0, truncated)
//!                         │
//!                         ▼
//!               default billing / shipping address
//!                         │
//!                         ▼
//!               fixed shipping rate + method, fixed payment
//!                         │
//!                         ▼
//!               inventory not processed → totals → submit → order id
//! ```
//!
//! Every failure ends the workflow. Nothing is retried and nothing already
//! persisted by a collaborator (a new customer, an empty cart) is rolled back.

use quickorder_catalog::{ProductCatalog, product_not_found};
use quickorder_core::{DomainResult, Entity, OrderId, ProductId, StoreContext};
use quickorder_customers::{
    Address, AddressDirectory, Customer, CustomerDirectory, NewCustomer, Password,
};
use quickorder_quote::{AddressType, CartManagement};

use crate::error::PurchaseError;
use crate::policy::{InitialPassword, PurchasePolicy};
use crate::request::{CustomerData, ItemsData};
use crate::response::ResponsePayload;

/// Creates customers and orders from raw purchase data.
#[derive(Debug)]
pub struct PurchaseManagement<C, A, P, Q> {
    customers: C,
    addresses: A,
    catalog: P,
    carts: Q,
    policy: PurchasePolicy,
}

impl<C, A, P, Q> PurchaseManagement<C, A, P, Q>
where
    C: CustomerDirectory,
    A: AddressDirectory,
    P: ProductCatalog,
    Q: CartManagement,
{
    pub fn new(customers: C, addresses: A, catalog: P, carts: Q) -> Self {
        Self {
            customers,
            addresses,
            catalog,
            carts,
            policy: PurchasePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: PurchasePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &PurchasePolicy {
        &self.policy
    }

    /// Run a purchase and encode the outcome as JSON.
    pub fn post_purchase(
        &self,
        store: &StoreContext,
        customer_data: &CustomerData,
        product_data: &ItemsData,
    ) -> String {
        self.purchase(store, customer_data, product_data).to_json()
    }

    /// Run a purchase. Never fails: every error becomes a payload with
    /// `errors: true`.
    pub fn purchase(
        &self,
        store: &StoreContext,
        customer_data: &CustomerData,
        items: &ItemsData,
    ) -> ResponsePayload {
        let customer = match self.init_customer(store, customer_data) {
            Ok(customer) => customer,
            Err(cause) => {
                let err = PurchaseError::CustomerInit(cause);
                tracing::error!(store_id = %store.store_id, "{err}");
                return ResponsePayload::from(&err);
            }
        };

        match self.place_order(store, &customer, items) {
            Ok(order_id) => ResponsePayload::success(format!("Order {order_id} has been created.")),
            Err(err) => {
                tracing::error!(
                    store_id = %store.store_id,
                    customer_id = %customer.id(),
                    "{err}"
                );
                ResponsePayload::from(&err)
            }
        }
    }

    /// Load the referenced customer, or create one from the request.
    pub fn init_customer(
        &self,
        store: &StoreContext,
        customer_data: &CustomerData,
    ) -> DomainResult<Customer> {
        if let Some(customer_id) = customer_data.existing_customer() {
            return self.customers.get_by_id(customer_id?);
        }

        let password = match self.policy.initial_password {
            InitialPassword::Email => Some(Password::new(customer_data.email.clone())),
            InitialPassword::None => None,
        };

        let customer = NewCustomer::new(store.website_id, store.store_id)
            .firstname(customer_data.shipping_address.firstname.clone())
            .lastname(customer_data.shipping_address.lastname.clone())
            .email(customer_data.email.clone())
            .password(password);

        let customer = self.customers.save(customer)?;
        tracing::info!(customer_id = %customer.id(), website_id = %store.website_id, "customer created");
        Ok(customer)
    }

    fn place_order(
        &self,
        store: &StoreContext,
        customer: &Customer,
        items: &ItemsData,
    ) -> Result<OrderId, PurchaseError> {
        let cart_id = self.carts.create_empty_cart()?;
        let mut quote = self.carts.get(cart_id)?;
        quote.set_store(store);
        quote.set_currency()?;
        quote.assign_customer(customer);

        for (product_key, qty) in items.iter() {
            if !(qty > 0.0) {
                continue;
            }
            let product_id = product_key
                .parse::<ProductId>()
                .map_err(|_| product_not_found())?;
            let product = self.catalog.get_by_id(product_id)?;
            quote.add_product(&product, truncate_qty(qty))?;
        }

        let billing = self.default_address(customer, AddressType::Billing)?;
        quote.billing_address_mut().add_data(&billing);
        let shipping = self.default_address(customer, AddressType::Shipping)?;
        quote.shipping_address_mut().add_data(&shipping);

        quote
            .shipping_address_mut()
            .set_collect_shipping_rates(true)
            .collect_shipping_rates()
            .set_shipping_method(self.policy.shipping_method.clone())
            .add_shipping_rate(self.policy.shipping_rate());
        quote.set_payment_method(self.policy.payment_method.clone());

        quote.set_inventory_processed(false);
        quote.payment_mut().import_data(&self.policy.payment_method)?;

        quote.collect_totals();
        let line_count = quote.items().len();

        let order = self.carts.submit(quote)?;
        tracing::info!(
            order_id = %order.id(),
            cart_id = %cart_id,
            customer_id = %customer.id(),
            lines = line_count,
            grand_total = order.totals().grand_total,
            "order created"
        );
        Ok(order.id())
    }

    fn default_address(
        &self,
        customer: &Customer,
        side: AddressType,
    ) -> Result<Address, PurchaseError> {
        let address_id = match side {
            AddressType::Billing => customer.default_billing(),
            AddressType::Shipping => customer.default_shipping(),
        }
        .ok_or(PurchaseError::MissingDefaultAddress(side))?;

        Ok(self.addresses.get_by_id(address_id)?)
    }
}

/// Drop the fractional part (3.7 → 3), saturating at `u32::MAX`.
fn truncate_qty(qty: f64) -> u32 {
    qty.trunc() as u32
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use quickorder_catalog::Product;
    use quickorder_core::{AddressId, CartId, CustomerId, DomainError};
    use quickorder_infra::{InMemoryCartManagement, InMemoryCustomerDirectory, InMemoryProductCatalog};
    use quickorder_quote::{Order, Quote};

    use crate::error::{
        DEFAULT_BILLING_ADDRESS_ERROR, DEFAULT_SHIPPING_ADDRESS_ERROR, INIT_CUSTOMER_ERROR,
    };
    use crate::request::RawId;

    type Carts = Arc<InMemoryCartManagement<Arc<InMemoryProductCatalog>>>;

    struct Host {
        directory: Arc<InMemoryCustomerDirectory>,
        catalog: Arc<InMemoryProductCatalog>,
        carts: Carts,
    }

    impl Host {
        fn new() -> Self {
            let catalog = Arc::new(InMemoryProductCatalog::new());
            catalog.add(Product::new(ProductId::new(101), "SKU-101", "Mug", 1_250));
            catalog.add(Product::new(ProductId::new(102), "SKU-102", "Tee", 2_000));
            catalog.add(Product::new(ProductId::new(103), "SKU-103", "Cap", 900));
            let carts = Arc::new(InMemoryCartManagement::new(catalog.clone()));
            Self {
                directory: Arc::new(InMemoryCustomerDirectory::new()),
                catalog,
                carts,
            }
        }

        fn orchestrator(
            &self,
        ) -> PurchaseManagement<
            Arc<InMemoryCustomerDirectory>,
            Arc<InMemoryCustomerDirectory>,
            Arc<InMemoryProductCatalog>,
            Carts,
        > {
            PurchaseManagement::new(
                self.directory.clone(),
                self.directory.clone(),
                self.catalog.clone(),
                self.carts.clone(),
            )
        }

        /// Registered customer with the requested default addresses.
        fn customer(&self, email: &str, billing: bool, shipping: bool) -> CustomerId {
            let store = StoreContext::default();
            let customer = self
                .directory
                .save(
                    NewCustomer::new(store.website_id, store.store_id)
                        .firstname("Ada")
                        .lastname("Lovelace")
                        .email(email),
                )
                .unwrap();
            self.directory
                .add_address(customer.id(), address_template(), billing, shipping)
                .unwrap();
            customer.id()
        }

        fn last_order(&self) -> Order {
            self.carts.orders().into_iter().max_by_key(|o| o.id()).unwrap()
        }
    }

    fn address_template() -> Address {
        Address {
            id: AddressId::new(0),
            customer_id: None,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            company: None,
            street: vec!["12 Analytical Row".to_string()],
            city: "London".to_string(),
            region: None,
            postcode: "N1 7AA".to_string(),
            country_id: "GB".to_string(),
            telephone: "020 7946 0000".to_string(),
        }
    }

    fn existing(id: CustomerId) -> CustomerData {
        CustomerData::new("ignored@example.com", "X", "Y")
            .with_customer_id(RawId::Text(id.to_string()))
    }

    /// Directory that provisions default addresses for every account it creates.
    struct ProvisioningDirectory {
        inner: Arc<InMemoryCustomerDirectory>,
        billing: bool,
        shipping: bool,
    }

    impl CustomerDirectory for ProvisioningDirectory {
        fn get_by_id(&self, id: CustomerId) -> DomainResult<Customer> {
            CustomerDirectory::get_by_id(&self.inner, id)
        }

        fn save(&self, customer: NewCustomer) -> DomainResult<Customer> {
            let created = self.inner.save(customer)?;
            self.inner
                .add_address(created.id(), address_template(), self.billing, self.shipping)?;
            CustomerDirectory::get_by_id(&self.inner, created.id())
        }
    }

    /// Directory whose every call fails with the given error.
    struct FailingDirectory(DomainError);

    impl CustomerDirectory for FailingDirectory {
        fn get_by_id(&self, _id: CustomerId) -> DomainResult<Customer> {
            Err(self.0.clone())
        }

        fn save(&self, _customer: NewCustomer) -> DomainResult<Customer> {
            Err(self.0.clone())
        }
    }

    /// Cart service that fails on submission and records whether it was reached.
    struct RejectingCarts {
        inner: Carts,
        error: DomainError,
        submitted: std::sync::Mutex<Vec<Quote>>,
    }

    impl CartManagement for RejectingCarts {
        fn create_empty_cart(&self) -> DomainResult<CartId> {
            self.inner.create_empty_cart()
        }

        fn get(&self, id: CartId) -> DomainResult<Quote> {
            self.inner.get(id)
        }

        fn submit(&self, quote: Quote) -> DomainResult<Order> {
            self.submitted.lock().unwrap().push(quote);
            Err(self.error.clone())
        }
    }

    #[test]
    fn scenario_new_customer_with_default_addresses_places_order() {
        let host = Host::new();
        let directory = ProvisioningDirectory {
            inner: host.directory.clone(),
            billing: true,
            shipping: true,
        };
        let purchase = PurchaseManagement::new(
            directory,
            host.directory.clone(),
            host.catalog.clone(),
            host.carts.clone(),
        );

        let customer = CustomerData::new("a@b.com", "A", "B");
        let items = ItemsData::new().with(101, 2.0).with(102, 0.0);
        let response = purchase.purchase(&StoreContext::default(), &customer, &items);

        let order = host.last_order();
        assert_eq!(
            response,
            ResponsePayload::success(format!("Order {} has been created.", order.id()))
        );
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].product_id, ProductId::new(101));
        assert_eq!(order.lines()[0].qty, 2);
        assert_eq!(order.shipping_method(), "flatrate_flatrate");
        assert_eq!(order.payment_method(), "checkmo");
        assert_eq!(order.totals().subtotal, 2_500);
        assert_eq!(order.totals().shipping_amount, 0);
    }

    #[test]
    fn scenario_new_customer_without_default_shipping_fails() {
        let host = Host::new();
        let directory = ProvisioningDirectory {
            inner: host.directory.clone(),
            billing: true,
            shipping: false,
        };
        let purchase = PurchaseManagement::new(
            directory,
            host.directory.clone(),
            host.catalog.clone(),
            host.carts.clone(),
        );

        let customer = CustomerData::new("a@b.com", "A", "B");
        let items = ItemsData::new().with(101, 2.0).with(102, 0.0);
        let response = purchase.purchase(&StoreContext::default(), &customer, &items);

        assert_eq!(response, ResponsePayload::failure(DEFAULT_SHIPPING_ADDRESS_ERROR));
        assert!(host.carts.orders().is_empty());
    }

    #[test]
    fn existing_customer_is_not_created_again() {
        let host = Host::new();
        let id = host.customer("ada@example.com", true, true);
        let before = host.directory.len();

        let response = host.orchestrator().purchase(
            &StoreContext::default(),
            &existing(id),
            &ItemsData::new().with(103, 1.0),
        );

        assert!(!response.errors, "{}", response.message);
        assert_eq!(host.directory.len(), before);
        assert_eq!(host.last_order().customer_id(), id);
        assert_eq!(host.last_order().customer_email(), "ada@example.com");
    }

    #[test]
    fn new_customer_gets_email_as_password_by_default() {
        let host = Host::new();
        let store = StoreContext::default();
        let customer = host
            .orchestrator()
            .init_customer(&store, &CustomerData::new("new@example.com", "New", "Buyer"))
            .unwrap();

        assert_eq!(customer.firstname(), "New");
        assert_eq!(customer.lastname(), "Buyer");
        assert_eq!(customer.website_id(), store.website_id);
        assert_eq!(
            host.directory.password_for(customer.id()).unwrap().expose(),
            "new@example.com"
        );
    }

    #[test]
    fn password_policy_none_creates_account_without_password() {
        let host = Host::new();
        let policy = PurchasePolicy {
            initial_password: InitialPassword::None,
            ..PurchasePolicy::default()
        };
        let customer = host
            .orchestrator()
            .with_policy(policy)
            .init_customer(
                &StoreContext::default(),
                &CustomerData::new("new@example.com", "New", "Buyer"),
            )
            .unwrap();

        assert!(host.directory.password_for(customer.id()).is_none());
    }

    #[test]
    fn new_customer_from_plain_directory_has_no_billing_address() {
        let host = Host::new();
        let response = host.orchestrator().purchase(
            &StoreContext::default(),
            &CustomerData::new("a@b.com", "A", "B"),
            &ItemsData::new().with(101, 1.0),
        );

        assert_eq!(response, ResponsePayload::failure(DEFAULT_BILLING_ADDRESS_ERROR));
        assert_eq!(host.directory.len(), 1);
    }

    #[test]
    fn missing_billing_wins_over_missing_shipping() {
        let host = Host::new();
        let id = host.customer("ada@example.com", false, false);

        let response = host.orchestrator().purchase(
            &StoreContext::default(),
            &existing(id),
            &ItemsData::new().with(101, 1.0),
        );

        assert_eq!(response, ResponsePayload::failure(DEFAULT_BILLING_ADDRESS_ERROR));
        assert!(host.carts.orders().is_empty());
    }

    #[test]
    fn missing_billing_address_never_reaches_submission() {
        let host = Host::new();
        let id = host.customer("ada@example.com", false, true);
        let carts = Arc::new(RejectingCarts {
            inner: host.carts.clone(),
            error: DomainError::internal("should not be called"),
            submitted: std::sync::Mutex::new(Vec::new()),
        });
        let purchase = PurchaseManagement::new(
            host.directory.clone(),
            host.directory.clone(),
            host.catalog.clone(),
            carts.clone(),
        );

        let response = purchase.purchase(
            &StoreContext::default(),
            &existing(id),
            &ItemsData::new().with(101, 1.0),
        );

        assert_eq!(response, ResponsePayload::failure(DEFAULT_BILLING_ADDRESS_ERROR));
        assert!(carts.submitted.lock().unwrap().is_empty());
    }

    #[test]
    fn customer_init_failures_collapse_to_generic_message() {
        let causes = [
            DomainError::internal("connection refused"),
            DomainError::no_such_entity("customerId", 99),
            DomainError::conflict("duplicate email"),
            DomainError::validation("\"firstname\" is a required value."),
        ];

        for cause in causes {
            let host = Host::new();
            let purchase = PurchaseManagement::new(
                FailingDirectory(cause.clone()),
                host.directory.clone(),
                host.catalog.clone(),
                host.carts.clone(),
            );

            for data in [
                CustomerData::new("a@b.com", "A", "B"),
                existing(CustomerId::new(99)),
            ] {
                let response = purchase.purchase(
                    &StoreContext::default(),
                    &data,
                    &ItemsData::new().with(101, 1.0),
                );
                assert_eq!(response, ResponsePayload::failure(INIT_CUSTOMER_ERROR), "{cause}");
            }
        }
    }

    #[test]
    fn unknown_or_malformed_customer_id_fails_customer_init() {
        let host = Host::new();
        for raw in [RawId::Text("999".into()), RawId::Text("abc".into())] {
            let data = CustomerData::new("a@b.com", "A", "B").with_customer_id(raw);
            let response = host.orchestrator().purchase(
                &StoreContext::default(),
                &data,
                &ItemsData::new().with(101, 1.0),
            );
            assert_eq!(response, ResponsePayload::failure(INIT_CUSTOMER_ERROR));
        }
        assert_eq!(host.directory.len(), 0);
    }

    #[test]
    fn quantities_are_truncated() {
        let host = Host::new();
        let id = host.customer("ada@example.com", true, true);

        let response = host.orchestrator().purchase(
            &StoreContext::default(),
            &existing(id),
            &ItemsData::new().with(101, 3.7).with(102, -4.0),
        );

        assert!(!response.errors, "{}", response.message);
        let order = host.last_order();
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].qty, 3);
    }

    #[test]
    fn unknown_product_surfaces_catalog_phrase() {
        let host = Host::new();
        let id = host.customer("ada@example.com", true, true);

        for key in ["555", "not-a-number"] {
            let response = host.orchestrator().purchase(
                &StoreContext::default(),
                &existing(id),
                &ItemsData::new().with(101, 1.0).with(key, 1.0),
            );
            assert_eq!(
                response,
                ResponsePayload::failure(
                    "The product that was requested doesn't exist. Verify the product and try again."
                )
            );
        }
        assert!(host.carts.orders().is_empty());
    }

    #[test]
    fn all_zero_quantities_fail_at_submission() {
        let host = Host::new();
        let id = host.customer("ada@example.com", true, true);

        let response = host.orchestrator().purchase(
            &StoreContext::default(),
            &existing(id),
            &ItemsData::new().with(101, 0.0).with(102, -1.0),
        );

        assert_eq!(response, ResponsePayload::failure("The cart has no items."));
    }

    #[test]
    fn repeated_product_takes_last_quantity() {
        let host = Host::new();
        let id = host.customer("ada@example.com", true, true);

        let items: ItemsData = serde_json::from_str(r#"{"101": 2, "101": 0}"#).unwrap();
        let response = host
            .orchestrator()
            .purchase(&StoreContext::default(), &existing(id), &items);
        assert_eq!(response, ResponsePayload::failure("The cart has no items."));
        assert!(host.carts.orders().is_empty());

        let items: ItemsData = serde_json::from_str(r#"{"101": 2, "102": 1, "101": 5}"#).unwrap();
        let response = host
            .orchestrator()
            .purchase(&StoreContext::default(), &existing(id), &items);
        assert!(!response.errors, "{}", response.message);
        let order = host.last_order();
        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.lines()[0].product_id, ProductId::new(101));
        assert_eq!(order.lines()[0].qty, 5);
    }

    #[test]
    fn blank_customer_id_fails_customer_init_without_creating_account() {
        let host = Host::new();
        host.customer("ada@example.com", true, true);

        for raw in ["  ", " 0"] {
            let data = CustomerData::new("new@example.com", "A", "B")
                .with_customer_id(RawId::Text(raw.to_string()));
            let response = host.orchestrator().purchase(
                &StoreContext::default(),
                &data,
                &ItemsData::new().with(101, 1.0),
            );
            assert_eq!(response, ResponsePayload::failure(INIT_CUSTOMER_ERROR), "{raw:?}");
        }
        assert_eq!(host.directory.len(), 1);
    }

    #[test]
    fn submission_errors_pass_through() {
        let host = Host::new();
        let id = host.customer("ada@example.com", true, true);

        let localized = DomainError::not_found(
            quickorder_core::Phrase::new("Product %1 is out of stock.").arg("1", "SKU-101"),
        );
        let cases = [
            (localized, "Product %1 is out of stock."),
            (DomainError::internal("SQLSTATE[HY000]: deadlock"), "SQLSTATE[HY000]: deadlock"),
        ];

        for (error, expected) in cases {
            let carts = Arc::new(RejectingCarts {
                inner: host.carts.clone(),
                error,
                submitted: std::sync::Mutex::new(Vec::new()),
            });
            let purchase = PurchaseManagement::new(
                host.directory.clone(),
                host.directory.clone(),
                host.catalog.clone(),
                carts.clone(),
            );

            let response = purchase.purchase(
                &StoreContext::default(),
                &existing(id),
                &ItemsData::new().with(101, 1.0),
            );
            assert_eq!(response, ResponsePayload::failure(expected));

            let submitted = carts.submitted.lock().unwrap();
            assert_eq!(submitted.len(), 1);
            let quote = &submitted[0];
            assert!(!quote.inventory_processed());
            assert_eq!(quote.payment().method(), Some("checkmo"));
            assert_eq!(quote.payment_method(), Some("checkmo"));
            assert_eq!(quote.shipping_address().shipping_method(), Some("flatrate_flatrate"));
            assert_eq!(quote.shipping_address().shipping_rates().len(), 1);
            assert_eq!(
                quote.shipping_address().shipping_rates()[0].code,
                "freeshipping_freeshipping"
            );
            assert_eq!(quote.currency().unwrap().base_currency_code, "USD");
            assert_eq!(quote.customer().unwrap().id, id);
        }
    }

    #[test]
    fn custom_policy_overrides_shipping_and_payment() {
        let host = Host::new();
        let id = host.customer("ada@example.com", true, true);
        let policy = PurchasePolicy {
            shipping_rate_code: "flatrate_flatrate".to_string(),
            shipping_rate_price: 500,
            shipping_method: "flatrate_flatrate".to_string(),
            payment_method: "banktransfer".to_string(),
            ..PurchasePolicy::default()
        };

        let response = host.orchestrator().with_policy(policy).purchase(
            &StoreContext::default(),
            &existing(id),
            &ItemsData::new().with(103, 2.0),
        );

        assert!(!response.errors, "{}", response.message);
        let order = host.last_order();
        assert_eq!(order.payment_method(), "banktransfer");
        assert_eq!(order.totals().shipping_amount, 500);
        assert_eq!(order.totals().grand_total, 2_300);
    }

    #[test]
    fn post_purchase_encodes_payload_as_json() {
        let host = Host::new();
        let id = host.customer("ada@example.com", true, true);

        let json = host.orchestrator().post_purchase(
            &StoreContext::default(),
            &existing(id),
            &ItemsData::new().with(101, 1.0),
        );

        let payload: ResponsePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(
            payload,
            ResponsePayload::success(format!("Order {} has been created.", host.last_order().id()))
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 64,
                ..ProptestConfig::default()
            })]

            /// Property: one order line per entry with a positive quantity.
            #[test]
            fn line_count_matches_positive_quantities(
                qtys in prop::collection::vec(-5i32..6, 3)
            ) {
                let host = Host::new();
                let id = host.customer("ada@example.com", true, true);

                let items: ItemsData = [101u64, 102, 103]
                    .iter()
                    .zip(&qtys)
                    .map(|(pid, qty)| (pid, f64::from(*qty)))
                    .collect();
                let expected = qtys.iter().filter(|q| **q > 0).count();

                let response = host.orchestrator().purchase(
                    &StoreContext::default(),
                    &existing(id),
                    &items,
                );

                if expected == 0 {
                    prop_assert!(response.errors);
                } else {
                    prop_assert!(!response.errors, "{}", response.message);
                    let order = host.last_order();
                    prop_assert_eq!(order.lines().len(), expected);
                    for line in order.lines() {
                        let pos = [101u64, 102, 103]
                            .iter()
                            .position(|p| ProductId::new(*p) == line.product_id)
                            .unwrap();
                        prop_assert_eq!(i64::from(line.qty), i64::from(qtys[pos]));
                    }
                }
            }

            /// Property: fractional quantities are truncated toward zero.
            #[test]
            fn fractional_quantities_truncate(whole in 1u32..1_000, frac in 0.0f64..0.999) {
                prop_assert_eq!(truncate_qty(f64::from(whole) + frac), whole);
            }
        }
    }
}
