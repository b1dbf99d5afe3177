//! Cart (quote) domain module.
//!
//! A quote is the mutable pre-order aggregate: items, addresses, shipping and
//! payment selection, totals. Submitting it through [`CartManagement`] turns it
//! into an immutable [`Order`].

pub mod address;
pub mod management;
pub mod order;
pub mod payment;
pub mod quote;

pub use address::{AddressType, QuoteAddress, ShippingRate};
pub use management::CartManagement;
pub use order::{Order, OrderLine};
pub use payment::Payment;
pub use quote::{Currency, Quote, QuoteCustomer, QuoteItem, Totals};
