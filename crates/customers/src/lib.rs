//! Customer accounts and address book.
//!
//! Pure domain types plus the directory ports the host platform implements.

pub mod address;
pub mod customer;
pub mod directory;

pub use address::Address;
pub use customer::{Customer, NewCustomer, Password};
pub use directory::{AddressDirectory, CustomerDirectory};
