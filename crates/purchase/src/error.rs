use thiserror::Error;

use quickorder_core::{DomainError, Phrase};
use quickorder_quote::AddressType;

pub const INIT_CUSTOMER_ERROR: &str =
    "Internal error, unable to init customer, please, try again.";
pub const DEFAULT_BILLING_ADDRESS_ERROR: &str = "Default billing address is not set.";
pub const DEFAULT_SHIPPING_ADDRESS_ERROR: &str = "Default shipping address is not set.";

/// Why a purchase did not produce an order.
///
/// `Display` is the message written to the log; [`PurchaseError::user_message`]
/// is what the caller gets back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// Customer lookup or creation failed. The cause is only logged.
    #[error("unable to init customer: {0}")]
    CustomerInit(DomainError),

    /// The customer has no default address for the given side.
    #[error("{}", missing_address_message(.0))]
    MissingDefaultAddress(AddressType),

    /// A human-readable failure raised by the cart/order services.
    #[error("{0}")]
    Localized(Phrase),

    /// Any other failure while building or submitting the cart.
    #[error("{0}")]
    Unclassified(String),
}

fn missing_address_message(side: &AddressType) -> &'static str {
    match side {
        AddressType::Billing => DEFAULT_BILLING_ADDRESS_ERROR,
        AddressType::Shipping => DEFAULT_SHIPPING_ADDRESS_ERROR,
    }
}

impl PurchaseError {
    pub fn user_message(&self) -> String {
        match self {
            Self::CustomerInit(_) => INIT_CUSTOMER_ERROR.to_string(),
            Self::MissingDefaultAddress(side) => missing_address_message(side).to_string(),
            // Raw template, placeholders are not substituted.
            Self::Localized(phrase) => phrase.raw().to_string(),
            Self::Unclassified(msg) => msg.clone(),
        }
    }
}

impl From<DomainError> for PurchaseError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Internal(msg) => Self::Unclassified(msg),
            DomainError::Validation(p)
            | DomainError::NotFound(p)
            | DomainError::Conflict(p)
            | DomainError::Localized(p) => Self::Localized(p),
        }
    }
}
