//! Store context: the store view a request is executed against.

use serde::{Deserialize, Serialize};

use crate::id::{StoreId, WebsiteId};

/// Explicit store/website context, passed through every call that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreContext {
    pub store_id: StoreId,
    pub website_id: WebsiteId,
    /// ISO 4217 code of the base currency (e.g. "USD").
    pub base_currency: String,
    /// ISO 4217 code shown to shoppers by default.
    pub default_currency: String,
}

impl StoreContext {
    pub fn new(store_id: StoreId, website_id: WebsiteId, base_currency: impl Into<String>) -> Self {
        let base_currency = base_currency.into();
        Self {
            store_id,
            website_id,
            default_currency: base_currency.clone(),
            base_currency,
        }
    }

    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = code.into();
        self
    }
}

impl Default for StoreContext {
    fn default() -> Self {
        Self::new(StoreId::new(1), WebsiteId::new(1), "USD")
    }
}
