use std::sync::Arc;

use quickorder_core::{DomainResult, ProductId};

/// One stock movement request: `qty` units of `product_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLine {
    pub product_id: ProductId,
    pub qty: u32,
}

/// Stock deduction port, used by order placement.
pub trait StockManagement: Send + Sync {
    /// Deduct every line or none of them.
    ///
    /// Fails with a localized error when any line exceeds the available
    /// quantity.
    fn deduct(&self, lines: &[StockLine]) -> DomainResult<()>;
}

impl<S> StockManagement for Arc<S>
where
    S: StockManagement + ?Sized,
{
    fn deduct(&self, lines: &[StockLine]) -> DomainResult<()> {
        (**self).deduct(lines)
    }
}
