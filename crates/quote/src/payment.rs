use serde::{Deserialize, Serialize};

use quickorder_core::{DomainError, DomainResult, Phrase};

/// Payment selection of a cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    method: Option<String>,
}

impl Payment {
    /// Import the payment data submitted for the cart (only the method code).
    pub fn import_data(&mut self, method: &str) -> DomainResult<()> {
        let method = method.trim();
        if method.is_empty() {
            return Err(DomainError::localized(Phrase::new(
                "The requested Payment Method is not available.",
            )));
        }
        self.method = Some(method.to_string());
        Ok(())
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_rejects_blank_method() {
        let mut payment = Payment::default();
        let err = payment.import_data("  ").unwrap_err();
        assert_eq!(
            err.phrase().unwrap().raw(),
            "The requested Payment Method is not available."
        );
        assert_eq!(payment.method(), None);

        payment.import_data("checkmo").unwrap();
        assert_eq!(payment.method(), Some("checkmo"));
    }
}
