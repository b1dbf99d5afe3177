use serde::{Deserialize, Serialize};

use crate::error::PurchaseError;

/// Result of a purchase as returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    pub errors: bool,
    pub message: String,
}

impl ResponsePayload {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            errors: false,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            errors: true,
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            // Unreachable for a bool and a string.
            Err(_) => String::from(r#"{"errors":true,"message":""}"#),
        }
    }
}

impl From<&PurchaseError> for ResponsePayload {
    fn from(err: &PurchaseError) -> Self {
        Self::failure(err.user_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_errors_and_message_fields() {
        let json = ResponsePayload::success("Order 5 has been created.").to_json();
        assert_eq!(json, r#"{"errors":false,"message":"Order 5 has been created."}"#);
    }
}
