use crate::shared::core::primitives::HasReference;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentMethod {
    pub reference: String,
    pub customer_id: String,
}

impl PaymentMethod {
    pub fn new(reference: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            customer_id: customer_id.into(),
        }
    }
}

impl HasReference for PaymentMethod {
    fn reference(&self) -> &str {
        &self.reference
    }
}
