use crate::modules::payments::core::billing_period::BillingPeriod;
use crate::modules::payments::core::customer::Customer;
use crate::modules::payments::core::order::OrderItem;
use crate::shared::core::primitives::{GatewayIssued, HasReference, TimestampMs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subscription {
    pub reference: String,
    pub customer: Customer,
    pub timestamp: TimestampMs,
    pub period: BillingPeriod,
    pub currency: String,
    pub amount: i64,
    pub items: Vec<OrderItem>,
    pub gateway: Option<String>,
}

impl Subscription {
    pub fn new(
        customer: Customer,
        reference: impl Into<String>,
        timestamp: TimestampMs,
        period: BillingPeriod,
        currency: impl Into<String>,
        amount: i64,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            reference: reference.into(),
            customer,
            timestamp,
            period,
            currency: currency.into(),
            amount,
            items,
            gateway: None,
        }
    }

    pub fn calculate_next_billing_timestamp(&self, from: TimestampMs) -> Option<TimestampMs> {
        self.period.next_billing_after(from)
    }
}

impl HasReference for Subscription {
    fn reference(&self) -> &str {
        &self.reference
    }
}

impl GatewayIssued for Subscription {
    fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    fn set_gateway(&mut self, identifier: &str) {
        self.gateway = Some(identifier.to_string());
    }
}
