// Order and order item as seen by the gateway.
//
// Purpose
// - Carry what the gateway needs from an order: its reference, the buyer and the total to refund.
//
// Notes
// - Amounts are integers in the order currency; the gateway never converts them.

use crate::modules::payments::core::customer::Customer;
use crate::shared::core::primitives::{HasReference, TimestampMs};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub description: String,
    pub quantity: u32,
    pub unit_cost: i64,
}

impl OrderItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_cost: i64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_cost,
        }
    }

    pub fn total(&self) -> i64 {
        i64::from(self.quantity) * self.unit_cost
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub reference: String,
    pub customer: Customer,
    pub timestamp: TimestampMs,
    pub currency: String,
    pub total: i64,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        reference: impl Into<String>,
        customer: Customer,
        timestamp: TimestampMs,
        currency: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Self {
        let total = items.iter().map(OrderItem::total).sum();
        Self {
            reference: reference.into(),
            customer,
            timestamp,
            currency: currency.into(),
            total,
            items,
        }
    }

    /// Override the computed total, for orders that carry discounts or taxes.
    pub fn with_total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }
}

impl HasReference for Order {
    fn reference(&self) -> &str {
        &self.reference
    }
}
