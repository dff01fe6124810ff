// Refund issued by a gateway against an order.
//
// Notes
// - The reference is derived from the order reference with a fixed suffix, so a second refund of
//   the same order gets the same reference and replaces the first one in the refund store.

use crate::modules::payments::core::order::OrderItem;
use crate::shared::core::primitives::{GatewayIssued, HasReference, TimestampMs};
use serde::{Deserialize, Serialize};

pub const REFUND_REFERENCE_SUFFIX: &str = "-X";

pub fn refund_reference_for(order_reference: &str) -> String {
    format!("{order_reference}{REFUND_REFERENCE_SUFFIX}")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Refund {
    pub reference: String,
    pub order_reference: String,
    pub timestamp: TimestampMs,
    pub amount: i64,
    pub items: Option<Vec<OrderItem>>,
    pub gateway: Option<String>,
}

impl Refund {
    pub fn new(
        reference: impl Into<String>,
        order_reference: impl Into<String>,
        timestamp: TimestampMs,
        amount: i64,
    ) -> Self {
        Self {
            reference: reference.into(),
            order_reference: order_reference.into(),
            timestamp,
            amount,
            items: None,
            gateway: None,
        }
    }

    pub fn set_items(&mut self, items: Vec<OrderItem>) {
        self.items = Some(items);
    }
}

impl HasReference for Refund {
    fn reference(&self) -> &str {
        &self.reference
    }
}

impl GatewayIssued for Refund {
    fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    fn set_gateway(&mut self, identifier: &str) {
        self.gateway = Some(identifier.to_string());
    }
}

#[cfg(test)]
mod refund_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_derive_the_refund_reference_from_the_order() {
        assert_eq!(refund_reference_for("order-0001"), "order-0001-X");
    }

    #[rstest]
    fn it_should_create_a_refund_without_items_or_gateway() {
        let refund = Refund::new("order-0001-X", "order-0001", 1_700_000_000_000, 125);
        assert_eq!(refund.reference(), "order-0001-X");
        assert_eq!(refund.order_reference, "order-0001");
        assert_eq!(refund.amount, 125);
        assert_eq!(refund.items, None);
        assert_eq!(refund.gateway(), None);
    }

    #[rstest]
    fn it_should_record_items_and_issuing_gateway() {
        let mut refund = Refund::new("order-0001-X", "order-0001", 0, 200);
        refund.set_items(vec![OrderItem::new("Seat", 1, 200)]);
        refund.set_gateway("dopg");
        assert_eq!(refund.items.as_ref().map(Vec::len), Some(1));
        assert_eq!(refund.gateway(), Some("dopg"));
    }
}
