// Side events raised for a subscription: rebill, change, cancelation and failed payment.
//
// Purpose
// - Short lived values built by a trigger and handed to the dispatcher. They are never stored.

use crate::shared::core::primitives::{GatewayIssued, TimestampMs};
use serde::{Deserialize, Serialize};

pub trait SubscriptionEvent {
    fn subscription_reference(&self) -> &str;
    fn timestamp(&self) -> TimestampMs;
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rebill {
    pub subscription_reference: String,
    pub timestamp: TimestampMs,
    pub next_billing_timestamp: TimestampMs,
    pub gateway: Option<String>,
}

impl Rebill {
    pub fn new(
        subscription_reference: impl Into<String>,
        timestamp: TimestampMs,
        next_billing_timestamp: TimestampMs,
    ) -> Self {
        Self {
            subscription_reference: subscription_reference.into(),
            timestamp,
            next_billing_timestamp,
            gateway: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Change {
    pub subscription_reference: String,
    pub timestamp: TimestampMs,
    pub gateway: Option<String>,
}

impl Change {
    pub fn new(subscription_reference: impl Into<String>, timestamp: TimestampMs) -> Self {
        Self {
            subscription_reference: subscription_reference.into(),
            timestamp,
            gateway: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cancelation {
    pub subscription_reference: String,
    pub timestamp: TimestampMs,
    pub gateway: Option<String>,
}

impl Cancelation {
    pub fn new(subscription_reference: impl Into<String>, timestamp: TimestampMs) -> Self {
        Self {
            subscription_reference: subscription_reference.into(),
            timestamp,
            gateway: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FailedPayment {
    pub subscription_reference: String,
    pub timestamp: TimestampMs,
    pub gateway: Option<String>,
}

impl FailedPayment {
    pub fn new(subscription_reference: impl Into<String>, timestamp: TimestampMs) -> Self {
        Self {
            subscription_reference: subscription_reference.into(),
            timestamp,
            gateway: None,
        }
    }
}

impl SubscriptionEvent for Rebill {
    fn subscription_reference(&self) -> &str {
        &self.subscription_reference
    }

    fn timestamp(&self) -> TimestampMs {
        self.timestamp
    }
}

impl SubscriptionEvent for Change {
    fn subscription_reference(&self) -> &str {
        &self.subscription_reference
    }

    fn timestamp(&self) -> TimestampMs {
        self.timestamp
    }
}

impl SubscriptionEvent for Cancelation {
    fn subscription_reference(&self) -> &str {
        &self.subscription_reference
    }

    fn timestamp(&self) -> TimestampMs {
        self.timestamp
    }
}

impl SubscriptionEvent for FailedPayment {
    fn subscription_reference(&self) -> &str {
        &self.subscription_reference
    }

    fn timestamp(&self) -> TimestampMs {
        self.timestamp
    }
}

impl GatewayIssued for Rebill {
    fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    fn set_gateway(&mut self, identifier: &str) {
        self.gateway = Some(identifier.to_string());
    }
}

impl GatewayIssued for Change {
    fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    fn set_gateway(&mut self, identifier: &str) {
        self.gateway = Some(identifier.to_string());
    }
}

impl GatewayIssued for Cancelation {
    fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    fn set_gateway(&mut self, identifier: &str) {
        self.gateway = Some(identifier.to_string());
    }
}

impl GatewayIssued for FailedPayment {
    fn gateway(&self) -> Option<&str> {
        self.gateway.as_deref()
    }

    fn set_gateway(&mut self, identifier: &str) {
        self.gateway = Some(identifier.to_string());
    }
}
