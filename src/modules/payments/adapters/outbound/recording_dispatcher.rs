// In memory implementation of the EventDispatcher port.
//
// Purpose
// - Let tests verify which notifications a gateway raised, in order, and with which payloads.
//
// Responsibilities
// - Append one record per notification. Nothing is forwarded anywhere else.

use crate::modules::payments::core::order::Order;
use crate::modules::payments::core::refund::Refund;
use crate::modules::payments::core::subscription::Subscription;
use crate::modules::payments::core::subscription_events::{
    Cancelation, Change, FailedPayment, Rebill, SubscriptionEvent,
};
use crate::modules::payments::ports::dispatcher::EventDispatcher;
use crate::modules::payments::ports::gateway::Gateway;
use crate::shared::core::primitives::{TimestampMs, now_ms};
use serde::Serialize;
use serde_json::{Value, json};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Notification {
    OrderCompleted,
    OrderRefunded,
    OrderPartiallyRefunded,
    SubscriptionActivated,
    SubscriptionRebilled,
    SubscriptionChanged,
    SubscriptionDeactivated,
    SubscriptionPaymentFailed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecord {
    pub event_id: Uuid,
    pub notification: Notification,
    pub gateway: String,
    pub reference: String,
    pub occurred_at: TimestampMs,
    pub payload: Value,
}

#[derive(Default)]
pub struct RecordingDispatcher {
    rows: Mutex<Vec<DispatchRecord>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<DispatchRecord> {
        self.rows.lock().await.clone()
    }

    pub async fn records_for(&self, notification: Notification) -> Vec<DispatchRecord> {
        self.rows
            .lock()
            .await
            .iter()
            .filter(|row| row.notification == notification)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }

    async fn record(
        &self,
        notification: Notification,
        gateway: &dyn Gateway,
        reference: &str,
        occurred_at: TimestampMs,
        payload: Value,
    ) {
        let row = DispatchRecord {
            event_id: Uuid::now_v7(),
            notification,
            gateway: gateway.identifier().to_string(),
            reference: reference.to_string(),
            occurred_at,
            payload,
        };
        tracing::debug!(
            event_id = %row.event_id,
            notification = ?row.notification,
            gateway = %row.gateway,
            reference = %row.reference,
            "notification recorded"
        );
        self.rows.lock().await.push(row);
    }

    async fn record_subscription_event<E>(
        &self,
        notification: Notification,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        event: &E,
    ) where
        E: SubscriptionEvent + Serialize + Sync,
    {
        self.record(
            notification,
            gateway,
            &subscription.reference,
            event.timestamp(),
            payload(subscription, Some(event)),
        )
        .await;
    }
}

fn payload<T: Serialize, E: Serialize>(entity: &T, event: Option<&E>) -> Value {
    json!({ "entity": entity, "event": event })
}

#[async_trait::async_trait]
impl EventDispatcher for RecordingDispatcher {
    async fn on_order_completed(&self, gateway: &dyn Gateway, order: &Order) {
        self.record(
            Notification::OrderCompleted,
            gateway,
            &order.reference,
            now_ms(),
            payload::<Order, Value>(order, None),
        )
        .await;
    }

    async fn on_order_refunded(&self, gateway: &dyn Gateway, order: &Order, refund: &Refund) {
        self.record(
            Notification::OrderRefunded,
            gateway,
            &order.reference,
            refund.timestamp,
            payload(order, Some(refund)),
        )
        .await;
    }

    async fn on_order_partially_refunded(
        &self,
        gateway: &dyn Gateway,
        order: &Order,
        refund: &Refund,
    ) {
        self.record(
            Notification::OrderPartiallyRefunded,
            gateway,
            &order.reference,
            refund.timestamp,
            payload(order, Some(refund)),
        )
        .await;
    }

    async fn on_subscription_activated(&self, gateway: &dyn Gateway, subscription: &Subscription) {
        self.record(
            Notification::SubscriptionActivated,
            gateway,
            &subscription.reference,
            now_ms(),
            payload::<Subscription, Value>(subscription, None),
        )
        .await;
    }

    async fn on_subscription_rebilled(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        rebill: &Rebill,
    ) {
        self.record_subscription_event(
            Notification::SubscriptionRebilled,
            gateway,
            subscription,
            rebill,
        )
        .await;
    }

    async fn on_subscription_changed(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        change: &Change,
    ) {
        self.record_subscription_event(
            Notification::SubscriptionChanged,
            gateway,
            subscription,
            change,
        )
        .await;
    }

    async fn on_subscription_deactivated(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        cancelation: &Cancelation,
    ) {
        self.record_subscription_event(
            Notification::SubscriptionDeactivated,
            gateway,
            subscription,
            cancelation,
        )
        .await;
    }

    async fn on_subscription_payment_failed(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        failed_payment: &FailedPayment,
    ) {
        self.record_subscription_event(
            Notification::SubscriptionPaymentFailed,
            gateway,
            subscription,
            failed_payment,
        )
        .await;
    }
}
