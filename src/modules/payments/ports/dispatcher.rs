// Event dispatcher port: receives one notification per simulated processor event.
//
// Responsibilities
// - Tell listeners which gateway raised the event and hand over the entity and event values.
//
// Testing guidance
// - RecordingDispatcher in the outbound adapters keeps every notification for inspection.

use crate::modules::payments::core::order::Order;
use crate::modules::payments::core::refund::Refund;
use crate::modules::payments::core::subscription::Subscription;
use crate::modules::payments::core::subscription_events::{
    Cancelation, Change, FailedPayment, Rebill,
};
use crate::modules::payments::ports::gateway::Gateway;
use async_trait::async_trait;

#[async_trait]
pub trait EventDispatcher: Send + Sync {
    async fn on_order_completed(&self, gateway: &dyn Gateway, order: &Order);

    async fn on_order_refunded(&self, gateway: &dyn Gateway, order: &Order, refund: &Refund);

    async fn on_order_partially_refunded(
        &self,
        gateway: &dyn Gateway,
        order: &Order,
        refund: &Refund,
    );

    async fn on_subscription_activated(&self, gateway: &dyn Gateway, subscription: &Subscription);

    async fn on_subscription_rebilled(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        rebill: &Rebill,
    );

    async fn on_subscription_changed(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        change: &Change,
    );

    async fn on_subscription_deactivated(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        cancelation: &Cancelation,
    );

    async fn on_subscription_payment_failed(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        failed_payment: &FailedPayment,
    );
}
