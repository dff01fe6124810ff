// End to end flow with a listener that reads back through the gateway while being notified.
//
// Responsibilities
// - Prove that every trigger stores its entity before the dispatcher is called.
// - Walk an order and a subscription through their whole lifecycle.

use crate::modules::payments::adapters::outbound::offsite_gateway::OffsitePaymentGateway;
use crate::modules::payments::core::order::Order;
use crate::modules::payments::core::refund::Refund;
use crate::modules::payments::core::subscription::Subscription;
use crate::modules::payments::core::subscription_events::{
    Cancelation, Change, FailedPayment, Rebill,
};
use crate::modules::payments::ports::dispatcher::EventDispatcher;
use crate::modules::payments::ports::gateway::Gateway;
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::tests::fixtures::{OrderBuilder, SubscriptionBuilder, init_test_tracing};
use rstest::{fixture, rstest};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Billing-side listener: on each notification it looks the entity up again through the gateway.
#[derive(Default)]
struct ReadBackListener {
    seen: Mutex<Vec<String>>,
}

impl ReadBackListener {
    async fn note(&self, line: String) {
        self.seen.lock().await.push(line);
    }
}

#[async_trait::async_trait]
impl EventDispatcher for ReadBackListener {
    async fn on_order_completed(&self, gateway: &dyn Gateway, order: &Order) {
        let stored = gateway.get_order_by_reference(&order.reference).await;
        self.note(format!("completed {} stored={}", order.reference, stored.is_ok()))
            .await;
    }

    async fn on_order_refunded(&self, gateway: &dyn Gateway, order: &Order, refund: &Refund) {
        let stored = gateway.get_refund_by_reference(&refund.reference).await;
        self.note(format!(
            "refunded {} {} stored={}",
            order.reference,
            refund.amount,
            stored.is_ok()
        ))
        .await;
    }

    async fn on_order_partially_refunded(
        &self,
        gateway: &dyn Gateway,
        order: &Order,
        refund: &Refund,
    ) {
        let stored = gateway.get_refund_by_reference(&refund.reference).await;
        self.note(format!(
            "partially refunded {} {} stored={}",
            order.reference,
            refund.amount,
            stored.is_ok()
        ))
        .await;
    }

    async fn on_subscription_activated(&self, gateway: &dyn Gateway, subscription: &Subscription) {
        let stored = gateway
            .get_subscription_by_reference(&subscription.reference)
            .await;
        self.note(format!(
            "activated {} via {:?} stored={}",
            subscription.reference,
            subscription.gateway,
            stored.is_ok()
        ))
        .await;
    }

    async fn on_subscription_rebilled(
        &self,
        gateway: &dyn Gateway,
        subscription: &Subscription,
        rebill: &Rebill,
    ) {
        let stored = gateway
            .get_subscription_by_reference(&subscription.reference)
            .await;
        self.note(format!(
            "rebilled {} next={} stored={}",
            rebill.subscription_reference,
            rebill.next_billing_timestamp,
            stored.is_ok()
        ))
        .await;
    }

    async fn on_subscription_changed(
        &self,
        _gateway: &dyn Gateway,
        _subscription: &Subscription,
        change: &Change,
    ) {
        self.note(format!("changed {}", change.subscription_reference))
            .await;
    }

    async fn on_subscription_deactivated(
        &self,
        _gateway: &dyn Gateway,
        _subscription: &Subscription,
        cancelation: &Cancelation,
    ) {
        self.note(format!("deactivated {}", cancelation.subscription_reference))
            .await;
    }

    async fn on_subscription_payment_failed(
        &self,
        _gateway: &dyn Gateway,
        _subscription: &Subscription,
        failed_payment: &FailedPayment,
    ) {
        self.note(format!("payment failed {}", failed_payment.subscription_reference))
            .await;
    }
}

#[fixture]
fn gateway() -> OffsitePaymentGateway<ReadBackListener> {
    init_test_tracing();
    OffsitePaymentGateway::new(Arc::new(ReadBackListener::default()))
}

#[rstest]
#[tokio::test]
async fn it_should_store_orders_and_refunds_before_notifying(
    gateway: OffsitePaymentGateway<ReadBackListener>,
) {
    let order = OrderBuilder::new().reference("A").total(125).build();
    gateway.trigger_order_completed(order.clone()).await;
    gateway
        .trigger_order_partially_refunded(order.clone(), None, None)
        .await;
    gateway.trigger_order_refunded(order, None).await;

    let seen = gateway.dispatcher().seen.lock().await.clone();
    assert_eq!(
        seen,
        vec![
            "completed A stored=true".to_string(),
            "partially refunded A 200 stored=true".to_string(),
            "refunded A 125 stored=true".to_string(),
        ]
    );
    let refund = gateway.get_refund_by_reference("A-X").await.unwrap();
    assert_eq!(refund.amount, 125);
}

#[rstest]
#[tokio::test]
async fn it_should_walk_a_subscription_through_its_lifecycle(
    gateway: OffsitePaymentGateway<ReadBackListener>,
) {
    let subscription = SubscriptionBuilder::new().reference("S").build();
    gateway
        .trigger_subscription_activated(subscription.clone())
        .await;
    gateway
        .trigger_subscription_rebilled(subscription.clone(), Some(1_000), Some(2_000))
        .await;
    gateway
        .trigger_subscription_changed(subscription.clone(), None)
        .await;
    gateway
        .trigger_subscription_failed_payment(subscription.clone(), None)
        .await;
    gateway
        .trigger_subscription_deactivated(subscription, None)
        .await;

    let seen = gateway.dispatcher().seen.lock().await.clone();
    assert_eq!(
        seen,
        vec![
            "activated S via Some(\"dopg\") stored=true".to_string(),
            "rebilled S next=2000 stored=true".to_string(),
            "changed S".to_string(),
            "payment failed S".to_string(),
            "deactivated S".to_string(),
        ]
    );
    assert_eq!(gateway.subscriptions().len().await, 1);
}
