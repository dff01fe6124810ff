// Dummy offsite payment gateway.
//
// Purpose
// - Stand in for a payment processor integration so billing code can be exercised in tests
//   without network calls.
//
// Responsibilities
// - Answer the Gateway contract from in-memory stores and canned values.
// - Simulate processor events through trigger methods: upsert the entity, then notify the
//   dispatcher exactly once with this gateway as the origin.
//
// Boundaries
// - No network, no persistence, no retries. Payment methods are not supported.

use crate::config::GatewayConfig;
use crate::modules::payments::core::billing_period::BillingPeriod;
use crate::modules::payments::core::customer::Customer;
use crate::modules::payments::core::order::{Order, OrderItem};
use crate::modules::payments::core::payment_method::PaymentMethod;
use crate::modules::payments::core::refund::{Refund, refund_reference_for};
use crate::modules::payments::core::subscription::Subscription;
use crate::modules::payments::core::subscription_events::{
    Cancelation, Change, FailedPayment, Rebill,
};
use crate::modules::payments::ports::dispatcher::EventDispatcher;
use crate::modules::payments::ports::errors::{EntityKind, GatewayError};
use crate::modules::payments::ports::gateway::Gateway;
use crate::shared::core::primitives::{GatewayIssued, HasReference, TimestampMs, now_ms};
use crate::shared::infrastructure::entity_store::EntityStore;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

pub const CANNED_SUBSCRIPTION_REFERENCE: &str = "2016-02-03";
pub const CANNED_SUBSCRIPTION_CURRENCY: &str = "USD";
pub const CANNED_SUBSCRIPTION_AMOUNT: i64 = 200;
pub const PARTIAL_REFUND_AMOUNT: i64 = 200;

#[derive(Clone)]
pub struct GatewayStores {
    pub orders: Arc<dyn EntityStore<Order>>,
    pub refunds: Arc<dyn EntityStore<Refund>>,
    pub subscriptions: Arc<dyn EntityStore<Subscription>>,
}

impl GatewayStores {
    pub fn in_memory() -> Self {
        Self {
            orders: Arc::new(InMemoryEntityStore::<Order>::new()),
            refunds: Arc::new(InMemoryEntityStore::<Refund>::new()),
            subscriptions: Arc::new(InMemoryEntityStore::<Subscription>::new()),
        }
    }
}

impl Default for GatewayStores {
    fn default() -> Self {
        Self::in_memory()
    }
}

pub struct OffsitePaymentGateway<TDispatcher>
where
    TDispatcher: EventDispatcher + 'static,
{
    config: GatewayConfig,
    dispatcher: Arc<TDispatcher>,
    stores: GatewayStores,
}

impl<TDispatcher> OffsitePaymentGateway<TDispatcher>
where
    TDispatcher: EventDispatcher + 'static,
{
    pub fn new(dispatcher: Arc<TDispatcher>) -> Self {
        Self::with_stores(GatewayConfig::default(), dispatcher, GatewayStores::in_memory())
    }

    pub fn with_stores(
        config: GatewayConfig,
        dispatcher: Arc<TDispatcher>,
        stores: GatewayStores,
    ) -> Self {
        Self {
            config,
            dispatcher,
            stores,
        }
    }

    pub fn dispatcher(&self) -> &Arc<TDispatcher> {
        &self.dispatcher
    }

    pub fn orders(&self) -> &Arc<dyn EntityStore<Order>> {
        &self.stores.orders
    }

    pub fn refunds(&self) -> &Arc<dyn EntityStore<Refund>> {
        &self.stores.refunds
    }

    pub fn subscriptions(&self) -> &Arc<dyn EntityStore<Subscription>> {
        &self.stores.subscriptions
    }

    pub async fn trigger_order_completed(&self, order: Order) {
        self.record_order(&order).await;
        tracing::debug!(gateway = %self.identifier(), order = %order.reference, "order completed");

        self.dispatcher.on_order_completed(self, &order).await;
    }

    pub async fn trigger_order_refunded(&self, order: Order, timestamp: Option<TimestampMs>) {
        self.record_order(&order).await;

        let refund = self.issue_refund(&order, timestamp, order.total, None).await;
        tracing::debug!(
            gateway = %self.identifier(),
            order = %order.reference,
            refund = %refund.reference,
            amount = refund.amount,
            "order refunded"
        );

        self.dispatcher.on_order_refunded(self, &order, &refund).await;
    }

    pub async fn trigger_order_partially_refunded(
        &self,
        order: Order,
        items: Option<Vec<OrderItem>>,
        timestamp: Option<TimestampMs>,
    ) {
        self.record_order(&order).await;

        let refund = self
            .issue_refund(&order, timestamp, PARTIAL_REFUND_AMOUNT, items)
            .await;
        tracing::debug!(
            gateway = %self.identifier(),
            order = %order.reference,
            refund = %refund.reference,
            amount = refund.amount,
            "order partially refunded"
        );

        self.dispatcher
            .on_order_partially_refunded(self, &order, &refund)
            .await;
    }

    pub async fn trigger_subscription_activated(&self, mut subscription: Subscription) {
        subscription.set_gateway(self.identifier());
        self.register_subscription(subscription.clone()).await;

        self.dispatcher
            .on_subscription_activated(self, &subscription)
            .await;
    }

    pub async fn trigger_subscription_rebilled(
        &self,
        mut subscription: Subscription,
        timestamp: Option<TimestampMs>,
        next_billing_timestamp: Option<TimestampMs>,
    ) {
        subscription.set_gateway(self.identifier());
        self.register_subscription(subscription.clone()).await;

        let timestamp = timestamp.unwrap_or_else(now_ms);
        let next_billing_timestamp = match next_billing_timestamp
            .or_else(|| subscription.calculate_next_billing_timestamp(timestamp))
        {
            Some(next) => next,
            None => {
                tracing::warn!(
                    subscription = %subscription.reference,
                    timestamp,
                    "next billing timestamp out of range, rebilling at the event timestamp"
                );
                timestamp
            }
        };

        let mut rebill = Rebill::new(
            subscription.reference.as_str(),
            timestamp,
            next_billing_timestamp,
        );
        rebill.set_gateway(self.identifier());

        self.dispatcher
            .on_subscription_rebilled(self, &subscription, &rebill)
            .await;
    }

    pub async fn trigger_subscription_changed(
        &self,
        mut subscription: Subscription,
        timestamp: Option<TimestampMs>,
    ) {
        subscription.set_gateway(self.identifier());
        self.register_subscription(subscription.clone()).await;

        let mut change = Change::new(
            subscription.reference.as_str(),
            timestamp.unwrap_or_else(now_ms),
        );
        change.set_gateway(self.identifier());

        self.dispatcher
            .on_subscription_changed(self, &subscription, &change)
            .await;
    }

    pub async fn trigger_subscription_deactivated(
        &self,
        mut subscription: Subscription,
        timestamp: Option<TimestampMs>,
    ) {
        subscription.set_gateway(self.identifier());
        self.register_subscription(subscription.clone()).await;

        let mut cancelation = Cancelation::new(
            subscription.reference.as_str(),
            timestamp.unwrap_or_else(now_ms),
        );
        cancelation.set_gateway(self.identifier());

        self.dispatcher
            .on_subscription_deactivated(self, &subscription, &cancelation)
            .await;
    }

    pub async fn trigger_subscription_failed_payment(
        &self,
        mut subscription: Subscription,
        timestamp: Option<TimestampMs>,
    ) {
        subscription.set_gateway(self.identifier());
        self.register_subscription(subscription.clone()).await;

        let mut failed_payment = FailedPayment::new(
            subscription.reference.as_str(),
            timestamp.unwrap_or_else(now_ms),
        );
        failed_payment.set_gateway(self.identifier());

        self.dispatcher
            .on_subscription_payment_failed(self, &subscription, &failed_payment)
            .await;
    }

    /// Store a subscription without notifying the dispatcher.
    pub async fn register_subscription(&self, subscription: Subscription) {
        tracing::debug!(
            gateway = %self.identifier(),
            subscription = %subscription.reference,
            "subscription registered"
        );
        self.stores
            .subscriptions
            .put(subscription.reference(), subscription.clone())
            .await;
    }

    async fn record_order(&self, order: &Order) {
        self.stores.orders.put(order.reference(), order.clone()).await;
    }

    async fn issue_refund(
        &self,
        order: &Order,
        timestamp: Option<TimestampMs>,
        amount: i64,
        items: Option<Vec<OrderItem>>,
    ) -> Refund {
        let mut refund = Refund::new(
            refund_reference_for(order.reference()),
            order.reference(),
            timestamp.unwrap_or_else(now_ms),
            amount,
        );
        refund.set_gateway(self.identifier());

        if let Some(items) = items.filter(|items| !items.is_empty()) {
            refund.set_items(items);
        }

        if self.stores.refunds.contains(refund.reference()).await {
            tracing::debug!(refund = %refund.reference, "replacing earlier refund with the same reference");
        }
        self.stores
            .refunds
            .put(refund.reference(), refund.clone())
            .await;
        refund
    }
}

#[async_trait]
impl<TDispatcher> Gateway for OffsitePaymentGateway<TDispatcher>
where
    TDispatcher: EventDispatcher + 'static,
{
    fn identifier(&self) -> &str {
        &self.config.identifier
    }

    fn our_reference(&self) -> &str {
        self.identifier()
    }

    async fn get_default_payment_method(&self, _customer_id: &str) -> Option<PaymentMethod> {
        None
    }

    async fn list_payment_methods(&self, _customer_id: &str) -> Vec<PaymentMethod> {
        Vec::new()
    }

    async fn add_payment_method(
        &self,
        customer: &Customer,
        _set_as_default: bool,
        _arguments: &[Value],
    ) -> Result<PaymentMethod, GatewayError> {
        tracing::warn!(gateway = %self.identifier(), customer = %customer.id, "add_payment_method is not supported");
        Err(GatewayError::NotImplemented {
            operation: "OffsitePaymentGateway::add_payment_method",
        })
    }

    async fn get_order_by_reference(&self, order_reference: &str) -> Result<Order, GatewayError> {
        self.stores
            .orders
            .get(order_reference)
            .await
            .ok_or_else(|| GatewayError::not_found(EntityKind::Order, order_reference))
    }

    async fn get_refund_by_reference(
        &self,
        refund_reference: &str,
    ) -> Result<Refund, GatewayError> {
        self.stores
            .refunds
            .get(refund_reference)
            .await
            .ok_or_else(|| GatewayError::not_found(EntityKind::Refund, refund_reference))
    }

    async fn create_subscription(
        &self,
        customer: &Customer,
        _payment_method: &PaymentMethod,
        _product_name: &str,
        period: BillingPeriod,
        _arguments: &[Value],
    ) -> Result<Subscription, GatewayError> {
        Ok(Subscription::new(
            customer.clone(),
            CANNED_SUBSCRIPTION_REFERENCE,
            now_ms(),
            period,
            CANNED_SUBSCRIPTION_CURRENCY,
            CANNED_SUBSCRIPTION_AMOUNT,
            Vec::new(),
        ))
    }

    async fn update_subscription(
        &self,
        subscription: Subscription,
        _customer: &Customer,
        _payment_method: &PaymentMethod,
        _product_name: &str,
        _period: BillingPeriod,
        _arguments: &[Value],
    ) -> Result<Subscription, GatewayError> {
        Ok(subscription)
    }

    async fn get_subscription_by_reference(
        &self,
        subscription_reference: &str,
    ) -> Result<Subscription, GatewayError> {
        self.stores
            .subscriptions
            .get(subscription_reference)
            .await
            .ok_or_else(|| GatewayError::not_found(EntityKind::Subscription, subscription_reference))
    }

    async fn get_product_id_by_name_and_billing_period(
        &self,
        _product_name: &str,
        _period: BillingPeriod,
    ) -> String {
        String::new()
    }
}
