// Gateway capability contract: what billing code may ask of a payment processor integration.
//
// Purpose
// - Let billing code depend on a trait so a processor integration or the in-memory double can be
//   plugged in.
//
// Boundaries
// - Trigger operations are not part of the contract. They belong to the double, which uses them
//   to simulate processor events.

use crate::modules::payments::core::billing_period::BillingPeriod;
use crate::modules::payments::core::customer::Customer;
use crate::modules::payments::core::order::Order;
use crate::modules::payments::core::payment_method::PaymentMethod;
use crate::modules::payments::core::refund::Refund;
use crate::modules::payments::core::subscription::Subscription;
use crate::modules::payments::ports::errors::GatewayError;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait Gateway: Send + Sync {
    fn identifier(&self) -> &str;

    /// Reference this gateway uses for itself in processor payloads.
    fn our_reference(&self) -> &str;

    async fn get_default_payment_method(&self, customer_id: &str) -> Option<PaymentMethod>;

    async fn list_payment_methods(&self, customer_id: &str) -> Vec<PaymentMethod>;

    async fn add_payment_method(
        &self,
        customer: &Customer,
        set_as_default: bool,
        arguments: &[Value],
    ) -> Result<PaymentMethod, GatewayError>;

    async fn get_order_by_reference(&self, order_reference: &str) -> Result<Order, GatewayError>;

    async fn get_refund_by_reference(&self, refund_reference: &str)
    -> Result<Refund, GatewayError>;

    async fn create_subscription(
        &self,
        customer: &Customer,
        payment_method: &PaymentMethod,
        product_name: &str,
        period: BillingPeriod,
        arguments: &[Value],
    ) -> Result<Subscription, GatewayError>;

    async fn update_subscription(
        &self,
        subscription: Subscription,
        customer: &Customer,
        payment_method: &PaymentMethod,
        product_name: &str,
        period: BillingPeriod,
        arguments: &[Value],
    ) -> Result<Subscription, GatewayError>;

    async fn get_subscription_by_reference(
        &self,
        subscription_reference: &str,
    ) -> Result<Subscription, GatewayError>;

    async fn get_product_id_by_name_and_billing_period(
        &self,
        product_name: &str,
        period: BillingPeriod,
    ) -> String;
}
