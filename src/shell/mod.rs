// Composition root for the payments double.
//
// Responsibilities
// - Read config from environment.
// - Wire the in-memory stores and a dispatcher into the offsite gateway.

use crate::modules::payments::adapters::outbound::offsite_gateway::{
    GatewayStores, OffsitePaymentGateway,
};
use crate::modules::payments::ports::dispatcher::EventDispatcher;
use crate::config::{ConfigError, GatewayConfig};
use std::sync::Arc;

/// Build a gateway configured from the environment, backed by fresh in-memory stores.
pub fn gateway_from_env<TDispatcher>(
    dispatcher: Arc<TDispatcher>,
) -> Result<OffsitePaymentGateway<TDispatcher>, ConfigError>
where
    TDispatcher: EventDispatcher + 'static,
{
    let config = GatewayConfig::from_env()?;
    tracing::debug!(identifier = %config.identifier, "wiring offsite payment gateway");
    Ok(OffsitePaymentGateway::with_stores(
        config,
        dispatcher,
        GatewayStores::in_memory(),
    ))
}
