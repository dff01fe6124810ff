use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Order,
    Refund,
    Subscription,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Order => "Order",
            EntityKind::Refund => "Refund",
            EntityKind::Subscription => "Subscription",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("{kind} #{reference} not found")]
    NotFound { kind: EntityKind, reference: String },

    #[error("{operation} is not implemented yet")]
    NotImplemented { operation: &'static str },
}

impl GatewayError {
    pub fn not_found(kind: EntityKind, reference: impl Into<String>) -> Self {
        GatewayError::NotFound {
            kind,
            reference: reference.into(),
        }
    }
}
