pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod entity_store;
        pub mod telemetry;
    }
}

pub mod modules {
    pub mod payments {
        pub mod core {
            pub mod billing_period;
            pub mod customer;
            pub mod order;
            pub mod payment_method;
            pub mod refund;
            pub mod subscription;
            pub mod subscription_events;
        }
        pub mod ports {
            pub mod dispatcher;
            pub mod errors;
            pub mod gateway;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod offsite_gateway;
                pub mod recording_dispatcher;
            }
        }
    }
}

pub mod config;
pub mod shell;
