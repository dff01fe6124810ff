// Shared primitives for the payments module.
//
// Notes
// - All timestamps are epoch milliseconds, like every i64 time value in this crate.

use chrono::Utc;

pub type Reference = String;
pub type TimestampMs = i64;

pub fn now_ms() -> TimestampMs {
    Utc::now().timestamp_millis()
}

/// Anything the gateway keeps in a store is addressed by its reference.
pub trait HasReference {
    fn reference(&self) -> &str;
}

/// Entities that remember which gateway issued them.
pub trait GatewayIssued {
    fn gateway(&self) -> Option<&str>;
    fn set_gateway(&mut self, identifier: &str);
}

#[cfg(test)]
mod primitives_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_return_the_current_time_in_milliseconds() {
        let before = Utc::now().timestamp_millis();
        let now = now_ms();
        let after = Utc::now().timestamp_millis();
        assert!(before <= now && now <= after);
    }
}
