//! Request tickets for views that load data asynchronously.

use leptos::prelude::*;

/// Numbers each request a view issues so a response can tell whether it is
/// still the latest one. Responses that arrive after the view was unmounted
/// are never current.
#[derive(Debug, Clone, Copy)]
pub struct LatestRequest {
    counter: StoredValue<u64>,
}

impl LatestRequest {
    /// Must be created under the view's owner.
    pub fn new() -> Self {
        Self {
            counter: StoredValue::new(0),
        }
    }

    /// Ticket for a new request; any earlier ticket stops being current.
    pub fn begin(&self) -> u64 {
        self.counter
            .try_update_value(|n| {
                *n += 1;
                *n
            })
            .unwrap_or_default()
    }

    /// Safe to call once the owner is gone.
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket != 0 && self.counter.try_get_value() == Some(ticket)
    }
}

impl Default for LatestRequest {
    fn default() -> Self {
        Self::new()
    }
}
