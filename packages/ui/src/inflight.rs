//! In-flight mutation guard.
//!
//! The lists refetch after every mutation, so the only race worth closing is
//! the double-submit: two rapid clicks on the same action button issuing the
//! request twice. Each mutating handler claims a key before spawning and
//! releases it when the request settles; a second click while the key is held
//! is dropped.

use std::collections::HashSet;

use dioxus::prelude::*;

/// Set of mutation keys currently on the wire.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InFlight {
    keys: HashSet<String>,
}

impl InFlight {
    /// Claim a key. Returns false if the same mutation is already in flight.
    pub fn begin(&mut self, key: &str) -> bool {
        self.keys.insert(key.to_string())
    }

    pub fn finish(&mut self, key: &str) {
        self.keys.remove(key);
    }

    /// Whether a mutation is on the wire, for disabling its button.
    pub fn active(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

/// Key for one mutation target: `"booking:17:approve"`.
pub fn action_key(kind: &str, id: i64, action: &str) -> String {
    format!("{kind}:{id}:{action}")
}

pub fn use_inflight_provider() -> Signal<InFlight> {
    use_context_provider(|| Signal::new(InFlight::default()))
}

pub fn use_inflight() -> Signal<InFlight> {
    use_context()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused_until_finish() {
        let mut guard = InFlight::default();
        let key = action_key("booking", 17, "approve");

        assert!(guard.begin(&key));
        assert!(guard.active(&key));
        // The double click.
        assert!(!guard.begin(&key));

        guard.finish(&key);
        assert!(!guard.active(&key));
        assert!(guard.begin(&key));
    }

    #[test]
    fn test_keys_are_per_target() {
        let mut guard = InFlight::default();
        assert!(guard.begin(&action_key("booking", 1, "approve")));
        // Same action on another row is independent.
        assert!(guard.begin(&action_key("booking", 2, "approve")));
        // A different action on the same row is independent too.
        assert!(guard.begin(&action_key("booking", 1, "reject")));
    }
}
