//! Disable-while-pending guard for draft requests.
//!
//! A draft call is one slow outbound request. While one is outstanding for an
//! inquiry, further requests for the same inquiry are refused instead of
//! queued.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub struct InFlightDrafts {
    pending: Arc<Mutex<HashSet<String>>>,
}

impl InFlightDrafts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key identifying "the same inquiry": inputs compared trimmed and
    /// case-insensitively.
    pub fn inquiry_key(business_name: &str, requirements: &str) -> String {
        format!(
            "{}\u{1f}{}",
            business_name.trim().to_lowercase(),
            requirements.trim().to_lowercase()
        )
    }

    /// Claim `key`. Returns `None` while another guard for it is alive.
    pub fn try_begin(&self, key: impl Into<String>) -> Option<InFlightGuard> {
        let key = key.into();
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if !pending.insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard {
            pending: self.pending.clone(),
            key,
        })
    }
}

/// Releases its key on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    pending: Arc<Mutex<HashSet<String>>>,
    key: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_until_release() {
        let drafts = InFlightDrafts::new();
        let key = InFlightDrafts::inquiry_key("Acme Traders", "200 silk scarves");

        let guard = drafts.try_begin(key.clone()).expect("first claim");
        assert!(drafts.try_begin(key.clone()).is_none());

        drop(guard);
        assert!(drafts.try_begin(key).is_some());
    }

    #[test]
    fn different_inquiries_do_not_block_each_other() {
        let drafts = InFlightDrafts::new();
        let _a = drafts
            .try_begin(InFlightDrafts::inquiry_key("Acme", "scarves"))
            .unwrap();
        assert!(
            drafts
                .try_begin(InFlightDrafts::inquiry_key("Acme", "hankies"))
                .is_some()
        );
    }

    #[test]
    fn key_ignores_case_and_surrounding_space() {
        assert_eq!(
            InFlightDrafts::inquiry_key(" ACME ", "Scarves"),
            InFlightDrafts::inquiry_key("acme", "scarves ")
        );
    }
}
