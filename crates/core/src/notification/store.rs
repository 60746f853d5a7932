//! Ordered store of active notifications.

use pulse_shared::NotificationConfig;
use pulse_shared::types::NotificationId;

use super::types::{Toast, ToastRequest};

/// Ordered collection of active toasts. Insertion order is display order.
///
/// Once the configured limit is reached, adding a toast evicts the oldest one.
#[derive(Debug, Clone)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    limit: usize,
}

impl ToastStore {
    /// Creates an empty store holding at most `limit` toasts (minimum 1).
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Creates an empty store from configuration.
    #[must_use]
    pub fn with_config(config: &NotificationConfig) -> Self {
        Self::new(config.limit)
    }

    /// Appends a toast built from `request` and returns its fresh identifier.
    pub fn add(&mut self, request: ToastRequest) -> NotificationId {
        let id = NotificationId::new();
        self.toasts.push(Toast::from_request(id, request));

        if self.toasts.len() > self.limit {
            let excess = self.toasts.len() - self.limit;
            self.toasts.drain(..excess);
        }

        id
    }

    /// Merges the present fields of `patch` into the toast with `id`.
    ///
    /// Returns false if no such toast exists.
    pub fn update(&mut self, id: NotificationId, patch: ToastRequest) -> bool {
        match self.toasts.iter_mut().find(|t| t.id == id) {
            Some(toast) => {
                toast.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Removes the toast with `id`, returning it. No-op if absent.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Toast> {
        let index = self.toasts.iter().position(|t| t.id == id)?;
        Some(self.toasts.remove(index))
    }

    /// Removes every toast.
    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Active toasts in display order.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Looks up a toast by identifier.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    /// Number of active toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns true if there are no active toasts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Maximum number of toasts kept.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::with_config(&NotificationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::types::ToastVariant;

    #[test]
    fn test_add_appends_in_order() {
        let mut store = ToastStore::new(10);
        let first = store.add(ToastRequest::info("first"));
        let second = store.add(ToastRequest::info("second"));

        let ids: Vec<_> = store.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![first, second]);
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_evicts_oldest_beyond_limit() {
        let mut store = ToastStore::new(2);
        let first = store.add(ToastRequest::info("1"));
        let second = store.add(ToastRequest::info("2"));
        let third = store.add(ToastRequest::info("3"));

        assert_eq!(store.len(), 2);
        assert!(store.get(first).is_none());
        assert!(store.get(second).is_some());
        assert!(store.get(third).is_some());
    }

    #[test]
    fn test_zero_limit_is_raised_to_one() {
        let mut store = ToastStore::new(0);
        store.add(ToastRequest::info("kept"));
        assert_eq!(store.limit(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_dismiss_removes_and_is_idempotent() {
        let mut store = ToastStore::new(5);
        let keep = store.add(ToastRequest::info("keep"));
        let gone = store.add(ToastRequest::info("gone"));

        assert!(store.dismiss(gone).is_some());
        let after_first = store.toasts().to_vec();
        assert!(store.dismiss(gone).is_none());

        assert_eq!(store.toasts(), after_first.as_slice());
        assert_eq!(store.toasts()[0].id, keep);
    }

    #[test]
    fn test_dismiss_unknown_is_noop() {
        let mut store = ToastStore::new(5);
        store.add(ToastRequest::info("a"));
        assert!(store.dismiss(NotificationId::new()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_patches_existing() {
        let mut store = ToastStore::new(5);
        let id = store.add(ToastRequest::info("Uploading"));

        assert!(store.update(id, ToastRequest::new().variant(ToastVariant::Success)));
        let toast = store.get(id).unwrap();
        assert_eq!(toast.title.as_deref(), Some("Uploading"));
        assert_eq!(toast.variant, ToastVariant::Success);

        assert!(!store.update(NotificationId::new(), ToastRequest::info("x")));
    }

    #[test]
    fn test_dismiss_all() {
        let mut store = ToastStore::new(5);
        store.add(ToastRequest::info("a"));
        store.add(ToastRequest::info("b"));
        store.dismiss_all();
        assert!(store.is_empty());
    }

    #[test]
    fn test_default_uses_configured_limit() {
        assert_eq!(ToastStore::default().limit(), 5);
    }
}
