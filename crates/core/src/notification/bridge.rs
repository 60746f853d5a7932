//! Single-slot handler registry between notification producers and the
//! mounted toast region.
//!
//! The bridge is passed by reference to anything that wants to emit
//! notifications. The consumer binds its handler on mount and unbinds on
//! teardown. Only one handler is active at a time: the last registration
//! wins and the previous consumer silently stops receiving notifications.
//!
//! Execution is single-threaded (UI event loop), so the slot is a `RefCell`
//! and handlers are `Rc`, not `Arc`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use pulse_shared::AppError;
use tracing::{debug, trace};

use super::types::ToastRequest;

/// Function invoked for every `notify` call while bound.
pub type ToastHandler = Rc<dyn Fn(ToastRequest)>;

/// Binding state of a [`NotificationBridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// No handler; `notify` calls are dropped.
    Unbound,
    /// A consumer's handler receives `notify` calls.
    Bound,
}

/// Routes notification requests to the currently registered handler.
#[derive(Default)]
pub struct NotificationBridge {
    handler: RefCell<Option<ToastHandler>>,
}

impl NotificationBridge {
    /// Creates an unbound bridge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `handler`, replacing any previously registered one.
    pub fn register_handler<F>(&self, handler: F)
    where
        F: Fn(ToastRequest) + 'static,
    {
        let previous = self.handler.replace(Some(Rc::new(handler)));
        if previous.is_some() {
            debug!("Toast handler replaced");
        } else {
            debug!("Toast handler bound");
        }
    }

    /// Resets the slot to the no-op handler.
    ///
    /// Must be called when the consumer is torn down, otherwise notifications
    /// keep flowing into a store nobody renders.
    pub fn unregister_handler(&self) {
        if self.handler.take().is_some() {
            debug!("Toast handler unbound");
        }
    }

    /// Hands `request` to the registered handler, or drops it if unbound.
    ///
    /// Fire-and-forget: the identifier generated by the handler is not
    /// returned.
    pub fn notify(&self, request: ToastRequest) {
        // Release the borrow before calling so the handler may rebind.
        let handler = self.handler.borrow().clone();
        match handler {
            Some(handler) => handler(request),
            None => trace!(title = ?request.title, "Notification dropped, no handler bound"),
        }
    }

    /// Reports `err` as a destructive toast.
    pub fn notify_error(&self, err: &AppError) {
        self.notify(
            ToastRequest::destructive("Error")
                .description(format!("{err} [{}]", err.error_code())),
        );
    }

    /// Current binding state.
    #[must_use]
    pub fn state(&self) -> BridgeState {
        if self.handler.borrow().is_some() {
            BridgeState::Bound
        } else {
            BridgeState::Unbound
        }
    }

    /// Returns true if a handler is registered.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.state() == BridgeState::Bound
    }
}

impl fmt::Debug for NotificationBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationBridge")
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<ToastRequest>>>, impl Fn(ToastRequest) + 'static) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        (received, move |request| sink.borrow_mut().push(request))
    }

    #[test]
    fn test_new_bridge_is_unbound() {
        let bridge = NotificationBridge::new();
        assert_eq!(bridge.state(), BridgeState::Unbound);
        assert!(!bridge.is_bound());
    }

    #[test]
    fn test_notify_unbound_is_noop() {
        let bridge = NotificationBridge::new();
        bridge.notify(ToastRequest::info("nobody listens"));
        assert_eq!(bridge.state(), BridgeState::Unbound);
    }

    #[test]
    fn test_notify_reaches_registered_handler() {
        let bridge = NotificationBridge::new();
        let (received, handler) = recorder();
        bridge.register_handler(handler);

        bridge.notify(ToastRequest::info("hello"));

        assert_eq!(bridge.state(), BridgeState::Bound);
        assert_eq!(*received.borrow(), vec![ToastRequest::info("hello")]);
    }

    #[test]
    fn test_last_registration_wins() {
        let bridge = NotificationBridge::new();
        let (first, h1) = recorder();
        let (second, h2) = recorder();
        bridge.register_handler(h1);
        bridge.register_handler(h2);

        bridge.notify(ToastRequest::info("p"));

        assert!(first.borrow().is_empty());
        assert_eq!(second.borrow().len(), 1);
    }

    #[test]
    fn test_unregister_stops_delivery() {
        let bridge = NotificationBridge::new();
        let (received, handler) = recorder();
        bridge.register_handler(handler);
        bridge.unregister_handler();

        bridge.notify(ToastRequest::info("late"));

        assert!(received.borrow().is_empty());
        assert_eq!(bridge.state(), BridgeState::Unbound);
    }

    #[test]
    fn test_unregister_when_unbound_is_noop() {
        let bridge = NotificationBridge::new();
        bridge.unregister_handler();
        assert!(!bridge.is_bound());
    }

    #[test]
    fn test_handler_may_unbind_itself() {
        let bridge = Rc::new(NotificationBridge::new());
        let weak = Rc::downgrade(&bridge);
        bridge.register_handler(move |_| {
            if let Some(bridge) = weak.upgrade() {
                bridge.unregister_handler();
            }
        });

        bridge.notify(ToastRequest::info("once"));

        assert!(!bridge.is_bound());
    }

    #[test]
    fn test_notify_error_is_destructive() {
        let bridge = NotificationBridge::new();
        let (received, handler) = recorder();
        bridge.register_handler(handler);

        bridge.notify_error(&AppError::Import("Row 2: bad number".into()));

        let received = received.borrow();
        assert_eq!(received[0].variant, Some(crate::notification::ToastVariant::Destructive));
        assert_eq!(
            received[0].description.as_deref(),
            Some("Import failed: Row 2: bad number [IMPORT_ERROR]")
        );
    }
}
