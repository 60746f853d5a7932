//! Toast notifications.
//!
//! This module decouples notification producers from the UI region that
//! renders them:
//! - `NotificationBridge` - single-slot handler registry passed to producers
//! - `ToastStore` - ordered collection of active notifications
//! - `ToastRegion` - the consumer that owns a store and binds it to a bridge

pub mod bridge;
pub mod region;
pub mod store;
pub mod types;


pub use bridge::{BridgeState, NotificationBridge, ToastHandler};
pub use region::ToastRegion;
pub use store::ToastStore;
pub use types::{Toast, ToastAction, ToastRequest, ToastVariant};
