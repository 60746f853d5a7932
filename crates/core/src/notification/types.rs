//! Notification data types.

use pulse_shared::types::NotificationId;
use serde::{Deserialize, Serialize};

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    /// Neutral styling.
    #[default]
    Default,
    /// Error or destructive outcome.
    Destructive,
    /// Successful outcome.
    Success,
}

/// Action button attached to a toast.
///
/// The core never interprets it; the rendering layer decides what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastAction {
    /// Button label.
    pub label: String,
    /// Accessible description of the action.
    pub alt_text: String,
}

/// Request to show a notification. No field is required.
///
/// Also used as a patch for [`ToastStore::update`](super::ToastStore::update),
/// where only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastRequest {
    /// Title line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional action button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ToastAction>,
    /// Visual style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ToastVariant>,
}

impl ToastRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Neutral toast with a title.
    #[must_use]
    pub fn info(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    /// Success toast with a title.
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self::new().title(title).variant(ToastVariant::Success)
    }

    /// Destructive toast with a title.
    #[must_use]
    pub fn destructive(title: impl Into<String>) -> Self {
        Self::new().title(title).variant(ToastVariant::Destructive)
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the action.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>, alt_text: impl Into<String>) -> Self {
        self.action = Some(ToastAction {
            label: label.into(),
            alt_text: alt_text.into(),
        });
        self
    }

    /// Sets the variant.
    #[must_use]
    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }
}

/// A notification held by a [`ToastStore`](super::ToastStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    /// Identifier, unique within the owning store.
    pub id: NotificationId,
    /// Title line.
    pub title: Option<String>,
    /// Body text.
    pub description: Option<String>,
    /// Optional action button.
    pub action: Option<ToastAction>,
    /// Visual style.
    pub variant: ToastVariant,
    /// Whether the toast is currently shown.
    pub open: bool,
}

impl Toast {
    /// Builds a new, open toast from a request.
    #[must_use]
    pub fn from_request(id: NotificationId, request: ToastRequest) -> Self {
        Self {
            id,
            title: request.title,
            description: request.description,
            action: request.action,
            variant: request.variant.unwrap_or_default(),
            open: true,
        }
    }

    /// Applies the present fields of `patch`.
    pub fn apply(&mut self, patch: ToastRequest) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(action) = patch.action {
            self.action = Some(action);
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
    }
}
