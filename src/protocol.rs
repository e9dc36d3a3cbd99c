//! Wire protocol for host synchronization.
//!
//! Messages cross the transport as a flat JSON envelope:
//!
//! ```json
//! {"target": "system", "type": "theme", "payload": "cyber"}
//! ```
//!
//! The controller consumes only `target = "system"` + `type = "theme"`;
//! everything else on the channel belongs to other components and is ignored.
//! Outbound it produces the same theme shape plus a one-shot
//! `theme_manager_ready` announcement after connecting, which invites the host
//! to push its durable theme value.

use serde::{Deserialize, Serialize};

/// Target routing key for messages this crate produces or consumes.
pub const TARGET_SYSTEM: &str = "system";

/// Message type carrying a theme identifier in `payload`.
pub const TYPE_THEME: &str = "theme";

/// Message type announcing the controller is connected and listening.
pub const TYPE_MANAGER_READY: &str = "theme_manager_ready";

/// One message on the host channel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Option<String>,
}

impl Envelope {
    /// Theme-change notification for the given identifier.
    pub fn theme_change(theme: &str) -> Self {
        Envelope {
            target: TARGET_SYSTEM.to_string(),
            kind: TYPE_THEME.to_string(),
            payload: Some(theme.to_string()),
        }
    }

    /// One-shot post-connect announcement. Carries no payload.
    pub fn manager_ready() -> Self {
        Envelope {
            target: TARGET_SYSTEM.to_string(),
            kind: TYPE_MANAGER_READY.to_string(),
            payload: None,
        }
    }

    /// True when this envelope addresses the theme controller.
    pub fn is_theme_change(&self) -> bool {
        self.target == TARGET_SYSTEM && self.kind == TYPE_THEME
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
