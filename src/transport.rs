//! Host transport contract.
//!
//! An asynchronous, possibly-not-yet-ready bidirectional channel to the host
//! process. Connection and handshake mechanics are the implementation's
//! business; the controller only sees the callback-based contract below.
//!
//! Continuations are fire-and-forget with no timeout: if the channel never
//! becomes ready, the controller simply never forwards and never receives
//! remote updates. That is the documented best-effort policy, not a fault.

use thiserror::Error;

use crate::protocol::Envelope;

/// Invoked once when the channel reaches the connected state. Never invoked
/// if the channel never comes up.
pub type ReadyCallback = Box<dyn FnOnce()>;

/// Invoked for each inbound envelope after subscription.
pub type MessageCallback = Box<dyn Fn(Envelope)>;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("transport is not ready")]
    NotReady,

    #[error("send failed: {0}")]
    Send(String),
}

pub trait Transport {
    /// Begin connecting. Non-blocking; `on_ready` fires later on the same
    /// event loop, or never.
    fn connect(&self, on_ready: ReadyCallback);

    /// Subscribe to the inbound message stream. The controller subscribes
    /// exactly once, after the ready callback fires.
    fn subscribe(&self, on_message: MessageCallback);

    /// Whether the channel can accept a send right now.
    fn is_ready(&self) -> bool;

    /// Send one envelope. Fails rather than queues when the channel is not
    /// ready; callers decide whether that is worth more than a warning.
    fn send(&self, envelope: Envelope) -> Result<(), TransportError>;
}
