//! Theme Sync - a theme-synchronization controller
//!
//! Keeps a visual presentation state consistent across a local display surface
//! and a remote host process over an asynchronous message channel, without
//! echoing host-originated changes back to the host.
//!
//! The controller owns the single piece of mutable state (the currently
//! applied theme identifier) and talks to four injected collaborators:
//! a read-only [`catalog::StyleCatalog`], a [`surface::DisplaySurface`],
//! a [`transport::Transport`] to the host, and a [`store::PersistenceStore`]
//! holding the durable preference.
//!
//! Consistency model: local state is authoritative immediately; remote state
//! converges eventually or not at all (forwarding is best-effort, unqueued).

pub mod catalog;
pub mod controller;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod store;
pub mod surface;
pub mod transport;

// Re-export the types an embedding application wires together.
pub use catalog::{CatalogTable, CssVariables, StaticCatalog, StyleCatalog, TerminalScheme};
pub use controller::{ControllerDeps, Origin, ThemeController, DEFAULT_THEME, PREFERRED_THEME_KEY};
pub use error::{ResultExt, ThemeSyncError};
pub use protocol::Envelope;
pub use store::{MemoryStore, PersistenceStore};
pub use surface::{DisplaySurface, ElementClass};
pub use transport::{Transport, TransportError};
