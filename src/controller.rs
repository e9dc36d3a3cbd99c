//! The theme controller.
//!
//! One component, three responsibilities:
//! - lifecycle guard: setup runs at most once per instance
//! - local apply engine: mutates the display surface and persistence store,
//!   deterministically and idempotently
//! - sync protocol: classifies each change as local or remote and forwards
//!   only local ones to the host (the anti-echo rule)
//!
//! Everything runs on one event loop. Suspension happens only at the
//! transport's connect continuation and at inbound message delivery, so no
//! two applies ever interleave and no locking is needed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::catalog::{StyleCatalog, TerminalScheme};
use crate::error::{ResultExt, ThemeSyncError};
use crate::protocol::Envelope;
use crate::store::PersistenceStore;
use crate::surface::{DisplaySurface, ElementClass};
use crate::transport::Transport;

/// Identifier applied when nothing has ever been persisted.
pub const DEFAULT_THEME: &str = "cyber";

/// Persistence key holding the last-applied theme identifier.
pub const PREFERRED_THEME_KEY: &str = "preferredTheme";

/// Element id of the managed scrollbar style block. Reused on every apply so
/// at most one block exists at a time.
const SCROLLBAR_STYLE_ID: &str = "scrollbar-style";

/// Scrollbar styling rebuilt on each theme change. References the root CSS
/// variables set by the apply engine.
const SCROLLBAR_CSS: &str = "\
::-webkit-scrollbar {
    width: 8px;
    height: 8px;
}
::-webkit-scrollbar-track {
    background: var(--scrollbar-track);
    border-radius: 4px;
}
::-webkit-scrollbar-thumb {
    background: var(--scrollbar-thumb);
    border-radius: 4px;
}
::-webkit-scrollbar-thumb:hover {
    background: var(--scrollbar-thumb-hover);
    transition: background-color 0.2s ease;
}
";

/// Where a theme change came from. Remote changes are never forwarded back to
/// the host. Transient; never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Local,
    Remote,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Readiness {
    NotReady,
    Ready,
}

/// Monotonic for the controller's lifetime; while disconnected, outbound
/// forwarding is dropped, not queued.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConnectionState {
    Disconnected,
    Connected,
}

/// The four collaborators, injected by the application root.
pub struct ControllerDeps {
    pub catalog: Rc<dyn StyleCatalog>,
    pub surface: Rc<dyn DisplaySurface>,
    pub transport: Rc<dyn Transport>,
    pub store: Rc<dyn PersistenceStore>,
}

type ThemeListener = Box<dyn Fn(&str)>;

/// Cheap-to-clone handle to the single controller instance.
///
/// The application root constructs exactly one and hands out clones; every
/// clone observes the same state. Construction starts the transport
/// connection but never waits for it.
#[derive(Clone)]
pub struct ThemeController {
    inner: Rc<Inner>,
}

struct Inner {
    catalog: Rc<dyn StyleCatalog>,
    surface: Rc<dyn DisplaySurface>,
    transport: Rc<dyn Transport>,
    store: Rc<dyn PersistenceStore>,
    readiness: Cell<Readiness>,
    connection: Cell<ConnectionState>,
    listeners: RefCell<Vec<ThemeListener>>,
}

impl ThemeController {
    pub fn new(deps: ControllerDeps) -> Self {
        let inner = Rc::new(Inner {
            catalog: deps.catalog,
            surface: deps.surface,
            transport: deps.transport,
            store: deps.store,
            readiness: Cell::new(Readiness::NotReady),
            connection: Cell::new(ConnectionState::Disconnected),
            listeners: RefCell::new(Vec::new()),
        });
        Inner::start_connection(&inner);
        ThemeController { inner }
    }

    /// One-time setup: validate the catalog, wire the selection control, seed
    /// the display from the persisted preference.
    ///
    /// Idempotent: a second call logs a warning and changes nothing. A missing
    /// catalog table aborts setup with `Err` and leaves the controller
    /// non-functional for applies until retried.
    pub fn initialize(&self) -> Result<(), ThemeSyncError> {
        Inner::initialize(&self.inner)
    }

    /// Apply a theme to the display surface and persist it.
    ///
    /// Never fails: an unknown identifier degrades to an empty stylesheet and
    /// skipped variables, a missing catalog aborts with an error log, and a
    /// dropped forward is a warning. Forwarding to the host happens only for
    /// [`Origin::Local`].
    pub fn apply_theme(&self, theme: &str, origin: Origin) {
        self.inner.apply_theme(theme, origin == Origin::Local);
    }

    /// The persisted theme identifier, or [`DEFAULT_THEME`] if none. Pure read.
    pub fn get_current_theme(&self) -> String {
        self.inner.current_theme()
    }

    /// Terminal color scheme for the current theme, if the catalog has one.
    pub fn current_terminal_scheme(&self) -> Option<TerminalScheme> {
        self.inner.catalog.terminal_scheme(&self.inner.current_theme())
    }

    /// Register a local observer notified with the identifier after each
    /// apply. Observers may assume the surface mutation is already done but
    /// nothing about remote delivery.
    pub fn on_theme_changed(&self, listener: impl Fn(&str) + 'static) {
        self.inner.listeners.borrow_mut().push(Box::new(listener));
    }
}

impl Inner {
    fn start_connection(inner: &Rc<Inner>) {
        debug!("connecting to host transport");
        let weak = Rc::downgrade(inner);
        inner.transport.connect(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_connected();
            }
        }));
    }

    fn on_connected(self: Rc<Self>) {
        self.connection.set(ConnectionState::Connected);
        info!("host transport connected");

        let weak = Rc::downgrade(&self);
        self.transport.subscribe(Box::new(move |envelope| {
            if let Some(inner) = weak.upgrade() {
                inner.handle_envelope(envelope);
            }
        }));

        // Invite the host to push its durable theme value.
        if self.transport.is_ready() {
            self.transport.send(Envelope::manager_ready()).warn_on_err();
        } else {
            warn!("transport connected but not ready, skipping ready announcement");
        }
    }

    fn initialize(inner: &Rc<Inner>) -> Result<(), ThemeSyncError> {
        if inner.readiness.get() == Readiness::Ready {
            warn!("theme controller already initialized");
            return Ok(());
        }

        let missing = inner.catalog.missing_tables();
        if !missing.is_empty() {
            let err = ThemeSyncError::MissingCatalog { missing };
            error!(error = %err, "theme controller setup aborted");
            return Err(err);
        }

        let weak = Rc::downgrade(inner);
        let wired = inner.surface.on_selection_changed(Rc::new(move |theme: String| {
            if let Some(inner) = weak.upgrade() {
                debug!(theme = %theme, "selection control changed");
                inner.apply_theme(&theme, true);
            }
        }));
        if !wired {
            // Setup still completes; remote changes keep working without a control.
            error!("theme selection control not found");
        }

        inner.readiness.set(Readiness::Ready);

        // Seed from the durable preference without forwarding. The host stays
        // the source of truth for synchronization: its post-connect push
        // arrives as an ordinary remote apply and overrides this.
        let seed = inner.current_theme();
        inner.surface.set_selected_theme(&seed);
        inner.apply_theme(&seed, false);

        info!(theme = %seed, "theme controller initialized");
        Ok(())
    }

    fn handle_envelope(&self, envelope: Envelope) {
        if !envelope.is_theme_change() {
            debug!(
                msg_target = %envelope.target,
                msg_type = %envelope.kind,
                "ignoring message for another component"
            );
            return;
        }
        let Some(theme) = envelope.payload else {
            warn!("theme message without payload ignored");
            return;
        };

        info!(theme = %theme, "host pushed theme change");
        self.apply_theme(&theme, false);

        // Keep the selection control in agreement with the remote change.
        if self.surface.selected_theme().as_deref() != Some(theme.as_str()) {
            self.surface.set_selected_theme(&theme);
        }
    }

    /// The apply engine. `forward` is true only for locally originated
    /// changes; the gate is on origin, not on identifier validity.
    fn apply_theme(&self, theme: &str, forward: bool) {
        let missing = self.catalog.missing_tables();
        if !missing.is_empty() {
            error!(?missing, theme, "cannot apply theme, catalog tables missing");
            return;
        }
        debug!(theme, forward, "applying theme");

        // Unknown identifier degrades to an empty stylesheet.
        let stylesheet = self
            .catalog
            .stylesheet(theme)
            .ok_or_else(|| ThemeSyncError::UnknownTheme(theme.to_string()))
            .warn_on_err()
            .unwrap_or_default();
        self.surface.set_stylesheet(&stylesheet);

        if let Some(scheme) = self.catalog.terminal_scheme(theme) {
            self.surface.apply_terminal_scheme(&scheme);
        }

        // An absent color set skips both the variables and the scrollbar
        // rebuild that depends on them.
        if let Some(variables) = self.catalog.css_variables(theme) {
            for (name, value) in &variables {
                self.surface.set_root_variable(name, value);
            }
            self.surface.upsert_style_block(SCROLLBAR_STYLE_ID, SCROLLBAR_CSS);
        }

        self.stamp_dynamic_elements();

        if forward {
            self.forward_theme(theme);
        }

        self.store.set(PREFERRED_THEME_KEY, theme);

        for listener in self.listeners.borrow().iter() {
            listener(theme);
        }
    }

    /// Best-effort forward to the host. Dropped with a warning when the
    /// channel is down; never queued, never retried.
    fn forward_theme(&self, theme: &str) {
        if self.connection.get() != ConnectionState::Connected || !self.transport.is_ready() {
            warn!(theme, "dropping theme forward, transport not ready");
            return;
        }
        if self
            .transport
            .send(Envelope::theme_change(theme))
            .warn_on_err()
            .is_some()
        {
            debug!(theme, "forwarded theme change to host");
        }
    }

    /// Re-stamp surfaces that do not inherit CSS variable updates. Stateless;
    /// purely derivative of the variables already on the root scope.
    fn stamp_dynamic_elements(&self) {
        self.surface.stamp_elements(
            ElementClass::PanelTitle,
            &[
                ("color", "var(--text-secondary)"),
                ("background", "var(--bg-primary)"),
            ],
        );
        self.surface.stamp_elements(
            ElementClass::PanelBackdrop,
            &[
                ("background", "var(--bg-secondary)"),
                ("border", "1px solid var(--border-color)"),
            ],
        );
        self.surface
            .stamp_elements(ElementClass::TabLabel, &[("color", "var(--text-primary)")]);
        self.surface.stamp_elements(
            ElementClass::ActiveTab,
            &[
                ("color", "var(--accent-color)"),
                ("border-bottom", "2px solid var(--accent-color)"),
            ],
        );
        self.surface.stamp_elements(
            ElementClass::ChartGrid,
            &[(
                "background-image",
                "linear-gradient(var(--grid-color) 1px, transparent 1px), \
                 linear-gradient(90deg, var(--grid-color) 1px, transparent 1px)",
            )],
        );
    }

    fn current_theme(&self) -> String {
        self.store
            .get(PREFERRED_THEME_KEY)
            .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
