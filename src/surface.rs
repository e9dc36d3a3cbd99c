//! Display surface contract.
//!
//! The surface is whatever actually renders: a webview document, a native
//! widget tree, or a recording double in tests. The controller only needs the
//! handful of mutations below, all idempotent, plus access to the theme
//! selection control so user picks flow back in.
//!
//! Methods take `&self`: the whole crate runs on one event loop, so
//! implementations use interior mutability rather than locks.

use std::rc::Rc;

use crate::catalog::TerminalScheme;

/// Callback invoked with the newly selected theme identifier when the user
/// changes the selection control.
pub type SelectionCallback = Rc<dyn Fn(String)>;

/// The fixed element categories re-stamped on every theme change.
///
/// These surfaces do not inherit CSS variable updates automatically, so the
/// apply engine pushes inline `var(--...)` references at them each time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementClass {
    PanelTitle,
    PanelBackdrop,
    TabLabel,
    ActiveTab,
    ChartGrid,
}

pub trait DisplaySurface {
    /// Replace the active stylesheet text. An empty string clears the theme.
    fn set_stylesheet(&self, css: &str);

    /// Push a terminal color scheme to the attached terminal, if any.
    /// No-op when no terminal surface is attached.
    fn apply_terminal_scheme(&self, scheme: &TerminalScheme);

    /// Set one CSS variable on the root display scope.
    fn set_root_variable(&self, name: &str, value: &str);

    /// Create or replace the style block with the given element id, keeping at
    /// most one such block in the document.
    fn upsert_style_block(&self, id: &str, css: &str);

    /// Apply inline declarations to every currently-present element of the
    /// given class. Purely derivative of the root variables already set.
    fn stamp_elements(&self, class: ElementClass, declarations: &[(&str, &str)]);

    /// Current value of the theme selection control, if one is attached.
    fn selected_theme(&self) -> Option<String>;

    /// Write a value back to the selection control (e.g. after a remote
    /// change). No-op when no control is attached.
    fn set_selected_theme(&self, theme: &str);

    /// Register the change handler for the selection control. Returns false
    /// when no control is attached (the registration is dropped).
    fn on_selection_changed(&self, callback: SelectionCallback) -> bool;
}
