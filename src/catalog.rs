//! Style catalog contract.
//!
//! The catalog is external, read-only data: three lookup tables keyed by theme
//! identifier. Stylesheet text and CSS variables are consumed by the apply
//! engine; terminal color schemes are opaque to this crate and passed through
//! to whatever terminal surface is attached.

use std::collections::{BTreeMap, HashMap};

/// Terminal color scheme, opaque to this crate.
pub type TerminalScheme = serde_json::Value;

/// CSS variable set for one theme. BTreeMap keeps application order stable;
/// consumers treat the order as irrelevant.
pub type CssVariables = BTreeMap<String, String>;

/// The three tables a usable catalog must provide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogTable {
    Styles,
    Terminal,
    Colors,
}

/// Read-only theme data source.
///
/// An unknown identifier yields `None` from the lookups; that is a valid
/// degraded input for the apply engine, not an error the catalog reports.
pub trait StyleCatalog {
    /// Full stylesheet text for the theme.
    fn stylesheet(&self, theme: &str) -> Option<String>;

    /// Terminal color scheme for the theme.
    fn terminal_scheme(&self, theme: &str) -> Option<TerminalScheme>;

    /// CSS variable name -> value mapping for the theme.
    fn css_variables(&self, theme: &str) -> Option<CssVariables>;

    /// Which required tables are absent. Setup refuses to complete until this
    /// is empty.
    fn missing_tables(&self) -> Vec<CatalogTable>;
}

/// In-memory catalog backed by three optional maps.
///
/// Tables are optional so a partially loaded catalog can be represented (and
/// rejected at setup) rather than panicking on first lookup.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    styles: Option<HashMap<String, String>>,
    terminal: Option<HashMap<String, TerminalScheme>>,
    colors: Option<HashMap<String, CssVariables>>,
}

impl StaticCatalog {
    /// Catalog with all three tables present but empty.
    pub fn empty() -> Self {
        StaticCatalog {
            styles: Some(HashMap::new()),
            terminal: Some(HashMap::new()),
            colors: Some(HashMap::new()),
        }
    }

    pub fn with_stylesheet(mut self, theme: &str, css: &str) -> Self {
        self.styles
            .get_or_insert_with(HashMap::new)
            .insert(theme.to_string(), css.to_string());
        self
    }

    pub fn with_terminal_scheme(mut self, theme: &str, scheme: TerminalScheme) -> Self {
        self.terminal
            .get_or_insert_with(HashMap::new)
            .insert(theme.to_string(), scheme);
        self
    }

    pub fn with_css_variables(mut self, theme: &str, variables: CssVariables) -> Self {
        self.colors
            .get_or_insert_with(HashMap::new)
            .insert(theme.to_string(), variables);
        self
    }

    /// Drop a table entirely, e.g. to model a catalog that failed to load.
    pub fn without_table(mut self, table: CatalogTable) -> Self {
        match table {
            CatalogTable::Styles => self.styles = None,
            CatalogTable::Terminal => self.terminal = None,
            CatalogTable::Colors => self.colors = None,
        }
        self
    }
}

impl StyleCatalog for StaticCatalog {
    fn stylesheet(&self, theme: &str) -> Option<String> {
        self.styles.as_ref()?.get(theme).cloned()
    }

    fn terminal_scheme(&self, theme: &str) -> Option<TerminalScheme> {
        self.terminal.as_ref()?.get(theme).cloned()
    }

    fn css_variables(&self, theme: &str) -> Option<CssVariables> {
        self.colors.as_ref()?.get(theme).cloned()
    }

    fn missing_tables(&self) -> Vec<CatalogTable> {
        let mut missing = Vec::new();
        if self.styles.is_none() {
            missing.push(CatalogTable::Styles);
        }
        if self.terminal.is_none() {
            missing.push(CatalogTable::Terminal);
        }
        if self.colors.is_none() {
            missing.push(CatalogTable::Colors);
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_catalog_has_no_missing_tables() {
        assert!(StaticCatalog::empty().missing_tables().is_empty());
    }

    #[test]
    fn default_catalog_is_missing_everything() {
        let missing = StaticCatalog::default().missing_tables();
        assert_eq!(
            missing,
            vec![CatalogTable::Styles, CatalogTable::Terminal, CatalogTable::Colors]
        );
    }

    #[test]
    fn lookups_return_inserted_entries() {
        let mut vars = CssVariables::new();
        vars.insert("--bg-primary".to_string(), "#0a0a12".to_string());

        let catalog = StaticCatalog::empty()
            .with_stylesheet("cyber", "body { background: #0a0a12; }")
            .with_terminal_scheme("cyber", json!({"background": "#0a0a12"}))
            .with_css_variables("cyber", vars);

        assert_eq!(
            catalog.stylesheet("cyber").as_deref(),
            Some("body { background: #0a0a12; }")
        );
        assert!(catalog.terminal_scheme("cyber").is_some());
        assert_eq!(
            catalog.css_variables("cyber").unwrap()["--bg-primary"],
            "#0a0a12"
        );

        assert_eq!(catalog.stylesheet("nonexistent"), None);
        assert_eq!(catalog.css_variables("nonexistent"), None);
    }

    #[test]
    fn dropped_table_is_reported_missing_and_yields_none() {
        let catalog = StaticCatalog::empty()
            .with_stylesheet("cyber", "body {}")
            .without_table(CatalogTable::Colors);

        assert_eq!(catalog.missing_tables(), vec![CatalogTable::Colors]);
        assert_eq!(catalog.css_variables("cyber"), None);
        assert!(catalog.stylesheet("cyber").is_some());
    }
}
