//! Built-in theme catalog.
//!
//! Theme identifiers in a loaded configuration stay opaque strings; the
//! catalog exists so listings and downstream phases can resolve the token
//! values behind the names the tool ships with.

mod builtins;
mod types;

pub use builtins::BUILT_IN_DEFINITIONS;
pub use types::{Scheme, Theme, ThemeDefinition};

/// Lookup a built-in theme by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let normalized = name.trim();
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| definition.name.eq_ignore_ascii_case(normalized))
        .map(|definition| definition.theme)
}

/// Return the built-in theme names in catalog order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILT_IN_DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect()
}

/// Theme names enabled when a configuration does not list any.
#[must_use]
pub fn default_names() -> Vec<String> {
    vec!["light".to_string(), "dark".to_string()]
}

/// The theme used when nothing else is selected.
#[must_use]
pub fn default_theme() -> Theme {
    by_name("light").unwrap_or(BUILT_IN_DEFINITIONS[0].theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(by_name("dracula").is_some());
        assert!(by_name("  DRACULA ").is_some());
        assert!(by_name("nonexistent").is_none());
    }

    #[test]
    fn catalog_order_starts_with_the_default_pair() {
        let names = names();
        assert_eq!(&names[..2], &["light", "dark"]);
        assert!(names.contains(&"winter"));
        assert_eq!(names.len(), BUILT_IN_DEFINITIONS.len());
    }

    #[test]
    fn default_names_resolve_against_the_catalog() {
        for name in default_names() {
            assert!(by_name(&name).is_some(), "missing builtin theme {name}");
        }
    }

    #[test]
    fn dark_themes_carry_the_dark_scheme() {
        assert_eq!(by_name("night").unwrap().scheme, Scheme::Dark);
        assert_eq!(by_name("cupcake").unwrap().scheme, Scheme::Light);
    }
}
