/// Whether a theme is rendered against a light or dark base.
///
/// The scheme also decides which themes participate when the dark-mode
/// strategy swaps palettes automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Light,
    Dark,
}

/// Design tokens resolved for a single named theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub scheme: Scheme,
    /// Page background.
    pub base: &'static str,
    /// Raised surfaces such as cards and menus.
    pub surface: &'static str,
    /// Default foreground text.
    pub text: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
}

/// Name and token pairing for a theme shipped with the tool.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
}
