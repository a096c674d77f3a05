//! Default identifiers shared by the controller and the site stylesheet.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the user's explicit palette choice.
pub const STORAGE_KEY: &str = "palette";

// ── DOM ─────────────────────────────────────────────────────────

/// Id of the optional toggle control rendered by the page template.
pub const SWITCH_ELEMENT_ID: &str = "light-switch";

/// Root attribute that may carry a JSON `PaletteConfig` override.
pub const CONFIG_ATTRIBUTE: &str = "data-palette-config";

/// Class token on `<html>` for the light palette.
pub const LIGHT_CLASS: &str = "light-palette";

/// Class token on `<html>` for the dark palette.
pub const DARK_CLASS: &str = "dark-palette";

// ── System signal ───────────────────────────────────────────────

/// Media query answering "does the user prefer a dark appearance".
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";
