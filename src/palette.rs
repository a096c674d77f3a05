//! The binary light/dark palette.

use std::fmt;

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

/// Visual palette applied to the document root.
///
/// `Light` is the default and the fallback whenever a preference cannot be
/// read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Light,
    Dark,
}

impl Palette {
    /// Both palettes, light first.
    pub const ALL: [Palette; 2] = [Palette::Light, Palette::Dark];

    /// Stable name of the palette (`light` or `dark`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite palette.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Map the host's dark-appearance signal to a palette.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
