//! Palette controller: resolve, apply, toggle and persist.
//!
//! DESIGN
//! ======
//! The controller holds no palette state of its own. Every operation re-reads
//! the stored preference, the system signal or the root classification from
//! its host, so a controller can be built fresh for each event handler and
//! two controllers over the same host always agree.
//!
//! Resolution order is stored preference, then system preference, then the
//! light default. Host failures never propagate: they are logged and the
//! operation falls through to the next source.

use log::{debug, warn};

use crate::config::PaletteConfig;
use crate::host::Host;
use crate::palette::Palette;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

pub struct Controller<H> {
    config: PaletteConfig,
    host: H,
}

impl<H: Host> Controller<H> {
    #[must_use]
    pub fn new(config: PaletteConfig, host: H) -> Self {
        Self { config, host }
    }

    #[must_use]
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    // =========================================================================
    // SOURCES
    // =========================================================================

    /// The user's explicit choice, if one is stored and recognized.
    #[must_use]
    pub fn stored(&self) -> Option<Palette> {
        let raw = match self.host.load(&self.config.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("palette: reading stored preference failed: {e}");
                return None;
            }
        };
        let palette = self.config.palette_for(&raw);
        if palette.is_none() {
            warn!("palette: ignoring unrecognized stored value {raw:?}");
        }
        palette
    }

    /// The palette implied by the system appearance signal.
    #[must_use]
    pub fn system(&self) -> Palette {
        match self.host.prefers_dark(&self.config.dark_query) {
            Ok(prefers_dark) => Palette::from_prefers_dark(prefers_dark),
            Err(e) => {
                warn!("palette: system preference unavailable: {e}");
                Palette::default()
            }
        }
    }

    /// The Active Palette for this page view.
    #[must_use]
    pub fn resolve(&self) -> Palette {
        if let Some(palette) = self.stored() {
            debug!("palette: using stored preference {palette}");
            return palette;
        }
        let palette = self.system();
        debug!("palette: no stored preference, system gives {palette}");
        palette
    }

    /// Palette currently classifying the root, `None` when unrecognized.
    #[must_use]
    pub fn current(&self) -> Option<Palette> {
        match self.host.class_name() {
            Ok(class_name) => self.config.palette_for(&class_name),
            Err(e) => {
                warn!("palette: reading root classification failed: {e}");
                None
            }
        }
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Resolve the Active Palette and classify the root with it.
    pub fn initialize(&self) -> Palette {
        let palette = self.resolve();
        self.apply(palette);
        palette
    }

    /// Flip the root classification and persist the result.
    ///
    /// Only light flips to dark; an unrecognized classification falls back
    /// to light. Nothing is stored when the palette could not be applied.
    pub fn toggle(&self) -> Palette {
        let next = match self.current() {
            Some(current) => current.toggled(),
            None => {
                warn!("palette: root classification unrecognized, falling back to {}", Palette::default());
                Palette::default()
            }
        };
        if self.apply(next) {
            self.persist(next);
        }
        debug!("palette: toggled to {next}");
        next
    }

    /// Forget the stored preference and re-resolve from the system signal.
    pub fn reset(&self) -> Palette {
        if let Err(e) = self.host.remove(&self.config.storage_key) {
            warn!("palette: clearing stored preference failed: {e}");
        }
        self.initialize()
    }

    /// React to a change of the system appearance signal.
    ///
    /// Applies and returns the new palette only when no preference is stored.
    pub fn follow_system(&self, prefers_dark: bool) -> Option<Palette> {
        if let Some(stored) = self.stored() {
            debug!("palette: system changed, keeping stored {stored}");
            return None;
        }
        let palette = Palette::from_prefers_dark(prefers_dark);
        self.apply(palette);
        Some(palette)
    }

    /// Classify the root with `palette`. `false` when the root rejected it.
    fn apply(&self, palette: Palette) -> bool {
        match self.host.set_class_name(self.config.class_for(palette)) {
            Ok(()) => true,
            Err(e) => {
                warn!("palette: applying {palette} failed: {e}");
                false
            }
        }
    }

    fn persist(&self, palette: Palette) {
        if let Err(e) = self.host.save(&self.config.storage_key, self.config.class_for(palette)) {
            warn!("palette: storing {palette} failed: {e}");
        }
    }
}
