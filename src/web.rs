//! Browser bindings: `web-sys` host, DOM-ready boot and exported entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The generated documentation pages load this module once. On start it
//! waits for `DOMContentLoaded` (or runs at once if the document is already
//! parsed), classifies `<html>`, and subscribes to clicks on the switch
//! element when the page renders one. Each handler builds a fresh
//! [`Controller`] over a fresh [`WebHost`]; nothing is cached between events.

use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DocumentReadyState, Element, MediaQueryList, Storage, Window};

use crate::config::PaletteConfig;
use crate::consts::CONFIG_ATTRIBUTE;
use crate::controller::Controller;
use crate::host::{DocumentRoot, HostError, PreferenceStore, StorageOp, SystemAppearance};

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "web_test.rs"]
mod web_test;

const LOG_LEVEL: log::Level = log::Level::Info;

// =============================================================================
// HOST
// =============================================================================

/// Host backed by the page's `window`, `localStorage` and `<html>` element.
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    /// Bind to the current page. `None` outside a document context.
    #[must_use]
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Config from the root's `data-palette-config` attribute, else defaults.
    #[must_use]
    pub fn config(&self) -> PaletteConfig {
        let Some(raw) = self.document.document_element().and_then(|el| el.get_attribute(CONFIG_ATTRIBUTE)) else {
            return PaletteConfig::default();
        };
        match PaletteConfig::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("palette: ignoring {CONFIG_ATTRIBUTE}: {e}");
                PaletteConfig::default()
            }
        }
    }

    fn storage(&self) -> Result<Storage, HostError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(HostError::StorageUnavailable),
            Err(e) => {
                debug!("palette: localStorage access threw: {}", js_reason(&e));
                Err(HostError::StorageUnavailable)
            }
        }
    }

    fn root(&self) -> Result<Element, HostError> {
        self.document.document_element().ok_or(HostError::NoDocumentRoot)
    }
}

/// Message of a thrown JS value (`DOMException`s are `Error`s).
fn js_reason(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn storage_error(op: StorageOp, value: &JsValue) -> HostError {
    HostError::Storage { op, reason: js_reason(value) }
}

impl PreferenceStore for WebHost {
    fn load(&self, key: &str) -> Result<Option<String>, HostError> {
        self.storage()?.get_item(key).map_err(|e| storage_error(StorageOp::Read, &e))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.storage()?.set_item(key, value).map_err(|e| storage_error(StorageOp::Write, &e))
    }

    fn remove(&self, key: &str) -> Result<(), HostError> {
        self.storage()?.remove_item(key).map_err(|e| storage_error(StorageOp::Remove, &e))
    }
}

impl SystemAppearance for WebHost {
    fn prefers_dark(&self, query: &str) -> Result<bool, HostError> {
        match self.window.match_media(query) {
            Ok(Some(list)) => Ok(list.matches()),
            Ok(None) | Err(_) => Err(HostError::MediaQueryUnavailable),
        }
    }
}

impl DocumentRoot for WebHost {
    fn class_name(&self) -> Result<String, HostError> {
        Ok(self.root()?.class_name())
    }

    fn set_class_name(&self, class_name: &str) -> Result<(), HostError> {
        self.root()?.set_class_name(class_name);
        Ok(())
    }
}

// =============================================================================
// BOOT
// =============================================================================

fn page_controller() -> Option<Controller<WebHost>> {
    let Some(host) = WebHost::new() else {
        warn!("palette: no window or document");
        return None;
    };
    let config = host.config();
    Some(Controller::new(config, host))
}

/// Module start hook: install diagnostics and initialize on DOM ready.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(LOG_LEVEL).is_err() {
        debug!("palette: logger already installed");
    }

    let Some(host) = WebHost::new() else {
        return;
    };
    if host.document.ready_state() != DocumentReadyState::Loading {
        boot();
        return;
    }

    let cb = Closure::wrap(Box::new(boot) as Box<dyn FnMut()>);
    match host.document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()) {
        Ok(()) => cb.forget(),
        Err(e) => warn!("palette: cannot wait for DOMContentLoaded: {}", js_reason(&e)),
    }
}

fn boot() {
    let Some(controller) = page_controller() else {
        return;
    };
    let palette = controller.initialize();
    debug!("palette: initialized as {palette}");
    wire_switch(&controller);
    if controller.config().follow_system {
        watch_system(&controller);
    }
}

/// Subscribe toggle clicks on the switch element, if the page has one.
///
/// Returns whether a listener was attached.
fn wire_switch(controller: &Controller<WebHost>) -> bool {
    let switch_id = &controller.config().switch_id;
    let Some(switch) = controller.host().document.get_element_by_id(switch_id) else {
        debug!("palette: no #{switch_id} element, toggle disabled");
        return false;
    };

    let cb = Closure::wrap(Box::new(|| {
        if let Some(controller) = page_controller() {
            controller.toggle();
        }
    }) as Box<dyn FnMut()>);
    match switch.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
        Ok(()) => {
            cb.forget();
            true
        }
        Err(e) => {
            warn!("palette: cannot subscribe #{switch_id}: {}", js_reason(&e));
            false
        }
    }
}

/// Re-apply the system palette on appearance changes while nothing is stored.
///
/// Returns the watched query list, `None` when the query is unavailable.
fn watch_system(controller: &Controller<WebHost>) -> Option<MediaQueryList> {
    let query = &controller.config().dark_query;
    let list = match controller.host().window.match_media(query) {
        Ok(Some(list)) => list,
        Ok(None) | Err(_) => {
            warn!("palette: cannot watch {query}");
            return None;
        }
    };

    let cb = Closure::wrap(Box::new(|| {
        if let Some(controller) = page_controller() {
            controller.follow_system(controller.system().is_dark());
        }
    }) as Box<dyn FnMut()>);
    match list.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()) {
        Ok(()) => {
            cb.forget();
            Some(list)
        }
        Err(e) => {
            warn!("palette: cannot watch {query}: {}", js_reason(&e));
            None
        }
    }
}

// =============================================================================
// EXPORTS
// =============================================================================

/// Flip the palette as the switch would. Returns the new palette name.
#[wasm_bindgen(js_name = togglePalette)]
pub fn toggle_palette() -> Option<String> {
    page_controller().map(|c| c.toggle().as_str().to_owned())
}

/// Name of the palette classifying `<html>`, if recognized.
#[wasm_bindgen(js_name = currentPalette)]
pub fn current_palette() -> Option<String> {
    page_controller().and_then(|c| c.current()).map(|p| p.as_str().to_owned())
}

/// Drop the stored choice and follow the system again.
#[wasm_bindgen(js_name = resetPalette)]
pub fn reset_palette() -> Option<String> {
    page_controller().map(|c| c.reset().as_str().to_owned())
}
