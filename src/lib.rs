//! Light/dark palette controller for the generated documentation site.
//!
//! On every page view the controller picks the palette for `<html>`: the
//! user's stored choice if there is one, otherwise the system's
//! `prefers-color-scheme`, otherwise light. A click on the optional switch
//! element flips the palette and stores the new choice so the next page view
//! reproduces it. Everything else on the page (navigation, search index,
//! stylesheets) just renders whatever class the controller assigns.
//!
//! The logic compiles and is tested natively against [`memory::MemoryHost`].
//! With the `browser` feature the crate builds to WebAssembly and the
//! `web` module binds the same controller to the real DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`palette`] | The `Palette` enum and its flip |
//! | [`config`] | Storage key, switch id, media query and class tokens |
//! | [`host`] | Host traits the controller runs against, and `HostError` |
//! | [`controller`] | Initialize, toggle, reset and system-change handling |
//! | [`memory`] | In-memory host with simulated page reloads |
//! | `web` | `web-sys` host and wasm entry points (`browser` feature) |
//! | [`consts`] | Default identifiers shared with the site stylesheet |

pub mod config;
pub mod consts;
pub mod controller;
pub mod host;
pub mod memory;
pub mod palette;
#[cfg(feature = "browser")]
pub mod web;

pub use config::{ConfigError, PaletteConfig};
pub use controller::Controller;
pub use host::{Host, HostError};
pub use memory::MemoryHost;
pub use palette::Palette;
