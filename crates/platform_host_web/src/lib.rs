//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring for dashboard preferences. Adapters compile
//! on every target; outside `wasm32` they degrade to inert stores so runtime code and its tests
//! build natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::local_prefs::WebPrefsStore;

/// Returns the preference store for the active browser context.
pub fn prefs_store() -> WebPrefsStore {
    WebPrefsStore
}
