//! Typed host-domain contracts shared by the dashboard runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services the dashboard needs. It exposes the
//! preference storage contract and host-agnostic in-memory implementations, while the concrete
//! `localStorage` adapter lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod storage;

pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, PrefsStore, PrefsStoreFuture,
    UnavailablePrefsStore,
};
