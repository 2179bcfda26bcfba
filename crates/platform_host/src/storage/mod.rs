//! Persistence contracts shared by browser adapters and dashboard state.

pub mod prefs;
