//! User-customizable sidebar layout.
//!
//! The dashboard ships a default navigation list. Users may reorder it, hide entries, and move
//! entries into an overflow "More Features" group; that choice is stored as a single JSON entry
//! in preference storage and merged over the defaults on every render.

mod customizer;
mod merge;
mod model;

pub use customizer::{SidebarCustomizer, SidebarStorageError};
pub use merge::apply_sidebar_customization;
pub use model::{
    NavigationItem, SidebarCustomization, MORE_GROUP_ICON, MORE_GROUP_TITLE,
    SIDEBAR_CUSTOMIZATION_KEY,
};
