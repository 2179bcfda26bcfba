//! Leptos context wiring for the dashboard's shared presentation state.
//!
//! The shell installs one [`ToastQueue`] and one [`SidebarCustomizer`] near the root; descendant
//! components fetch them with the `use_*` helpers instead of reaching for globals.

use leptos::{provide_context, use_context};
use platform_host_web::{prefs_store, WebPrefsStore};

use crate::{
    sidebar::SidebarCustomizer,
    toast::{ToastQueue, Toaster},
};

/// Sidebar customizer backed by the browser's `localStorage`.
pub type WebSidebarCustomizer = SidebarCustomizer<WebPrefsStore>;

/// Installs a fresh [`ToastQueue`] into the current reactive scope and returns it.
pub fn provide_toast_queue() -> ToastQueue {
    let queue = ToastQueue::new();
    provide_context(queue.clone());
    queue
}

/// Returns the [`ToastQueue`] installed by [`provide_toast_queue`].
pub fn use_toast_queue() -> ToastQueue {
    use_context::<ToastQueue>().expect("ToastQueue not provided")
}

/// Returns severity helpers over the installed [`ToastQueue`].
pub fn use_toast() -> Toaster {
    Toaster::new(use_toast_queue())
}

/// Installs a [`WebSidebarCustomizer`] into the current reactive scope and returns it.
pub fn provide_sidebar_customizer() -> WebSidebarCustomizer {
    let customizer = SidebarCustomizer::new(prefs_store());
    provide_context(customizer.clone());
    customizer
}

/// Returns the [`WebSidebarCustomizer`] installed by [`provide_sidebar_customizer`].
pub fn use_sidebar_customizer() -> WebSidebarCustomizer {
    use_context::<WebSidebarCustomizer>().expect("SidebarCustomizer not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        sidebar::SIDEBAR_CUSTOMIZATION_KEY,
        toast::{ToastColor, ToastOptions},
    };

    #[test]
    fn provided_state_is_shared_with_descendants() {
        let runtime = leptos::create_runtime();
        let queue = provide_toast_queue();
        provide_sidebar_customizer();

        use_toast().success("saved", ToastOptions::default());

        assert_eq!(queue.current().map(|toast| toast.color), Some(ToastColor::Success));
        assert_eq!(use_toast_queue().len(), 1);
        assert_eq!(use_sidebar_customizer().key(), SIDEBAR_CUSTOMIZATION_KEY);
        runtime.dispose();
    }
}
