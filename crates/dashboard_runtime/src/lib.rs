//! Presentation state for the admin dashboard: the toast queue and the customizable sidebar.

pub mod context;
pub mod sidebar;
pub mod toast;

pub use context::{
    provide_sidebar_customizer, provide_toast_queue, use_sidebar_customizer, use_toast,
    use_toast_queue, WebSidebarCustomizer,
};
pub use sidebar::{
    apply_sidebar_customization, NavigationItem, SidebarCustomization, SidebarCustomizer,
    SidebarStorageError,
};
pub use toast::{
    ToastColor, ToastMessage, ToastOptions, ToastQueue, ToastSubscription, ToastTimeout, Toaster,
};
