use super::{ToastColor, ToastMessage, ToastOptions, ToastQueue};

#[derive(Debug, Clone, Default)]
/// Severity-tagged shortcuts over a [`ToastQueue`].
pub struct Toaster {
    queue: ToastQueue,
}

impl Toaster {
    pub fn new(queue: ToastQueue) -> Self {
        Self { queue }
    }

    /// The queue this toaster feeds.
    pub fn queue(&self) -> &ToastQueue {
        &self.queue
    }

    /// Queues a toast with an explicit color.
    pub fn toast(&self, message: impl Into<String>, color: ToastColor, options: ToastOptions) {
        self.queue
            .add(ToastMessage::from_options(message, color, options));
    }

    pub fn success(&self, message: impl Into<String>, options: ToastOptions) {
        self.toast(message, ToastColor::Success, options);
    }

    pub fn error(&self, message: impl Into<String>, options: ToastOptions) {
        self.toast(message, ToastColor::Error, options);
    }

    /// Informational toasts use the theme's primary color rather than `info`.
    pub fn info(&self, message: impl Into<String>, options: ToastOptions) {
        self.toast(message, ToastColor::Primary, options);
    }

    pub fn warning(&self, message: impl Into<String>, options: ToastOptions) {
        self.toast(message, ToastColor::Warning, options);
    }
}
