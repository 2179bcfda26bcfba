//! Toast notification queue for the dashboard.
//!
//! Toasts are queued in insertion order and only the head is displayed. Timers, fade-out and
//! dismiss gestures belong to the rendering layer, which reads [`ToastQueue::current`] and calls
//! [`ToastQueue::shift`] once the visible toast is done.

mod queue;
mod toaster;

pub use queue::{ToastQueue, ToastSubscription};
pub use toaster::Toaster;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Display duration used when a caller does not pick one.
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3_000;
/// Screen placement used when a caller does not pick one.
pub const DEFAULT_TOAST_LOCATION: &str = "top center";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Semantic color tag understood by the rendering layer's theme.
pub enum ToastColor {
    #[default]
    Info,
    Primary,
    Success,
    Warning,
    Error,
    /// Any other theme color name, passed through verbatim.
    Custom(String),
}

impl ToastColor {
    /// Returns the theme token for this color.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for ToastColor {
    fn from(value: String) -> Self {
        match value.as_str() {
            "info" => Self::Info,
            "primary" => Self::Primary,
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for ToastColor {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ToastColor> for String {
    fn from(value: ToastColor) -> Self {
        match value {
            ToastColor::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ToastColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How long a toast stays on screen once the renderer shows it.
///
/// Serialized as milliseconds, with `-1` standing for [`ToastTimeout::Never`].
pub enum ToastTimeout {
    /// Auto-dismiss after the given number of milliseconds.
    After(u32),
    /// Stay until the user dismisses it.
    Never,
}

impl ToastTimeout {
    /// Returns the wire value: milliseconds, or `-1` for [`ToastTimeout::Never`].
    pub fn as_millis(self) -> i64 {
        match self {
            Self::After(ms) => i64::from(ms),
            Self::Never => -1,
        }
    }
}

impl Default for ToastTimeout {
    fn default() -> Self {
        Self::After(DEFAULT_TOAST_TIMEOUT_MS)
    }
}

impl Serialize for ToastTimeout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_millis())
    }
}

impl<'de> Deserialize<'de> for ToastTimeout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ms = i64::deserialize(deserializer)?;
        Ok(match u32::try_from(ms) {
            Ok(ms) => Self::After(ms),
            Err(_) if ms < 0 => Self::Never,
            Err(_) => Self::After(u32::MAX),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Presentation options shared by every toast helper.
///
/// Color is not an option: each helper fixes it from the severity it represents.
pub struct ToastOptions {
    pub timeout: ToastTimeout,
    pub closable: bool,
    pub multi_line: bool,
    pub location: String,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            timeout: ToastTimeout::default(),
            closable: true,
            multi_line: false,
            location: DEFAULT_TOAST_LOCATION.to_string(),
        }
    }
}

impl ToastOptions {
    /// Overrides the display duration.
    #[must_use]
    pub fn with_timeout(mut self, timeout: ToastTimeout) -> Self {
        self.timeout = timeout;
        self
    }

    /// Keeps the toast up until dismissed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.with_timeout(ToastTimeout::Never)
    }

    /// Overrides the screen placement.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets whether the toast shows a close button.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Sets whether the message may wrap over several lines.
    #[must_use]
    pub fn multi_line(mut self, multi_line: bool) -> Self {
        self.multi_line = multi_line;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A pending toast as handed to the rendering layer.
pub struct ToastMessage {
    pub message: String,
    pub color: ToastColor,
    pub timeout: ToastTimeout,
    pub closable: bool,
    pub multi_line: bool,
    pub location: String,
}

impl ToastMessage {
    /// Creates a toast with default color, timeout, and placement.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_options(message, ToastColor::default(), ToastOptions::default())
    }

    /// Creates a toast from a color and a set of presentation options.
    pub fn from_options(
        message: impl Into<String>,
        color: ToastColor,
        options: ToastOptions,
    ) -> Self {
        let ToastOptions {
            timeout,
            closable,
            multi_line,
            location,
        } = options;
        Self {
            message: message.into(),
            color,
            timeout,
            closable,
            multi_line,
            location,
        }
    }

    /// Overrides the color tag.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<ToastColor>) -> Self {
        self.color = color.into();
        self
    }

    /// Overrides the display duration.
    #[must_use]
    pub fn with_timeout(mut self, timeout: ToastTimeout) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets whether the toast shows a close button.
    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Sets whether the message may wrap over several lines.
    #[must_use]
    pub fn multi_line(mut self, multi_line: bool) -> Self {
        self.multi_line = multi_line;
        self
    }

    /// Overrides the screen placement.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}
