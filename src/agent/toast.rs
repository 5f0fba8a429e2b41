//! Toast notifications reporting operation outcomes.
//!
//! Rendered with the `[+]` / `[x]` prefixes used for success and error
//! messages elsewhere in the palette.

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Failure,
}

impl ToastStyle {
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Success => "[+]",
            Self::Failure => "[x]",
        }
    }
}

/// A short notification with an optional detail line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub style: ToastStyle,
    pub title: String,
    pub message: Option<String>,
}

impl Toast {
    #[must_use]
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            style: ToastStyle::Success,
            title: title.into(),
            message: None,
        }
    }

    #[must_use]
    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            style: ToastStyle::Failure,
            title: title.into(),
            message: Some(message.into()),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.style == ToastStyle::Success
    }
}

impl std::fmt::Display for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.style.prefix(), self.title)?;
        if let Some(message) = &self.message {
            write!(f, "\n    {message}")?;
        }
        Ok(())
    }
}
