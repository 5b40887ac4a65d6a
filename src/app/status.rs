use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Warning,
    Info,
}

impl MessageKind {
    pub fn glyph(self) -> &'static str {
        match self {
            MessageKind::Error => "✖",
            MessageKind::Warning => "⚠",
            MessageKind::Info => "ℹ",
        }
    }
}

/// Transient status message, shown until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Warning,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn saved(group: &str) -> Self {
        Self::info(format!("Group '{group}' saved successfully."))
    }

    pub fn save_failed(group: &str, err: &dyn fmt::Display) -> Self {
        Self::error(format!("Error saving group '{group}': {err}"))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.glyph(), self.text)
    }
}
