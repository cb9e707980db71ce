use std::borrow::Cow;

use super::{Browser, IconRef};

/// What the renderer should draw for the current visitor.
#[derive(Debug, Clone)]
pub enum RenderInstruction<'a> {
    /// Clickable prompt offering the identified browser's extension.
    ExtensionPrompt(ExtensionPrompt<'a>),
    /// No supported browser was identified; render the externally supplied
    /// generic badge.
    FallbackBadge,
}

impl<'a> RenderInstruction<'a> {
    pub fn prompt(&self) -> Option<&ExtensionPrompt<'a>> {
        match self {
            Self::ExtensionPrompt(p) => Some(p),
            Self::FallbackBadge => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::FallbackBadge)
    }
}

/// Data backing the extension install prompt.
#[derive(Debug, Clone)]
pub struct ExtensionPrompt<'a> {
    pub browser: Browser,
    pub icon: IconRef<'a>,
    /// Expanded label text, e.g. "Get the Chrome extension".
    pub label: Cow<'a, str>,
    pub action: ClickAction<'a>,
}

/// What activating the prompt should do. Execution is delegated to the
/// embedder's opener; this crate only names the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction<'a> {
    /// Deep-link to the browser's extension-store page.
    OpenStorePage(&'a str),
    /// No click target configured for this browser.
    None,
}

impl<'a> ClickAction<'a> {
    pub fn store_page(&self) -> Option<&'a str> {
        match self {
            Self::OpenStorePage(url) => Some(url),
            Self::None => None,
        }
    }
}
