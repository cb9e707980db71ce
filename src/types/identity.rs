use super::Browser;

/// Opaque reference to the display asset for an identified browser.
///
/// Never interpreted here; consumers hand it to their own asset pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRef<'a>(&'a str);

impl<'a> IconRef<'a> {
    pub(crate) fn new(asset: &'a str) -> Self {
        Self(asset)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// Result of a successful classification.
///
/// An identity always carries its icon: the registry is validated to cover
/// every `Browser` variant, so "name present" and "icon present" coincide.
/// Produced fresh on every classification call.
#[derive(Debug, Clone, Copy)]
pub struct BrowserIdentity<'a> {
    pub name: Browser,
    pub icon: IconRef<'a>,
}
