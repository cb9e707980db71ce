/// The closed set of browsers with an installable extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Chrome,
    Firefox,
}

impl Browser {
    /// All supported browsers, in classification precedence order.
    pub const ALL: [Browser; 2] = [Browser::Chrome, Browser::Firefox];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "chrome" => Some(Self::Chrome),
            "firefox" => Some(Self::Firefox),
            _ => None,
        }
    }

    /// Display-cased name, as it appears in prompt labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chrome => "Chrome",
            Self::Firefox => "Firefox",
        }
    }
}
