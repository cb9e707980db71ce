use indexmap::IndexMap;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Browser profiles  (data/browsers.yml or a caller-supplied document)
//
// Format:
//   label: Get the $1 extension    # optional; $1 = browser display name
//   browsers:
//     Chrome:
//       icon: icons/chrome.svg
//       store: https://...         # optional extension-store deep-link
//     Firefox:
//       icon: icons/firefox.svg
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RegistryFile {
    #[serde(default)]
    pub label: Option<String>,
    pub browsers: ProfileMap,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProfileEntry {
    pub icon: String,
    #[serde(default)]
    pub store: Option<String>,
}

/// Raw deserialization target for the browsers mapping.
/// Uses IndexMap to preserve document order (drives `supported()` iteration).
pub(crate) type ProfileMap = IndexMap<String, ProfileEntry>;
