use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::db;
use crate::error::{Error, Result};
use crate::types::Browser;

/// Default prompt label template; `$1` expands to the browser display name.
const DEFAULT_LABEL: &str = "Get the $1 extension";

/// Builtin profile document embedded at compile time.
const BUILTIN_PROFILES: &str = include_str!("../data/browsers.yml");

/// Per-browser display profile resolved from the registry document.
#[derive(Debug, Clone)]
pub struct BrowserProfile {
    /// Opaque asset reference for the browser's icon.
    pub icon: String,
    /// Extension-store deep-link, when configured.
    pub store: Option<String>,
}

/// Display profiles for every supported browser plus the prompt label template.
///
/// Validated at load: every document entry must name a known `Browser`
/// exactly once, and every `Browser` variant must have an entry. Complete
/// coverage is what lets classification hand out an icon with every identity.
#[derive(Debug, Clone)]
pub struct BrowserRegistry {
    profiles: IndexMap<Browser, BrowserProfile>,
    label: String,
}

impl BrowserRegistry {
    /// Registry from the embedded builtin document.
    ///
    /// The builtin configures icons only; store deep-links are left to
    /// deployment-specific documents, so builtin prompts carry
    /// `ClickAction::None`.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_PROFILES)
    }

    /// Load a registry document from `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let registry = Self::from_yaml_str(&content)?;
        debug!(path = %path.as_ref().display(), "loaded browser profile document");
        Ok(registry)
    }

    /// Parse a registry document from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let file: db::RegistryFile = serde_yaml::from_str(s)?;

        let mut profiles: IndexMap<Browser, BrowserProfile> =
            IndexMap::with_capacity(file.browsers.len());
        for (name, entry) in file.browsers {
            let browser =
                Browser::from_str(&name).ok_or_else(|| Error::UnknownBrowser(name))?;
            // Browser names parse case-insensitively, so distinct document
            // keys ("Chrome", "chrome") can collide on the same variant.
            let previous = profiles.insert(
                browser,
                BrowserProfile {
                    icon: entry.icon,
                    store: entry.store,
                },
            );
            if previous.is_some() {
                return Err(Error::DuplicateProfile(browser.as_str()));
            }
        }

        for browser in Browser::ALL {
            if !profiles.contains_key(&browser) {
                return Err(Error::MissingProfile(browser.as_str()));
            }
        }

        debug!(profiles = profiles.len(), "browser profile registry ready");

        Ok(Self {
            profiles,
            label: file.label.unwrap_or_else(|| DEFAULT_LABEL.to_string()),
        })
    }

    /// Browsers covered by this registry, in document order.
    pub fn supported(&self) -> impl Iterator<Item = Browser> + '_ {
        self.profiles.keys().copied()
    }

    /// Prompt label template (`$1` = browser display name).
    pub fn label_template(&self) -> &str {
        &self.label
    }

    /// Profile for `browser`. Coverage is validated at load, so the lookup
    /// cannot miss.
    pub fn profile(&self, browser: Browser) -> &BrowserProfile {
        self.profiles
            .get(&browser)
            .expect("registry coverage validated at load")
    }
}
