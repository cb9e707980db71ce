use super::error::Result;
use super::label;
use super::registry::BrowserRegistry;
use super::types::*;
use fancy_regex::Regex;
use tracing::trace;

/// Pre-compiled user-agent probes used by `classify()`.
/// Compiling them once at init time keeps per-call classification
/// allocation free.
struct SignalProbes {
    crios: Regex,
    edge: Regex,
    firefox: Regex,
}

impl SignalProbes {
    fn compile() -> Result<Self> {
        // Exact, case-sensitive substring probes; no boundary handling.
        Ok(Self {
            crios: Regex::new("CriOS")?,
            edge: Regex::new("Edge")?,
            firefox: Regex::new("Firefox")?,
        })
    }
}

/// Classifies a visitor's browser from injected environment signals and
/// selects the display to render for it.
///
/// Built once (probe compilation plus registry validation), then called per
/// render pass. Immutable after construction; results borrow from `self`.
pub struct BrowserClassifier {
    probes: SignalProbes,
    registry: BrowserRegistry,
}

impl BrowserClassifier {
    /// Classifier over the builtin profile registry.
    pub fn new() -> Result<Self> {
        Self::with_registry(BrowserRegistry::builtin()?)
    }

    /// Classifier over a caller-supplied registry.
    pub fn with_registry(registry: BrowserRegistry) -> Result<Self> {
        Ok(Self {
            probes: SignalProbes::compile()?,
            registry,
        })
    }

    /// Registry backing this classifier, for display introspection
    /// (supported browsers, label template).
    pub fn registry(&self) -> &BrowserRegistry {
        &self.registry
    }

    /// Classify the visitor's browser from an environment snapshot.
    ///
    /// First match wins:
    /// 1. `"CriOS"` in the user agent → no match (Chrome on iOS has a
    ///    separate extension ecosystem and is deliberately excluded).
    /// 2. Chromium global defined, vendor exactly `"Google Inc."`, no Opera
    ///    global, and no `"Edge"` in the user agent → Chrome.
    /// 3. `"Firefox"` in the user agent → Firefox.
    /// 4. Otherwise no match.
    ///
    /// Never fails: an unrecognized environment is a valid no-match, not an
    /// error. Best effort only; no resistance to user-agent spoofing is
    /// claimed.
    pub fn classify<'a>(&'a self, signals: &EnvironmentSignals) -> Option<BrowserIdentity<'a>> {
        let ua = signals.user_agent.as_str();

        // Chrome on iOS carries the CriOS token and must not be offered the
        // desktop extension, even when every other Chrome signal is present.
        if self.probes.crios.is_match(ua).unwrap_or(false) {
            trace!("user agent carries CriOS, unsupported");
            return None;
        }

        if signals.chromium_global.is_defined()
            && signals.vendor == "Google Inc."
            && !signals.opera_global
            && !self.probes.edge.is_match(ua).unwrap_or(false)
        {
            trace!("classified as Chrome");
            return Some(self.identity(Browser::Chrome));
        }

        if self.probes.firefox.is_match(ua).unwrap_or(false) {
            trace!("classified as Firefox");
            return Some(self.identity(Browser::Firefox));
        }

        trace!("no supported browser identified");
        None
    }

    /// Decide what to render for the visitor: the install prompt for an
    /// identified browser, or the fallback badge.
    pub fn select_display<'a>(&'a self, signals: &EnvironmentSignals) -> RenderInstruction<'a> {
        match self.classify(signals) {
            Some(identity) => RenderInstruction::ExtensionPrompt(self.prompt(identity)),
            None => RenderInstruction::FallbackBadge,
        }
    }

    fn identity<'a>(&'a self, name: Browser) -> BrowserIdentity<'a> {
        let profile = self.registry.profile(name);
        BrowserIdentity {
            name,
            icon: IconRef::new(&profile.icon),
        }
    }

    fn prompt<'a>(&'a self, identity: BrowserIdentity<'a>) -> ExtensionPrompt<'a> {
        let profile = self.registry.profile(identity.name);
        let action = match profile.store.as_deref() {
            Some(url) => ClickAction::OpenStorePage(url),
            None => ClickAction::None,
        };

        ExtensionPrompt {
            browser: identity.name,
            icon: identity.icon,
            label: label::expand(self.registry.label_template(), identity.name.as_str()),
            action,
        }
    }
}
