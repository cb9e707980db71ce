/// Presence of a vendor-specific global in the visitor's runtime.
///
/// A JS global has three observable states: missing entirely, defined but
/// null, or defined with a value. Only the last counts as "defined" for
/// classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GlobalPresence {
    #[default]
    Undefined,
    Null,
    Defined,
}

impl GlobalPresence {
    /// True only for a global present with a non-null value.
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Defined)
    }
}

/// Snapshot of the ambient environment signals a classification runs on.
///
/// The host adapter gathers these once per call: a browser-side probe reads
/// `window`/`navigator`, a server reads headers plus whatever the client
/// reported. Injecting the snapshot keeps classification pure and testable
/// without a simulated runtime.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentSignals {
    /// Presence of the Chromium-specific global (`window.chrome`).
    pub chromium_global: GlobalPresence,
    /// The navigator vendor field.
    pub vendor: String,
    /// The full user-agent string.
    pub user_agent: String,
    /// Whether the Opera-specific global (`window.opr`) is present.
    pub opera_global: bool,
}

impl EnvironmentSignals {
    /// Signals for a context where only the user-agent header is available.
    ///
    /// The vendor field and global probes default to absent, so the Chrome
    /// predicate cannot pass from a user agent alone.
    pub fn from_user_agent(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            ..Self::default()
        }
    }
}
