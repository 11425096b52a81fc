//! Build configuration supplied by the invoking build.

use crate::platform::TargetPlatform;

/// Upstream source snapshot the recipe packages by default.
pub const DEFAULT_VERSION: &str = "1.8.25";

/// One build configuration: where the package is built for and how.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildConfig {
    pub platform: TargetPlatform,
    /// Produce a shared artifact instead of a static one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub shared: bool,
    pub version: String,
}

impl BuildConfig {
    pub fn new(platform: TargetPlatform) -> Self {
        Self {
            platform,
            shared: false,
            version: DEFAULT_VERSION.to_string(),
        }
    }

    pub fn with_shared(mut self, shared: bool) -> Self {
        self.shared = shared;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(TargetPlatform::host())
    }
}
