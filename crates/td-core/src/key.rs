use core::fmt;
use core::str::FromStr;

use crate::error::TdError;

/// Stable identifier of a library component, used as the graph index.
///
/// Keys are non-empty and never contain whitespace; they double as the
/// artifact name of the component (e.g. `tdcore` links `tdcore`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ComponentKey(String);

impl ComponentKey {
    /// Create a key, rejecting empty strings and embedded whitespace.
    pub fn new(key: impl Into<String>) -> Result<Self, TdError> {
        let key = key.into();
        if key.is_empty() {
            return Err(TdError::InvalidArg {
                what: "component key must not be empty".to_string(),
            });
        }
        if key.chars().any(char::is_whitespace) {
            return Err(TdError::InvalidArg {
                what: format!("component key '{key}' contains whitespace"),
            });
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespaced identifier of this component inside a package,
    /// e.g. prefix `td_` turns `tdCore` into `td_tdcore`.
    pub fn namespaced(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.0.to_lowercase())
    }
}

impl fmt::Debug for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentKey({})", self.0)
    }
}

impl fmt::Display for ComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for ComponentKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for ComponentKey {
    type Err = TdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ComponentKey {
    type Error = TdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ComponentKey> for String {
    fn from(key: ComponentKey) -> Self {
        key.0
    }
}
