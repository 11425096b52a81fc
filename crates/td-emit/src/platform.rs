//! Platform link rules.
//!
//! A rule table maps an operating system to an ordered list of
//! (component keys -> system libraries). Looking up a platform or key that
//! has no rule yields nothing; rules only ever add link requirements.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use td_core::{ComponentKey, Os, TargetPlatform};

/// A system library reference, possibly spelled differently per toolchain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SystemLib {
    /// Same name for every compiler family.
    Plain(String),
    /// MSVC spells the import library one way, everything else another.
    ByCompiler { msvc: String, other: String },
}

impl SystemLib {
    pub fn plain(name: impl Into<String>) -> Self {
        SystemLib::Plain(name.into())
    }

    pub fn by_compiler(msvc: impl Into<String>, other: impl Into<String>) -> Self {
        SystemLib::ByCompiler {
            msvc: msvc.into(),
            other: other.into(),
        }
    }

    /// The library name to link for the given platform.
    pub fn resolve(&self, platform: &TargetPlatform) -> &str {
        match self {
            SystemLib::Plain(name) => name.as_str(),
            SystemLib::ByCompiler { msvc, other } => {
                if platform.is_msvc() {
                    msvc.as_str()
                } else {
                    other.as_str()
                }
            }
        }
    }
}

/// Extra system libraries for a set of components on one OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRule {
    pub components: Vec<ComponentKey>,
    pub libs: Vec<SystemLib>,
}

impl ComponentRule {
    fn applies_to(&self, key: &str) -> bool {
        self.components.iter().any(|c| c.as_str() == key)
    }
}

/// Table-driven lookup of platform-specific link requirements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformRuleEngine {
    rules: BTreeMap<Os, Vec<ComponentRule>>,
}

impl PlatformRuleEngine {
    /// An engine with no rules: every lookup is empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule for `os`. Rules for the same OS are consulted in the
    /// order they were added.
    pub fn add_rule(&mut self, os: Os, rule: ComponentRule) -> &mut Self {
        self.rules.entry(os).or_default().push(rule);
        self
    }

    pub fn with_rule(
        mut self,
        os: Os,
        components: Vec<ComponentKey>,
        libs: Vec<SystemLib>,
    ) -> Self {
        self.add_rule(os, ComponentRule { components, libs });
        self
    }

    /// Extra system libraries `key` links on `platform`, in rule order.
    pub fn extra_links(&self, platform: &TargetPlatform, key: &str) -> Vec<String> {
        let Some(rules) = self.rules.get(&platform.os) else {
            return Vec::new();
        };
        rules
            .iter()
            .filter(|rule| rule.applies_to(key))
            .flat_map(|rule| rule.libs.iter())
            .map(|lib| lib.resolve(platform).to_string())
            .collect()
    }
}
