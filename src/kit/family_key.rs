use serde::{Deserialize, Serialize};
use std::fmt;

pub const LIGHT: &str = "Light";
pub const DARK: &str = "Dark";

/// Runtime key naming a family of mutually consistent variants.
///
/// Keys are opaque and compared exactly; `"light"` and `"Light"` are different families.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FamilyKey(String);

impl FamilyKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FamilyKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for FamilyKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl AsRef<str> for FamilyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
