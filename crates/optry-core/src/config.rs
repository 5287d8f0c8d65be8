use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Kind names reserved by [`crate::FailureKind`]'s built-in variants.
const BUILT_IN_KINDS: &[&str] = &[
    "Io",
    "InvalidArgument",
    "EmptyValueAccess",
    "NullResult",
    "NoSuchElement",
    "UnsupportedOperation",
    "Parse",
    "StackOverflow",
    "OutOfMemory",
    "Terminated",
    "Interrupted",
    "Linkage",
];

/// Configuration for a [`crate::classify::Configured`] classifier.
///
/// ```toml
/// stack_overflow_recoverable = true
/// fatal_kinds = ["Shutdown"]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Whether stack exhaustion is captured like an ordinary failure.
    pub stack_overflow_recoverable: bool,
    /// Names of domain-specific (`Other`) kinds that must always escape.
    pub fatal_kinds: Vec<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            stack_overflow_recoverable: true,
            fatal_kinds: Vec::new(),
        }
    }
}

impl ClassifierConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty names and names that shadow a built-in kind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.fatal_kinds {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyKindName);
            }
            if BUILT_IN_KINDS.contains(&name.as_str()) {
                return Err(ConfigError::BuiltInKind(name.clone()));
            }
        }
        Ok(())
    }
}
