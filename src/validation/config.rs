use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Policy shared by every validator of a [`ValidatorContainer`].
///
/// Built once and frozen when the container is constructed; two validations
/// through the same container always see the same policy.
///
/// [`ValidatorContainer`]: super::ValidatorContainer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// When false, missing mandatory values are logged instead of failing.
    pub require_mandatory_attributes: bool,

    /// When false, forbidden values that are present are logged instead of failing.
    pub enforce_forbidden_attributes: bool,

    /// Maximum number of nested objects followed from the root.
    pub max_depth: usize,
}

impl ValidatorConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Smallest usable `max_depth`: the root object itself is one level.
    pub const MIN_DEPTH: usize = 1;

    /// Presence violations are only logged; value-consistency violations still fail.
    pub fn advisory() -> Self {
        Self {
            require_mandatory_attributes: false,
            enforce_forbidden_attributes: false,
            ..Self::default()
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).context("Failed to parse validator configuration")?;
        config.check()?;
        Ok(config)
    }

    /// Fails when `max_depth` is below [`Self::MIN_DEPTH`], which would stop
    /// every validation at the root object.
    pub fn check(&self) -> Result<()> {
        if self.max_depth < Self::MIN_DEPTH {
            anyhow::bail!("max_depth must be at least {}", Self::MIN_DEPTH);
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read validator configuration {path:?}"))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid configuration in {path:?}"))
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            require_mandatory_attributes: true,
            enforce_forbidden_attributes: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
