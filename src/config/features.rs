//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Insert the default mentor and learner questions into an empty store
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,

    /// Show detailed error messages in 500 responses (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            seed_defaults: default_seed_defaults(),
            verbose_errors: false,
        }
    }
}

fn default_seed_defaults() -> bool {
    true
}
