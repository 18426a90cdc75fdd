use std::env;

/// Default remote collection: the public jsonplaceholder mock. It accepts
/// writes without persisting them, which is why ids are assigned locally.
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com/users";

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_base: String,
}

impl DashboardConfig {
    /// Reads configuration from the environment (`USER_API_BASE`), falling
    /// back to the default collection.
    pub fn from_env() -> Self {
        Self {
            api_base: env::var("USER_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
