use tracing::info;

use super::config::DashboardConfig;
use crate::controller::DashboardController;
use crate::error::RemoteError;
use crate::notify::LogNotifier;
use crate::remote::RemoteUserClient;

/// Wires configuration, the remote client, and the notifier into a ready
/// controller.
pub struct DashboardSystem {
    pub controller: DashboardController<RemoteUserClient, LogNotifier>,
}

impl DashboardSystem {
    pub fn new(config: DashboardConfig) -> Result<Self, RemoteError> {
        info!(api_base = %config.api_base, "Starting dashboard system");
        let remote = RemoteUserClient::new(config.api_base)?;
        Ok(Self {
            controller: DashboardController::new(remote, LogNotifier),
        })
    }
}
