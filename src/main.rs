mod app_system;
mod controller;
mod domain;
mod error;
mod grid;
mod mapper;
mod notify;
mod remote;
mod store;
mod validation;

#[cfg(test)]
mod mock_remote;

use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, DashboardConfig, DashboardSystem};
use crate::domain::{UserFields, UserRecord};
use crate::error::DashboardError;
use crate::grid::Column;

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting user management dashboard");

    let system = DashboardSystem::new(DashboardConfig::from_env())?;
    let mut controller = system.controller;

    let span = tracing::info_span!("initial_load");
    let loaded = async {
        info!("Fetching users");
        controller.load().await
    }
    .instrument(span)
    .await;

    if let Err(e) = loaded {
        error!(error = %e, "Nothing to show without the initial list");
        return Ok(());
    }

    render_grid(controller.view());

    // Search narrows the view locally; clearing the term restores it.
    controller.search("org");
    info!(
        term = "org",
        matches = controller.view().len(),
        "Search applied"
    );
    render_grid(controller.view());
    controller.search("");

    // Add a user through the modal flow.
    let added_id = controller.store().next_id();
    let span = tracing::info_span!("add_user");
    async {
        controller.open_add();
        controller
            .submit(UserFields {
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: "grace.hopper@example.com".to_string(),
                department: "Engineering".to_string(),
            })
            .await
    }
    .instrument(span)
    .await?;
    info!(user_id = added_id, "User added");

    // Edit the user we just added.
    let span = tracing::info_span!("edit_user");
    if let Some(mut prefill) = controller.open_edit(added_id) {
        prefill.department = "Platform".to_string();
        async { controller.submit(prefill).await }
            .instrument(span)
            .await?;
    }

    // Delete it again; a failure leaves the grid untouched.
    match controller.delete(added_id).await {
        Ok(()) => info!(user_id = added_id, "User deleted"),
        Err(e) => error!(error = %e, user_id = added_id, "Delete failed"),
    }

    render_grid(controller.view());

    info!("Dashboard walkthrough complete");
    Ok(())
}

/// Stand-in for the grid collaborator: logs one line per visible row.
fn render_grid(rows: &[UserRecord]) {
    let headers: Vec<&str> = Column::ALL.iter().map(|column| column.header()).collect();
    info!(rows = rows.len(), "Rendering grid: {}", headers.join(" | "));
    for row in rows {
        let cells: Vec<String> = Column::ALL
            .iter()
            .filter_map(|column| column.cell(row))
            .collect();
        info!("{}", cells.join(" | "));
    }
}
