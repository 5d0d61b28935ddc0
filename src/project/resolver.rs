use serde_json::json;

use crate::client::QueryExecutor;
use crate::constants::{ORGANIZATION_PROJECT_QUERY, USER_PROJECT_QUERY};
use crate::error::{ExportError, ExportResult};
use crate::logging::log_info;
use crate::models::graphql::ProjectIdData;
use crate::models::{ProjectOwner, ProjectRef};

/// Look up the opaque node id of a project board.
pub async fn resolve_project_id(executor: &dyn QueryExecutor, project: &ProjectRef) -> ExportResult<String> {
    let query = match project.owner {
        ProjectOwner::Organization(_) => ORGANIZATION_PROJECT_QUERY,
        ProjectOwner::User(_) => USER_PROJECT_QUERY,
    };
    let variables = json!({
        "login": project.owner.login(),
        "number": project.number,
    });

    let data = executor.execute(query, variables).await?;
    let project_data: ProjectIdData = serde_json::from_value(data)?;

    let id = project_data
        .project_id()
        .ok_or_else(|| ExportError::NotFound(format!("Could not find project {}", project)))?;

    log_info(&format!("Resolved {} to {}", project, id));
    Ok(id)
}
