use serde::Deserialize;
use serde_json::Value;

use crate::error::{ExportError, ExportResult};

/// Raw GraphQL response envelope.
///
/// GitHub answers authentication failures with a REST-style `message`
/// instead of an `errors` array, so both shapes are accepted here.
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    pub data: Option<Value>,
    pub errors: Option<Vec<GraphQLError>>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

impl GraphQLResponse {
    /// Extract the `data` object, turning any error payload into `ExportError::Api`.
    pub fn into_data(self) -> ExportResult<Value> {
        if let Some(message) = self.message {
            return Err(ExportError::Api(message));
        }

        if let Some(errors) = self.errors.filter(|errors| !errors.is_empty()) {
            let error_messages = errors
                .iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ExportError::Api(error_messages));
        }

        match self.data {
            Some(Value::Null) | None => Err(ExportError::Api("No data in response".to_string())),
            Some(data) => Ok(data),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}

// Project lookup data structures
#[derive(Debug, Deserialize)]
pub struct ProjectIdData {
    #[serde(default)]
    pub organization: Option<OwnerProject>,
    #[serde(default)]
    pub user: Option<OwnerProject>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerProject {
    pub project_v2: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    pub id: Option<String>,
}

impl ProjectIdData {
    pub fn project_id(self) -> Option<String> {
        let organization_id = self.organization.and_then(|o| o.project_v2).and_then(|p| p.id);
        organization_id.or_else(|| self.user.and_then(|u| u.project_v2).and_then(|p| p.id))
    }
}

// Item page data structures
#[derive(Debug, Deserialize)]
pub struct ProjectItemsData {
    pub node: Option<ProjectItemsNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectItemsNode {
    // absent when the id names something other than a ProjectV2
    #[serde(default)]
    pub items: Option<super::Connection<Value>>,
}
