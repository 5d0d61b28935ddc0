pub mod graphql;
pub mod item;
pub mod project;

// Re-export commonly used types
pub use graphql::{GraphQLError, GraphQLResponse, PageInfo};
pub use item::{FieldValue, ItemContent, IssueContent, ProjectItem, RawFieldValue};
pub use project::{ProjectOwner, ProjectRef};

use serde::Deserialize;

// Connection type used by GraphQL pagination
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            page_info: None,
        }
    }
}
