pub mod gh_cli;
pub mod graphql;

pub use gh_cli::GhCliClient;
pub use graphql::GraphQLClient;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ExportResult;

/// Anything that can run a GraphQL document against the GitHub API and hand
/// back the response `data` object.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str, variables: Value) -> ExportResult<Value>;

    /// Short transport name for log lines.
    fn transport(&self) -> &'static str;
}
