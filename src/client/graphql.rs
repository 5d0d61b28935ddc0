use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use super::QueryExecutor;
use crate::constants::{GITHUB_GRAPHQL_URL, USER_AGENT as USER_AGENT_VALUE};
use crate::error::{ExportError, ExportResult};
use crate::models::GraphQLResponse;

/// GraphQL client talking HTTPS with a personal access token
pub struct GraphQLClient {
    client: Client,
    api_url: String,
}

impl GraphQLClient {
    pub fn new(token: &str) -> ExportResult<Self> {
        Self::with_api_url(token, GITHUB_GRAPHQL_URL)
    }

    pub fn with_api_url(token: &str, api_url: &str) -> ExportResult<Self> {
        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| ExportError::Usage("Personal access token contains invalid characters".to_string()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ExportError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Execute a raw GraphQL request
    async fn send(&self, query: &str, variables: Value) -> ExportResult<GraphQLResponse> {
        let request_body = GraphQLRequest { query, variables };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ExportError::Transport(format!("Request to {} failed: {}", self.api_url, e)))?;

        let status = response.status();
        let body = response.text().await?;
        decode(status, &body)
    }
}

/// Turn a status and body into a response. Failed statuses keep a GraphQL
/// error payload so `into_data` can report it, anything else is an API
/// error carrying the status.
fn decode(status: StatusCode, body: &str) -> ExportResult<GraphQLResponse> {
    let parsed = serde_json::from_str::<GraphQLResponse>(body);
    if status.is_success() {
        return Ok(parsed?);
    }

    match parsed {
        Ok(parsed) if parsed.message.is_some() || parsed.errors.is_some() => Ok(parsed),
        _ => Err(ExportError::Api(format!(
            "API request failed with status {}: {}",
            status,
            body.trim()
        ))),
    }
}

#[async_trait]
impl QueryExecutor for GraphQLClient {
    async fn execute(&self, query: &str, variables: Value) -> ExportResult<Value> {
        self.send(query, variables).await?.into_data()
    }

    fn transport(&self) -> &'static str {
        "https"
    }
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejects_token_with_newline() {
        match GraphQLClient::new("abc\ndef") {
            Err(ExportError::Usage(msg)) => assert!(msg.contains("invalid characters")),
            Err(other) => panic!("Expected ExportError::Usage, got {:?}", other),
            Ok(_) => panic!("Expected ExportError::Usage"),
        }
    }

    #[test]
    fn test_custom_api_url() {
        let client = GraphQLClient::with_api_url("token", "https://ghe.example.com/api/graphql").unwrap();
        assert_eq!(client.api_url(), "https://ghe.example.com/api/graphql");
        assert_eq!(client.transport(), "https");
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GraphQLRequest {
            query: "query { viewer { login } }",
            variables: json!({"first": 100}),
        })
        .unwrap();
        assert_eq!(body, json!({"query": "query { viewer { login } }", "variables": {"first": 100}}));
    }

    #[test]
    fn test_decode_success_body() {
        let response = decode(StatusCode::OK, r#"{"data":{"viewer":{"login":"octocat"}}}"#).unwrap();
        assert_eq!(response.into_data().unwrap(), json!({"viewer": {"login": "octocat"}}));
    }

    #[test]
    fn test_decode_unreadable_success_body() {
        assert!(matches!(decode(StatusCode::OK, "<html>"), Err(ExportError::Json(_))));
    }

    #[test]
    fn test_decode_failed_status_with_message() {
        let response = decode(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com/graphql"}"#,
        )
        .unwrap();
        match response.into_data() {
            Err(ExportError::Api(msg)) => assert!(msg.contains("Bad credentials")),
            other => panic!("Expected ExportError::Api, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_failed_status_with_plain_body() {
        match decode(StatusCode::BAD_GATEWAY, "Bad Gateway\n") {
            Err(ExportError::Api(msg)) => {
                assert!(msg.contains("502"));
                assert!(msg.ends_with("Bad Gateway"));
            }
            other => panic!("Expected ExportError::Api, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_failed_status_with_unrelated_json() {
        match decode(StatusCode::INTERNAL_SERVER_ERROR, r#"{"data":null}"#) {
            Err(ExportError::Api(msg)) => assert!(msg.contains("500")),
            other => panic!("Expected ExportError::Api, got {:?}", other),
        }
    }
}
