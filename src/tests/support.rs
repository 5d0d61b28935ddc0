use std::collections::VecDeque;
use std::sync::Mutex;
use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::QueryExecutor;
use crate::error::{ExportError, ExportResult};

/// Executor that replays canned responses and records every call.
pub struct ScriptedExecutor {
    responses: Mutex<VecDeque<ExportResult<Value>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl ScriptedExecutor {
    pub fn new(responses: Vec<ExportResult<Value>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryExecutor for ScriptedExecutor {
    async fn execute(&self, query: &str, variables: Value) -> ExportResult<Value> {
        self.calls.lock().unwrap().push((query.to_string(), variables));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ExportError::Unknown("no scripted response left".to_string())))
    }

    fn transport(&self) -> &'static str {
        "scripted"
    }
}

pub fn project_id_data(owner: &str, id: &str) -> Value {
    let mut data = serde_json::Map::new();
    data.insert(owner.to_string(), json!({ "projectV2": { "id": id } }));
    Value::Object(data)
}

pub fn items_page(nodes: Vec<Value>, end_cursor: Option<&str>, has_next_page: bool) -> Value {
    json!({
        "node": {
            "items": {
                "pageInfo": { "endCursor": end_cursor, "hasNextPage": has_next_page },
                "nodes": nodes
            }
        }
    })
}

pub fn issue_node(id: &str, number: u64, title: &str, labels: &[&str]) -> Value {
    let label_nodes: Vec<Value> = labels.iter().map(|name| json!({ "name": name })).collect();
    json!({
        "id": id,
        "content": {
            "__typename": "Issue",
            "title": title,
            "number": number,
            "url": format!("https://github.com/acme/api/issues/{}", number),
            "labels": { "nodes": label_nodes }
        },
        "fieldValues": { "nodes": [
            { "text": title, "field": { "name": "Title" } }
        ]}
    })
}

pub fn draft_node(id: &str, title: &str) -> Value {
    json!({
        "id": id,
        "content": { "__typename": "DraftIssue", "title": title },
        "fieldValues": { "nodes": [
            { "text": title, "field": { "name": "Title" } }
        ]}
    })
}
