use std::sync::Mutex;
use async_trait::async_trait;
use serde_json::{json, Value};

use github_project_csv::commands::export_project;
use github_project_csv::export::{normalize_item, to_csv};
use github_project_csv::{ExportResult, ProjectItem, ProjectRef, QueryExecutor, Table};

struct FakeGitHub {
    pages: Vec<Value>,
    served: Mutex<usize>,
}

#[async_trait]
impl QueryExecutor for FakeGitHub {
    async fn execute(&self, query: &str, variables: Value) -> ExportResult<Value> {
        if query.contains("projectV2(number: $number)") {
            assert_eq!(variables["login"], "acme");
            return Ok(json!({"organization": {"projectV2": {"id": "PVT_acme"}}}));
        }

        let mut served = self.served.lock().unwrap();
        let page = self.pages[*served].clone();
        *served += 1;
        Ok(page)
    }

    fn transport(&self) -> &'static str {
        "fake"
    }
}

fn page(nodes: Vec<Value>, cursor: &str, has_next_page: bool) -> Value {
    json!({
        "node": {"items": {
            "pageInfo": {"endCursor": cursor, "hasNextPage": has_next_page},
            "nodes": nodes
        }}
    })
}

#[tokio::test]
async fn test_columns_accumulate_across_pages() {
    let github = FakeGitHub {
        pages: vec![
            page(
                vec![json!({
                    "id": "PVTI_1",
                    "content": {"__typename": "Issue", "number": 1, "url": "https://github.com/acme/web/issues/1"},
                    "fieldValues": {"nodes": [
                        {"text": "Login page", "field": {"name": "Title"}},
                        {"name": "Todo", "field": {"name": "Status"}}
                    ]}
                })],
                "c1",
                true,
            ),
            page(
                vec![json!({
                    "id": "PVTI_2",
                    "content": {"__typename": "PullRequest", "number": 2, "url": "https://github.com/acme/web/pull/2",
                                "labels": {"nodes": [{"name": "frontend"}]}},
                    "fieldValues": {"nodes": [
                        {"text": "Add login form", "field": {"name": "Title"}},
                        {"title": "Sprint 1", "field": {"name": "Iteration"}},
                        {"milestone": {"title": "Beta"}, "field": {"name": "Milestone"}},
                        {"repository": {"name": "web"}, "field": {"name": "Repository"}},
                        {"number": 3, "field": {"name": "Points"}}
                    ]}
                })],
                "c2",
                false,
            ),
        ],
        served: Mutex::new(0),
    };

    let project = ProjectRef::from_url("https://github.com/orgs/acme/projects/7").unwrap();
    let table = export_project(&github, &project, 100, 100).await.unwrap();

    assert_eq!(
        table.header(),
        &["id", "number", "title", "url", "labels", "Title", "Status", "Iteration", "Milestone", "Repository", "Points"]
    );
    assert_eq!(
        to_csv(&table).unwrap(),
        "id;number;title;url;labels;Title;Status;Iteration;Milestone;Repository;Points\n\
         PVTI_1;#1;#1 Login page;https://github.com/acme/web/issues/1;;Login page;Todo;;;;\n\
         PVTI_2;#2;#2 Add login form;https://github.com/acme/web/pull/2;frontend;Add login form;;Sprint 1;Beta;web;3\n"
    );
}

#[test]
fn test_header_is_union_of_row_keys() {
    let items: Vec<ProjectItem> = vec![
        json!({"id": "a", "fieldValues": {"nodes": [{"text": "x", "field": {"name": "Notes"}}]}}),
        json!({"id": "b", "fieldValues": {"nodes": [{"date": "2024-01-31", "field": {"name": "Due"}}]}}),
    ]
    .into_iter()
    .filter_map(ProjectItem::from_node)
    .collect();

    let rows: Vec<_> = items.iter().map(normalize_item).collect();
    let table = Table::from_rows(&rows);

    assert_eq!(table.header(), &["id", "number", "title", "url", "labels", "Notes", "Due"]);
    assert_eq!(table.rows()[0][6], None);
    assert_eq!(table.rows()[1][6].as_deref(), Some("2024-01-31"));
}
