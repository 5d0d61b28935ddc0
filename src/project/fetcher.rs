use serde_json::json;

use crate::client::QueryExecutor;
use crate::constants::{DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, PROJECT_ITEMS_QUERY};
use crate::error::{ExportError, ExportResult};
use crate::logging::{log_debug, log_info};
use crate::models::graphql::ProjectItemsData;
use crate::models::ProjectItem;

/// Collects every item of a project by following the items cursor.
pub struct ItemFetcher<'a> {
    executor: &'a dyn QueryExecutor,
    page_size: u32,
    max_pages: usize,
}

impl<'a> ItemFetcher<'a> {
    pub fn new(executor: &'a dyn QueryExecutor) -> Self {
        Self {
            executor,
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Stop with `ExportError::PageLimit` instead of requesting more than
    /// `max_pages` pages.
    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Fetch all items in API order. Items are neither deduplicated nor
    /// reordered.
    pub async fn fetch_all(&self, project_id: &str) -> ExportResult<Vec<ProjectItem>> {
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0;

        loop {
            if pages >= self.max_pages {
                return Err(ExportError::PageLimit(pages));
            }

            let variables = json!({
                "id": project_id,
                "first": self.page_size,
                "after": cursor,
            });
            let data = self.executor.execute(PROJECT_ITEMS_QUERY, variables).await?;
            pages += 1;

            let page: ProjectItemsData = serde_json::from_value(data)?;
            let connection = page
                .node
                .and_then(|node| node.items)
                .ok_or_else(|| ExportError::NotFound(format!("No project with id {}", project_id)))?;

            let fetched = connection.nodes.len();
            items.extend(connection.nodes.into_iter().filter_map(ProjectItem::from_node));
            log_debug(&format!("Fetched page {} with {} items ({} total)", pages, fetched, items.len()));

            match connection.page_info {
                Some(page_info) if page_info.has_next_page => {
                    let end_cursor = page_info.end_cursor.ok_or_else(|| {
                        ExportError::Api("Page reports more items but no end cursor".to_string())
                    })?;
                    cursor = Some(end_cursor);
                }
                _ => break,
            }
        }

        log_info(&format!("Fetched {} items in {} pages", items.len(), pages));
        Ok(items)
    }
}
