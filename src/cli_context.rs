use crate::client::{GhCliClient, GraphQLClient, QueryExecutor};
use crate::config::{load_config, resolve_token, Config};
use crate::constants::MAX_PAGE_SIZE;
use crate::error::{ExportError, ExportResult};

/// Resolved settings for one export run: which transport to use and how to
/// page through items.
pub struct ExportContext {
    config: Config,
    token: Option<String>,
    page_size: u32,
}

impl ExportContext {
    /// Build the query executor. A personal access token selects HTTPS,
    /// otherwise queries go through the gh CLI.
    pub fn executor(&self) -> ExportResult<Box<dyn QueryExecutor>> {
        match &self.token {
            Some(token) => Ok(Box::new(GraphQLClient::with_api_url(token, self.config.api_url())?)),
            None => Ok(Box::new(GhCliClient::new())),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn max_pages(&self) -> usize {
        self.config.max_pages()
    }
}

/// Builder pattern for creating export contexts with specific settings
#[derive(Default)]
pub struct ExportContextBuilder {
    config: Option<Config>,
    token: Option<String>,
    page_size: Option<u32>,
}

impl ExportContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn build(self) -> ExportResult<ExportContext> {
        let config = match self.config {
            Some(config) => config,
            None => load_config()?,
        };

        let token = resolve_token(self.token.as_deref(), &config);

        let page_size = self.page_size.unwrap_or_else(|| config.page_size());
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(ExportError::Usage(format!(
                "Page size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, page_size
            )));
        }

        if config.max_pages() == 0 {
            return Err(ExportError::Config("max_pages must be at least 1".to_string()));
        }

        Ok(ExportContext {
            config,
            token,
            page_size,
        })
    }
}
