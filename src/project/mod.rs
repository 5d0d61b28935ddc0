pub mod fetcher;
pub mod resolver;

pub use fetcher::ItemFetcher;
pub use resolver::resolve_project_id;
