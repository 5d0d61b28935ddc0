pub mod config;

pub use config::{Config, config_path, load_config, load_config_from, resolve_token};
