pub mod export;

pub use export::{export_project, handle_export, write_output};
