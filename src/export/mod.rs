//! Flattening project items into a CSV table.

pub mod normalize;
pub mod row;
pub mod table;
pub mod writer;

pub use normalize::normalize_item;
pub use row::Row;
pub use table::Table;
pub use writer::{to_csv, write_csv};
