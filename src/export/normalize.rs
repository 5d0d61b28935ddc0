use super::Row;
use crate::models::{FieldValue, ProjectItem};

/// Column of the project field whose value feeds the `title` column.
pub const TITLE_FIELD: &str = "Title";

/// Flatten one project item into a row.
///
/// The intrinsic columns `id`, `number`, `title`, `url` and `labels` come
/// first, always present even when empty. Field values follow in API order;
/// a field sharing a name with an intrinsic column replaces its value.
pub fn normalize_item(item: &ProjectItem) -> Row {
    let fields = field_values(item);
    let content = item.content.as_ref();

    let number = content.and_then(|c| c.number()).map(|n| format!("#{}", n));
    // "#42 Fix bug"; drafts have no number and keep the leading space
    let title = format!(
        "{} {}",
        number.as_deref().unwrap_or_default(),
        fields.get(TITLE_FIELD).unwrap_or_default()
    );
    let url = content.and_then(|c| c.url()).map(str::to_string);
    let labels = content
        .map(|c| c.labels())
        .filter(|labels| !labels.is_empty())
        .map(|labels| labels.join(", "));

    let mut row = Row::new();
    row.insert("id", Some(item.id.clone()));
    row.insert("number", number);
    row.insert("title", Some(title));
    row.insert("url", url);
    row.insert("labels", labels);

    for (column, value) in fields {
        row.insert(column, value);
    }

    row
}

fn field_values(item: &ProjectItem) -> Row {
    let mut row = Row::new();

    for raw in &item.field_values.nodes {
        // fragments for unsupported field types come back without a field
        let Some(name) = raw.field_name() else {
            continue;
        };
        row.insert(name, FieldValue::from_raw(raw).into_scalar());
    }

    row
}
