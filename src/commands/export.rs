use std::fs;
use std::io::Write;
use std::path::Path;
use clap::ArgMatches;
use colored::*;

use crate::cli_context::{ExportContext, ExportContextBuilder};
use crate::client::QueryExecutor;
use crate::error::{ErrorContext, ExportError, ExportResult};
use crate::export::{normalize_item, to_csv, Row, Table};
use crate::logging::log_info;
use crate::models::ProjectRef;
use crate::project::{resolve_project_id, ItemFetcher};

pub async fn handle_export(matches: &ArgMatches) -> ExportResult<()> {
    let url = matches
        .get_one::<String>("project")
        .ok_or_else(|| ExportError::Usage("Missing project url".to_string()))?;
    let project = ProjectRef::from_url(url)?;

    let context = ExportContextBuilder::new()
        .with_token(matches.get_one::<String>("personal-access-token").cloned())
        .with_page_size(matches.get_one::<u32>("page-size").copied())
        .build()?;

    let output = matches.get_one::<String>("output").map(Path::new);
    run_export(&context, &project, output).await
}

async fn run_export(context: &ExportContext, project: &ProjectRef, output: Option<&Path>) -> ExportResult<()> {
    let executor = context.executor()?;
    log_info(&format!("Exporting {} using the {} transport", project, executor.transport()));

    let table = export_project(executor.as_ref(), project, context.page_size(), context.max_pages()).await?;
    write_output(&table, output, std::io::stdout().lock())?;

    if let Some(path) = output {
        eprintln!(
            "{} Exported {} items to {}",
            "✅".green(),
            table.rows().len(),
            path.display().to_string().bold()
        );
    }
    Ok(())
}

/// Resolve, fetch and flatten a project into a table.
pub async fn export_project(
    executor: &dyn QueryExecutor,
    project: &ProjectRef,
    page_size: u32,
    max_pages: usize,
) -> ExportResult<Table> {
    let project_id = resolve_project_id(executor, project).await?;

    let items = ItemFetcher::new(executor)
        .page_size(page_size)
        .max_pages(max_pages)
        .fetch_all(&project_id)
        .await?;

    let rows: Vec<Row> = items.iter().map(normalize_item).collect();
    let table = Table::from_rows(&rows);
    log_info(&format!("Built table with {} columns and {} rows", table.header().len(), table.rows().len()));
    Ok(table)
}

/// Write the CSV to `output`, or to `stdout` followed by a newline. The file
/// receives exactly the CSV text.
pub fn write_output<W: Write>(table: &Table, output: Option<&Path>, mut stdout: W) -> ExportResult<()> {
    let csv = to_csv(table)?;

    match output {
        Some(path) => {
            fs::write(path, &csv).with_context(|| format!("Failed to write {}", path.display()))?;
            log_info(&format!("Wrote {} bytes to {}", csv.len(), path.display()));
        }
        None => {
            writeln!(stdout, "{}", csv)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
