//! Bulk import of operator accounts and the voter roll
//!
//! The core registry guarantees nothing about re-imports, so idempotency is
//! handled here: rows whose key already exists are skipped, never
//! overwritten. Operator files are comma-separated with a
//! `username,password` header; voter rolls are tab-separated exports with
//! `Matrikelnummer`, `Vorname`, and `Nachname` columns.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sea_orm::DatabaseConnection;

use pollbook_auth::service::credential;
use pollbook_common::PollbookError;
use pollbook_registry::service::voter;

/// Import outcome
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

/// Parse a delimited file with a header line into one map per row.
///
/// Blank lines are ignored; a row with the wrong number of fields is an
/// error, since silently dropping roll entries is worse than failing the
/// import.
fn parse_delimited(reader: impl BufRead, delimiter: char) -> anyhow::Result<Vec<HashMap<String, String>>> {
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(PollbookError::IllegalArgument("file is empty".to_string()).into()),
    };
    let headers: Vec<String> = header_line
        .split(delimiter)
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (line_no, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(delimiter).collect();
        if fields.len() != headers.len() {
            return Err(PollbookError::IllegalArgument(format!(
                "line {}: expected {} fields, got {}",
                line_no + 2,
                headers.len(),
                fields.len()
            ))
            .into());
        }

        let row = headers
            .iter()
            .cloned()
            .zip(fields.iter().map(|f| f.trim().to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

fn field<'a>(row: &'a HashMap<String, String>, name: &str) -> anyhow::Result<&'a str> {
    row.get(name)
        .map(|s| s.as_str())
        .ok_or_else(|| PollbookError::IllegalArgument(format!("missing column '{}'", name)).into())
}

/// Import operator accounts from a comma-separated file, hashing passwords
/// on ingest.
pub async fn import_operators(
    db: &DatabaseConnection,
    path: &Path,
) -> anyhow::Result<ImportSummary> {
    let rows = parse_delimited(BufReader::new(File::open(path)?), ',')?;

    let mut summary = ImportSummary::default();
    for row in rows {
        let username = field(&row, "username")?;
        let password = field(&row, "password")?;

        if credential::find_by_username(db, username).await?.is_some() {
            tracing::warn!(operator = %username, "operator already exists, skipping");
            summary.skipped += 1;
            continue;
        }

        credential::create(db, username, password).await?;
        summary.imported += 1;
    }

    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "operator import finished"
    );

    Ok(summary)
}

/// Import the voter roll from a tab-separated export.
pub async fn import_voters(db: &DatabaseConnection, path: &Path) -> anyhow::Result<ImportSummary> {
    let rows = parse_delimited(BufReader::new(File::open(path)?), '\t')?;

    let mut summary = ImportSummary::default();
    for row in rows {
        let number = field(&row, "Matrikelnummer")?;
        let name = format!("{} {}", field(&row, "Vorname")?, field(&row, "Nachname")?);

        if voter::find(db, number).await?.is_some() {
            tracing::warn!(number = %number, "voter already exists, skipping");
            summary.skipped += 1;
            continue;
        }

        voter::create(db, number, &name).await?;
        summary.imported += 1;
    }

    tracing::info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "voter import finished"
    );

    Ok(summary)
}
