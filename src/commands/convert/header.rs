use anyhow::{Result, bail};

use super::text_rules::{is_meaningful, trim_cell};

/// Column names fixed by the first header-like line of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ColumnSchema {
    names: Vec<String>,
}

impl ColumnSchema {
    pub(crate) fn names(&self) -> &[String] {
        &self.names
    }

    pub(crate) fn width(&self) -> usize {
        self.names.len()
    }

    pub(crate) fn into_names(self) -> Vec<String> {
        self.names
    }
}

/// Keeps the meaningful trimmed cells as column names. `Ok(None)` means the
/// line is not a header and the next line should be tried.
pub(crate) fn resolve_header(cells: &[&str], max_columns: usize) -> Result<Option<ColumnSchema>> {
    let names = cells
        .iter()
        .map(|cell| trim_cell(cell))
        .filter(|name| !name.is_empty() && is_meaningful(name))
        .map(ToOwned::to_owned)
        .collect::<Vec<String>>();

    if names.is_empty() {
        return Ok(None);
    }

    if names.len() > max_columns {
        bail!(
            "header has {} columns, more than the limit of {}",
            names.len(),
            max_columns
        );
    }

    Ok(Some(ColumnSchema { names }))
}
