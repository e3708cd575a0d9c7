use super::header::ColumnSchema;
use super::text_rules::{is_meaningful, trim_cell};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RowOutcome {
    Accepted(NormalizedRow),
    /// Every cell was empty, decorative or a placeholder.
    Dropped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NormalizedRow {
    pub fields: Vec<String>,
    pub padded_fields: usize,
    pub excess_fields: usize,
}

/// Aligns one line's cells to the schema width: missing trailing cells become
/// empty strings and cells past the width are discarded.
pub(crate) fn normalize_row(cells: &[&str], schema: &ColumnSchema) -> RowOutcome {
    let width = schema.width();
    let mut fields = Vec::with_capacity(width);
    let mut has_content = false;

    for index in 0..width {
        let value = cells.get(index).map(|cell| trim_cell(cell)).unwrap_or("");
        has_content |= is_meaningful(value);
        fields.push(value.to_string());
    }

    if !has_content {
        return RowOutcome::Dropped;
    }

    RowOutcome::Accepted(NormalizedRow {
        fields,
        padded_fields: width.saturating_sub(cells.len()),
        excess_fields: cells.len().saturating_sub(width),
    })
}
