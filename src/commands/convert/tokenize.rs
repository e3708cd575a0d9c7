use super::text_rules::trim_cell;

pub(crate) const CELL_DELIMITER: char = '|';

/// Splits a table line into raw cell slices.
///
/// One leading and one trailing delimiter are treated as the table frame and
/// removed first; every delimiter left is a cell boundary, so adjacent
/// delimiters produce empty cells. A delimiter can never appear inside a cell
/// value because there is no escape syntax for it.
pub(crate) fn split_cells(line: &str) -> Vec<&str> {
    let body = trim_cell(line);
    let body = body.strip_prefix(CELL_DELIMITER).unwrap_or(body);
    let body = body.strip_suffix(CELL_DELIMITER).unwrap_or(body);

    body.split(CELL_DELIMITER).collect()
}
