pub(crate) fn encode_csv_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| escape_csv_cell(field.as_ref()))
        .collect::<Vec<String>>()
        .join(",")
}

/// Quotes only when the value holds a comma or a double quote.
pub(crate) fn escape_csv_cell(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
