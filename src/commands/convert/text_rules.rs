/// Whitespace as the C locale classifies it, so vertical tab and form feed count.
pub(crate) fn is_table_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

pub(crate) fn trim_cell(value: &str) -> &str {
    value.trim_matches(is_table_space)
}

/// Border rows (`+----+`, `|----|`) and blank lines carry no cells.
pub(crate) fn is_border_or_blank(line: &str) -> bool {
    line.chars()
        .all(|ch| matches!(ch, '-' | '+' | '|') || is_table_space(ch))
}

/// False for the `...` placeholder and for values made only of rule
/// characters, dots and whitespace.
pub(crate) fn is_meaningful(value: &str) -> bool {
    if value == "..." {
        return false;
    }

    value
        .chars()
        .any(|ch| !matches!(ch, '-' | '+' | '|' | '.') && !is_table_space(ch))
}
