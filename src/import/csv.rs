//! Comma-separated text with double-quote escaping.
//!
//! Parsing never fails. Unterminated quotes close at end of input, and rows
//! keep whatever number of fields they were written with.

/// Split text into rows of fields.
///
/// - `"` toggles quoting; `""` inside quotes is one literal quote
/// - `,` outside quotes ends a field
/// - `\n`, `\r` or `\r\n` outside quotes ends a row, unless the row is still empty
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => row.push(std::mem::take(&mut current)),
            '\n' | '\r' if !in_quotes => {
                if !current.is_empty() || !row.is_empty() {
                    row.push(std::mem::take(&mut current));
                    rows.push(std::mem::take(&mut row));
                }
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() || !row.is_empty() {
        row.push(current);
        rows.push(row);
    }

    rows
}

/// Quote a field if it holds a comma, quote or line break
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serialize rows with standard quoting, one `\n`-terminated line per row.
pub fn write_csv<R, F>(rows: R) -> String
where
    R: IntoIterator<Item = F>,
    F: IntoIterator,
    F::Item: AsRef<str>,
{
    let mut out = String::new();
    for row in rows {
        let line = row
            .into_iter()
            .map(|field| escape_field(field.as_ref()))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}
