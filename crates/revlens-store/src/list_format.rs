//! Printable list-of-strings encoding for list-valued CSV cells.
//!
//! Lists are written as `['good', 'battery']` (`[]` when empty). Items
//! containing a single quote but no double quote are wrapped in double
//! quotes; otherwise quotes and backslashes are escaped.

/// Render a list of strings as a bracketed, quoted list.
#[must_use]
pub fn format_list<S: AsRef<str>>(items: &[S]) -> String {
    let rendered = items
        .iter()
        .map(|item| quote(item.as_ref()))
        .collect::<Vec<_>>();
    format!("[{}]", rendered.join(", "))
}

fn quote(item: &str) -> String {
    if item.contains('\'') && !item.contains('"') {
        return format!("\"{}\"", item.replace('\\', "\\\\"));
    }
    let escaped = item.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Parse a list rendered by [`format_list`].
///
/// Blank input and `[]` yield an empty list. Input without brackets or quotes
/// is split on commas as a fallback for hand-edited files.
#[must_use]
pub fn parse_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = match trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
    {
        Some(inner) => inner,
        None => {
            return trimmed
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect();
        }
    };

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c == '\'' || c == '"' {
            chars.next();
            let mut item = String::new();
            while let Some(ch) = chars.next() {
                match ch {
                    '\\' => {
                        if let Some(escaped) = chars.next() {
                            item.push(escaped);
                        }
                    }
                    _ if ch == c => break,
                    _ => item.push(ch),
                }
            }
            items.push(item);
        } else if c == ',' || c.is_whitespace() {
            chars.next();
        } else {
            // Unquoted element: read up to the next comma.
            let mut item = String::new();
            while let Some(&ch) = chars.peek() {
                if ch == ',' {
                    break;
                }
                item.push(ch);
                chars.next();
            }
            let item = item.trim();
            if !item.is_empty() {
                items.push(item.to_string());
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_renders_as_brackets() {
        let empty: [&str; 0] = [];
        assert_eq!(format_list(&empty), "[]");
        assert!(parse_list("[]").is_empty());
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn renders_single_quoted_items() {
        assert_eq!(format_list(&["good", "battery"]), "['good', 'battery']");
    }

    #[test]
    fn parses_single_quoted_items() {
        assert_eq!(
            parse_list("['Improve performance/speed.', 'Stability fixes.']"),
            vec!["Improve performance/speed.", "Stability fixes."]
        );
    }

    #[test]
    fn item_with_apostrophe_uses_double_quotes() {
        let rendered = format_list(&["Tom's pick"]);
        assert_eq!(rendered, "[\"Tom's pick\"]");
        assert_eq!(parse_list(&rendered), vec!["Tom's pick"]);
    }

    #[test]
    fn item_with_both_quote_kinds_is_escaped() {
        let item = "it's \"fine\"";
        let rendered = format_list(&[item]);
        assert_eq!(parse_list(&rendered), vec![item]);
    }

    #[test]
    fn reads_and_writes_cells_as_pandas_leaves_them() {
        // Cells as written by `df.to_csv` for list columns: `str(list)`,
        // wrapped in CSV double quotes.
        let csv_text = r#"pros,cons
"['good', 'battery']","[""it's""]"
[],"['a\'b""c', 'x\\y']"
"#;
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();

        assert_eq!(parse_list(&rows[0][0]), vec!["good", "battery"]);
        assert_eq!(parse_list(&rows[0][1]), vec!["it's"]);
        assert!(parse_list(&rows[1][0]).is_empty());
        assert_eq!(parse_list(&rows[1][1]), vec!["a'b\"c", "x\\y"]);

        for row in &rows {
            for cell in row {
                assert_eq!(format_list(&parse_list(cell)), cell);
            }
        }
    }

    #[test]
    fn unbracketed_input_splits_on_commas() {
        assert_eq!(parse_list("good, fast"), vec!["good", "fast"]);
    }

    #[test]
    fn unquoted_bracketed_items_are_read() {
        assert_eq!(parse_list("[good, fast]"), vec!["good", "fast"]);
    }
}
