use crate::core::row::Row;

/// Column tokens whose presence marks the first line as a header.
const HEADER_TOKENS: [&str; 3] = ["Name", "Data name", "Task name"];

pub struct CsvParser;

impl CsvParser {
    /// Parse delimited text into rows.
    ///
    /// Lines that are empty after trimming are dropped. The first remaining
    /// line is skipped as a header when [`looks_like_header`] says so. A line
    /// with two or more fields becomes a row from its first two fields; a
    /// lone field containing "http" doubles as both name and value (a bare
    /// URL pasted without a label); any other single-field line is dropped.
    ///
    /// [`looks_like_header`]: CsvParser::looks_like_header
    pub fn parse(input: &str) -> Vec<Row> {
        let lines: Vec<&str> = input
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();

        let start = if lines.first().is_some_and(|l| Self::looks_like_header(l)) {
            1
        } else {
            0
        };

        let mut rows = Vec::new();
        for line in &lines[start..] {
            let mut fields = Self::split_line(line);
            match fields.len() {
                0 => {}
                1 => {
                    let field = fields.remove(0);
                    if field.contains("http") {
                        rows.push(Row::new(field.clone(), field));
                    }
                }
                _ => {
                    let value = fields.swap_remove(1);
                    let name = fields.swap_remove(0);
                    rows.push(Row::new(name, value));
                }
            }
        }
        rows
    }

    /// The format carries no header marker, so a first line is treated as a
    /// header iff it contains one of the known column tokens. Data whose
    /// first cell happens to match one of them is silently skipped; that
    /// ambiguity is part of the format and is kept as-is.
    pub fn looks_like_header(line: &str) -> bool {
        HEADER_TOKENS.iter().any(|token| line.contains(token))
    }

    /// Quote-aware comma splitter. A `"` only toggles the in-quotes flag and
    /// is dropped from the field; commas separate fields outside quotes.
    /// Fields are trimmed and any surviving surrounding quote is stripped
    /// afterwards. Doubled internal quotes therefore collapse to nothing
    /// rather than back to one quote: the writer escapes them, the parser
    /// does not undo it.
    pub(crate) fn split_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for ch in line.chars() {
            match ch {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
                _ => current.push(ch),
            }
        }
        fields.push(current);

        fields.iter().map(|f| Self::unquote(f)).collect()
    }

    fn unquote(field: &str) -> String {
        let field = field.trim();
        let field = field.strip_prefix('"').unwrap_or(field);
        let field = field.strip_suffix('"').unwrap_or(field);
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(CsvParser::parse("").is_empty());
        assert!(CsvParser::parse("\n  \n\t\n").is_empty());
    }

    #[test]
    fn header_line_is_skipped() {
        let rows = CsvParser::parse("Name,URL\nDocs,https://x.test\n");
        assert_eq!(rows, vec![Row::new("Docs", "https://x.test")]);
    }

    #[test]
    fn first_line_without_known_tokens_is_data() {
        let rows = CsvParser::parse("Docs,https://x.test\nWiki,https://y.test\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], Row::new("Docs", "https://x.test"));
    }

    #[test]
    fn comma_inside_quotes_is_preserved() {
        let rows = CsvParser::parse("\"A\",\"B,C\"");
        assert_eq!(rows, vec![Row::new("A", "B,C")]);
    }

    #[test]
    fn lone_url_doubles_as_name() {
        let rows = CsvParser::parse("https://x.test");
        assert_eq!(rows, vec![Row::new("https://x.test", "https://x.test")]);
    }

    #[test]
    fn lone_non_url_field_is_dropped() {
        assert!(CsvParser::parse("just some text").is_empty());
    }

    #[test]
    fn extra_fields_beyond_two_are_ignored() {
        let rows = CsvParser::parse("a,b,c,d");
        assert_eq!(rows, vec![Row::new("a", "b")]);
    }

    #[test]
    fn fields_are_trimmed() {
        let rows = CsvParser::parse("  Docs , https://x.test ");
        assert_eq!(rows, vec![Row::new("Docs", "https://x.test")]);
    }

    #[test]
    fn doubled_quotes_collapse_instead_of_unescaping() {
        // Asymmetry with the writer, kept deliberately: the writer doubles
        // internal quotes, the parser drops every quote character.
        let rows = CsvParser::parse("\"say \"\"hi\"\"\",\"v\"");
        assert_eq!(rows[0].name, "say hi");
    }

    #[test]
    fn quotes_inside_an_unquoted_field_guard_commas_and_vanish() {
        let rows = CsvParser::parse("a\"b,c\"d,https://x.test");
        assert_eq!(rows, vec![Row::new("ab,cd", "https://x.test")]);
    }

    #[test]
    fn data_first_cell_matching_a_header_token_is_skipped() {
        // The documented failure mode of the heuristic.
        let rows = CsvParser::parse("Name of thing,https://x.test\nb,https://y.test");
        assert_eq!(rows, vec![Row::new("b", "https://y.test")]);
    }
}
