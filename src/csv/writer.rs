use crate::core::kind::ListKind;
use crate::core::row::Row;

pub struct CsvWriter;

impl CsvWriter {
    /// Write a two-column CSV file: a plain header line, then every field
    /// unconditionally quoted with internal quotes doubled.
    pub fn write(rows: &[Row], headers: (&str, &str)) -> String {
        let mut out = String::new();
        out.push_str(&format!("{},{}\n", headers.0, headers.1));
        for row in rows {
            out.push_str(&format!(
                "{},{}\n",
                Self::quote(&row.name),
                Self::quote(&row.value)
            ));
        }
        out
    }

    /// Write all three lists into the unified `Category,Name,Value` shape,
    /// tagging each row with its list's category.
    pub fn write_unified(lists: &[(ListKind, &[Row])]) -> String {
        let mut out = String::new();
        out.push_str("Category,Name,Value\n");
        for (kind, rows) in lists {
            for row in *rows {
                out.push_str(&format!(
                    "{},{},{}\n",
                    Self::quote(kind.category()),
                    Self::quote(&row.name),
                    Self::quote(&row.value)
                ));
            }
        }
        out
    }

    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::parser::CsvParser;

    #[test]
    fn fields_are_always_quoted() {
        let out = CsvWriter::write(&[Row::new("Docs", "https://x.test")], ("Name", "URL"));
        assert_eq!(out, "Name,URL\n\"Docs\",\"https://x.test\"\n");
    }

    #[test]
    fn internal_quotes_are_doubled() {
        let out = CsvWriter::write(&[Row::new("say \"hi\"", "v")], ("Name", "URL"));
        assert!(out.contains("\"say \"\"hi\"\"\",\"v\""));
    }

    #[test]
    fn roundtrip_without_newlines_or_quotes() {
        let rows = vec![
            Row::new("Docs", "https://x.test"),
            Row::new("comma, inside", "https://y.test/?a=1,2"),
            Row::new("", "empty name survives"),
        ];
        let out = CsvWriter::write(&rows, ("Data name", "Data value"));
        assert_eq!(CsvParser::parse(&out), rows);
    }

    #[test]
    fn unified_export_tags_each_list() {
        let links = [Row::new("Docs", "https://x.test")];
        let notes = [Row::new("wifi", "hunter2")];
        let tasks = [Row::new("buy milk", "")];
        let out = CsvWriter::write_unified(&[
            (ListKind::Links, &links),
            (ListKind::Notes, &notes),
            (ListKind::Tasks, &tasks),
        ]);
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Category,Name,Value"));
        assert_eq!(lines.next(), Some("\"URL\",\"Docs\",\"https://x.test\""));
        assert_eq!(lines.next(), Some("\"data\",\"wifi\",\"hunter2\""));
        assert_eq!(lines.next(), Some("\"work\",\"buy milk\",\"\""));
    }
}
