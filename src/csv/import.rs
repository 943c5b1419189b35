use crate::core::kind::ListKind;
use crate::core::row::Row;
use crate::csv::parser::CsvParser;
use crate::error::{Error, Result};

/// Where sniffed import content belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportPayload {
    /// A two-column file for one list.
    Single(ListKind, Vec<Row>),
    /// A `Category,Name,Value` file spanning all three lists.
    Unified {
        links: Vec<Row>,
        notes: Vec<Row>,
        tasks: Vec<Row>,
    },
}

/// Decide which list(s) a CSV file belongs to from its header line, and
/// parse it accordingly. Headers that match none of the known shapes yield
/// `FormatUnrecognized` and nothing is imported.
pub fn sniff(input: &str) -> Result<ImportPayload> {
    let header = input
        .split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| Error::FormatUnrecognized("empty file".into()))?;

    if header.contains("Category") {
        return Ok(parse_unified(input));
    }
    if header.contains("Task name") {
        return Ok(ImportPayload::Single(ListKind::Tasks, CsvParser::parse(input)));
    }
    if header.contains("Data name") {
        return Ok(ImportPayload::Single(ListKind::Notes, CsvParser::parse(input)));
    }
    if header.contains("Name") && header.contains("URL") {
        return Ok(ImportPayload::Single(ListKind::Links, CsvParser::parse(input)));
    }
    Err(Error::FormatUnrecognized(header.to_string()))
}

/// Distribute unified rows by their category tag. Rows with an unknown tag
/// or fewer than three fields are dropped.
fn parse_unified(input: &str) -> ImportPayload {
    let mut links = Vec::new();
    let mut notes = Vec::new();
    let mut tasks = Vec::new();

    for line in input
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .skip(1)
    {
        let fields = CsvParser::split_line(line);
        if fields.len() < 3 {
            continue;
        }
        let row = Row::new(fields[1].clone(), fields[2].clone());
        match ListKind::from_category(&fields[0]) {
            Some(ListKind::Links) => links.push(row),
            Some(ListKind::Notes) => notes.push(row),
            Some(ListKind::Tasks) => tasks.push(row),
            None => log::debug!("import: dropping row with unknown category {:?}", fields[0]),
        }
    }

    ImportPayload::Unified {
        links,
        notes,
        tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_each_single_list_header() {
        let links = sniff("Name,URL\n\"Docs\",\"https://x.test\"\n").unwrap();
        assert_eq!(
            links,
            ImportPayload::Single(ListKind::Links, vec![Row::new("Docs", "https://x.test")])
        );

        let notes = sniff("Data name,Data value\n\"wifi\",\"hunter2\"\n").unwrap();
        assert!(matches!(notes, ImportPayload::Single(ListKind::Notes, _)));

        let tasks = sniff("Task name,Remark\n\"buy milk\",\"\"\n").unwrap();
        assert!(matches!(tasks, ImportPayload::Single(ListKind::Tasks, _)));
    }

    #[test]
    fn unified_header_distributes_by_category() {
        let input = "Category,Name,Value\n\
                     \"URL\",\"Docs\",\"https://x.test\"\n\
                     \"data\",\"wifi\",\"hunter2\"\n\
                     \"work\",\"buy milk\",\"\"\n";
        let ImportPayload::Unified {
            links,
            notes,
            tasks,
        } = sniff(input).unwrap()
        else {
            panic!("expected unified payload");
        };
        assert_eq!(links, vec![Row::new("Docs", "https://x.test")]);
        assert_eq!(notes, vec![Row::new("wifi", "hunter2")]);
        assert_eq!(tasks, vec![Row::new("buy milk", "")]);
    }

    #[test]
    fn unknown_category_rows_are_dropped() {
        let input = "Category,Name,Value\n\"misc\",\"a\",\"b\"\n";
        let ImportPayload::Unified { links, notes, tasks } = sniff(input).unwrap() else {
            panic!("expected unified payload");
        };
        assert!(links.is_empty() && notes.is_empty() && tasks.is_empty());
    }

    #[test]
    fn unknown_header_is_rejected_with_no_partial_import() {
        let err = sniff("Foo,Bar\n\"a\",\"b\"\n").unwrap_err();
        assert!(matches!(err, Error::FormatUnrecognized(_)));
        assert!(matches!(sniff(""), Err(Error::FormatUnrecognized(_))));
    }
}
