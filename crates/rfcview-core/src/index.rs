//! Whole-index segmentation and the record directory

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parser::parse_record;
use crate::record::Record;

/// Heading text that appears once in the table of contents and once above the listing
pub const INDEX_MARKER: &str = "RFC INDEX";

/// All issued records of one index, keyed by number
///
/// Ordered by number so that every walk over the directory is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    records: BTreeMap<u32, Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any earlier record with the same number
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.number, record)
    }

    pub fn get(&self, number: u32) -> Option<&Record> {
        self.records.get(&number)
    }

    pub fn contains(&self, number: u32) -> bool {
        self.records.contains_key(&number)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending number order
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

impl FromIterator<Record> for Directory {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut directory = Directory::new();
        for record in iter {
            directory.insert(record);
        }
        directory
    }
}

/// Parse a complete `rfc-index.txt` into a directory.
///
/// Everything up to and including the line after the second [`INDEX_MARKER`]
/// is preamble. After that, each run of non-blank lines is one entry.
pub fn parse_index(raw: &str) -> Result<Directory> {
    let mut directory = Directory::new();
    let mut block: Vec<&str> = Vec::new();
    let mut blocks = 0usize;
    let mut markers_left = 2u8;

    let mut lines = raw.lines();
    while let Some(line) = lines.next() {
        if markers_left > 0 {
            if line.contains(INDEX_MARKER) {
                markers_left -= 1;
                // underline
                lines.next();
            }
            continue;
        }

        if line.is_empty() {
            if !block.is_empty() {
                blocks += 1;
                flush(&mut block, &mut directory)?;
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        blocks += 1;
        flush(&mut block, &mut directory)?;
    }

    if markers_left > 0 {
        tracing::warn!("Index listing not found: missing '{}' heading", INDEX_MARKER);
    }
    tracing::debug!(
        "Parsed {} entries into {} records",
        blocks,
        directory.len()
    );

    Ok(directory)
}

fn flush(block: &mut Vec<&str>, directory: &mut Directory) -> Result<()> {
    if let Some(record) = parse_record(block.as_slice())? {
        if let Some(previous) = directory.insert(record) {
            tracing::debug!("Duplicate entry for RFC{} replaced", previous.number);
        }
    }
    block.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const PREAMBLE: &str = "
                             RFC INDEX
                           -------------

CONTENTS

   Key to citations

                                RFC INDEX
                                ---------

";

    fn index(body: &str) -> String {
        format!("{}{}", PREAMBLE, body)
    }

    #[test]
    fn test_parse_index() {
        let raw = index(
            "0001 Host Software. S. Crocker. April 1969. (Format: TXT, HTML) (Status:
     UNKNOWN) (DOI: 10.17487/RFC0001)

0002 Host software. B. Duvall. April 1969. (Format: TXT, PDF, HTML)
     (Status: UNKNOWN) (DOI: 10.17487/RFC0002)

0003 Documentation conventions. S.D. Crocker. April 1969. (Format: TXT,
     HTML) (Obsoleted by RFC0010) (Status: UNKNOWN) (DOI:
     10.17487/RFC0003)
",
        );

        let directory = parse_index(&raw).unwrap();
        assert_eq!(directory.len(), 3);
        assert_eq!(directory.get(1).unwrap().title, "Host Software");
        assert_eq!(directory.get(2).unwrap().published, 196904);
        assert_eq!(directory.get(3).unwrap().obsoleted_by, vec![10]);
    }

    #[test]
    fn test_trailing_block_without_blank_line() {
        let raw = index("0001 Host Software. S. Crocker. April 1969. (Format: TXT)");
        let directory = parse_index(&raw).unwrap();
        assert!(directory.contains(1));
    }

    #[test]
    fn test_not_issued_is_omitted() {
        let raw = index(
            "4998 Fake. A. Author. August 2007. (Updates RFC4999)

4999 Not Issued.

5000 Internet Official Protocol Standards. RFC Editor. May 2008. (Format: TXT)
",
        );
        let directory = parse_index(&raw).unwrap();
        assert_eq!(directory.len(), 2);
        assert!(!directory.contains(4999));
        assert_eq!(directory.get(4998).unwrap().updates, vec![4999]);
    }

    #[test]
    fn test_duplicate_number_overwrites() {
        let raw = index(
            "0010 First. A. Author. July 1969.

0010 Second. A. Author. August 1969.
",
        );
        let directory = parse_index(&raw).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get(10).unwrap().title, "Second");
    }

    #[test]
    fn test_malformed_entry_aborts() {
        let raw = index(
            "0001 Host Software. S. Crocker. April 1969.

     (Status: UNKNOWN)
",
        );
        assert!(matches!(
            parse_index(&raw),
            Err(Error::MalformedRecordHeader(_))
        ));
    }

    #[test]
    fn test_preamble_only() {
        assert!(parse_index(PREAMBLE).unwrap().is_empty());
        assert!(parse_index("no markers here\n\n0001 Host. A. April 1969.").unwrap().is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let raw = index("0001 Host Software. S. Crocker. April 1969.\n\n0002 Host software. B. Duvall. April 1969.\n")
            .replace('\n', "\r\n");
        let directory = parse_index(&raw).unwrap();
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_directory_from_iter() {
        let directory: Directory = vec![Record::new(2, "b", 0), Record::new(1, "a", 0)]
            .into_iter()
            .collect();
        let numbers: Vec<u32> = directory.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
