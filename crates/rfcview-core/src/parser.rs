//! Single-record parser for `rfc-index.txt` entries
//!
//! An entry is one paragraph of the index, e.g.
//!
//! ```text
//! 7230 Hypertext Transfer Protocol (HTTP/1.1): Message Syntax and Routing.
//!      R. Fielding, Ed., J. Reschke, Ed.. June 2014. (Format: TXT, HTML)
//!      (Obsoletes RFC2145, RFC2616) (Obsoleted by RFC9110, RFC9112)
//!      (Updates RFC2817, RFC2818) (Updated by RFC8615) (Status: PROPOSED
//!      STANDARD) (DOI: 10.17487/RFC7230)
//! ```
//!
//! Continuation lines are folded into one line, the text is cut at every
//! `". "`, and the pieces are read positionally: header first, date second to
//! last, annotation clauses last.

use crate::error::{Error, Result};
use crate::record::{month_ordinal, Record, RelationKind};

/// Title used by the index for numbers that were reserved but never published
pub const NOT_ISSUED: &str = "Not Issued";

const FRAGMENT_DELIMITER: &str = ". ";
const LIST_DELIMITER: &str = ", ";
const REFERENCE_PREFIX_LEN: usize = "RFC".len();

/// Parse the raw lines of one index entry.
///
/// Returns `Ok(None)` for withdrawn numbers. Fails only when the entry does not
/// start with `<number> <title>`.
pub fn parse_record<S: AsRef<str>>(lines: &[S]) -> Result<Option<Record>> {
    let text = fold_lines(lines);
    let fragments: Vec<&str> = text.split(FRAGMENT_DELIMITER).collect();

    let (number, title) = parse_header(fragments[0])?;
    if title == NOT_ISSUED {
        tracing::trace!("RFC{} was not issued", number);
        return Ok(None);
    }

    let published = match fragments.len() {
        n if n >= 2 => parse_date(fragments[n - 2]),
        _ => None,
    };
    let published = published.unwrap_or_else(|| {
        tracing::warn!("RFC{} has no recognisable publication date", number);
        0
    });

    let mut record = Record::new(number, title, published);
    if let Some(annotations) = fragments.last() {
        for clause in Clauses::new(annotations) {
            for kind in RelationKind::ALL {
                if let Some(list) = clause.strip_prefix(kind.clause_prefix()) {
                    *record.relation_mut(kind) = parse_references(list, number, kind);
                    break;
                }
            }
        }
    }

    Ok(Some(record))
}

/// Join continuation lines and collapse whitespace runs into single spaces.
///
/// A single trailing space is kept so that a final `"."` still acts as a
/// fragment delimiter.
fn fold_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut text = String::new();
    for word in lines.iter().flat_map(|line| line.as_ref().split_whitespace()) {
        text.push_str(word);
        text.push(' ');
    }
    text
}

fn parse_header(fragment: &str) -> Result<(u32, &str)> {
    let malformed = || Error::MalformedRecordHeader(fragment.to_string());

    let (digits, title) = fragment.split_once(' ').ok_or_else(malformed)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let number = digits.parse::<u32>().map_err(|_| malformed())?;

    Ok((number, title))
}

/// Read `"<Month> <Year>"`, tolerating a leading day (`"1 April 1999"`)
fn parse_date(fragment: &str) -> Option<u32> {
    let mut tokens = fragment.split(' ').rev();
    let year = tokens.next()?.parse::<u32>().ok()?;
    let month = month_ordinal(tokens.next()?)?;
    year.checked_mul(100)?.checked_add(month)
}

fn parse_references(list: &str, number: u32, kind: RelationKind) -> Vec<u32> {
    list.split(LIST_DELIMITER)
        .filter_map(|token| {
            let parsed = token
                .get(REFERENCE_PREFIX_LEN..)
                .and_then(|digits| digits.parse::<u32>().ok());
            if parsed.is_none() {
                tracing::debug!("RFC{}: skipping '{}' reference '{}'", number, kind, token);
            }
            parsed
        })
        .collect()
}

/// Iterator over the contents of non-nested `(...)` groups
struct Clauses<'a> {
    rest: &'a str,
}

impl<'a> Clauses<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Clauses<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let open = self.rest.find('(')?;
        let after_open = &self.rest[open + 1..];
        let close = after_open.find(')')?;
        self.rest = &after_open[close + 1..];
        Some(&after_open[..close])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<&str> {
        text.split('\n').collect()
    }

    const HTTP_SEMANTICS: &str = "9110 HTTP Semantics. R. Fielding, Ed., M. Nottingham, Ed., J. Reschke,
     Ed.. June 2022. (Format: HTML, TXT, PDF, XML) (Obsoletes RFC2818,
     RFC7230, RFC7231, RFC7232, RFC7233, RFC7235, RFC7538, RFC7615,
     RFC7694) (Updates RFC3864) (Also STD0097) (Status: INTERNET
     STANDARD) (DOI: 10.17487/RFC9110) ";

    const HTTP_MESSAGING: &str = "7230 Hypertext Transfer Protocol (HTTP/1.1): Message Syntax and Routing.
     R. Fielding, Ed., J. Reschke, Ed.. June 2014. (Format: TXT, HTML)
     (Obsoletes RFC2145, RFC2616) (Obsoleted by RFC9110, RFC9112)
     (Updates RFC2817, RFC2818) (Updated by RFC8615) (Status: PROPOSED
     STANDARD) (DOI: 10.17487/RFC7230) ";

    #[test]
    fn test_parse_with_updates_and_obsoletes() {
        let record = parse_record(&lines(HTTP_SEMANTICS)).unwrap().unwrap();

        assert_eq!(record.number, 9110);
        assert_eq!(record.title, "HTTP Semantics");
        assert_eq!(record.published, 202206);
        assert_eq!(
            record.obsoletes,
            vec![2818, 7230, 7231, 7232, 7233, 7235, 7538, 7615, 7694]
        );
        assert_eq!(record.updates, vec![3864]);
        assert!(record.updated_by.is_empty());
        assert!(record.obsoleted_by.is_empty());
    }

    #[test]
    fn test_parse_with_updated_by_and_obsoleted_by() {
        let record = parse_record(&lines(HTTP_MESSAGING)).unwrap().unwrap();

        assert_eq!(record.number, 7230);
        assert_eq!(
            record.title,
            "Hypertext Transfer Protocol (HTTP/1.1): Message Syntax and Routing"
        );
        assert_eq!(record.published, 201406);
        assert_eq!(record.obsoletes, vec![2145, 2616]);
        assert_eq!(record.obsoleted_by, vec![9110, 9112]);
        assert_eq!(record.updates, vec![2817, 2818]);
        assert_eq!(record.updated_by, vec![8615]);
    }

    #[test]
    fn test_parse_not_issued() {
        assert!(parse_record(&["4999 Not Issued. "]).unwrap().is_none());
        assert!(parse_record(&["4999 Not Issued."]).unwrap().is_none());
    }

    #[test]
    fn test_title_with_digits_keeps_number_once() {
        let record = parse_record(&["2324 1234 Ways to Count. A. Author. May 1998. (Format: TXT)"])
            .unwrap()
            .unwrap();

        assert_eq!(record.number, 2324);
        assert_eq!(record.title, "1234 Ways to Count");
        assert_eq!(record.published, 199805);
    }

    #[test]
    fn test_parse_april_fools_date() {
        let record = parse_record(&lines(
            "2550 Y10K and Beyond. S. Glassman, M. Manasse, J. Mogul. 1 April 1999.
     (Format: TXT, HTML) (Status: INFORMATIONAL) (DOI: 10.17487/RFC2550)",
        ))
        .unwrap()
        .unwrap();

        assert_eq!(record.published, 199904);
    }

    #[test]
    fn test_unrecognised_date_is_not_fatal() {
        let record = parse_record(&["1 Host Software. S. Crocker. Someday 1969. (Format: TXT)"])
            .unwrap()
            .unwrap();

        assert_eq!(record.number, 1);
        assert_eq!(record.published, 0);
    }

    #[test]
    fn test_oversized_year_is_unknown() {
        let record = parse_record(&["10 Big Year. A. Author. June 99999999. (Format: TXT)"])
            .unwrap()
            .unwrap();

        assert_eq!(record.title, "Big Year");
        assert_eq!(record.published, 0);
    }

    #[test]
    fn test_malformed_header() {
        let err = parse_record(&["     (Obsoletes RFC0001) (Status: UNKNOWN)"]).unwrap_err();
        assert!(matches!(err, Error::MalformedRecordHeader(_)));

        assert!(parse_record(&["RFC9110 HTTP Semantics. June 2022."]).is_err());
        assert!(parse_record(&["9110. June 2022."]).is_err());
    }

    #[test]
    fn test_repeated_clause_last_wins() {
        let record = parse_record(&[
            "100 Dup. A. Author. March 1971. (Updates RFC0010) (Updates RFC0020, RFC0030)",
        ])
        .unwrap()
        .unwrap();

        assert_eq!(record.updates, vec![20, 30]);
    }

    #[test]
    fn test_unparseable_reference_is_skipped() {
        let record = parse_record(&[
            "200 Odd. A. Author. March 1971. (Obsoletes RFC0100, NIC 7104, RFC0150)",
        ])
        .unwrap()
        .unwrap();

        assert_eq!(record.obsoletes, vec![100, 150]);
    }

    #[test]
    fn test_clauses() {
        let found: Vec<&str> = Clauses::new("(Format: TXT) junk (Updates RFC0001) (unclosed").collect();
        assert_eq!(found, vec!["Format: TXT", "Updates RFC0001"]);
    }
}
