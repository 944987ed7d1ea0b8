use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, ParseError};
use crate::types::{Base, Pair, Structure};

/// Parse a structure file.
///
/// Layout:
///
/// ```text
/// ACGU        sequence
/// 1           number of pairs
/// 0 3 A U     index1 index2 base1 base2, one line per pair
/// ```
///
/// Lines after the declared pairs are ignored. Pair indices and bases are not
/// checked against the sequence. An empty sequence is allowed, and a negative
/// pair count reads as zero pairs.
pub fn parse(input: &str) -> Result<Structure, ParseError> {
    let mut lines = input.lines();

    let raw = lines.next().unwrap_or("");
    let bases = raw
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            Base::from_char(ch).ok_or(ParseError::UnknownBase {
                column: i + 1,
                found: ch,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let count_line = lines.next().unwrap_or("");
    let count: i64 = count_line
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidPairCount {
            line: 2,
            found: count_line.to_string(),
        })?;
    let count = count.max(0) as usize;

    let mut pairs = Vec::new();
    for k in 0..count {
        let line_no = k + 3;
        let line = lines.next().ok_or(ParseError::MissingPair {
            line: line_no,
            expected: count,
            found: k,
        })?;
        pairs.push(parse_pair(line, line_no)?);
    }

    debug!(bases = bases.len(), pairs = pairs.len(), "parsed structure");
    Ok(Structure {
        raw: raw.to_string(),
        bases,
        pairs,
    })
}

fn parse_pair(line: &str, line_no: usize) -> Result<Pair, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[i, j, b1, b2] = &fields[..] else {
        return Err(ParseError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };
    Ok(Pair {
        index1: parse_index(i, line_no)?,
        index2: parse_index(j, line_no)?,
        base1: parse_pair_base(b1, line_no)?,
        base2: parse_pair_base(b2, line_no)?,
    })
}

fn parse_index(field: &str, line_no: usize) -> Result<i64, ParseError> {
    field.parse().map_err(|_| ParseError::InvalidIndex {
        line: line_no,
        found: field.to_string(),
    })
}

fn parse_pair_base(field: &str, line_no: usize) -> Result<Base, ParseError> {
    let mut chars = field.chars();
    match (chars.next().and_then(Base::from_char), chars.next()) {
        (Some(base), None) => Ok(base),
        _ => Err(ParseError::UnknownPairBase {
            line: line_no,
            found: field.to_string(),
        }),
    }
}

/// Read and parse a structure file. The file is closed before parsing starts.
pub fn read_structure(path: impl AsRef<Path>) -> Result<Structure, Error> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse(&text).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pair() {
        let s = parse("ACGU\n1\n0 3 A U\n").unwrap();
        assert_eq!(s.raw, "ACGU");
        assert_eq!(s.bases, vec![Base::A, Base::C, Base::G, Base::U]);
        assert_eq!(
            s.pairs,
            vec![Pair {
                index1: 0,
                index2: 3,
                base1: Base::A,
                base2: Base::U,
            }]
        );
    }

    #[test]
    fn test_no_pairs() {
        let s = parse("GGGAAACCC\n0\n").unwrap();
        assert_eq!(s.len(), 9);
        assert!(s.pairs.is_empty());
    }

    #[test]
    fn test_crlf() {
        let s = parse("GAUC\r\n1\r\n0 2 G U\r\n").unwrap();
        assert_eq!(s.raw, "GAUC");
        assert_eq!(s.pairs[0].base2, Base::U);
    }

    #[test]
    fn test_extra_lines_ignored() {
        let s = parse("ACGU\n1\n0 3 A U\n1 2 C G\n").unwrap();
        assert_eq!(s.pairs.len(), 1);
    }

    #[test]
    fn test_pair_bases_not_checked_against_sequence() {
        let s = parse("AAAA\n1\n0 3 G C\n").unwrap();
        assert_eq!(s.pairs[0].base1, Base::G);
        assert_eq!(s.pairs[0].base2, Base::C);
    }

    #[test]
    fn test_empty_sequence() {
        let s = parse("\n0\n").unwrap();
        assert_eq!(s.raw, "");
        assert!(s.is_empty());
        assert!(s.pairs.is_empty());
        // an empty file still needs a pair count
        assert!(matches!(
            parse(""),
            Err(ParseError::InvalidPairCount { line: 2, .. })
        ));
    }

    #[test]
    fn test_negative_pair_count_means_no_pairs() {
        let s = parse("ACGU\n-1\n0 3 A U\n").unwrap();
        assert!(s.pairs.is_empty());
        assert!(parse("ACGU\n -3 \n").unwrap().pairs.is_empty());
    }

    #[test]
    fn test_negative_index() {
        let s = parse("ACGU\n1\n-1 3 A U\n").unwrap();
        assert_eq!(s.pairs[0].index1, -1);
        assert_eq!(s.pairs[0].index2, 3);
    }

    #[test]
    fn test_unknown_base() {
        assert_eq!(
            parse("ACTG\n0\n"),
            Err(ParseError::UnknownBase {
                column: 3,
                found: 'T'
            })
        );
        assert!(parse("acgu\n0\n").is_err());
    }

    #[test]
    fn test_unknown_pair_base() {
        assert_eq!(
            parse("ACGU\n1\n0 3 A X\n"),
            Err(ParseError::UnknownPairBase {
                line: 3,
                found: "X".into()
            })
        );
        assert!(parse("ACGU\n1\n0 3 AU U\n").is_err());
    }

    #[test]
    fn test_bad_pair_count() {
        assert!(matches!(
            parse("ACGU\nx\n"),
            Err(ParseError::InvalidPairCount { line: 2, .. })
        ));
        assert!(parse("ACGU\n1.5\n").is_err());
        assert!(parse("ACGU").is_err());
    }

    #[test]
    fn test_too_few_pairs() {
        assert_eq!(
            parse("ACGU\n2\n0 3 A U\n"),
            Err(ParseError::MissingPair {
                line: 4,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_malformed_pair_line() {
        assert_eq!(
            parse("ACGU\n1\n0 3 A\n"),
            Err(ParseError::FieldCount { line: 3, found: 3 })
        );
        assert_eq!(
            parse("ACGU\n1\n0 three A U\n"),
            Err(ParseError::InvalidIndex {
                line: 3,
                found: "three".into()
            })
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_structure("does/not/exist.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
