//! Parser for friends files.
//!
//! A friends file starts with the number of people, followed by one line
//! per person and then one line per friendship:
//!
//! ```text
//! 4
//! sam|y|rutgers
//! jane|y|rutgers
//! michele|y|cornell
//! kaitlin|n
//! sam|jane
//! jane|michele
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::types::{FriendsFile, FriendshipRecord, PersonRecord};
use crate::graph::normalize_name;

/// Field separator used on every record line.
const SEPARATOR: char = '|';

/// Errors that can occur while reading a friends file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The file has no content at all.
    #[error("Missing person count: the file is empty")]
    MissingPersonCount,

    /// The first line is not a non-negative integer.
    #[error("Line {line}: invalid person count '{value}'")]
    InvalidPersonCount { line: usize, value: String },

    /// The file ended before all announced people were read.
    #[error("Expected {expected} people but the file ends after {found}")]
    MissingPeople { expected: usize, found: usize },

    /// A person line is not `name|y|school` or `name|n`.
    #[error("Line {line}: malformed person '{text}': {reason}")]
    MalformedPerson {
        line: usize,
        text: String,
        reason: &'static str,
    },

    /// A friendship line is not `a|b`.
    #[error("Line {line}: malformed friendship '{text}'")]
    MalformedFriendship { line: usize, text: String },

    /// The same person is declared twice (names are case-insensitive).
    #[error("Person '{0}' is declared more than once")]
    DuplicatePerson(String),

    /// A friendship references someone missing from the people block.
    #[error("Friendship '{friendship}' references unknown person '{name}'")]
    UnknownPerson { name: String, friendship: String },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Upper bound on the capacity reserved up front for the people block.
const PEOPLE_CAPACITY_HINT: usize = 1024;

/// Parses a friends file from a file path.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use friendgraph::parser::parse_file;
///
/// let file = parse_file(Path::new("friends.txt")).unwrap();
/// println!("{} people", file.person_count());
/// ```
pub fn parse_file(path: &Path) -> ParseResult<FriendsFile> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a friends file from a string.
///
/// Blank lines are ignored and every field is trimmed. Names are not
/// lowercased until they reach the graph.
///
/// # Example
///
/// ```
/// use friendgraph::parser::parse_str;
///
/// let file = parse_str("2\nsam|y|rutgers\njane|n\nsam|jane\n").unwrap();
/// assert_eq!(file.person_count(), 2);
/// assert_eq!(file.friendship_count(), 1);
/// assert_eq!(file.people[0].school.as_deref(), Some("rutgers"));
/// ```
pub fn parse_str(content: &str) -> ParseResult<FriendsFile> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty());

    let (count_line, count_text) = lines.next().ok_or(ParseError::MissingPersonCount)?;
    let count: usize = count_text
        .parse()
        .map_err(|_| ParseError::InvalidPersonCount {
            line: count_line,
            value: count_text.to_string(),
        })?;

    // The count is untrusted, so it only bounds the loop.
    let mut people = Vec::with_capacity(count.min(PEOPLE_CAPACITY_HINT));
    while people.len() < count {
        let (line, text) = lines.next().ok_or(ParseError::MissingPeople {
            expected: count,
            found: people.len(),
        })?;
        people.push(parse_person(line, text)?);
    }

    let friendships = lines
        .map(|(line, text)| parse_friendship(line, text))
        .collect::<ParseResult<Vec<_>>>()?;

    Ok(FriendsFile {
        people,
        friendships,
    })
}

fn parse_person(line: usize, text: &str) -> ParseResult<PersonRecord> {
    let malformed = |reason| ParseError::MalformedPerson {
        line,
        text: text.to_string(),
        reason,
    };

    let fields: Vec<&str> = text.split(SEPARATOR).map(str::trim).collect();
    let (name, school) = match fields.as_slice() {
        [name, flag] if flag.eq_ignore_ascii_case("n") => (*name, None),
        [_, flag] if flag.eq_ignore_ascii_case("y") => {
            return Err(malformed("school flag 'y' without a school"))
        }
        [name, flag, school] if flag.eq_ignore_ascii_case("y") => {
            if school.is_empty() {
                return Err(malformed("empty school"));
            }
            (*name, Some(school.to_string()))
        }
        [_, _] | [_, _, _] => return Err(malformed("school flag must be 'y' or 'n'")),
        _ => return Err(malformed("expected 'name|y|school' or 'name|n'")),
    };

    if name.is_empty() {
        return Err(malformed("empty name"));
    }

    Ok(PersonRecord::new(name, school))
}

fn parse_friendship(line: usize, text: &str) -> ParseResult<FriendshipRecord> {
    match text.split(SEPARATOR).map(str::trim).collect::<Vec<_>>().as_slice() {
        [first, second] if !first.is_empty() && !second.is_empty() => {
            Ok(FriendshipRecord::new(*first, *second))
        }
        _ => Err(ParseError::MalformedFriendship {
            line,
            text: text.to_string(),
        }),
    }
}

/// Validates cross-record consistency of a parsed file.
///
/// Checks that no person is declared twice and that every friendship
/// names declared people. Both comparisons are case-insensitive.
pub fn validate(file: &FriendsFile) -> ParseResult<()> {
    let mut names = HashSet::with_capacity(file.people.len());
    for person in &file.people {
        let name = normalize_name(&person.name);
        if !names.insert(name.clone()) {
            return Err(ParseError::DuplicatePerson(name));
        }
    }

    for friendship in &file.friendships {
        for name in [&friendship.first, &friendship.second] {
            if !names.contains(&normalize_name(name)) {
                return Err(ParseError::UnknownPerson {
                    name: name.clone(),
                    friendship: friendship.to_string(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
6
sam|y|rutgers
jane|y|rutgers
michele|y|cornell
sergei|y|rutgers
ricardo|y|penn state
kaitlin|n
sam|jane
jane|sergei
michele|ricardo
kaitlin|ricardo
";

    #[test]
    fn test_parse_sample() {
        let file = parse_str(SAMPLE).unwrap();

        assert_eq!(file.person_count(), 6);
        assert_eq!(file.friendship_count(), 4);
        assert_eq!(file.people[4].name, "ricardo");
        assert_eq!(file.people[4].school.as_deref(), Some("penn state"));
        assert_eq!(file.people[5].school, None);
        assert_eq!(file.friendships[0], FriendshipRecord::new("sam", "jane"));
        assert!(validate(&file).is_ok());
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let content = "\n 2 \n\n Sam | y | Rutgers \nJane|N\n\n  sam | jane  \n";
        let file = parse_str(content).unwrap();

        assert_eq!(file.people[0], PersonRecord::new("Sam", Some("Rutgers".to_string())));
        assert_eq!(file.people[1], PersonRecord::new("Jane", None));
        assert_eq!(file.friendships, vec![FriendshipRecord::new("sam", "jane")]);
    }

    #[test]
    fn test_parse_zero_people() {
        let file = parse_str("0\n").unwrap();
        assert!(file.is_empty());
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(matches!(parse_str(""), Err(ParseError::MissingPersonCount)));
        assert!(matches!(parse_str("\n  \n"), Err(ParseError::MissingPersonCount)));
    }

    #[test]
    fn test_parse_invalid_count() {
        let err = parse_str("three\nsam|n\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPersonCount { line: 1, .. }));

        let err = parse_str("-1\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidPersonCount { .. }));
    }

    #[test]
    fn test_parse_missing_people() {
        let err = parse_str("3\nsam|n\njane|n\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingPeople {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_parse_huge_count_is_an_error() {
        let err = parse_str("18446744073709551615\nsam|n\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MissingPeople {
                expected: usize::MAX,
                found: 1
            }
        ));

        let err = parse_str("1000000000000\nsam|n\njane|n\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingPeople { found: 2, .. }));
    }

    #[test]
    fn test_parse_malformed_person() {
        for content in ["1\nsam\n", "1\nsam|y\n", "1\nsam|x\n", "1\nsam|y|\n", "1\n|n\n", "1\na|y|b|c\n"] {
            let err = parse_str(content).unwrap_err();
            assert!(
                matches!(err, ParseError::MalformedPerson { line: 2, .. }),
                "unexpected result for {:?}: {}",
                content,
                err
            );
        }
    }

    #[test]
    fn test_parse_malformed_friendship() {
        let err = parse_str("2\nsam|n\njane|n\nsam|jane\nsam\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedFriendship { line: 5, .. }));

        let err = parse_str("2\nsam|n\njane|n\nsam|\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedFriendship { line: 4, .. }));
    }

    #[test]
    fn test_error_messages_include_line() {
        let err = parse_str("1\nsam|q\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Line 2: malformed person 'sam|q': school flag must be 'y' or 'n'"
        );
    }

    #[test]
    fn test_validate_duplicate_person() {
        let file = parse_str("2\nSam|n\nsam|y|rutgers\n").unwrap();
        let err = validate(&file).unwrap_err();
        assert!(matches!(err, ParseError::DuplicatePerson(ref name) if name == "sam"));
    }

    #[test]
    fn test_validate_unknown_person() {
        let file = parse_str("1\nsam|n\nsam|jane\n").unwrap();
        let err = validate(&file).unwrap_err();
        assert!(matches!(err, ParseError::UnknownPerson { ref name, .. } if name == "jane"));
    }

    #[test]
    fn test_validate_is_case_insensitive() {
        let file = parse_str("2\nSam|n\nJANE|n\nsAm|jane\n").unwrap();
        assert!(validate(&file).is_ok());
    }

    #[test]
    fn test_parse_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(SAMPLE.as_bytes()).unwrap();

        let file = parse_file(tmp.path()).unwrap();
        assert_eq!(file.person_count(), 6);
    }

    #[test]
    fn test_parse_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, ParseError::IoError(_)));
    }
}
