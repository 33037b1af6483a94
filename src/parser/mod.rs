//! Parser module for friendgraph.
//!
//! This module reads the plain-text friends format: a person count, one
//! `name|y|school` or `name|n` line per person, then one `a|b` line per
//! friendship.
//!
//! # Example
//!
//! ```
//! use friendgraph::parser::{parse_str, validate};
//!
//! let file = parse_str("2\nsam|y|rutgers\njane|n\nsam|jane\n").unwrap();
//! validate(&file).unwrap();
//!
//! let students: Vec<_> = file.people.iter().filter(|p| p.is_student()).collect();
//! assert_eq!(students.len(), 1);
//! ```

pub mod friends_file;
pub mod types;

// Re-export commonly used types for convenience
pub use friends_file::{parse_file, parse_str, validate, ParseError, ParseResult};

pub use types::{FriendsFile, FriendshipRecord, PersonRecord};
