//! Shared types for friends-file parsing.
//!
//! These are the raw records as they appear in the input. Names and
//! schools are kept as written; normalization happens when the records
//! are loaded into a [`FriendGraph`](crate::graph::FriendGraph).

use std::fmt;

/// A parsed friends file: the people block followed by the friendships block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FriendsFile {
    /// People in the order they were declared.
    pub people: Vec<PersonRecord>,

    /// Friendships in the order they were declared.
    pub friendships: Vec<FriendshipRecord>,
}

impl FriendsFile {
    /// Returns the number of declared people.
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Returns the number of declared friendships.
    pub fn friendship_count(&self) -> usize {
        self.friendships.len()
    }

    /// Returns true if the file declares nobody.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// A single `name|y|school` or `name|n` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    /// The person's name as written.
    pub name: String,

    /// The school, present only for `y` lines.
    pub school: Option<String>,
}

impl PersonRecord {
    /// Creates a person record.
    pub fn new(name: impl Into<String>, school: Option<String>) -> Self {
        Self {
            name: name.into(),
            school,
        }
    }

    /// Returns true if this person attends a school.
    pub fn is_student(&self) -> bool {
        self.school.is_some()
    }
}

impl fmt::Display for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.school {
            Some(school) => write!(f, "{}|y|{}", self.name, school),
            None => write!(f, "{}|n", self.name),
        }
    }
}

/// A single `a|b` friendship line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FriendshipRecord {
    pub first: String,
    pub second: String,
}

impl FriendshipRecord {
    /// Creates a friendship record.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for FriendshipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.first, self.second)
    }
}
