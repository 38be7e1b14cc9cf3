//! The record stored in the demonstration trees and the comparators that order it.

use std::cmp::Ordering;
use std::fmt;

/// A student identified by an enrollment id and a display name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Student {
    pub id: u32,
    pub name: String,
}

impl Student {
    pub fn new<S>(id: u32, name: S) -> Self
    where
        S: Into<String>,
    {
        Student {
            id,
            name: name.into(),
        }
    }

    /// A search probe for trees ordered by `by_id`.
    pub fn with_id(id: u32) -> Self {
        Student::new(id, "")
    }

    /// A search probe for `by_name`.
    pub fn with_name<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Student::new(0, name)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.id, self.name)
    }
}

pub fn by_id(a: &Student, b: &Student) -> Ordering {
    a.id.cmp(&b.id)
}

pub fn by_name(a: &Student, b: &Student) -> Ordering {
    a.name.cmp(&b.name)
}

#[cfg(test)]
mod tests {
    use super::{by_id, by_name, Student};
    use serde_test::{assert_tokens, Token};
    use std::cmp::Ordering;

    #[test]
    fn test_by_id() {
        let a = Student::new(1, "Zed");
        let b = Student::new(2, "Amy");
        assert_eq!(by_id(&a, &b), Ordering::Less);
        assert_eq!(by_id(&a, &Student::with_id(1)), Ordering::Equal);
    }

    #[test]
    fn test_by_name() {
        let a = Student::new(1, "Zed");
        let b = Student::new(2, "Amy");
        assert_eq!(by_name(&a, &b), Ordering::Greater);
        assert_eq!(by_name(&b, &Student::with_name("Amy")), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(Student::new(2_000_000_001, "Bob Ure").to_string(), "2000000001 Bob Ure");
    }

    #[test]
    fn test_serde() {
        let student = Student::new(7, "Ana Lu");
        assert_tokens(
            &student,
            &[
                Token::Struct { name: "Student", len: 2 },
                Token::Str("id"),
                Token::U32(7),
                Token::Str("name"),
                Token::Str("Ana Lu"),
                Token::StructEnd,
            ],
        );
    }
}
