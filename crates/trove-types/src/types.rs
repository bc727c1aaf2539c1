use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Token that closes every rendered statement line
pub const STATEMENT_TERMINATOR: &str = ".";

/// Dense, zero-based identifier handed out by an interner.
///
/// Identifiers are assigned in first-seen order and are never reused, so an identifier
/// doubles as an index into the per-id tables of the store.
pub trait InternId: Copy + Eq + Ord + Hash + fmt::Debug {
    /// Build the identifier for the given table position.
    ///
    /// # Panics
    ///
    /// Panics if `index` does not fit in the 32-bit identifier space.
    fn from_index(index: usize) -> Self;

    /// Table position of this identifier
    fn index(self) -> usize;
}

/// Identifier of an entity (a subject or an object; both share one id space)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u32);

/// Identifier of a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredicateId(u32);

macro_rules! intern_id {
    ($name:ident) => {
        impl $name {
            /// Wrap a raw identifier value
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Raw identifier value
            #[must_use]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl InternId for $name {
            fn from_index(index: usize) -> Self {
                Self(u32::try_from(index).expect("identifier space exhausted"))
            }

            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

intern_id!(EntityId);
intern_id!(PredicateId);

/// A textual subject–predicate–object statement.
///
/// Parsed from a whitespace-separated line and rendered back as
/// `"<subject> <predicate> <object> ."`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Statement {
    /// Subject term
    pub subject: String,
    /// Predicate term
    pub predicate: String,
    /// Object term
    pub object: String,
}

impl Statement {
    /// Create a statement from its three terms
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self { subject: subject.into(), predicate: predicate.into(), object: object.into() }
    }

    /// Render a statement line from borrowed terms without building a `Statement`
    #[must_use]
    pub fn render(subject: &str, predicate: &str, object: &str) -> String {
        let mut line = String::with_capacity(
            subject.len() + predicate.len() + object.len() + STATEMENT_TERMINATOR.len() + 3,
        );
        line.push_str(subject);
        line.push(' ');
        line.push_str(predicate);
        line.push(' ');
        line.push_str(object);
        line.push(' ');
        line.push_str(STATEMENT_TERMINATOR);
        line
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {STATEMENT_TERMINATOR}", self.subject, self.predicate, self.object)
    }
}

/// Parses the first three whitespace-separated tokens of a line.
///
/// A trailing terminator and anything after the third token are ignored.
impl FromStr for Statement {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let mut next = |role: &str| {
            tokens.next().ok_or_else(|| anyhow!("missing {role} in statement line '{}'", line.trim()))
        };
        let subject = next("subject")?;
        let predicate = next("predicate")?;
        let object = next("object")?;
        Ok(Self::new(subject, predicate, object))
    }
}

impl<S, P, O> From<(S, P, O)> for Statement
where
    S: Into<String>,
    P: Into<String>,
    O: Into<String>,
{
    fn from((subject, predicate, object): (S, P, O)) -> Self {
        Self::new(subject, predicate, object)
    }
}
