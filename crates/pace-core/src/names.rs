//! Fail-soft person name resolution.
//!
//! A [`PersonDirectory`] answers lookups and may fail; a [`NameResolver`]
//! never does. Every directory is a resolver: a failed lookup resolves to the
//! id's text form so log construction always completes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::PersonId;

/// Display name parts from the identity directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    #[must_use]
    pub fn new(first: &str, last: &str) -> Self {
        Self {
            first: first.to_string(),
            last: last.to_string(),
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Why a directory lookup did not produce a name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("person {0} not found")]
    NotFound(PersonId),

    /// Directory could not be reached or answered with an error.
    #[error("directory unavailable: {0}")]
    Unavailable(String),

    /// Directory answered with a record missing name parts.
    #[error("malformed directory record: {0}")]
    Malformed(String),
}

/// Source of person names keyed by id.
pub trait PersonDirectory {
    /// Look up the name for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] when the id is unknown or the directory cannot
    /// answer.
    fn lookup(&self, id: PersonId) -> Result<PersonName, LookupError>;
}

/// Maps person ids to display strings without ever failing.
pub trait NameResolver {
    fn resolve(&self, id: PersonId) -> String;
}

impl<D: PersonDirectory + ?Sized> NameResolver for D {
    fn resolve(&self, id: PersonId) -> String {
        match self.lookup(id) {
            Ok(name) => name.full_name(),
            Err(error) => {
                tracing::debug!(%id, %error, "name lookup failed, using id");
                id.to_string()
            }
        }
    }
}

/// In-memory directory, typically filled by prefetching from the Stats API.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    names: HashMap<PersonId, PersonName>,
}

impl StaticDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PersonId, name: PersonName) {
        self.names.insert(id, name);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(PersonId, PersonName)> for StaticDirectory {
    fn from_iter<I: IntoIterator<Item = (PersonId, PersonName)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl Extend<(PersonId, PersonName)> for StaticDirectory {
    fn extend<I: IntoIterator<Item = (PersonId, PersonName)>>(&mut self, iter: I) {
        self.names.extend(iter);
    }
}

impl PersonDirectory for StaticDirectory {
    fn lookup(&self, id: PersonId) -> Result<PersonName, LookupError> {
        let name = self.names.get(&id).ok_or(LookupError::NotFound(id))?;
        if name.first.trim().is_empty() && name.last.trim().is_empty() {
            return Err(LookupError::Malformed(format!("empty name for {id}")));
        }
        Ok(name.clone())
    }
}
