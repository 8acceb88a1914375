//! Event identifiers
//!
//! An `EventId` tags a record with a stable numeric id and an optional
//! human-readable name, so that related records can be grouped without
//! parsing their messages.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Numeric event id plus optional label
///
/// The default value (`EventId::NONE`) is id 0 with no name and is what
/// records carry when the call site does not supply one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EventId {
    id: i32,
    name: Option<Cow<'static, str>>,
}

impl EventId {
    /// The empty event id
    pub const NONE: EventId = EventId { id: 0, name: None };

    /// Create an event id with a name
    pub fn new(id: i32, name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// Create an event id without a name
    pub const fn from_id(id: i32) -> Self {
        Self { id, name: None }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True for the default (id 0, unnamed) event id
    pub fn is_none(&self) -> bool {
        self.id == 0 && self.name.is_none()
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        Self::from_id(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.id),
        }
    }
}
