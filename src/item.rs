//! Identifiers and timestamps shared by every journal item (tasks, lists, logs...)

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{DateTime, TimeZone, Utc};


/// The unique identifier of a journal item.
///
/// Identifiers are opaque strings: items created by this crate get a random UUID, but identifiers written by other
/// tools (e.g. the browser version of the journal, which uses a millisecond timestamp) are kept as-is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId {
    content: String,
}

impl ItemId {
    /// Generate a random ItemId.
    pub fn random() -> Self {
        let random = uuid::Uuid::new_v4().to_hyphenated().to_string();
        Self { content: random }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl From<String> for ItemId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for ItemId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl FromStr for ItemId {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}


/// The current time, truncated to the millisecond precision used on disk.
///
/// Creation and modification dates are stored as milliseconds since the Unix epoch (see `chrono::serde::ts_milliseconds`),
/// so that data written by the browser version of the journal can be read back.
pub fn now() -> DateTime<Utc> {
    let now = Utc::now();
    Utc.timestamp_millis_opt(now.timestamp_millis()).single().unwrap_or(now)
}
