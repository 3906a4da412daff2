//! Agent and location identifiers.
//!
//! `AgentId` is a dense index into the agent store, so it stays a `Copy`
//! integer wrapper.  `Location` is an opaque token naming a waypoint of the
//! shared graph (`"E"`, `"X"`, ...); it is reference counted so route copies
//! and event payloads never reallocate the name.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::CoreError;

// ── AgentId ───────────────────────────────────────────────────────────────────

/// Index of an agent in the `AgentStore`, and its identity in fault tables.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Sentinel meaning "no valid agent".
    pub const INVALID: AgentId = AgentId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for AgentId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AgentId({})", self.0)
    }
}

impl From<AgentId> for usize {
    #[inline(always)]
    fn from(id: AgentId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// An opaque waypoint name.
///
/// Tokens are compared by value.  [`Location::new`] accepts anything;
/// parsing through [`FromStr`] rejects empty tokens and tokens containing
/// whitespace, because route files separate waypoints with spaces.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Location(Arc<str>);

impl Location {
    /// Wrap `name` without validation.
    pub fn new(name: impl AsRef<str>) -> Self {
        Location(Arc::from(name.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Location {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.contains(char::is_whitespace) {
            return Err(CoreError::InvalidLocation(s.to_owned()));
        }
        Ok(Location::new(s))
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Location::new(name)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
