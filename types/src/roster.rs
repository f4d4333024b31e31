//! The editable list of members eligible for team assignment.

use thiserror::Error;

/// Prefix for synthesized member names ("Employee N").
pub const DEFAULT_MEMBER_PREFIX: &str = "직원";

/// Members a fresh session starts with when no roster is configured.
pub const DEFAULT_MEMBERS: [&str; 11] = [
    "양현모", "오명진", "권금이", "장찬희", "한선우", "정수현", "이재현", "김광섭", "김종관",
    "김진홍", "안의성",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("member index {index} out of range (roster has {len} members)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered sequence of member display names.
///
/// Display order is roster order. Names are neither trimmed nor deduplicated:
/// an empty name or two identical names are both legal members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<String>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::from_members(DEFAULT_MEMBERS)
    }

    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.members.get(index).map(String::as_str)
    }

    /// Replace the member at `index` verbatim.
    pub fn rename(&mut self, index: usize, new_name: impl Into<String>) -> Result<(), RosterError> {
        let len = self.members.len();
        let slot = self
            .members
            .get_mut(index)
            .ok_or(RosterError::IndexOutOfRange { index, len })?;
        *slot = new_name.into();
        Ok(())
    }

    /// Append a synthesized member named after the new roster size.
    ///
    /// Returns the name that was appended.
    pub fn add(&mut self) -> &str {
        let name = format!("{DEFAULT_MEMBER_PREFIX}{}", self.members.len() + 1);
        self.members.push(name);
        self.members.last().map_or("", String::as_str)
    }

    /// Remove the member at `index`, shifting later members left.
    pub fn remove(&mut self, index: usize) -> Result<String, RosterError> {
        if index >= self.members.len() {
            return Err(RosterError::IndexOutOfRange {
                index,
                len: self.members.len(),
            });
        }
        Ok(self.members.remove(index))
    }
}
