use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable milestone identifier.
///
/// Assigned when the catalogue is seeded and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilestoneId(u32);

impl MilestoneId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for MilestoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MilestoneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<MilestoneId> for u32 {
    fn from(id: MilestoneId) -> Self {
        id.0
    }
}
