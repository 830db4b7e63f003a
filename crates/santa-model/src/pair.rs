use std::fmt;

use serde::{Deserialize, Serialize};

/// A gift giver and the participant they give to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SantaPair {
    pub giver: String,
    pub receiver: String,
}

impl SantaPair {
    pub fn new(giver: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
        }
    }
}

impl fmt::Display for SantaPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.giver, self.receiver)
    }
}
