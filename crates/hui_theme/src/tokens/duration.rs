//! Transition duration tokens

use std::fmt;

use serde::{Deserialize, Serialize};

/// Duration token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    Short,
    Standard,
    Long,
}

/// A duration in milliseconds, rendered as `250ms`
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millis(pub u32);

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Complete set of duration tokens
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DurationTokens {
    pub short: Millis,
    pub standard: Millis,
    pub long: Millis,
}

impl DurationTokens {
    pub fn get(&self, token: DurationToken) -> Millis {
        match token {
            DurationToken::Short => self.short,
            DurationToken::Standard => self.standard,
            DurationToken::Long => self.long,
        }
    }
}

impl Default for DurationTokens {
    fn default() -> Self {
        Self {
            short: Millis(100),
            standard: Millis(250),
            long: Millis(500),
        }
    }
}
