use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the shared column the separator sticks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    Left,
    Right,
}

impl Gravity {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Gravity::Left),
            "right" => Some(Gravity::Right),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeparatorSpec {
    pub token: CompactString,
    pub gravity: Gravity,
}

impl SeparatorSpec {
    pub fn new(token: impl Into<CompactString>, gravity: Gravity) -> Self {
        Self {
            token: token.into(),
            gravity,
        }
    }

    pub fn token_len(&self) -> usize {
        self.token.chars().count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeparatorError {
    EmptyToken,
    UnknownGravity(String),
}

impl fmt::Display for SeparatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeparatorError::EmptyToken => write!(f, "separator token must not be empty"),
            SeparatorError::UnknownGravity(value) => {
                write!(f, "unknown gravity {value:?}, expected \"left\" or \"right\"")
            }
        }
    }
}

impl std::error::Error for SeparatorError {}

pub fn validate(specs: &[SeparatorSpec]) -> Result<(), SeparatorError> {
    for spec in specs {
        if spec.token.is_empty() {
            return Err(SeparatorError::EmptyToken);
        }
    }
    Ok(())
}

/// Shortest token first. A longer token that contains a shorter one must be
/// scanned later so its candidate overwrites the shorter split on shared rows.
/// Stable: equal-length tokens keep configuration order.
pub fn sorted_by_token_len(specs: &[SeparatorSpec]) -> Vec<SeparatorSpec> {
    let mut sorted = specs.to_vec();
    sorted.sort_by_key(SeparatorSpec::token_len);
    sorted
}
