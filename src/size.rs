use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSizeError;

/// Cup sizes offered at the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CupSize {
    #[default]
    #[serde(alias = "Small")]
    Small,
    #[serde(alias = "Medium")]
    Medium,
    #[serde(alias = "Large")]
    Large,
}

impl CupSize {
    pub const ALL: [CupSize; 3] = [CupSize::Small, CupSize::Medium, CupSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            CupSize::Small => "Small",
            CupSize::Medium => "Medium",
            CupSize::Large => "Large",
        }
    }
}

impl fmt::Display for CupSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CupSize {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CupSize::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseSizeError::new(s))
    }
}
