use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Industry tag used to select a keyword set from the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Finance,
    Healthcare,
    Marketing,
    Sales,
    Education,
    #[default]
    General,
}

impl Industry {
    pub const ALL: [Industry; 7] = [
        Industry::Tech,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Marketing,
        Industry::Sales,
        Industry::Education,
        Industry::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Tech => "tech",
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Marketing => "marketing",
            Industry::Sales => "sales",
            Industry::Education => "education",
            Industry::General => "general",
        }
    }

    /// Human-facing name shown in catalog listings.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Tech => "Technology",
            Industry::Finance => "Finance",
            Industry::Healthcare => "Healthcare",
            Industry::Marketing => "Marketing",
            Industry::Sales => "Sales",
            Industry::Education => "Education",
            Industry::General => "General",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown industry '{0}'")]
pub struct UnknownIndustry(pub String);

impl FromStr for Industry {
    type Err = UnknownIndustry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Industry::ALL
            .into_iter()
            .find(|i| i.as_str() == wanted)
            .ok_or_else(|| UnknownIndustry(s.to_string()))
    }
}
