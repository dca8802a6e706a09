use serde::{Deserialize, Serialize};
use std::fmt;

/// Regional/topical grouping of feeds.
///
/// Declaration order is the fixed flattening order used by the selector, and
/// the derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Korea,
    Us,
    China,
    Commodities,
    Global,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Korea,
        Section::Us,
        Section::China,
        Section::Commodities,
        Section::Global,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "korea" => Some(Self::Korea),
            "us" => Some(Self::Us),
            "china" => Some(Self::China),
            "commodities" => Some(Self::Commodities),
            "global" => Some(Self::Global),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Korea => "korea",
            Self::Us => "us",
            Self::China => "china",
            Self::Commodities => "commodities",
            Self::Global => "global",
        }
    }

    /// Display tag shown in brackets before each headline
    pub fn label(&self) -> &'static str {
        match self {
            Self::Korea => "한국",
            Self::Us => "미국",
            Self::China => "중국",
            Self::Commodities => "원자재",
            Self::Global => "글로벌",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
