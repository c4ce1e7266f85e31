use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering requested for a deal listing or feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Hottest,
    Newest,
    Commented,
}

impl SortKey {
    /// Label shown in the sort menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Hottest => "Mais Quentes",
            SortKey::Newest => "Mais Recentes",
            SortKey::Commented => "Mais Comentados",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Hottest => write!(f, "hottest"),
            SortKey::Newest => write!(f, "newest"),
            SortKey::Commented => write!(f, "commented"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hottest" | "hot" => Ok(SortKey::Hottest),
            "newest" | "new" => Ok(SortKey::Newest),
            "commented" | "comments" => Ok(SortKey::Commented),
            _ => Err(format!("Unknown sort key: {s} (use hottest, newest or commented)")),
        }
    }
}
