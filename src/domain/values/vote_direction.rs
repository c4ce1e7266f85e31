use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Hot,
    Cold,
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Hot => write!(f, "hot"),
            VoteDirection::Cold => write!(f, "cold"),
        }
    }
}

impl FromStr for VoteDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hot" | "quente" => Ok(VoteDirection::Hot),
            "cold" | "frio" => Ok(VoteDirection::Cold),
            _ => Err(format!("Unknown vote direction: {s}")),
        }
    }
}
