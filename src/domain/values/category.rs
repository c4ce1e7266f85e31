use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealCategory {
    Hardware,
    Peripherals,
    Smartphones,
    Games,
    Monitors,
    Notebooks,
    #[default]
    Other,
}

impl DealCategory {
    pub const ALL: [DealCategory; 7] = [
        DealCategory::Hardware,
        DealCategory::Peripherals,
        DealCategory::Smartphones,
        DealCategory::Games,
        DealCategory::Monitors,
        DealCategory::Notebooks,
        DealCategory::Other,
    ];

    /// Name shown in the sidebar.
    pub fn display_name(&self) -> &'static str {
        match self {
            DealCategory::Hardware => "Hardware",
            DealCategory::Peripherals => "Periféricos",
            DealCategory::Smartphones => "Smartphones",
            DealCategory::Games => "Games",
            DealCategory::Monitors => "Monitores",
            DealCategory::Notebooks => "Notebooks",
            DealCategory::Other => "Outros",
        }
    }
}

impl fmt::Display for DealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealCategory::Hardware => write!(f, "hardware"),
            DealCategory::Peripherals => write!(f, "peripherals"),
            DealCategory::Smartphones => write!(f, "smartphones"),
            DealCategory::Games => write!(f, "games"),
            DealCategory::Monitors => write!(f, "monitors"),
            DealCategory::Notebooks => write!(f, "notebooks"),
            DealCategory::Other => write!(f, "other"),
        }
    }
}

impl FromStr for DealCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hardware" => Ok(DealCategory::Hardware),
            "peripherals" | "perifericos" | "periféricos" => Ok(DealCategory::Peripherals),
            "smartphones" => Ok(DealCategory::Smartphones),
            "games" => Ok(DealCategory::Games),
            "monitors" | "monitores" => Ok(DealCategory::Monitors),
            "notebooks" => Ok(DealCategory::Notebooks),
            "other" | "outros" => Ok(DealCategory::Other),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_from_str() {
        for cat in DealCategory::ALL {
            assert_eq!(cat.to_string().parse::<DealCategory>(), Ok(cat));
        }
    }

    #[test]
    fn test_portuguese_aliases() {
        assert_eq!("Monitores".parse(), Ok(DealCategory::Monitors));
        assert_eq!("periféricos".parse(), Ok(DealCategory::Peripherals));
        assert!("toasters".parse::<DealCategory>().is_err());
    }
}
