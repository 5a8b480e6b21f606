use serde::{Deserialize, Serialize};

/// The fixed set of expense categories. Serialized as their display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Food,
    #[serde(rename = "Home Rent")]
    HomeRent,
    Studies,
    Miscellaneous,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::HomeRent => "Home Rent",
            Self::Studies => "Studies",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Case-insensitive; "Home Rent" is accepted with or without the space.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "home rent" | "homerent" => Some(Self::HomeRent),
            "studies" => Some(Self::Studies),
            "miscellaneous" => Some(Self::Miscellaneous),
            _ => None,
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::HomeRent,
            Self::Studies,
            Self::Miscellaneous,
        ]
    }

    /// Position in `all()`, used to cycle the category picker.
    pub fn index(&self) -> usize {
        match self {
            Self::Food => 0,
            Self::HomeRent => 1,
            Self::Studies => 2,
            Self::Miscellaneous => 3,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
