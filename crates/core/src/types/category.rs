//! Product categories.
//!
//! The catalogue is split into five fixed occasions. The wire form is the
//! human-readable name, which is also what appears in `/category/:category`
//! routes (percent-encoded).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not one of the known categories.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Romantic")]
    Romantic,
    #[serde(rename = "Sympathy & Funeral")]
    SympathyFuneral,
    #[serde(rename = "Wedding & Engagement")]
    WeddingEngagement,
    #[serde(rename = "Celebrations")]
    Celebrations,
    #[serde(rename = "Seasonal & Special Days")]
    SeasonalSpecialDays,
}

impl Category {
    /// All categories in navigation order.
    pub const ALL: [Self; 5] = [
        Self::Romantic,
        Self::SympathyFuneral,
        Self::WeddingEngagement,
        Self::Celebrations,
        Self::SeasonalSpecialDays,
    ];

    /// The display and wire name of the category.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Romantic => "Romantic",
            Self::SympathyFuneral => "Sympathy & Funeral",
            Self::WeddingEngagement => "Wedding & Engagement",
            Self::Celebrations => "Celebrations",
            Self::SeasonalSpecialDays => "Seasonal & Special Days",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_display() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!(
            "Sympathy & Funeral".parse::<Category>().unwrap(),
            Category::SympathyFuneral
        );
        assert!("romantic".parse::<Category>().is_err());
        assert!("Sympathy%20%26%20Funeral".parse::<Category>().is_err());
    }
}
