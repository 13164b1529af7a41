//! Selection axes: meal type and cultural style.
//!
//! Both enums use their capitalised names on the wire, matching the
//! generative backend's schema.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Meal type selected by the user. Drives configuration fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Brunch,
    Lunch,
    Dinner,
    Supper,
}

impl MealType {
    /// All meal types, in menu order.
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::Brunch,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Supper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Brunch => "Brunch",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Supper => "Supper",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MealType::ALL
            .iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown meal type: {}", s))
    }
}

/// Cultural style selected by the user. In comparison mode a second,
/// distinct style is selected alongside the primary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CultureStyle {
    American,
    European,
    Indian,
}

impl CultureStyle {
    /// All cultural styles, in menu order.
    pub const ALL: [CultureStyle; 3] = [
        CultureStyle::American,
        CultureStyle::European,
        CultureStyle::Indian,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CultureStyle::American => "American",
            CultureStyle::European => "European",
            CultureStyle::Indian => "Indian",
        }
    }

    /// First style that differs from `self`, used to seed comparison mode.
    pub fn alternative(&self) -> CultureStyle {
        CultureStyle::ALL
            .iter()
            .copied()
            .find(|c| c != self)
            .unwrap_or(CultureStyle::European)
    }
}

impl fmt::Display for CultureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CultureStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CultureStyle::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown culture style: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_wire_names() {
        let json = serde_json::to_string(&MealType::Dinner).unwrap();
        assert_eq!(json, "\"Dinner\"");
        let parsed: MealType = serde_json::from_str("\"Supper\"").unwrap();
        assert_eq!(parsed, MealType::Supper);
    }

    #[test]
    fn test_meal_type_from_str_is_case_insensitive() {
        assert_eq!("dinner".parse::<MealType>().unwrap(), MealType::Dinner);
        assert!("elevenses".parse::<MealType>().is_err());
    }

    #[test]
    fn test_culture_alternative_is_distinct() {
        for culture in CultureStyle::ALL {
            assert_ne!(culture.alternative(), culture);
        }
    }
}
