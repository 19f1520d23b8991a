use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological sex, persisted as a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "Male"),
            Sex::Female => write!(f, "Female"),
        }
    }
}

/// One biographical entry. Field order matches the columns of the
/// backing file: `name,sex,age,height,weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub sex: Sex,
    pub age: u32,
    /// Inches.
    pub height: f64,
    /// Pounds.
    pub weight: f64,
}

impl Record {
    pub fn new(name: String, sex: Sex, age: u32, height: f64, weight: f64) -> Self {
        Self {
            name: normalize_name(&name),
            sex,
            age,
            height,
            weight,
        }
    }

    pub fn height_cm(&self) -> f64 {
        self.height * 2.54
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight * 0.45359237
    }
}

/// Title-case a name for use as a lookup/storage key: first character
/// uppercased, remainder lowercased. Lookups and stored keys always go
/// through this, which is what makes name matching case-insensitive.
pub fn normalize_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
