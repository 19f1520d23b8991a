//! Field validation for record input.
//!
//! A [`RecordInput`] holds the five raw strings exactly as they came off
//! the command line; [`validate`] turns them into a typed [`Record`] or
//! the first field error it hits. Pure transform: no I/O, no printing,
//! and the caller decides how to report the error.

use crate::error::{BiostatError, Result};
use crate::model::{normalize_name, Record, Sex};

/// Raw create/update input, one string per field flag.
#[derive(Debug, Clone)]
pub struct RecordInput {
    pub name: String,
    pub sex: String,
    pub age: String,
    pub height: String,
    pub weight: String,
}

/// Validate all five fields and build a [`Record`].
///
/// Fields are checked in declaration order and the first failure wins.
/// Numeric fields are parsed, never coerced: the offending raw input is
/// carried in the error.
pub fn validate(input: &RecordInput) -> Result<Record> {
    let name = input.name.trim();
    if name.is_empty() {
        return Err(BiostatError::InvalidName);
    }
    let name = normalize_name(name);

    let sex = match input.sex.trim().to_uppercase().as_str() {
        "M" => Sex::Male,
        "F" => Sex::Female,
        _ => return Err(BiostatError::InvalidSex(input.sex.clone())),
    };

    let age: u32 = input
        .age
        .trim()
        .parse()
        .map_err(|_| BiostatError::InvalidAge(input.age.clone()))?;
    if age < 18 {
        return Err(BiostatError::InvalidAge(input.age.clone()));
    }

    let height: f64 = input
        .height
        .trim()
        .parse()
        .ok()
        .filter(|h: &f64| h.is_finite())
        .ok_or_else(|| BiostatError::InvalidHeight(input.height.clone()))?;

    let weight: f64 = input
        .weight
        .trim()
        .parse()
        .ok()
        .filter(|w: &f64| w.is_finite())
        .ok_or_else(|| BiostatError::InvalidWeight(input.weight.clone()))?;

    Ok(Record {
        name,
        sex,
        age,
        height,
        weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, sex: &str, age: &str, height: &str, weight: &str) -> RecordInput {
        RecordInput {
            name: name.into(),
            sex: sex.into(),
            age: age.into(),
            height: height.into(),
            weight: weight.into(),
        }
    }

    #[test]
    fn builds_a_normalized_record() {
        let r = validate(&input("alice", "f", "30", "65", "140")).unwrap();
        assert_eq!(r.name, "Alice");
        assert_eq!(r.sex, Sex::Female);
        assert_eq!(r.age, 30);
        assert_eq!(r.height, 65.0);
        assert_eq!(r.weight, 140.0);
    }

    #[test]
    fn sex_is_case_insensitive() {
        assert_eq!(
            validate(&input("bob", "m", "20", "70", "180")).unwrap().sex,
            Sex::Male
        );
        assert_eq!(
            validate(&input("bob", "M", "20", "70", "180")).unwrap().sex,
            Sex::Male
        );
    }

    #[test]
    fn rejects_empty_name() {
        assert!(matches!(
            validate(&input("", "f", "30", "65", "140")),
            Err(BiostatError::InvalidName)
        ));
        assert!(matches!(
            validate(&input("   ", "f", "30", "65", "140")),
            Err(BiostatError::InvalidName)
        ));
    }

    #[test]
    fn rejects_unknown_sex() {
        assert!(matches!(
            validate(&input("alice", "x", "30", "65", "140")),
            Err(BiostatError::InvalidSex(_))
        ));
    }

    #[test]
    fn rejects_underage_and_non_numeric_age() {
        for age in ["17", "0", "-5", "17.5", "old"] {
            assert!(
                matches!(
                    validate(&input("alice", "f", age, "65", "140")),
                    Err(BiostatError::InvalidAge(_))
                ),
                "age {:?} should be rejected",
                age
            );
        }
        assert!(validate(&input("alice", "f", "18", "65", "140")).is_ok());
    }

    #[test]
    fn rejects_non_numeric_height_and_weight() {
        assert!(matches!(
            validate(&input("alice", "f", "30", "tall", "140")),
            Err(BiostatError::InvalidHeight(_))
        ));
        assert!(matches!(
            validate(&input("alice", "f", "30", "NaN", "140")),
            Err(BiostatError::InvalidHeight(_))
        ));
        assert!(matches!(
            validate(&input("alice", "f", "30", "65", "heavy")),
            Err(BiostatError::InvalidWeight(_))
        ));
        assert!(matches!(
            validate(&input("alice", "f", "30", "65", "inf")),
            Err(BiostatError::InvalidWeight(_))
        ));
    }

    #[test]
    fn negative_height_is_numeric_and_allowed() {
        // No range constraint on height/weight, only "must be a number".
        let r = validate(&input("alice", "f", "30", "-65", "140")).unwrap();
        assert_eq!(r.height, -65.0);
    }
}
