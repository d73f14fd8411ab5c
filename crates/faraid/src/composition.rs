//! Surviving family of the deceased.

use serde::{Deserialize, Serialize};

use crate::error::FaraidError;

/// Surviving heirs and the estate to divide.
///
/// Only the heirs the engine knows about are modelled. Counts are
/// unsigned so a negative number of children cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FamilyComposition {
    /// Net estate after debts and bequests.
    pub estate: f64,
    #[serde(default)]
    pub husband_alive: bool,
    #[serde(default)]
    pub wife_alive: bool,
    #[serde(default)]
    pub father_alive: bool,
    #[serde(default)]
    pub mother_alive: bool,
    #[serde(default)]
    pub sons: u32,
    #[serde(default)]
    pub daughters: u32,
}

impl FamilyComposition {
    /// Composition with the given estate and no surviving heirs.
    pub const fn with_estate(estate: f64) -> Self {
        Self {
            estate,
            husband_alive: false,
            wife_alive: false,
            father_alive: false,
            mother_alive: false,
            sons: 0,
            daughters: 0,
        }
    }

    /// At least one son or daughter survives.
    pub fn has_child(&self) -> bool {
        self.sons > 0 || self.daughters > 0
    }

    pub fn has_son(&self) -> bool {
        self.sons > 0
    }

    /// Estate must be finite and strictly positive.
    pub fn check_estate(&self) -> Result<(), FaraidError> {
        if self.estate.is_finite() && self.estate > 0.0 {
            Ok(())
        } else {
            Err(FaraidError::InvalidEstate(self.estate))
        }
    }

    /// Reject a composition where both husband and wife survive.
    ///
    /// The engine itself does not enforce this; callers check it before
    /// distributing.
    pub fn check_spouses(&self) -> Result<(), FaraidError> {
        if self.husband_alive && self.wife_alive {
            Err(FaraidError::ConflictingSpouses)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_flags() {
        let mut c = FamilyComposition::with_estate(1.0);
        assert!(!c.has_child());
        c.daughters = 1;
        assert!(c.has_child());
        assert!(!c.has_son());
        c.sons = 2;
        assert!(c.has_son());
    }

    #[test]
    fn estate_must_be_positive_and_finite() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let c = FamilyComposition::with_estate(bad);
            assert!(matches!(c.check_estate(), Err(FaraidError::InvalidEstate(_))));
        }
        assert!(FamilyComposition::with_estate(0.01).check_estate().is_ok());
    }

    #[test]
    fn both_spouses_rejected() {
        let mut c = FamilyComposition::with_estate(100.0);
        c.husband_alive = true;
        assert!(c.check_spouses().is_ok());
        c.wife_alive = true;
        assert_eq!(c.check_spouses(), Err(FaraidError::ConflictingSpouses));
    }

    #[test]
    fn missing_fields_default_to_absent() {
        let c: FamilyComposition =
            serde_json::from_str(r#"{"estate": 1000.0, "wife_alive": true}"#).unwrap();
        assert!(c.wife_alive);
        assert!(!c.father_alive);
        assert_eq!(c.sons, 0);
    }
}
