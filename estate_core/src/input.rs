//! # Estate Input
//!
//! The household composition and estate figures for one calculation.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "totalAssets": 60000.0,
//!   "financialLiabilities": 0.0,
//!   "debtAmount": 0.0,
//!   "bequestsAmount": 0.0,
//!   "distributableEstate": 0.0,
//!   "genderDeceased": "male",
//!   "parentsStatus": "both",
//!   "sons": 1,
//!   "daughters": 1,
//!   "brothers": 0,
//!   "sisters": 0,
//!   "hasSpouse": false
//! }
//! ```
//!
//! Every field is optional in JSON; absent amounts and counts default to zero.
//! Counts are unsigned, so a negative or fractional count is rejected while
//! parsing rather than during calculation.
//!
//! ## Example
//!
//! ```rust
//! use estate_core::input::{EstateInput, Gender, ParentsStatus};
//!
//! let input = EstateInput::default()
//!     .with_total_assets(60_000.0)
//!     .with_parents_status(ParentsStatus::Both)
//!     .with_sons(1)
//!     .with_daughters(1);
//!
//! assert_eq!(input.gender_deceased, Gender::Male);
//! assert!(input.has_children());
//! assert!(input.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::money::Money;

/// Gender of the deceased; decides the spouse label and spouse share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Which parents survive the deceased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentsStatus {
    Father,
    Mother,
    Both,
    #[default]
    None,
}

impl ParentsStatus {
    /// True when the father survives ("father" or "both")
    pub fn father_alive(&self) -> bool {
        matches!(self, ParentsStatus::Father | ParentsStatus::Both)
    }

    /// True when the mother survives ("mother" or "both")
    pub fn mother_alive(&self) -> bool {
        matches!(self, ParentsStatus::Mother | ParentsStatus::Both)
    }

    /// True when at least one parent survives
    pub fn any_alive(&self) -> bool {
        !matches!(self, ParentsStatus::None)
    }
}

/// Input record for a share calculation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstateInput {
    /// Gross value of everything the deceased owned
    pub total_assets: Money,

    /// Liabilities subtracted from assets to reach the net estate
    pub financial_liabilities: Money,

    /// Outstanding debts (used only by `DeductDebtsAndBequests`)
    pub debt_amount: Money,

    /// Bequests made by will (used only by `DeductDebtsAndBequests`)
    pub bequests_amount: Money,

    /// Caller-computed distributable estate (used only by `DistributableEstate`)
    pub distributable_estate: Money,

    pub gender_deceased: Gender,

    pub parents_status: ParentsStatus,

    pub sons: u32,
    pub daughters: u32,
    pub brothers: u32,
    pub sisters: u32,

    /// Whether a spouse survives
    pub has_spouse: bool,
}

impl EstateInput {
    /// Parse an input record from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate input values. Fails on the first negative or non-finite amount.
    pub fn validate(&self) -> CalcResult<()> {
        let amounts = [
            ("totalAssets", self.total_assets),
            ("financialLiabilities", self.financial_liabilities),
            ("debtAmount", self.debt_amount),
            ("bequestsAmount", self.bequests_amount),
            ("distributableEstate", self.distributable_estate),
        ];

        for (field, amount) in amounts {
            if amount.is_valid_amount() {
                continue;
            }
            let reason = if amount.value().is_finite() {
                "Amount cannot be negative"
            } else {
                "Amount must be a finite number"
            };
            return Err(CalcError::invalid_input(field, amount.value().to_string(), reason));
        }
        Ok(())
    }

    /// True when the deceased leaves at least one son or daughter
    pub fn has_children(&self) -> bool {
        self.sons > 0 || self.daughters > 0
    }

    /// Children's share units: a son counts 2, a daughter 1
    pub fn child_units(&self) -> u64 {
        u64::from(self.sons) * 2 + u64::from(self.daughters)
    }

    /// Siblings' share units: a brother counts 2, a sister 1
    pub fn sibling_units(&self) -> u64 {
        u64::from(self.brothers) * 2 + u64::from(self.sisters)
    }

    pub fn with_total_assets(mut self, amount: impl Into<Money>) -> Self {
        self.total_assets = amount.into();
        self
    }

    pub fn with_financial_liabilities(mut self, amount: impl Into<Money>) -> Self {
        self.financial_liabilities = amount.into();
        self
    }

    pub fn with_debt_amount(mut self, amount: impl Into<Money>) -> Self {
        self.debt_amount = amount.into();
        self
    }

    pub fn with_bequests_amount(mut self, amount: impl Into<Money>) -> Self {
        self.bequests_amount = amount.into();
        self
    }

    pub fn with_distributable_estate(mut self, amount: impl Into<Money>) -> Self {
        self.distributable_estate = amount.into();
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender_deceased = gender;
        self
    }

    pub fn with_parents_status(mut self, status: ParentsStatus) -> Self {
        self.parents_status = status;
        self
    }

    pub fn with_sons(mut self, count: u32) -> Self {
        self.sons = count;
        self
    }

    pub fn with_daughters(mut self, count: u32) -> Self {
        self.daughters = count;
        self
    }

    pub fn with_brothers(mut self, count: u32) -> Self {
        self.brothers = count;
        self
    }

    pub fn with_sisters(mut self, count: u32) -> Self {
        self.sisters = count;
        self
    }

    pub fn with_spouse(mut self, has_spouse: bool) -> Self {
        self.has_spouse = has_spouse;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_status_flags() {
        assert!(ParentsStatus::Both.father_alive());
        assert!(ParentsStatus::Both.mother_alive());
        assert!(ParentsStatus::Father.father_alive());
        assert!(!ParentsStatus::Father.mother_alive());
        assert!(!ParentsStatus::Mother.father_alive());
        assert!(!ParentsStatus::None.any_alive());
    }

    #[test]
    fn test_units() {
        let input = EstateInput::default()
            .with_sons(3)
            .with_daughters(2)
            .with_brothers(1)
            .with_sisters(4);
        assert_eq!(input.child_units(), 8);
        assert_eq!(input.sibling_units(), 6);
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let input = EstateInput::default()
            .with_total_assets(100.0)
            .with_bequests_amount(-1.0);
        match input.validate() {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "bequestsAmount"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let input = EstateInput::default().with_total_assets(f64::NAN);
        match input.validate() {
            Err(CalcError::InvalidInput { field, reason, .. }) => {
                assert_eq!(field, "totalAssets");
                assert_eq!(reason, "Amount must be a finite number");
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_reason_for_negative_amount() {
        let input = EstateInput::default().with_debt_amount(-0.5);
        match input.validate() {
            Err(CalcError::InvalidInput { reason, .. }) => {
                assert_eq!(reason, "Amount cannot be negative")
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = r#"{
            "totalAssets": 60000,
            "financialLiabilities": 500,
            "genderDeceased": "female",
            "parentsStatus": "mother",
            "sons": 2,
            "hasSpouse": true
        }"#;
        let input = EstateInput::from_json(json).unwrap();
        assert_eq!(input.total_assets, Money(60_000.0));
        assert_eq!(input.financial_liabilities, Money(500.0));
        assert_eq!(input.gender_deceased, Gender::Female);
        assert_eq!(input.parents_status, ParentsStatus::Mother);
        assert_eq!(input.sons, 2);
        assert_eq!(input.daughters, 0);
        assert!(input.has_spouse);
    }

    #[test]
    fn test_json_rejects_negative_count() {
        let err = EstateInput::from_json(r#"{"sons": -1}"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_json_rejects_fractional_count() {
        assert!(EstateInput::from_json(r#"{"daughters": 1.5}"#).is_err());
    }
}
