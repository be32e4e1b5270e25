//! # Calculator Settings
//!
//! Explicit configuration for a share calculation. Settings are passed into
//! each call; the calculator keeps no state between calls.
//!
//! ## Deduction Policy
//!
//! The input record carries `debtAmount`, `bequestsAmount` and
//! `distributableEstate` next to `totalAssets` and `financialLiabilities`.
//! Which of them reduce the distributable base is a policy decision:
//!
//! | Policy                   | Net estate                                      |
//! |--------------------------|-------------------------------------------------|
//! | `LiabilitiesOnly`        | assets - liabilities (default)                  |
//! | `DeductDebtsAndBequests` | assets - liabilities - debts - bequests         |
//! | `DistributableEstate`    | `distributableEstate` as entered by the caller  |
//!
//! ## Example
//!
//! ```rust
//! use estate_core::settings::{CalculatorSettings, DeductionPolicy};
//!
//! let settings = CalculatorSettings::default();
//! assert_eq!(settings.policy, DeductionPolicy::LiabilitiesOnly);
//!
//! let json = serde_json::to_string(&settings).unwrap();
//! assert_eq!(json, r#"{"policy":"liabilities-only"}"#);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::CalcError;
use crate::input::EstateInput;
use crate::money::Money;

/// Settings for a single calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculatorSettings {
    /// How the net estate is derived from the input amounts
    #[serde(default)]
    pub policy: DeductionPolicy,
}

impl CalculatorSettings {
    /// Settings using the given deduction policy
    pub fn with_policy(policy: DeductionPolicy) -> Self {
        CalculatorSettings { policy }
    }
}

/// Which input amounts are subtracted before heirs are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeductionPolicy {
    /// Only financial liabilities are subtracted from total assets
    #[default]
    LiabilitiesOnly,
    /// Liabilities, debts and bequests are all subtracted
    DeductDebtsAndBequests,
    /// The caller-supplied distributable estate is used as-is
    DistributableEstate,
}

impl DeductionPolicy {
    /// All policies in display order
    pub const ALL: [DeductionPolicy; 3] = [
        DeductionPolicy::LiabilitiesOnly,
        DeductionPolicy::DeductDebtsAndBequests,
        DeductionPolicy::DistributableEstate,
    ];

    /// Stable identifier, identical to the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            DeductionPolicy::LiabilitiesOnly => "liabilities-only",
            DeductionPolicy::DeductDebtsAndBequests => "deduct-debts-and-bequests",
            DeductionPolicy::DistributableEstate => "distributable-estate",
        }
    }

    /// Derive the net estate from a validated input.
    ///
    /// Deductions larger than the assets leave nothing to distribute: the net
    /// estate is clamped to zero and every heir receives a zero amount.
    pub fn net_estate(&self, input: &EstateInput) -> Money {
        let net = match self {
            DeductionPolicy::LiabilitiesOnly => input.total_assets - input.financial_liabilities,
            DeductionPolicy::DeductDebtsAndBequests => {
                input.total_assets - input.financial_liabilities - input.debt_amount - input.bequests_amount
            }
            DeductionPolicy::DistributableEstate => input.distributable_estate,
        };

        if net.value() < 0.0 {
            warn!(
                policy = self.code(),
                net_estate = net.value(),
                "deductions exceed assets, nothing to distribute"
            );
        }
        net.non_negative()
    }
}

impl fmt::Display for DeductionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DeductionPolicy {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeductionPolicy::ALL
            .into_iter()
            .find(|policy| policy.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "policy",
                    s,
                    "Expected one of: liabilities-only, deduct-debts-and-bequests, distributable-estate",
                )
            })
    }
}
