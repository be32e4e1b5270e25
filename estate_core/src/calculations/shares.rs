//! # Share Calculation
//!
//! Distributes a net estate among spouse, parents, children and siblings.
//!
//! ## Rules
//!
//! A running "remaining fraction" starts at 1 and is consumed in a fixed
//! order:
//!
//! 1. **Spouse** (if any): with children 1/8 (wife) or 1/4 (husband);
//!    without children 1/4 (wife) or 1/2 (husband).
//! 2. **Parents**:
//!    - with children, each surviving parent takes 1/6 (father first);
//!    - without children, the mother takes 1/6 (spouse present) or 1/3, and
//!      then the father takes whatever remains as residue.
//! 3. **Children** share all that remains, a son counting two units and a
//!    daughter one.
//! 4. **Siblings** inherit only when there are no children and no surviving
//!    father; brothers count two units, sisters one.
//!
//! Whatever no heir claims is left unallocated.
//!
//! ## Example
//!
//! ```rust
//! use estate_core::calculations::shares::calculate;
//! use estate_core::input::EstateInput;
//!
//! let input = EstateInput::default()
//!     .with_total_assets(100_000.0)
//!     .with_spouse(true)
//!     .with_sons(2);
//!
//! let heirs = calculate(&input).unwrap();
//! assert_eq!(heirs.len(), 3);
//! assert_eq!(heirs[0].name, "Wife");
//! assert_eq!(heirs[0].share, "1/8");
//! assert_eq!(heirs[1].amount.value(), 43_750.0);
//! ```

use tracing::{debug, trace};

use crate::calculations::fraction::format_fraction;
use crate::errors::CalcResult;
use crate::heirs::{Distribution, HeirKind, HeirRecord};
use crate::input::{EstateInput, Gender};
use crate::money::Money;
use crate::settings::CalculatorSettings;

/// Fixed share of each parent when the deceased leaves children
const PARENT_WITH_CHILDREN: f64 = 1.0 / 6.0;

/// Share label for a male heir in a 2:1 group
const DOUBLE_UNIT: &str = "2x";

/// Share label for a female heir in a 2:1 group
const SINGLE_UNIT: &str = "1x";

/// Share label for the father's residue
const RESIDUE: &str = "Residue";

/// Calculate heir shares with default settings.
///
/// Returns the heirs in output order: spouse, parents, children, siblings.
/// An empty list is a valid outcome when nobody is eligible.
///
/// # Errors
///
/// * [`CalcError::InvalidInput`](crate::errors::CalcError::InvalidInput) if an
///   amount is negative or not finite
///
/// Deductions exceeding the assets are not an error: the net estate is taken
/// as zero and every eligible heir is listed with a zero amount.
pub fn calculate(input: &EstateInput) -> CalcResult<Vec<HeirRecord>> {
    distribute(input, &CalculatorSettings::default()).map(|d| d.heirs)
}

/// Calculate heir shares and totals under the given settings.
pub fn distribute(input: &EstateInput, settings: &CalculatorSettings) -> CalcResult<Distribution> {
    input.validate()?;

    let net_estate = settings.policy.net_estate(input);
    debug!(policy = %settings.policy, net_estate = net_estate.value(), "computing shares");

    let mut ledger = ShareLedger::new(net_estate);
    let has_children = input.has_children();

    allocate_spouse(input, has_children, &mut ledger);
    allocate_parents(input, has_children, &mut ledger);
    if has_children {
        allocate_children(input, &mut ledger);
    } else if !input.parents_status.father_alive() {
        allocate_siblings(input, &mut ledger);
    }

    let distribution = Distribution::new(settings.policy, net_estate, ledger.heirs);
    debug!(
        heirs = distribution.heirs.len(),
        allocated = distribution.allocated.value(),
        unallocated = distribution.unallocated.value(),
        "shares computed"
    );
    Ok(distribution)
}

/// Running state of one calculation: the fraction still unclaimed and the
/// records emitted so far.
struct ShareLedger {
    net_estate: Money,
    remaining: f64,
    heirs: Vec<HeirRecord>,
}

impl ShareLedger {
    fn new(net_estate: Money) -> Self {
        ShareLedger {
            net_estate,
            remaining: 1.0,
            heirs: Vec::new(),
        }
    }

    /// Give `fraction` of the estate to a single heir and consume it.
    fn award(&mut self, heir: HeirKind, fraction: f64, share: impl Into<String>) {
        let share = share.into();
        trace!(heir = heir.label(), fraction, %share, "fixed share");
        self.heirs
            .push(HeirRecord::single(heir, share, self.net_estate * fraction));
        self.remaining -= fraction;
    }

    /// Give everything still unclaimed to a single heir.
    fn award_residue(&mut self, heir: HeirKind) {
        trace!(heir = heir.label(), fraction = self.remaining, "residue");
        let amount = (self.net_estate * self.remaining).non_negative();
        self.heirs.push(HeirRecord::single(heir, RESIDUE, amount));
        self.remaining = 0.0;
    }

    /// Split the unclaimed remainder 2:1 between two groups of heirs, where
    /// `units` is twice the first group's size plus the second's.
    ///
    /// Does nothing when both groups are empty.
    fn split_remainder(&mut self, units: u64, double: (HeirKind, u32), single: (HeirKind, u32)) {
        if units == 0 {
            return;
        }

        let unit_amount = (self.net_estate * self.remaining).non_negative() / units as f64;
        trace!(units, unit_amount = unit_amount.value(), "splitting remainder");

        for ordinal in 1..=double.1 {
            self.heirs
                .push(HeirRecord::numbered(double.0, ordinal, DOUBLE_UNIT, unit_amount * 2.0));
        }
        for ordinal in 1..=single.1 {
            self.heirs
                .push(HeirRecord::numbered(single.0, ordinal, SINGLE_UNIT, unit_amount));
        }
    }
}

fn allocate_spouse(input: &EstateInput, has_children: bool, ledger: &mut ShareLedger) {
    if !input.has_spouse {
        return;
    }

    let (heir, fraction) = match (input.gender_deceased, has_children) {
        (Gender::Male, true) => (HeirKind::Wife, 1.0 / 8.0),
        (Gender::Female, true) => (HeirKind::Husband, 1.0 / 4.0),
        (Gender::Male, false) => (HeirKind::Wife, 1.0 / 4.0),
        (Gender::Female, false) => (HeirKind::Husband, 1.0 / 2.0),
    };
    ledger.award(heir, fraction, format_fraction(fraction));
}

fn allocate_parents(input: &EstateInput, has_children: bool, ledger: &mut ShareLedger) {
    let status = input.parents_status;
    if !status.any_alive() {
        return;
    }

    if has_children {
        if status.father_alive() {
            ledger.award(HeirKind::Father, PARENT_WITH_CHILDREN, "1/6");
        }
        if status.mother_alive() {
            ledger.award(HeirKind::Mother, PARENT_WITH_CHILDREN, "1/6");
        }
        return;
    }

    // The mother's share must leave the remainder before the father's residue is taken.
    if status.mother_alive() {
        let fraction = if input.has_spouse { 1.0 / 6.0 } else { 1.0 / 3.0 };
        ledger.award(HeirKind::Mother, fraction, format_fraction(fraction));
    }
    if status.father_alive() {
        ledger.award_residue(HeirKind::Father);
    }
}

fn allocate_children(input: &EstateInput, ledger: &mut ShareLedger) {
    ledger.split_remainder(
        input.child_units(),
        (HeirKind::Son, input.sons),
        (HeirKind::Daughter, input.daughters),
    );
    ledger.remaining = 0.0;
}

fn allocate_siblings(input: &EstateInput, ledger: &mut ShareLedger) {
    ledger.split_remainder(
        input.sibling_units(),
        (HeirKind::Brother, input.brothers),
        (HeirKind::Sister, input.sisters),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use crate::heirs::Relationship;
    use crate::input::ParentsStatus;
    use crate::settings::DeductionPolicy;

    const TOLERANCE: f64 = 0.01;

    fn estate(total: f64) -> EstateInput {
        EstateInput::default().with_total_assets(total)
    }

    fn amounts(heirs: &[HeirRecord]) -> Vec<f64> {
        heirs.iter().map(|h| h.amount.value()).collect()
    }

    #[test]
    fn test_spouse_only_male_deceased() {
        let heirs = calculate(&estate(100_000.0).with_spouse(true)).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].name, "Wife");
        assert_eq!(heirs[0].relationship, Relationship::Spouse);
        assert_eq!(heirs[0].share, "1/4");
        assert!((heirs[0].amount.value() - 25_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_spouse_only_female_deceased() {
        let input = estate(100_000.0).with_gender(Gender::Female).with_spouse(true);
        let heirs = calculate(&input).unwrap();
        assert_eq!(heirs[0].name, "Husband");
        assert_eq!(heirs[0].share, "1/2");
        assert!((heirs[0].amount.value() - 50_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_husband_with_children() {
        let input = estate(80_000.0)
            .with_gender(Gender::Female)
            .with_spouse(true)
            .with_daughters(2);
        let heirs = calculate(&input).unwrap();
        assert_eq!(heirs[0].share, "1/4");
        // 60,000 left over two daughters
        assert_eq!(amounts(&heirs), vec![20_000.0, 30_000.0, 30_000.0]);
        assert_eq!(heirs[2].name, "Daughter 2");
        assert_eq!(heirs[2].share, "1x");
    }

    #[test]
    fn test_wife_and_two_sons() {
        let input = estate(100_000.0).with_spouse(true).with_sons(2);
        let heirs = calculate(&input).unwrap();
        assert_eq!(heirs.len(), 3);
        assert_eq!(heirs[0].share, "1/8");
        assert!((heirs[0].amount.value() - 12_500.0).abs() < TOLERANCE);
        for son in &heirs[1..] {
            assert_eq!(son.share, "2x");
            assert!((son.amount.value() - 43_750.0).abs() < TOLERANCE);
        }
        assert_eq!(heirs[1].name, "Son 1");
        assert_eq!(heirs[2].name, "Son 2");
    }

    #[test]
    fn test_both_parents_with_son_and_daughter() {
        let input = estate(60_000.0)
            .with_parents_status(ParentsStatus::Both)
            .with_sons(1)
            .with_daughters(1);
        let heirs = calculate(&input).unwrap();
        let names: Vec<_> = heirs.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Father", "Mother", "Son 1", "Daughter 1"]);
        assert_eq!(heirs[0].share, "1/6");
        assert_eq!(heirs[1].share, "1/6");
        assert!((heirs[0].amount.value() - 10_000.0).abs() < TOLERANCE);
        assert!((heirs[1].amount.value() - 10_000.0).abs() < TOLERANCE);
        assert!((heirs[2].amount.value() - 26_666.67).abs() < TOLERANCE);
        assert!((heirs[3].amount.value() - 13_333.33).abs() < TOLERANCE);
    }

    #[test]
    fn test_father_takes_residue_and_blocks_siblings() {
        let input = estate(90_000.0)
            .with_parents_status(ParentsStatus::Father)
            .with_brothers(3);
        let heirs = calculate(&input).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].name, "Father");
        assert_eq!(heirs[0].share, "Residue");
        assert!((heirs[0].amount.value() - 90_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_mother_before_father_residue() {
        let input = estate(120_000.0).with_parents_status(ParentsStatus::Both);
        let heirs = calculate(&input).unwrap();
        assert_eq!(heirs[0].name, "Mother");
        assert_eq!(heirs[0].share, "1/3");
        assert_eq!(heirs[1].name, "Father");
        assert!((heirs[0].amount.value() - 40_000.0).abs() < TOLERANCE);
        assert!((heirs[1].amount.value() - 80_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_mother_with_spouse_gets_sixth() {
        let input = estate(120_000.0)
            .with_spouse(true)
            .with_parents_status(ParentsStatus::Both);
        let heirs = calculate(&input).unwrap();
        // wife 1/4, mother 1/6, father residue 7/12
        assert_eq!(heirs[0].share, "1/4");
        // an exact sixth rounds to 0.167, which is not a table key
        assert_eq!(heirs[1].share, "16.7%");
        assert!((heirs[0].amount.value() - 30_000.0).abs() < TOLERANCE);
        assert!((heirs[1].amount.value() - 20_000.0).abs() < TOLERANCE);
        assert!((heirs[2].amount.value() - 70_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_mother_and_siblings_share() {
        let input = estate(90_000.0)
            .with_parents_status(ParentsStatus::Mother)
            .with_brothers(1)
            .with_sisters(2);
        let heirs = calculate(&input).unwrap();
        let names: Vec<_> = heirs.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Mother", "Brother 1", "Sister 1", "Sister 2"]);
        // mother 1/3 = 30,000; 60,000 over 4 units
        assert!((heirs[1].amount.value() - 30_000.0).abs() < TOLERANCE);
        assert!((heirs[2].amount.value() - 15_000.0).abs() < TOLERANCE);
        assert_eq!(heirs[1].relationship, Relationship::Sibling);
    }

    #[test]
    fn test_children_exclude_siblings() {
        let input = estate(10_000.0).with_daughters(1).with_brothers(2);
        let heirs = calculate(&input).unwrap();
        assert_eq!(heirs.len(), 1);
        assert_eq!(heirs[0].relationship, Relationship::Child);
        assert!((heirs[0].amount.value() - 10_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_no_eligible_heirs() {
        let dist = distribute(&estate(5_000.0), &CalculatorSettings::default()).unwrap();
        assert!(dist.is_empty());
        assert_eq!(dist.allocated, Money::ZERO);
        assert_eq!(dist.unallocated, Money(5_000.0));
    }

    #[test]
    fn test_unclaimed_remainder_reported() {
        let dist = distribute(&estate(100_000.0).with_spouse(true), &CalculatorSettings::default())
            .unwrap();
        assert!((dist.unallocated.value() - 75_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_estate() {
        let heirs = calculate(&estate(0.0).with_spouse(true).with_sons(1)).unwrap();
        assert_eq!(heirs.len(), 2);
        assert!(heirs.iter().all(|h| h.amount == Money::ZERO));
    }

    #[test]
    fn test_negative_amount_fails_fast() {
        let input = estate(100.0).with_financial_liabilities(-5.0).with_sons(1);
        match calculate(&input) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "financialLiabilities"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_liabilities_exceeding_assets_give_zero_amounts() {
        let input = estate(100.0)
            .with_financial_liabilities(500.0)
            .with_spouse(true)
            .with_sons(1);
        let dist = distribute(&input, &CalculatorSettings::default()).unwrap();
        assert_eq!(dist.net_estate, Money::ZERO);
        assert_eq!(dist.heirs.len(), 2);
        assert!(dist.heirs.iter().all(|h| h.amount == Money::ZERO));
        assert_eq!(dist.unallocated, Money::ZERO);
    }

    #[test]
    fn test_policy_changes_base() {
        let input = estate(100_000.0)
            .with_debt_amount(20_000.0)
            .with_bequests_amount(10_000.0)
            .with_sons(1);

        let default = distribute(&input, &CalculatorSettings::default()).unwrap();
        assert_eq!(default.net_estate, Money(100_000.0));

        let settings = CalculatorSettings::with_policy(DeductionPolicy::DeductDebtsAndBequests);
        let deducted = distribute(&input, &settings).unwrap();
        assert_eq!(deducted.net_estate, Money(70_000.0));
        assert!((deducted.heirs[0].amount.value() - 70_000.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_ordering_spouse_parents_children() {
        let input = estate(240_000.0)
            .with_spouse(true)
            .with_parents_status(ParentsStatus::Mother)
            .with_daughters(1)
            .with_sons(1);
        let heirs = calculate(&input).unwrap();
        let kinds: Vec<_> = heirs.iter().map(|h| h.heir).collect();
        assert_eq!(
            kinds,
            vec![HeirKind::Wife, HeirKind::Mother, HeirKind::Son, HeirKind::Daughter]
        );
    }
}
