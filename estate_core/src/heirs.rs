//! # Heir Records
//!
//! Output types of a share calculation: one [`HeirRecord`] per individual heir,
//! wrapped in a [`Distribution`] that also carries the totals.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "name": "Son 2",
//!   "heir": "Son",
//!   "ordinal": 2,
//!   "relationship": "Child",
//!   "share": "2x",
//!   "amount": 43750.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::settings::DeductionPolicy;

/// Coarse relationship of an heir to the deceased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    Spouse,
    Parent,
    Child,
    Sibling,
}

impl Relationship {
    /// All relationships in output order
    pub const ALL: [Relationship; 4] = [
        Relationship::Spouse,
        Relationship::Parent,
        Relationship::Child,
        Relationship::Sibling,
    ];

    /// English display label
    pub fn label(&self) -> &'static str {
        match self {
            Relationship::Spouse => "Spouse",
            Relationship::Parent => "Parent",
            Relationship::Child => "Child",
            Relationship::Sibling => "Sibling",
        }
    }
}

/// The specific kind of heir, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeirKind {
    Wife,
    Husband,
    Father,
    Mother,
    Son,
    Daughter,
    Brother,
    Sister,
}

impl HeirKind {
    /// English display label
    pub fn label(&self) -> &'static str {
        match self {
            HeirKind::Wife => "Wife",
            HeirKind::Husband => "Husband",
            HeirKind::Father => "Father",
            HeirKind::Mother => "Mother",
            HeirKind::Son => "Son",
            HeirKind::Daughter => "Daughter",
            HeirKind::Brother => "Brother",
            HeirKind::Sister => "Sister",
        }
    }

    pub fn relationship(&self) -> Relationship {
        match self {
            HeirKind::Wife | HeirKind::Husband => Relationship::Spouse,
            HeirKind::Father | HeirKind::Mother => Relationship::Parent,
            HeirKind::Son | HeirKind::Daughter => Relationship::Child,
            HeirKind::Brother | HeirKind::Sister => Relationship::Sibling,
        }
    }
}

/// One heir and the amount assigned to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeirRecord {
    /// Display label, numbered within a group ("Son 2")
    pub name: String,

    pub heir: HeirKind,

    /// 1-based position within a group of the same kind; `None` for
    /// spouse and parents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<u32>,

    pub relationship: Relationship,

    /// Human-readable share: a fraction ("1/8"), "Residue", a unit weight
    /// ("2x", "1x") or a percentage
    pub share: String,

    pub amount: Money,
}

impl HeirRecord {
    /// A single heir (spouse or parent)
    pub fn single(heir: HeirKind, share: impl Into<String>, amount: Money) -> Self {
        HeirRecord {
            name: heir.label().to_string(),
            heir,
            ordinal: None,
            relationship: heir.relationship(),
            share: share.into(),
            amount,
        }
    }

    /// One member of a group of heirs of the same kind
    pub fn numbered(heir: HeirKind, ordinal: u32, share: impl Into<String>, amount: Money) -> Self {
        HeirRecord {
            name: format!("{} {}", heir.label(), ordinal),
            heir,
            ordinal: Some(ordinal),
            relationship: heir.relationship(),
            share: share.into(),
            amount,
        }
    }
}

/// Complete outcome of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// Policy used to derive the net estate
    pub policy: DeductionPolicy,

    /// Base amount distributed among heirs
    pub net_estate: Money,

    /// Heirs in output order: spouse, parents, children, siblings
    pub heirs: Vec<HeirRecord>,

    /// Sum of all heir amounts
    pub allocated: Money,

    /// Part of the net estate no eligible heir claims
    pub unallocated: Money,
}

impl Distribution {
    /// Build a distribution and compute its totals
    pub fn new(policy: DeductionPolicy, net_estate: Money, heirs: Vec<HeirRecord>) -> Self {
        let allocated: Money = heirs.iter().map(|h| h.amount).sum();
        let unallocated = (net_estate - allocated).non_negative();
        Distribution {
            policy,
            net_estate,
            heirs,
            allocated,
            unallocated,
        }
    }

    /// True when no heir is eligible
    pub fn is_empty(&self) -> bool {
        self.heirs.is_empty()
    }

    /// Heirs with the given relationship, in output order
    pub fn by_relationship(&self, relationship: Relationship) -> impl Iterator<Item = &HeirRecord> {
        self.heirs.iter().filter(move |h| h.relationship == relationship)
    }
}
