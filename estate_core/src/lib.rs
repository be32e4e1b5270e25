//! # estate_core - Estate Share Calculation Engine
//!
//! `estate_core` computes how a deceased person's net estate is divided among
//! spouse, parents, children and siblings under a simplified set of
//! inheritance-share rules. All inputs and outputs are JSON-serializable so the
//! engine can sit behind a form, a CLI or an HTTP endpoint alike.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Explicit Policy**: How the net estate is derived is a setting, not a guess
//!
//! ## Quick Start
//!
//! ```rust
//! use estate_core::input::{EstateInput, ParentsStatus};
//!
//! let input = EstateInput::default()
//!     .with_total_assets(60_000.0)
//!     .with_parents_status(ParentsStatus::Both)
//!     .with_sons(1)
//!     .with_daughters(1);
//!
//! let heirs = estate_core::calculate(&input).unwrap();
//! assert_eq!(heirs[0].name, "Father");
//! assert_eq!(heirs[0].share, "1/6");
//!
//! let json = serde_json::to_string_pretty(&heirs).unwrap();
//! assert!(json.contains("\"Son 1\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Share calculator and fraction formatter
//! - [`input`] - Estate input record
//! - [`heirs`] - Heir records and distribution summary
//! - [`settings`] - Calculator settings (deduction policy)
//! - [`money`] - Monetary amount wrapper
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod heirs;
pub mod input;
pub mod money;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, distribute, format_fraction};
pub use errors::{CalcError, CalcResult};
pub use heirs::{Distribution, HeirKind, HeirRecord, Relationship};
pub use input::{EstateInput, Gender, ParentsStatus};
pub use money::Money;
pub use settings::{CalculatorSettings, DeductionPolicy};
