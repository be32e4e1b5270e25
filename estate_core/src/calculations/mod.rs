//! # Estate Calculations
//!
//! Each calculation follows the pattern:
//!
//! - an input record (JSON-serializable)
//! - a result type (JSON-serializable)
//! - `calculate(input) -> CalcResult<...>` - pure calculation function
//!
//! ## Available Calculations
//!
//! - [`shares`] - Distribution of the net estate among heirs
//! - [`fraction`] - Share labels for decimal fractions

pub mod fraction;
pub mod shares;

// Re-export commonly used items
pub use fraction::format_fraction;
pub use shares::{calculate, distribute};
