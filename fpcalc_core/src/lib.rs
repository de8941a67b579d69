//! # fpcalc_core - Seismic Design Force Engine
//!
//! `fpcalc_core` computes the horizontal seismic design force coefficient
//! Fp/Wp for nonstructural components (partition walls in particular) per
//! ASCE/SEI 7-22 Chapter 13. All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over explicit inputs and read-only tables
//! - **No hidden failures**: Degenerate numeric cases resolve to defined
//!   fallback values; only input validation and table loading return errors
//! - **Auditable**: Every intermediate value and applied equation is reported
//!
//! ## Quick Start
//!
//! ```rust
//! use fpcalc_core::calculations::partition::{calculate, PartitionInput};
//! use fpcalc_core::tables::ReferenceTables;
//!
//! // SDS comes from a site-specific source, e.g. a hazard lookup
//! let input = PartitionInput::new(1.2);
//! let result = calculate(&input, ReferenceTables::builtin()?)?;
//! println!("Fp = {:.3} Wp", result.fp.fp());
//! # Ok::<(), fpcalc_core::errors::CalcError>(())
//! ```
//!
//! ## Modules
//!
//! - [`tables`] - SFRS, component and period tables with their lookups
//! - [`seismic`] - Hf, Rμ and Fp formulas
//! - [`calculations`] - Validated calculation pipelines
//! - [`building`] - Occupancy, material and partition selections
//! - [`equations`] - Equation registry and audit trail
//! - [`errors`] - Structured error types

pub mod building;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod seismic;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutput, FpInput, FpResult, PartitionInput, PartitionResult};
pub use errors::{CalcError, CalcResult};
pub use tables::ReferenceTables;
