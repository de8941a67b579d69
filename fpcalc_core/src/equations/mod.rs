//! # Equations
//!
//! Metadata for every formula the Fp calculation applies, for audit trails
//! and generated documentation. The formulas themselves live in
//! [`crate::seismic`] and [`crate::tables::period`].
//!
//! ## References
//!
//! - ASCE 7-22: Minimum Design Loads and Associated Criteria for Buildings
//!   and Other Structures, Chapters 12 and 13

pub mod registry;

pub use registry::{
    generate_equations_markdown, CodeReference, Equation, EquationCategory, EquationMetadata,
    EquationTracker, EquationUsage, Variable, ALL_EQUATIONS,
};
