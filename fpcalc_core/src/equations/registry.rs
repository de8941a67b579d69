//! # Equation Registry
//!
//! Central registry of the equations used in the Fp calculation. Each
//! equation carries its code reference, formula and variable definitions so
//! a calculation can report exactly which formulas it applied.
//!
//! ## Usage
//!
//! ```rust
//! use fpcalc_core::equations::registry::{Equation, EquationTracker};
//!
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::DuctilityReduction, "Partition P-1");
//!
//! let meta = Equation::DuctilityReduction.metadata();
//! println!("{}: {}", meta.name, meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a section of ASCE 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CodeReference {
    /// Edition year (e.g., 2022)
    pub year: u16,
    /// Equation or section number
    pub section: &'static str,
}

impl CodeReference {
    /// ASCE 7-22 reference
    pub const fn asce7_22(section: &'static str) -> Self {
        Self { year: 2022, section }
    }

    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        format!("ASCE 7-{} {}", self.year % 100, self.section)
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Structure period
    Period,
    /// Height amplification (Hf, a1, a2)
    Amplification,
    /// Ductility reduction (Rμ)
    DemandReduction,
    /// Design force and its limits
    DesignForce,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Period => "Structure Period",
            EquationCategory::Amplification => "Height Amplification",
            EquationCategory::DemandReduction => "Ductility Reduction",
            EquationCategory::DesignForce => "Design Force",
        }
    }

    /// Sort order in the calculation flow (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Period => 1,
            EquationCategory::Amplification => 2,
            EquationCategory::DemandReduction => 3,
            EquationCategory::DesignForce => 4,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Hf", "z")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "ft", "g", "-")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used in the Fp calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// Ta = Ct hn^x
    ApproximatePeriod,
    /// a1 = 1/Ta ≤ 2.5
    ShapeCoefficientA1,
    /// a2 = 1 - (0.4/Ta)^2 ≥ 0
    ShapeCoefficientA2,
    /// Hf = 1 + a1 (z/h) + a2 (z/h)^10
    HeightFactorWithPeriod,
    /// Hf = 1 + 2.5 (z/h)
    HeightFactorWithoutPeriod,
    /// Rμ = sqrt(1.1 R / (Ie Ω₀)) ≥ 1.3
    DuctilityReduction,
    /// Fp = 0.4 SDS Ip Wp (Hf/Rμ)(CAR/Rpo)
    DesignForce,
    /// Fp,max = 1.6 SDS Ip Wp
    DesignForceMaximum,
    /// Fp,min = 0.3 SDS Ip Wp
    DesignForceMinimum,
}

/// Every registered equation, in calculation order
pub const ALL_EQUATIONS: [Equation; 9] = [
    Equation::ApproximatePeriod,
    Equation::ShapeCoefficientA1,
    Equation::ShapeCoefficientA2,
    Equation::HeightFactorWithPeriod,
    Equation::HeightFactorWithoutPeriod,
    Equation::DuctilityReduction,
    Equation::DesignForce,
    Equation::DesignForceMaximum,
    Equation::DesignForceMinimum,
];

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ApproximatePeriod => EquationMetadata {
                name: "Approximate Fundamental Period",
                description: "Approximate fundamental period of the structure from its height",
                formula_plain: "Ta = Ct * hn^x",
                reference: CodeReference::asce7_22("Eq. 12.8-8"),
                variables: vec![
                    Variable::new("Ta", "Approximate fundamental period", "s"),
                    Variable::new("Ct", "Period coefficient (Table 12.8-2)", "-"),
                    Variable::new("hn", "Structural height", "ft"),
                    Variable::new("x", "Period exponent (Table 12.8-2)", "-"),
                ],
                assumptions: vec!["Ct and x in US customary units"],
                category: EquationCategory::Period,
                source_module: "tables/period.rs",
                source_function: "approximate_period",
            },

            Equation::ShapeCoefficientA1 => EquationMetadata {
                name: "Height Factor Coefficient a1",
                description: "Linear shape coefficient of the floor acceleration profile",
                formula_plain: "a1 = 1/Ta <= 2.5",
                reference: CodeReference::asce7_22("Eq. 13.3-4"),
                variables: vec![
                    Variable::new("a1", "Linear shape coefficient", "-"),
                    Variable::new("Ta", "Approximate fundamental period", "s"),
                ],
                assumptions: vec!["Ta > 0"],
                category: EquationCategory::Amplification,
                source_module: "seismic/amplification.rs",
                source_function: "height_factor",
            },

            Equation::ShapeCoefficientA2 => EquationMetadata {
                name: "Height Factor Coefficient a2",
                description: "Higher-mode shape coefficient of the floor acceleration profile",
                formula_plain: "a2 = [1 - (0.4/Ta)^2] >= 0",
                reference: CodeReference::asce7_22("Eq. 13.3-4"),
                variables: vec![
                    Variable::new("a2", "Higher-mode shape coefficient", "-"),
                    Variable::new("Ta", "Approximate fundamental period", "s"),
                ],
                assumptions: vec!["Ta > 0"],
                category: EquationCategory::Amplification,
                source_module: "seismic/amplification.rs",
                source_function: "height_factor",
            },

            Equation::HeightFactorWithPeriod => EquationMetadata {
                name: "Height Factor (Period Known)",
                description: "Amplification of acceleration at the attachment height",
                formula_plain: "Hf = 1 + a1*(z/h) + a2*(z/h)^10",
                reference: CodeReference::asce7_22("Eq. 13.3-4"),
                variables: vec![
                    Variable::new("Hf", "Height factor", "-"),
                    Variable::new("z", "Attachment height above base", "ft"),
                    Variable::new("h", "Average roof height above base", "ft"),
                ],
                assumptions: vec!["z is limited to h", "Ta <= 0 or h <= 0 uses Hf = 3.5"],
                category: EquationCategory::Amplification,
                source_module: "seismic/amplification.rs",
                source_function: "height_factor",
            },

            Equation::HeightFactorWithoutPeriod => EquationMetadata {
                name: "Height Factor (Period Unknown)",
                description: "Amplification of acceleration at the attachment height when the period is not known",
                formula_plain: "Hf = 1 + 2.5*(z/h)",
                reference: CodeReference::asce7_22("Eq. 13.3-5"),
                variables: vec![
                    Variable::new("Hf", "Height factor", "-"),
                    Variable::new("z", "Attachment height above base", "ft"),
                    Variable::new("h", "Average roof height above base", "ft"),
                ],
                assumptions: vec!["z is limited to h"],
                category: EquationCategory::Amplification,
                source_module: "seismic/amplification.rs",
                source_function: "height_factor",
            },

            Equation::DuctilityReduction => EquationMetadata {
                name: "Structure Ductility Reduction Factor",
                description: "Reduction of component demand for the ductility of the supporting structure",
                formula_plain: "Rmu = sqrt(1.1*R / (Ie*Omega0)) >= 1.3",
                reference: CodeReference::asce7_22("Eq. 13.3-6"),
                variables: vec![
                    Variable::new("Rmu", "Structure ductility reduction factor", "-"),
                    Variable::new("R", "Response modification coefficient", "-"),
                    Variable::new("Ie", "Structure importance factor", "-"),
                    Variable::new("Omega0", "Overstrength factor", "-"),
                ],
                assumptions: vec!["Ie * Omega0 = 0 (no SFRS selected) uses Rmu = 1.3"],
                category: EquationCategory::DemandReduction,
                source_module: "seismic/demand.rs",
                source_function: "ductility_factor",
            },

            Equation::DesignForce => EquationMetadata {
                name: "Horizontal Seismic Design Force",
                description: "Seismic design force on the component, per unit component weight",
                formula_plain: "Fp = 0.4*SDS*Ip*Wp*(Hf/Rmu)*(CAR/Rpo)",
                reference: CodeReference::asce7_22("Eq. 13.3-1"),
                variables: vec![
                    Variable::new("Fp", "Seismic design force coefficient", "Wp"),
                    Variable::new("SDS", "Short-period design spectral acceleration", "g"),
                    Variable::new("Ip", "Component importance factor", "-"),
                    Variable::new("CAR", "Component resonance ductility factor", "-"),
                    Variable::new("Rpo", "Component strength factor", "-"),
                ],
                assumptions: vec!["Wp = 1.0, result is a coefficient"],
                category: EquationCategory::DesignForce,
                source_module: "seismic/coefficient.rs",
                source_function: "fp_coefficient",
            },

            Equation::DesignForceMaximum => EquationMetadata {
                name: "Design Force Upper Limit",
                description: "Fp need not exceed this value",
                formula_plain: "Fp,max = 1.6*SDS*Ip*Wp",
                reference: CodeReference::asce7_22("Eq. 13.3-2"),
                variables: vec![
                    Variable::new("SDS", "Short-period design spectral acceleration", "g"),
                    Variable::new("Ip", "Component importance factor", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::DesignForce,
                source_module: "seismic/coefficient.rs",
                source_function: "fp_coefficient",
            },

            Equation::DesignForceMinimum => EquationMetadata {
                name: "Design Force Lower Limit",
                description: "Fp shall not be taken less than this value",
                formula_plain: "Fp,min = 0.3*SDS*Ip*Wp",
                reference: CodeReference::asce7_22("Eq. 13.3-3"),
                variables: vec![
                    Variable::new("SDS", "Short-period design spectral acceleration", "g"),
                    Variable::new("Ip", "Component importance factor", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::DesignForce,
                source_module: "seismic/coefficient.rs",
                source_function: "fp_coefficient",
            },
        }
    }

    /// Categories in calculation order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories: Vec<EquationCategory> = ALL_EQUATIONS
            .iter()
            .map(|eq| eq.metadata().category)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        categories.sort_by_key(|c| c.sort_order());
        categories
    }

    /// Registered equations in a category, in calculation order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }
}

// ============================================================================
// Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where it was used (e.g., the calculation label)
    pub context: String,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
        }
    }
}

/// Collector for equation usage during a calculation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// True if the equation was recorded at least once
    pub fn contains(&self, equation: Equation) -> bool {
        self.usages.iter().any(|u| u.equation == equation)
    }

    /// Get unique equations used, in first-use order
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group unique equations by category
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();
        for eq in self.unique_equations() {
            by_cat.entry(eq.metadata().category).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Render the whole registry as a Markdown reference document.
///
/// ```rust
/// use fpcalc_core::equations::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Height Amplification"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(8_000);

    output.push_str(
        r#"# FpCalc Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Formulas used to compute the seismic design force coefficient Fp/Wp for
nonstructural components, ASCE 7-22 Chapter 13.

---

"#,
    );

    for category in Equation::all_categories() {
        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in Equation::in_category(category) {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));
            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));

            if !meta.variables.is_empty() {
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str(&format!(
                "*Source: `{}::{}`*\n\n",
                meta.source_module, meta.source_function
            ));
        }
    }

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        let rmu = Equation::DuctilityReduction.metadata();
        assert!(rmu.formula_plain.contains(">= 1.3"));
    }

    #[test]
    fn test_code_reference_citation() {
        let reference = CodeReference::asce7_22("Eq. 13.3-1");
        assert_eq!(reference.citation(), "ASCE 7-22 Eq. 13.3-1");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::DesignForce, "P-1");
        tracker.record(Equation::DuctilityReduction, "P-1");
        tracker.record(Equation::DesignForce, "P-2");

        assert_eq!(tracker.usages().len(), 3);
        assert_eq!(tracker.unique_equations(), vec![Equation::DesignForce, Equation::DuctilityReduction]);
        assert!(tracker.contains(Equation::DuctilityReduction));
        assert!(!tracker.contains(Equation::ApproximatePeriod));
    }

    #[test]
    fn test_by_category_sorted() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::DesignForce, "test");
        tracker.record(Equation::HeightFactorWithoutPeriod, "test");
        tracker.record(Equation::DuctilityReduction, "test");

        let categories: Vec<_> = tracker.by_category().iter().map(|(cat, _)| *cat).collect();
        assert_eq!(
            categories,
            vec![
                EquationCategory::Amplification,
                EquationCategory::DemandReduction,
                EquationCategory::DesignForce,
            ]
        );
    }

    #[test]
    fn test_categories_cover_registry() {
        let cats = Equation::all_categories();
        assert_eq!(cats.len(), 4);
        let total: usize = cats.iter().map(|c| Equation::in_category(*c).len()).sum();
        assert_eq!(total, ALL_EQUATIONS.len());
    }

    #[test]
    fn test_markdown_lists_every_equation() {
        let markdown = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            assert!(markdown.contains(eq.metadata().name), "Missing {:?}", eq);
        }
        assert!(markdown.contains("ASCE 7-22 Eq. 13.3-6"));
    }
}
