use std::error::Error;

use framex::{AnalysisError, Frame, StaticAnalysis};
use serde::Serialize;

use crate::column::{build_spring_column, ColumnGeometry};
use crate::conditions::{apply_column_conditions, ColumnProperties, EquivalentInertia};

/// Outcome of comparing the discrete model against the closed-form column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonSummary {
    /// Lateral tip displacement reported by the analysis.
    pub analyzed: f64,
    /// Closed-form lateral tip displacement of the continuous column.
    pub calculated: f64,
    /// Relative error between the two, in percent.
    pub relative_error: f64,
    /// Properties that generated the result, exposed for reporting.
    pub properties: ColumnProperties,
}

/// Relative error of one equivalent-stiffness candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CandidateOutcome {
    /// The candidate stiffness formula.
    pub candidate: EquivalentInertia,
    /// Equivalent second moment of area assigned to the springs.
    pub spring_inertia: f64,
    /// Relative error between analyzed and closed-form displacement, in
    /// percent.
    pub relative_error: f64,
}

/// Closed-form lateral tip displacement of a cantilever under a point load,
/// `P L^3 / (3 E I)`.
#[must_use]
pub fn cantilever_tip_deflection(
    load: f64,
    length: f64,
    elastic_modulus: f64,
    moment_of_inertia: f64,
) -> f64 {
    load * length.powi(3) / (3.0 * elastic_modulus * moment_of_inertia)
}

/// Run the ten-increment static analysis and compare the analyzed tip
/// displacement with the closed-form value.
pub fn run_comparison(
    frame: &mut Frame,
    geometry: &ColumnGeometry,
    properties: &ColumnProperties,
) -> Result<ComparisonSummary, AnalysisError> {
    frame.analyze(&StaticAnalysis::default())?;

    let analyzed = frame
        .joint_displacement(geometry.tip)
        .expect("displacement computed during analysis")
        .x;
    let calculated = cantilever_tip_deflection(
        properties.lateral_load,
        properties.length,
        properties.elastic_modulus,
        properties.column_inertia,
    );
    let relative_error = 100.0 * ((calculated - analyzed) / calculated).abs();

    Ok(ComparisonSummary {
        analyzed,
        calculated,
        relative_error,
        properties: *properties,
    })
}

/// Rebuild and analyze the column once per equivalent-stiffness candidate.
pub fn run_candidate_study() -> Result<Vec<CandidateOutcome>, Box<dyn Error>> {
    let mut outcomes = Vec::with_capacity(EquivalentInertia::ALL.len());
    for candidate in EquivalentInertia::ALL {
        let properties = ColumnProperties::with_spring_inertia(candidate);
        let (mut frame, geometry) = build_spring_column(&properties);
        apply_column_conditions(&mut frame, &geometry, &properties)?;
        let summary = run_comparison(&mut frame, &geometry, &properties)?;
        outcomes.push(CandidateOutcome {
            candidate,
            spring_inertia: properties.spring_inertia,
            relative_error: summary.relative_error,
        });
    }
    Ok(outcomes)
}
