//! Cantilever column modelled with rigid segments and rotational springs.
//!
//! The demonstration follows the "three-point" discretization discussed at
//! <https://portwooddigital.com/2022/05/01/a-complicated-equivalent/>: four
//! nearly rigid beam segments are connected through zero-length rotational
//! springs, and the spring stiffness that reproduces the lateral tip
//! displacement of the continuous column is found via the virtual work
//! method. The analyzed displacement is compared against the closed-form
//! cantilever deflection, once for the virtual-work stiffness and once for
//! each of the simpler candidate formulas.

mod column;
mod comparison;
mod conditions;
mod report;

use std::error::Error;

use column::build_spring_column;
use comparison::{run_candidate_study, run_comparison};
use conditions::{apply_column_conditions, ColumnProperties};
use report::{render_candidate_study, render_summary};

fn main() -> Result<(), Box<dyn Error>> {
    // Build the bare geometry: segments, spring stations and their
    // duplicate joints.
    let properties = ColumnProperties::default();
    let (mut frame, geometry) = build_spring_column(&properties);

    // Apply the boundary conditions, the translational couplings at the
    // spring stations, the lateral tip load and the member properties.
    apply_column_conditions(&mut frame, &geometry, &properties)?;

    // Run the load-controlled static analysis and compare the analyzed tip
    // displacement with the closed-form cantilever value.
    let summary = run_comparison(&mut frame, &geometry, &properties)?;
    print!("{}", render_summary(&summary));

    // Repeat the comparison for the alternative stiffness candidates; only
    // the virtual work value comes close.
    let outcomes = run_candidate_study()?;
    print!("{}", render_candidate_study(&outcomes));

    Ok(())
}
