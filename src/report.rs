use std::fmt::Write;

use crate::comparison::{CandidateOutcome, ComparisonSummary};

/// Render a textual summary of the spring-column comparison.
///
/// The report mirrors how the result would be checked by hand: the analyzed
/// displacement next to the closed-form value, then the relative error.
#[must_use]
pub fn render_summary(summary: &ComparisonSummary) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Equivalent spring-column analysis (lateral load = {:.1})",
        summary.properties.lateral_load
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "Lateral displacements at the tip:")
        .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "    analyzed: {:.5} | calculated: {:.5}",
        summary.analyzed, summary.calculated
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "    relative error: {:.2}%",
        summary.relative_error
    )
    .expect("writing to string cannot fail");

    output
}

/// Render the error of every equivalent-stiffness candidate.
#[must_use]
pub fn render_candidate_study(outcomes: &[CandidateOutcome]) -> String {
    let mut output = String::new();

    writeln!(&mut output, "Equivalent stiffness candidates:")
        .expect("writing to string cannot fail");
    for outcome in outcomes {
        writeln!(
            &mut output,
            "    {:<26} (I = {:>11.5}): relative error = {:.2}%",
            outcome.candidate.label(),
            outcome.spring_inertia,
            outcome.relative_error
        )
        .expect("writing to string cannot fail");
    }

    output
}
