//! Static analysis configuration and the incremental solution drive.
//!
//! The external load is applied in equal increments under load control. At
//! each increment the equilibrium residual is driven down by Newton-Raphson
//! iterations. The members are linear-elastic, so the tangent stiffness is
//! constant and is factorized once for the whole analysis; the stepping and
//! iteration machinery still runs so that convergence is verified at every
//! increment.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::errors::AnalysisError;

/// Options controlling a load-controlled static analysis.
///
/// # Examples
/// ```
/// use framex::StaticAnalysis;
///
/// let options = StaticAnalysis::default();
/// assert_eq!(options.load_steps, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaticAnalysis {
    /// Number of equal load increments applied to reach the full load.
    pub load_steps: usize,
    /// Maximum equilibrium iterations allowed per load step.
    pub max_iterations: usize,
    /// Relative residual norm below which a load step is converged.
    pub tolerance: f64,
}

impl Default for StaticAnalysis {
    fn default() -> Self {
        Self {
            load_steps: 10,
            max_iterations: 25,
            tolerance: 1.0e-8,
        }
    }
}

impl StaticAnalysis {
    /// Create options with the supplied number of load increments and the
    /// default iteration settings.
    #[must_use]
    pub fn with_load_steps(load_steps: usize) -> Self {
        Self {
            load_steps,
            ..Self::default()
        }
    }

    /// Check that the options describe a runnable analysis.
    pub(crate) fn validate(&self) -> Result<(), AnalysisError> {
        if self.load_steps == 0 {
            return Err(AnalysisError::NoLoadSteps);
        }
        Ok(())
    }
}

/// Solve the partitioned system under incremental load control.
///
/// `stiffness` and `loads` span the retained equations; `free` lists the
/// equations that are not restrained by supports. The returned vector spans
/// all retained equations, with restrained entries left at zero.
pub(crate) fn solve_load_controlled(
    stiffness: &DMatrix<f64>,
    loads: &DVector<f64>,
    free: &[usize],
    options: &StaticAnalysis,
) -> Result<DVector<f64>, AnalysisError> {
    options.validate()?;

    let mut displacements = DVector::zeros(loads.len());
    if free.is_empty() {
        return Ok(displacements);
    }

    let mut reduced_stiffness = DMatrix::zeros(free.len(), free.len());
    let mut reduced_loads = DVector::zeros(free.len());
    for (row_idx, &row) in free.iter().enumerate() {
        reduced_loads[row_idx] = loads[row];
        for (col_idx, &col) in free.iter().enumerate() {
            reduced_stiffness[(row_idx, col_idx)] = stiffness[(row, col)];
        }
    }

    // Constant tangent for linear-elastic members: factorize once.
    let factorization = reduced_stiffness.clone().lu();
    let reference = reduced_loads.norm().max(1.0);

    let mut solution = DVector::zeros(free.len());
    for step in 1..=options.load_steps {
        let factor = step as f64 / options.load_steps as f64;
        let target = &reduced_loads * factor;

        let mut converged = false;
        for _ in 0..options.max_iterations {
            let residual = &target - &reduced_stiffness * &solution;
            if residual.norm() <= options.tolerance * reference {
                converged = true;
                break;
            }
            let correction = factorization
                .solve(&residual)
                .ok_or(AnalysisError::SingularStiffness)?;
            solution += correction;
        }
        if !converged {
            return Err(AnalysisError::NonConvergence {
                step,
                iterations: options.max_iterations,
            });
        }
    }

    for (idx, &dof) in free.iter().enumerate() {
        displacements[dof] = solution[idx];
    }
    Ok(displacements)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn default_options_match_ten_step_load_control() {
        let options = StaticAnalysis::default();
        assert_eq!(options.load_steps, 10);
        assert_eq!(options.max_iterations, 25);
        assert!(options.tolerance > 0.0);
    }

    #[test]
    fn zero_load_steps_are_rejected() {
        let options = StaticAnalysis::with_load_steps(0);
        let stiffness = DMatrix::identity(1, 1);
        let loads = DVector::from_element(1, 1.0);
        let error = solve_load_controlled(&stiffness, &loads, &[0], &options)
            .expect_err("zero steps rejected");
        assert_eq!(error, AnalysisError::NoLoadSteps);
    }

    #[test]
    fn fully_restrained_system_solves_trivially() {
        let options = StaticAnalysis::default();
        let stiffness = DMatrix::identity(3, 3);
        let loads = DVector::from_element(3, 5.0);
        let displacements =
            solve_load_controlled(&stiffness, &loads, &[], &options).expect("trivial solve");
        assert_eq!(displacements, DVector::zeros(3));
    }

    #[test]
    fn scalar_system_recovers_exact_solution() {
        let options = StaticAnalysis::default();
        let stiffness = DMatrix::from_element(1, 1, 4.0);
        let loads = DVector::from_element(1, 2.0);
        let displacements =
            solve_load_controlled(&stiffness, &loads, &[0], &options).expect("solve succeeds");
        assert_relative_eq!(displacements[0], 0.5, max_relative = 1.0e-12);
    }

    #[test]
    fn singular_system_is_reported() {
        let options = StaticAnalysis::default();
        let stiffness = DMatrix::zeros(2, 2);
        let loads = DVector::from_element(2, 1.0);
        let error = solve_load_controlled(&stiffness, &loads, &[0, 1], &options)
            .expect_err("singular system detected");
        assert_eq!(error, AnalysisError::SingularStiffness);
    }

    #[test]
    fn single_iteration_cannot_confirm_convergence() {
        // The residual check precedes each correction, so one iteration can
        // compute the solution but never re-verify it.
        let options = StaticAnalysis {
            max_iterations: 1,
            ..StaticAnalysis::default()
        };
        let stiffness = DMatrix::from_element(1, 1, 4.0);
        let loads = DVector::from_element(1, 2.0);
        let error = solve_load_controlled(&stiffness, &loads, &[0], &options)
            .expect_err("one iteration is not enough");
        assert_eq!(
            error,
            AnalysisError::NonConvergence {
                step: 1,
                iterations: 1
            }
        );
    }
}
