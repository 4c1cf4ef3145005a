//! Element stiffness formation for plane-frame members.
//!
//! Two element families are supported: the prismatic elastic beam-column
//! (axial stiffness plus Euler-Bernoulli bending, exact for nodal loading)
//! and the zero-length rotational spring that couples the rotations of two
//! coincident joints through a single elastic constant.

use nalgebra::{SMatrix, Vector2};

/// Local stiffness matrix of a 2D elastic beam-column.
///
/// Degrees of freedom are ordered `[u_i, v_i, theta_i, u_j, v_j, theta_j]`
/// with `u` along the member axis and `v` transverse to it.
#[must_use]
pub fn beam_column_local_stiffness(
    elastic_modulus: f64,
    area: f64,
    moment_of_inertia: f64,
    length: f64,
) -> SMatrix<f64, 6, 6> {
    let ea_l = elastic_modulus * area / length;
    let ei = elastic_modulus * moment_of_inertia;
    let k1 = 12.0 * ei / length.powi(3);
    let k2 = 6.0 * ei / length.powi(2);
    let k3 = 4.0 * ei / length;
    let k4 = 2.0 * ei / length;

    SMatrix::<f64, 6, 6>::from_row_slice(&[
        ea_l, 0.0, 0.0, -ea_l, 0.0, 0.0, //
        0.0, k1, k2, 0.0, -k1, k2, //
        0.0, k2, k3, 0.0, -k2, k4, //
        -ea_l, 0.0, 0.0, ea_l, 0.0, 0.0, //
        0.0, -k1, -k2, 0.0, k1, -k2, //
        0.0, k2, k4, 0.0, -k2, k3,
    ])
}

/// Transformation from global to member-local coordinates.
///
/// `direction` must be the unit vector along the member axis from the start
/// joint towards the end joint.
#[must_use]
pub fn beam_transformation(direction: Vector2<f64>) -> SMatrix<f64, 6, 6> {
    let c = direction.x;
    let s = direction.y;

    SMatrix::<f64, 6, 6>::from_row_slice(&[
        c, s, 0.0, 0.0, 0.0, 0.0, //
        -s, c, 0.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, c, s, 0.0, //
        0.0, 0.0, 0.0, -s, c, 0.0, //
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
    ])
}

/// Global-frame stiffness matrix of a 2D elastic beam-column.
///
/// Computed as `T^T * k_local * T` where `T` is the coordinate
/// transformation for the supplied member direction.
#[must_use]
pub fn beam_column_stiffness(
    elastic_modulus: f64,
    area: f64,
    moment_of_inertia: f64,
    length: f64,
    direction: Vector2<f64>,
) -> SMatrix<f64, 6, 6> {
    let local = beam_column_local_stiffness(elastic_modulus, area, moment_of_inertia, length);
    let transformation = beam_transformation(direction);
    transformation.transpose() * local * transformation
}

/// Stiffness matrix of a zero-length rotational spring.
///
/// The matrix acts on the rotations of the two connected joints; the spring
/// resists their relative rotation with the supplied elastic constant.
#[must_use]
pub fn rotational_spring_stiffness(stiffness: f64) -> SMatrix<f64, 2, 2> {
    SMatrix::<f64, 2, 2>::from_row_slice(&[stiffness, -stiffness, -stiffness, stiffness])
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector2;

    use super::*;

    const TOL: f64 = 1.0e-9;

    #[test]
    fn beam_column_stiffness_is_symmetric() {
        let stiffness =
            beam_column_stiffness(200.0e9, 0.01, 1.0e-4, 3.0, Vector2::new(0.6, 0.8));
        for row in 0..6 {
            for col in 0..6 {
                assert_relative_eq!(
                    stiffness[(row, col)],
                    stiffness[(col, row)],
                    max_relative = TOL
                );
            }
        }
    }

    #[test]
    fn local_stiffness_matches_textbook_entries() {
        let (e, a, i, l) = (200_000.0, 6.0, 10_000.0, 100.0);
        let local = beam_column_local_stiffness(e, a, i, l);

        assert_relative_eq!(local[(0, 0)], e * a / l, max_relative = TOL);
        assert_relative_eq!(local[(1, 1)], 12.0 * e * i / l.powi(3), max_relative = TOL);
        assert_relative_eq!(local[(1, 2)], 6.0 * e * i / l.powi(2), max_relative = TOL);
        assert_relative_eq!(local[(2, 2)], 4.0 * e * i / l, max_relative = TOL);
        assert_relative_eq!(local[(2, 5)], 2.0 * e * i / l, max_relative = TOL);
    }

    #[test]
    fn vertical_member_swaps_axial_and_transverse_axes() {
        let (e, a, i, l) = (200_000.0, 6.0, 10_000.0, 100.0);
        let global = beam_column_stiffness(e, a, i, l, Vector2::new(0.0, 1.0));

        // For a member along +Y the axial term appears on the global Y DOF
        // and the transverse bending term on the global X DOF.
        assert_relative_eq!(global[(1, 1)], e * a / l, max_relative = TOL);
        assert_relative_eq!(global[(0, 0)], 12.0 * e * i / l.powi(3), max_relative = TOL);
        assert_relative_eq!(global[(2, 2)], 4.0 * e * i / l, max_relative = TOL);
    }

    #[test]
    fn spring_stiffness_resists_relative_rotation_only() {
        let stiffness = rotational_spring_stiffness(5.0e7);

        // Equal rotations at both joints produce no moment.
        let rigid = Vector2::new(1.0, 1.0);
        let reaction = stiffness * rigid;
        assert_relative_eq!(reaction[0], 0.0, epsilon = 1.0e-9);
        assert_relative_eq!(reaction[1], 0.0, epsilon = 1.0e-9);

        // A unit relative rotation produces the elastic constant as moment.
        let twist = Vector2::new(1.0, 0.0);
        let moment = stiffness * twist;
        assert_relative_eq!(moment[0], 5.0e7, max_relative = TOL);
        assert_relative_eq!(moment[1], -5.0e7, max_relative = TOL);
    }
}
