use framex::{force, Frame, FrameEditError};
use serde::Serialize;

use crate::column::ColumnGeometry;

/// Rotational stiffness assigned to the three springs, expressed as an
/// equivalent second moment of area so it can be compared directly with the
/// continuous column's section.
///
/// The first three candidates are the obvious guesses; only the virtual
/// work value reproduces the lateral stiffness of the continuous column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquivalentInertia {
    /// The full section inertia, unchanged.
    FullSection,
    /// The section inertia divided by the column length.
    SectionOverLength,
    /// Three times the section inertia divided by the column length.
    ThreeSectionOverLength,
    /// The value derived by the virtual work method for this column.
    VirtualWork,
}

/// Equivalent inertia obtained by hand from the virtual work method for the
/// three-station column analyzed here.
const VIRTUAL_WORK_INERTIA: f64 = 278.994_420_1;

impl EquivalentInertia {
    /// All candidates, in the order they are usually presented.
    pub const ALL: [Self; 4] = [
        Self::FullSection,
        Self::SectionOverLength,
        Self::ThreeSectionOverLength,
        Self::VirtualWork,
    ];

    /// Human-readable name for reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::FullSection => "full section",
            Self::SectionOverLength => "section over length",
            Self::ThreeSectionOverLength => "three sections over length",
            Self::VirtualWork => "virtual work",
        }
    }

    /// Equivalent second moment of area for the candidate.
    #[must_use]
    pub fn value(self, column_inertia: f64, length: f64) -> f64 {
        match self {
            Self::FullSection => column_inertia,
            Self::SectionOverLength => column_inertia / length,
            Self::ThreeSectionOverLength => 3.0 * column_inertia / length,
            Self::VirtualWork => VIRTUAL_WORK_INERTIA,
        }
    }
}

/// Physical properties of the spring-column demonstration.
///
/// The model is unitless; the defaults reproduce the published exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnProperties {
    /// Column height.
    pub length: f64,
    /// Relative heights of the spring stations.
    pub spring_positions: [f64; 3],
    /// Lateral point load applied at the tip.
    pub lateral_load: f64,
    /// Elastic modulus shared by the column and the springs.
    pub elastic_modulus: f64,
    /// Second moment of area of the continuous column being matched.
    pub column_inertia: f64,
    /// Cross-sectional area of the fictitious rigid segments.
    pub rigid_area: f64,
    /// Second moment of area of the fictitious rigid segments.
    pub rigid_inertia: f64,
    /// Equivalent second moment of area assigned to the springs.
    pub spring_inertia: f64,
}

impl Default for ColumnProperties {
    fn default() -> Self {
        Self {
            length: 100.0,
            spring_positions: [0.2, 0.5, 0.8],
            lateral_load: 1_000.0,
            elastic_modulus: 200_000.0,
            column_inertia: 10_000.0,
            rigid_area: 1.0e9,
            rigid_inertia: 1.0e7,
            spring_inertia: VIRTUAL_WORK_INERTIA,
        }
    }
}

impl ColumnProperties {
    /// Properties with the spring inertia taken from the supplied candidate.
    #[must_use]
    pub fn with_spring_inertia(candidate: EquivalentInertia) -> Self {
        let defaults = Self::default();
        Self {
            spring_inertia: candidate.value(defaults.column_inertia, defaults.length),
            ..defaults
        }
    }

    /// Elastic rotational stiffness assigned to each spring.
    #[must_use]
    pub fn spring_stiffness(&self) -> f64 {
        self.spring_inertia * self.elastic_modulus
    }
}

/// Apply supports, couplings, loads and member properties to the
/// spring-column model.
pub fn apply_column_conditions(
    frame: &mut Frame,
    geometry: &ColumnGeometry,
    properties: &ColumnProperties,
) -> Result<(), FrameEditError> {
    // Clamp the base: no translation, no rotation.
    frame.set_support(geometry.base, [true, true, true])?;

    // Tie the translations of each duplicate joint to its primary joint.
    // The rotations stay independent so the relative rotation at a station
    // is resisted only by its spring.
    for station in &geometry.stations {
        frame.couple_joints(station.primary, station.duplicate, [true, true, false])?;
    }

    // The lateral point load at the top of the column.
    frame.set_load(
        geometry.tip,
        force(properties.lateral_load, 0.0, 0.0),
    )?;

    // The segments are fictitiously stiff so that essentially all flexural
    // deformation concentrates in the springs.
    for &segment in &geometry.segments {
        frame.set_beam_properties(
            segment,
            properties.rigid_area,
            properties.elastic_modulus,
            properties.rigid_inertia,
        )?;
    }

    for station in &geometry.stations {
        frame.set_spring_stiffness(station.spring, properties.spring_stiffness())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::column::build_spring_column;

    #[test]
    fn candidate_values_follow_their_formulas() {
        let (inertia, length) = (10_000.0, 100.0);
        assert_relative_eq!(
            EquivalentInertia::FullSection.value(inertia, length),
            10_000.0
        );
        assert_relative_eq!(
            EquivalentInertia::SectionOverLength.value(inertia, length),
            100.0
        );
        assert_relative_eq!(
            EquivalentInertia::ThreeSectionOverLength.value(inertia, length),
            300.0
        );
        assert_relative_eq!(
            EquivalentInertia::VirtualWork.value(inertia, length),
            278.994_420_1
        );
    }

    #[test]
    fn default_properties_use_the_virtual_work_inertia() {
        let properties = ColumnProperties::default();
        assert_relative_eq!(properties.spring_inertia, 278.994_420_1);
        assert_relative_eq!(
            properties.spring_stiffness(),
            278.994_420_1 * 200_000.0,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn applies_expected_conditions() {
        let properties = ColumnProperties::default();
        let (mut frame, geometry) = build_spring_column(&properties);
        apply_column_conditions(&mut frame, &geometry, &properties)
            .expect("conditions apply cleanly");

        assert_eq!(frame.coupling_count(), 3);

        // The configured model must be mechanically stable.
        frame.evaluate().expect("analysis succeeds");
        let sway = frame
            .joint_displacement(geometry.tip)
            .expect("displacement available");
        assert!(sway.x > 0.0);
    }
}
