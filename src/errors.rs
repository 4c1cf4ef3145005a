//! Error types produced while editing or analysing plane frames.

use petgraph::graph::{EdgeIndex, NodeIndex};
use thiserror::Error;

/// Error returned when a frame analysis fails.
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    /// Returned when a member is missing required properties.
    #[error("member {0:?} is missing material properties")]
    MissingProperties(EdgeIndex),
    /// Returned when a beam-column spans zero distance.
    #[error("beam-column {0:?} has zero length")]
    ZeroLengthBeam(EdgeIndex),
    /// Returned when a rotational spring connects joints that do not share
    /// the same position.
    #[error("rotational spring {0:?} connects non-coincident joints")]
    MisalignedSpring(EdgeIndex),
    /// Returned when a chain of couplings leads back to itself.
    #[error("coupling chain through joint {0:?} forms a cycle")]
    CouplingCycle(NodeIndex),
    /// Returned when the analysis options request no load increments.
    #[error("static analysis requires at least one load step")]
    NoLoadSteps,
    /// Returned when the stiffness matrix cannot be inverted.
    #[error("stiffness matrix is singular; check supports and connectivity")]
    SingularStiffness,
    /// Returned when the equilibrium iterations fail to converge.
    #[error("load step {step} failed to converge within {iterations} iterations")]
    NonConvergence {
        /// Load step at which the iterations stalled.
        step: usize,
        /// Number of iterations attempted.
        iterations: usize,
    },
}

/// Error returned when updating properties for a frame member.
///
/// The variants describe the reason the supplied value is rejected so callers
/// can present actionable feedback to users.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MemberPropertyError {
    /// Returned when the cross-sectional area is zero or negative.
    #[error("area must be positive (received {area})")]
    NonPositiveArea {
        /// Identifier of the affected member.
        member: EdgeIndex,
        /// Rejected cross-sectional area.
        area: f64,
    },
    /// Returned when the elastic modulus is zero or negative.
    #[error("elastic modulus must be positive (received {elastic_modulus})")]
    NonPositiveElasticModulus {
        /// Identifier of the affected member.
        member: EdgeIndex,
        /// Rejected elastic modulus.
        elastic_modulus: f64,
    },
    /// Returned when the moment of inertia is zero or negative.
    #[error("moment of inertia must be positive (received {moment_of_inertia})")]
    NonPositiveMomentOfInertia {
        /// Identifier of the affected member.
        member: EdgeIndex,
        /// Rejected second moment of area.
        moment_of_inertia: f64,
    },
    /// Returned when the rotational spring stiffness is zero or negative.
    #[error("spring stiffness must be positive (received {stiffness})")]
    NonPositiveSpringStiffness {
        /// Identifier of the affected member.
        member: EdgeIndex,
        /// Rejected rotational stiffness.
        stiffness: f64,
    },
}

/// Error returned when editing a [`Frame`](crate::Frame) with invalid input.
///
/// Attempting to mutate the structure with a joint or member that is not part
/// of the current graph, or with values that are not physically meaningful,
/// returns a descriptive variant so callers can decide how to recover.
///
/// # Examples
///
/// ```
/// use petgraph::graph::EdgeIndex;
/// use framex::{Frame, FrameEditError};
///
/// let mut frame = Frame::new();
/// let invalid_member = EdgeIndex::new(42);
/// let error = frame
///     .set_beam_properties(invalid_member, 0.01, 200.0e9, 1.0e-4)
///     .expect_err("unknown member is rejected");
/// assert_eq!(error, FrameEditError::UnknownMember(invalid_member));
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum FrameEditError {
    /// Returned when a joint cannot be found in the frame.
    #[error("joint {0:?} does not exist in this frame")]
    UnknownJoint(NodeIndex),
    /// Returned when a member cannot be found in the frame.
    #[error("member {0:?} does not exist in this frame")]
    UnknownMember(EdgeIndex),
    /// Returned when beam properties are assigned to a member that is not a
    /// beam-column.
    #[error("member {0:?} is not a beam-column")]
    NotABeam(EdgeIndex),
    /// Returned when a spring stiffness is assigned to a member that is not a
    /// rotational spring.
    #[error("member {0:?} is not a rotational spring")]
    NotASpring(EdgeIndex),
    /// Returned when a joint is coupled to itself.
    #[error("joint {0:?} cannot be coupled to itself")]
    SelfCoupling(NodeIndex),
    /// Returned when a joint already follows another leader.
    #[error("joint {0:?} is already coupled to a leader")]
    DuplicateCoupling(NodeIndex),
    /// Returned when the supplied member properties are invalid.
    #[error("{0}")]
    InvalidMemberProperties(MemberPropertyError),
}
