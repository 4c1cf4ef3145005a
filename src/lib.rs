#![warn(clippy::all)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod analysis;
pub mod elements;
pub mod errors;
pub mod frame;
pub mod geometry;

pub use analysis::StaticAnalysis;
pub use errors::{AnalysisError, FrameEditError, MemberPropertyError};
pub use frame::{BeamEndForces, Frame};
pub use geometry::{displacement, force, point, Displacement, Force, Point};
