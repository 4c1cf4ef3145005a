use framex::{point, Frame};
use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::conditions::ColumnProperties;

/// One rotational-spring station along the column.
///
/// Each station holds a primary joint and a coincident duplicate. The beam
/// below the station ends at the primary joint and the beam above starts at
/// the duplicate, so all flexural deformation at the station happens in the
/// spring connecting the pair.
#[derive(Debug, Clone, Copy)]
pub struct SpringStation {
    /// Joint terminating the segment below the station.
    pub primary: NodeIndex,
    /// Coincident joint starting the segment above the station.
    pub duplicate: NodeIndex,
    /// Zero-length rotational spring connecting the pair.
    pub spring: EdgeIndex,
}

/// Handles to the joints and members of the spring-column model.
#[derive(Debug, Clone)]
pub struct ColumnGeometry {
    /// Fully fixed joint at the column base.
    pub base: NodeIndex,
    /// Loaded joint at the top of the column.
    pub tip: NodeIndex,
    /// Spring stations from bottom to top.
    pub stations: Vec<SpringStation>,
    /// Column segments from bottom to top.
    pub segments: Vec<EdgeIndex>,
}

/// Build the bare spring-column model: a vertical stack of beam segments
/// interrupted by duplicate-joint spring stations.
///
/// Loads, supports, couplings and member properties are applied separately
/// by [`crate::conditions::apply_column_conditions`].
pub fn build_spring_column(properties: &ColumnProperties) -> (Frame, ColumnGeometry) {
    let mut frame = Frame::new();
    let base = frame.add_joint(point(0.0, 0.0));

    let mut stations = Vec::with_capacity(properties.spring_positions.len());
    let mut segments = Vec::with_capacity(properties.spring_positions.len() + 1);
    let mut lower = base;
    for position in properties.spring_positions {
        let height = position * properties.length;
        let primary = frame.add_joint(point(0.0, height));
        let duplicate = frame.add_joint(point(0.0, height));
        segments.push(frame.add_beam(lower, primary));
        let spring = frame.add_spring(primary, duplicate);
        stations.push(SpringStation {
            primary,
            duplicate,
            spring,
        });
        lower = duplicate;
    }
    let tip = frame.add_joint(point(0.0, properties.length));
    segments.push(frame.add_beam(lower, tip));

    (
        frame,
        ColumnGeometry {
            base,
            tip,
            stations,
            segments,
        },
    )
}
