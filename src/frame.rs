//! Core data structures and algorithms for plane-frame analysis.

use std::collections::HashMap;

use nalgebra::{DMatrix, DVector, SVector};
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};

use crate::analysis::{solve_load_controlled, StaticAnalysis};
use crate::elements::{
    beam_column_local_stiffness, beam_column_stiffness, beam_transformation,
    rotational_spring_stiffness,
};
use crate::errors::{AnalysisError, FrameEditError, MemberPropertyError};
use crate::geometry::{Displacement, Force, Point};

/// Internal representation of a frame joint.
#[derive(Clone, Debug)]
struct Joint {
    /// Position of the joint in the frame plane.
    position: Point,
    /// Indicator for each degree of freedom (x, y, rotation) that is
    /// restrained by a support.
    support: [bool; 3],
    /// External load applied to the joint.
    load: Force,
    /// Solved displacement for the joint.
    displacement: Displacement,
}

impl Joint {
    /// Create a joint with the supplied position and default state.
    fn new(position: Point) -> Self {
        Self {
            position,
            support: [false, false, false],
            load: Force::default(),
            displacement: Displacement::default(),
        }
    }
}

/// Section and material data for an elastic beam-column.
#[derive(Clone, Copy, Debug)]
struct BeamProperties {
    /// Cross-sectional area.
    area: f64,
    /// Elastic modulus.
    elastic_modulus: f64,
    /// Second moment of area.
    moment_of_inertia: f64,
}

/// The structural role of a member.
#[derive(Clone, Copy, Debug)]
enum MemberKind {
    /// Prismatic elastic beam-column with axial and flexural stiffness.
    BeamColumn {
        /// Assigned section and material data, when present.
        properties: Option<BeamProperties>,
    },
    /// Zero-length rotational spring between coincident joints.
    RotationalSpring {
        /// Assigned elastic rotational stiffness, when present.
        stiffness: Option<f64>,
    },
}

/// Internal representation of a frame member.
#[derive(Clone, Debug)]
struct Member {
    /// The structural role and assigned properties of the member.
    kind: MemberKind,
    /// Solved end forces for beam-columns.
    end_forces: Option<BeamEndForces>,
    /// Solved relative rotation and transmitted moment for springs.
    spring_response: Option<(f64, f64)>,
}

impl Member {
    /// Create a beam-column member with no assigned properties.
    fn beam() -> Self {
        Self {
            kind: MemberKind::BeamColumn { properties: None },
            end_forces: None,
            spring_response: None,
        }
    }

    /// Create a rotational spring member with no assigned stiffness.
    fn spring() -> Self {
        Self {
            kind: MemberKind::RotationalSpring { stiffness: None },
            end_forces: None,
            spring_response: None,
        }
    }
}

/// Member-local end forces of a beam-column after analysis.
///
/// Axial force and shear are reported at the end joint in member axes, with
/// positive axial force meaning tension. The two moments are the bending
/// moments applied at the start and end joints.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeamEndForces {
    /// Axial force, positive in tension.
    pub axial: f64,
    /// Transverse shear force at the end joint.
    pub shear: f64,
    /// Bending moment at the start joint.
    pub moment_start: f64,
    /// Bending moment at the end joint.
    pub moment_end: f64,
}

/// Equal-displacement constraint tying a follower joint to a leader.
#[derive(Clone, Copy, Debug)]
struct Coupling {
    /// Joint whose equations are retained.
    leader: NodeIndex,
    /// Joint whose flagged equations are replaced by the leader's.
    follower: NodeIndex,
    /// Tied degrees of freedom (x, y, rotation).
    directions: [bool; 3],
}

/// Solved member response gathered before being written back to the graph.
enum MemberResponse {
    /// End forces for a beam-column.
    Beam(BeamEndForces),
    /// Relative rotation and transmitted moment for a spring.
    Spring(f64, f64),
}

/// Mapping from joint degrees of freedom to retained equations.
///
/// Couplings alias follower equations onto their leader's, so the retained
/// system can be smaller than three equations per joint.
struct DofLayout {
    /// Retained equation index for each `joint * 3 + direction` slot.
    map: Vec<usize>,
    /// Restraint flag per retained equation.
    fixed: Vec<bool>,
    /// Number of retained equations.
    retained: usize,
}

/// Container for a plane-frame model.
///
/// Joints and members are stored in a graph; supports, loads and couplings
/// hang off the joints. Analysis results are cached until the next edit.
#[derive(Debug, Default)]
pub struct Frame {
    /// Underlying graph storage for joints and members.
    graph: Graph<Joint, Member>,
    /// Equal-displacement constraints between joint pairs.
    couplings: Vec<Coupling>,
    /// Indicates whether the cached analysis results are current.
    analysis_valid: bool,
}

impl Frame {
    /// Create an empty frame.
    ///
    /// # Examples
    /// ```
    /// use framex::Frame;
    ///
    /// let frame = Frame::new();
    /// assert_eq!(frame.joint_count(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            couplings: Vec::new(),
            analysis_valid: false,
        }
    }

    /// Return the number of joints in the frame.
    #[must_use]
    pub fn joint_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Return the number of members in the frame.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Return the number of equal-displacement couplings in the frame.
    #[must_use]
    pub fn coupling_count(&self) -> usize {
        self.couplings.len()
    }

    /// Add a new joint to the frame.
    ///
    /// # Examples
    /// ```
    /// use framex::{point, Frame};
    ///
    /// let mut frame = Frame::new();
    /// let joint = frame.add_joint(point(0.0, 0.0));
    /// assert_eq!(frame.joint_count(), 1);
    /// assert_eq!(joint.index(), 0);
    /// ```
    pub fn add_joint(&mut self, position: Point) -> NodeIndex {
        self.invalidate();
        self.graph.add_node(Joint::new(position))
    }

    /// Update the position of an existing joint.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownJoint`] when `joint` is not part of
    /// this frame.
    pub fn move_joint(&mut self, joint: NodeIndex, position: Point) -> Result<(), FrameEditError> {
        if self.graph.node_weight(joint).is_none() {
            return Err(FrameEditError::UnknownJoint(joint));
        }
        self.invalidate();
        if let Some(node) = self.graph.node_weight_mut(joint) {
            node.position = position;
        }
        Ok(())
    }

    /// Remove a joint, its members and its couplings from the frame.
    ///
    /// Removal follows petgraph semantics: the most recently added joint
    /// takes over the removed joint's index.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownJoint`] when `joint` is not part of
    /// this frame.
    pub fn remove_joint(&mut self, joint: NodeIndex) -> Result<(), FrameEditError> {
        if self.graph.node_weight(joint).is_none() {
            return Err(FrameEditError::UnknownJoint(joint));
        }
        self.invalidate();
        self.couplings
            .retain(|coupling| coupling.leader != joint && coupling.follower != joint);
        self.graph.remove_node(joint);
        Ok(())
    }

    /// Connect two joints with a new elastic beam-column.
    pub fn add_beam(&mut self, start: NodeIndex, end: NodeIndex) -> EdgeIndex {
        self.invalidate();
        self.graph.add_edge(start, end, Member::beam())
    }

    /// Connect two coincident joints with a new zero-length rotational
    /// spring.
    ///
    /// The joints must share the same position by analysis time; the spring
    /// resists their relative rotation.
    pub fn add_spring(&mut self, start: NodeIndex, end: NodeIndex) -> EdgeIndex {
        self.invalidate();
        self.graph.add_edge(start, end, Member::spring())
    }

    /// Remove a member from the frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownMember`] when `member` is not part of
    /// this frame.
    pub fn remove_member(&mut self, member: EdgeIndex) -> Result<(), FrameEditError> {
        if self.graph.edge_weight(member).is_none() {
            return Err(FrameEditError::UnknownMember(member));
        }
        self.invalidate();
        self.graph.remove_edge(member);
        Ok(())
    }

    /// Set the restraint state for a joint.
    ///
    /// Each entry in `support` corresponds to the X translation, Y
    /// translation and rotation respectively. A value of `true` restrains
    /// the degree of freedom.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownJoint`] when `joint` is not part of
    /// this frame.
    pub fn set_support(
        &mut self,
        joint: NodeIndex,
        support: [bool; 3],
    ) -> Result<(), FrameEditError> {
        if self.graph.node_weight(joint).is_none() {
            return Err(FrameEditError::UnknownJoint(joint));
        }
        self.invalidate();
        if let Some(node) = self.graph.node_weight_mut(joint) {
            node.support = support;
        }
        Ok(())
    }

    /// Apply a generalized point load to a joint.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownJoint`] when `joint` is not part of
    /// this frame.
    pub fn set_load(&mut self, joint: NodeIndex, load: Force) -> Result<(), FrameEditError> {
        if self.graph.node_weight(joint).is_none() {
            return Err(FrameEditError::UnknownJoint(joint));
        }
        self.invalidate();
        if let Some(node) = self.graph.node_weight_mut(joint) {
            node.load = load;
        }
        Ok(())
    }

    /// Set the section and material properties for a beam-column.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownMember`] when `member` is not part of
    /// this frame, [`FrameEditError::NotABeam`] when it is not a beam-column
    /// and [`FrameEditError::InvalidMemberProperties`] when any supplied
    /// value is not strictly positive.
    pub fn set_beam_properties(
        &mut self,
        member: EdgeIndex,
        area: f64,
        elastic_modulus: f64,
        moment_of_inertia: f64,
    ) -> Result<(), FrameEditError> {
        match self.graph.edge_weight(member) {
            None => return Err(FrameEditError::UnknownMember(member)),
            Some(weight) => {
                if !matches!(weight.kind, MemberKind::BeamColumn { .. }) {
                    return Err(FrameEditError::NotABeam(member));
                }
            }
        }
        if area <= 0.0 {
            return Err(FrameEditError::InvalidMemberProperties(
                MemberPropertyError::NonPositiveArea { member, area },
            ));
        }
        if elastic_modulus <= 0.0 {
            return Err(FrameEditError::InvalidMemberProperties(
                MemberPropertyError::NonPositiveElasticModulus {
                    member,
                    elastic_modulus,
                },
            ));
        }
        if moment_of_inertia <= 0.0 {
            return Err(FrameEditError::InvalidMemberProperties(
                MemberPropertyError::NonPositiveMomentOfInertia {
                    member,
                    moment_of_inertia,
                },
            ));
        }
        self.invalidate();
        if let Some(weight) = self.graph.edge_weight_mut(member) {
            weight.kind = MemberKind::BeamColumn {
                properties: Some(BeamProperties {
                    area,
                    elastic_modulus,
                    moment_of_inertia,
                }),
            };
        }
        Ok(())
    }

    /// Set the elastic stiffness for a rotational spring.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownMember`] when `member` is not part of
    /// this frame, [`FrameEditError::NotASpring`] when it is not a rotational
    /// spring and [`FrameEditError::InvalidMemberProperties`] when the
    /// stiffness is not strictly positive.
    pub fn set_spring_stiffness(
        &mut self,
        member: EdgeIndex,
        stiffness: f64,
    ) -> Result<(), FrameEditError> {
        match self.graph.edge_weight(member) {
            None => return Err(FrameEditError::UnknownMember(member)),
            Some(weight) => {
                if !matches!(weight.kind, MemberKind::RotationalSpring { .. }) {
                    return Err(FrameEditError::NotASpring(member));
                }
            }
        }
        if stiffness <= 0.0 {
            return Err(FrameEditError::InvalidMemberProperties(
                MemberPropertyError::NonPositiveSpringStiffness { member, stiffness },
            ));
        }
        self.invalidate();
        if let Some(weight) = self.graph.edge_weight_mut(member) {
            weight.kind = MemberKind::RotationalSpring {
                stiffness: Some(stiffness),
            };
        }
        Ok(())
    }

    /// Tie the flagged degrees of freedom of `follower` to those of
    /// `leader`.
    ///
    /// The tied displacements of the follower are forced equal to the
    /// leader's while the remaining degrees of freedom stay independent.
    /// Tying the translations of two coincident joints while leaving their
    /// rotations free is how a rotational spring station is modelled.
    ///
    /// # Errors
    ///
    /// Returns [`FrameEditError::UnknownJoint`] when either joint is not
    /// part of this frame, [`FrameEditError::SelfCoupling`] when both
    /// indices name the same joint and [`FrameEditError::DuplicateCoupling`]
    /// when the follower already follows another leader.
    pub fn couple_joints(
        &mut self,
        leader: NodeIndex,
        follower: NodeIndex,
        directions: [bool; 3],
    ) -> Result<(), FrameEditError> {
        if self.graph.node_weight(leader).is_none() {
            return Err(FrameEditError::UnknownJoint(leader));
        }
        if self.graph.node_weight(follower).is_none() {
            return Err(FrameEditError::UnknownJoint(follower));
        }
        if leader == follower {
            return Err(FrameEditError::SelfCoupling(leader));
        }
        if self
            .couplings
            .iter()
            .any(|coupling| coupling.follower == follower)
        {
            return Err(FrameEditError::DuplicateCoupling(follower));
        }
        self.invalidate();
        self.couplings.push(Coupling {
            leader,
            follower,
            directions,
        });
        Ok(())
    }

    /// Retrieve the displacement of a joint after analysis.
    #[must_use]
    pub fn joint_displacement(&self, joint: NodeIndex) -> Option<Displacement> {
        self.graph.node_weight(joint).map(|node| node.displacement)
    }

    /// Retrieve the member-local end forces of a beam-column after analysis.
    #[must_use]
    pub fn beam_end_forces(&self, member: EdgeIndex) -> Option<BeamEndForces> {
        self.graph
            .edge_weight(member)
            .and_then(|weight| weight.end_forces)
    }

    /// Retrieve the relative rotation across a spring after analysis.
    ///
    /// Positive when the end joint rotates ahead of the start joint.
    #[must_use]
    pub fn spring_rotation(&self, member: EdgeIndex) -> Option<f64> {
        self.graph
            .edge_weight(member)
            .and_then(|weight| weight.spring_response)
            .map(|(rotation, _)| rotation)
    }

    /// Retrieve the moment transmitted through a spring after analysis.
    #[must_use]
    pub fn spring_moment(&self, member: EdgeIndex) -> Option<f64> {
        self.graph
            .edge_weight(member)
            .and_then(|weight| weight.spring_response)
            .map(|(_, moment)| moment)
    }

    /// Analyse the frame with the default static analysis options.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] when the structure cannot be solved because
    /// of invalid member properties or insufficient constraints.
    pub fn evaluate(&mut self) -> Result<(), AnalysisError> {
        self.analyze(&StaticAnalysis::default())
    }

    /// Analyse the frame under the configured loads.
    ///
    /// The load is applied in equal increments per `options` and each
    /// increment is iterated to equilibrium. Results are cached until the
    /// frame is edited.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] when the structure cannot be solved because
    /// of invalid member properties, insufficient constraints or failed
    /// convergence.
    pub fn analyze(&mut self, options: &StaticAnalysis) -> Result<(), AnalysisError> {
        if self.analysis_valid {
            return Ok(());
        }
        let index_map = self.node_index_map();
        let layout = self.dof_layout(&index_map)?;
        let stiffness = self.assemble_stiffness(&index_map, &layout)?;
        let loads = self.assemble_loads(&index_map, &layout);
        let free: Vec<usize> = layout
            .fixed
            .iter()
            .enumerate()
            .filter(|(_, &restrained)| !restrained)
            .map(|(equation, _)| equation)
            .collect();
        let displacements = solve_load_controlled(&stiffness, &loads, &free, options)?;
        self.store_joint_displacements(&index_map, &layout, &displacements);
        self.update_member_responses();
        self.analysis_valid = true;
        Ok(())
    }

    /// Reset cached analysis results when the model changes.
    fn invalidate(&mut self) {
        if self.analysis_valid {
            for joint in self.graph.node_weights_mut() {
                joint.displacement = Displacement::default();
            }
            for member in self.graph.edge_weights_mut() {
                member.end_forces = None;
                member.spring_response = None;
            }
            self.analysis_valid = false;
        }
    }

    /// Construct a mapping from graph indices to contiguous joint numbers.
    fn node_index_map(&self) -> HashMap<NodeIndex, usize> {
        self.graph
            .node_indices()
            .enumerate()
            .map(|(idx, node)| (node, idx))
            .collect()
    }

    /// Lay out the retained equations, aliasing coupled followers onto
    /// their leaders.
    fn dof_layout(
        &self,
        index_map: &HashMap<NodeIndex, usize>,
    ) -> Result<DofLayout, AnalysisError> {
        let mut leaders: HashMap<(NodeIndex, usize), NodeIndex> = HashMap::new();
        for coupling in &self.couplings {
            for direction in 0..3 {
                if coupling.directions[direction] {
                    leaders.insert((coupling.follower, direction), coupling.leader);
                }
            }
        }

        let mut map = vec![usize::MAX; self.graph.node_count() * 3];
        let mut retained = 0;
        for node in self.graph.node_indices() {
            let base = index_map[&node] * 3;
            for direction in 0..3 {
                if !leaders.contains_key(&(node, direction)) {
                    map[base + direction] = retained;
                    retained += 1;
                }
            }
        }

        // Follower equations alias the leader's; chains resolve to the
        // first joint that is not itself a follower.
        for node in self.graph.node_indices() {
            let base = index_map[&node] * 3;
            for direction in 0..3 {
                if map[base + direction] != usize::MAX {
                    continue;
                }
                let mut leader = leaders[&(node, direction)];
                let mut hops = 0;
                while let Some(next) = leaders.get(&(leader, direction)) {
                    hops += 1;
                    if hops > self.couplings.len() {
                        return Err(AnalysisError::CouplingCycle(node));
                    }
                    leader = *next;
                }
                map[base + direction] = map[index_map[&leader] * 3 + direction];
            }
        }

        let mut fixed = vec![false; retained];
        for node in self.graph.node_indices() {
            let joint = &self.graph[node];
            let base = index_map[&node] * 3;
            for direction in 0..3 {
                if joint.support[direction] {
                    fixed[map[base + direction]] = true;
                }
            }
        }

        Ok(DofLayout {
            map,
            fixed,
            retained,
        })
    }

    /// Retained equation indices for the six beam-column degrees of freedom.
    fn element_equations(
        index_map: &HashMap<NodeIndex, usize>,
        layout: &DofLayout,
        start: NodeIndex,
        end: NodeIndex,
    ) -> [usize; 6] {
        let start_base = index_map[&start] * 3;
        let end_base = index_map[&end] * 3;
        [
            layout.map[start_base],
            layout.map[start_base + 1],
            layout.map[start_base + 2],
            layout.map[end_base],
            layout.map[end_base + 1],
            layout.map[end_base + 2],
        ]
    }

    /// Assemble the global stiffness matrix over the retained equations.
    fn assemble_stiffness(
        &self,
        index_map: &HashMap<NodeIndex, usize>,
        layout: &DofLayout,
    ) -> Result<DMatrix<f64>, AnalysisError> {
        let mut matrix = DMatrix::zeros(layout.retained, layout.retained);
        for edge in self.graph.edge_indices() {
            let (start, end) = self.graph.edge_endpoints(edge).expect("valid edge");
            let start_joint = &self.graph[start];
            let end_joint = &self.graph[end];
            let delta = end_joint.position.to_vector() - start_joint.position.to_vector();

            match self.graph[edge].kind {
                MemberKind::BeamColumn { properties } => {
                    let properties =
                        properties.ok_or(AnalysisError::MissingProperties(edge))?;
                    let length = delta.norm();
                    if length == 0.0 {
                        return Err(AnalysisError::ZeroLengthBeam(edge));
                    }
                    let local = beam_column_stiffness(
                        properties.elastic_modulus,
                        properties.area,
                        properties.moment_of_inertia,
                        length,
                        delta / length,
                    );
                    let equations = Self::element_equations(index_map, layout, start, end);
                    for (row_local, &global_row) in equations.iter().enumerate() {
                        for (col_local, &global_col) in equations.iter().enumerate() {
                            matrix[(global_row, global_col)] += local[(row_local, col_local)];
                        }
                    }
                }
                MemberKind::RotationalSpring { stiffness } => {
                    let stiffness = stiffness.ok_or(AnalysisError::MissingProperties(edge))?;
                    if delta.norm() > 0.0 {
                        return Err(AnalysisError::MisalignedSpring(edge));
                    }
                    let local = rotational_spring_stiffness(stiffness);
                    let equations = [
                        layout.map[index_map[&start] * 3 + 2],
                        layout.map[index_map[&end] * 3 + 2],
                    ];
                    for (row_local, &global_row) in equations.iter().enumerate() {
                        for (col_local, &global_col) in equations.iter().enumerate() {
                            matrix[(global_row, global_col)] += local[(row_local, col_local)];
                        }
                    }
                }
            }
        }
        Ok(matrix)
    }

    /// Assemble the nodal load vector over the retained equations.
    fn assemble_loads(
        &self,
        index_map: &HashMap<NodeIndex, usize>,
        layout: &DofLayout,
    ) -> DVector<f64> {
        let mut loads = DVector::zeros(layout.retained);
        for node in self.graph.node_indices() {
            let joint = &self.graph[node];
            let base = index_map[&node] * 3;
            let components = joint.load.to_vector();
            for direction in 0..3 {
                loads[layout.map[base + direction]] += components[direction];
            }
        }
        loads
    }

    /// Persist solved joint displacements back to the graph representation.
    ///
    /// Coupled followers read the leader's equations through the layout, so
    /// their tied displacements match the leader automatically.
    fn store_joint_displacements(
        &mut self,
        index_map: &HashMap<NodeIndex, usize>,
        layout: &DofLayout,
        displacements: &DVector<f64>,
    ) {
        for node in self.graph.node_indices().collect::<Vec<_>>() {
            let base = index_map[&node] * 3;
            let displacement = Displacement::new(
                displacements[layout.map[base]],
                displacements[layout.map[base + 1]],
                displacements[layout.map[base + 2]],
            );
            let joint = self.graph.node_weight_mut(node).expect("valid node");
            joint.displacement = displacement;
        }
    }

    /// Compute member end forces and spring responses from the solved
    /// displacements.
    fn update_member_responses(&mut self) {
        let responses: Vec<(EdgeIndex, MemberResponse)> = self
            .graph
            .edge_indices()
            .filter_map(|edge| {
                let (start, end) = self.graph.edge_endpoints(edge).expect("valid edge");
                let start_joint = &self.graph[start];
                let end_joint = &self.graph[end];
                match self.graph[edge].kind {
                    MemberKind::BeamColumn { properties } => {
                        let properties = properties?;
                        let delta =
                            end_joint.position.to_vector() - start_joint.position.to_vector();
                        let length = delta.norm();
                        if length == 0.0 {
                            return None;
                        }
                        let transformation = beam_transformation(delta / length);
                        let local_stiffness = beam_column_local_stiffness(
                            properties.elastic_modulus,
                            properties.area,
                            properties.moment_of_inertia,
                            length,
                        );
                        let global_displacements = SVector::<f64, 6>::from_column_slice(&[
                            start_joint.displacement.x,
                            start_joint.displacement.y,
                            start_joint.displacement.rotation,
                            end_joint.displacement.x,
                            end_joint.displacement.y,
                            end_joint.displacement.rotation,
                        ]);
                        let local_forces =
                            local_stiffness * transformation * global_displacements;
                        Some((
                            edge,
                            MemberResponse::Beam(BeamEndForces {
                                axial: local_forces[3],
                                shear: local_forces[4],
                                moment_start: local_forces[2],
                                moment_end: local_forces[5],
                            }),
                        ))
                    }
                    MemberKind::RotationalSpring { stiffness } => {
                        let stiffness = stiffness?;
                        let rotation = end_joint.displacement.rotation
                            - start_joint.displacement.rotation;
                        Some((edge, MemberResponse::Spring(rotation, stiffness * rotation)))
                    }
                }
            })
            .collect();

        for (edge, response) in responses {
            let member = self.graph.edge_weight_mut(edge).expect("valid member");
            match response {
                MemberResponse::Beam(end_forces) => member.end_forces = Some(end_forces),
                MemberResponse::Spring(rotation, moment) => {
                    member.spring_response = Some((rotation, moment));
                }
            }
        }
    }
}
