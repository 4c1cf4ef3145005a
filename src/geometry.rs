//! Fundamental geometric types for plane-frame modelling.
//!
//! Every joint in a plane frame carries three degrees of freedom: two
//! in-plane translations and a rotation about the out-of-plane axis. The
//! generalized force and displacement types therefore pair two Cartesian
//! components with a moment or rotation component.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Position in the plane of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Distance along the global X axis.
    pub x: f64,
    /// Distance along the global Y axis.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert the point into an algebraic vector.
    #[must_use]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(value: Vector2<f64>) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Point> for Vector2<f64> {
    fn from(value: Point) -> Self {
        value.to_vector()
    }
}

/// Generalized nodal force: two in-plane components and a moment about the
/// out-of-plane axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Force {
    /// Force component acting along the global X axis.
    pub x: f64,
    /// Force component acting along the global Y axis.
    pub y: f64,
    /// Moment about the global Z axis.
    pub moment: f64,
}

impl Force {
    /// Create a [`Force`] with explicit components.
    #[must_use]
    pub const fn new(x: f64, y: f64, moment: f64) -> Self {
        Self { x, y, moment }
    }

    /// Convert the force into an algebraic vector ordered (x, y, moment).
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.moment)
    }
}

impl Default for Force {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<Vector3<f64>> for Force {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Force> for Vector3<f64> {
    fn from(value: Force) -> Self {
        value.to_vector()
    }
}

/// Generalized joint displacement: two in-plane translations and a rotation
/// about the out-of-plane axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    /// Translation along the global X axis.
    pub x: f64,
    /// Translation along the global Y axis.
    pub y: f64,
    /// Rotation about the global Z axis in radians.
    pub rotation: f64,
}

impl Displacement {
    /// Create a [`Displacement`] with explicit components.
    #[must_use]
    pub const fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }

    /// Convert the displacement into an algebraic vector ordered
    /// (x, y, rotation).
    #[must_use]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.rotation)
    }
}

impl Default for Displacement {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<Vector3<f64>> for Displacement {
    fn from(value: Vector3<f64>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<Displacement> for Vector3<f64> {
    fn from(value: Displacement) -> Self {
        value.to_vector()
    }
}

/// Convenience helper for creating [`Point`] instances.
///
/// # Examples
/// ```
/// use framex::point;
///
/// let origin = point(0.0, 0.0);
/// assert_eq!(origin.x, 0.0);
/// ```
#[must_use]
pub const fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// Convenience helper for creating [`Force`] instances.
///
/// # Examples
/// ```
/// use framex::force;
///
/// let load = force(1_000.0, 0.0, 0.0);
/// assert_eq!(load.x, 1_000.0);
/// ```
#[must_use]
pub const fn force(x: f64, y: f64, moment: f64) -> Force {
    Force::new(x, y, moment)
}

/// Convenience helper for creating [`Displacement`] instances.
///
/// # Examples
/// ```
/// use framex::displacement;
///
/// let delta = displacement(0.001, 0.0, 0.0);
/// assert_eq!(delta.x, 0.001);
/// ```
#[must_use]
pub const fn displacement(x: f64, y: f64, rotation: f64) -> Displacement {
    Displacement::new(x, y, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_to_vector_roundtrip() {
        let position = Point::new(1.0, 2.0);
        let vector: Vector2<f64> = position.into();
        assert_eq!(vector, Vector2::new(1.0, 2.0));
        let back = Point::from(vector);
        assert_eq!(back, position);
    }

    #[test]
    fn force_defaults_to_zero() {
        assert_eq!(Force::default(), Force::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn displacement_from_vector() {
        let vector = Vector3::new(0.1, -0.2, 0.3);
        let delta = Displacement::from(vector);
        assert_eq!(delta, Displacement::new(0.1, -0.2, 0.3));
    }

    #[test]
    fn force_vector_orders_moment_last() {
        let load = force(1.0, 2.0, 3.0);
        assert_eq!(load.to_vector(), Vector3::new(1.0, 2.0, 3.0));
    }
}
