//! Projection of physics-body state into renderable instance transforms.
//!
//! Atoms are spheres at their body's pose; bonds are unit cylinders (canonical
//! +Y axis) stretched and rotated to span their two endpoint atoms. Atoms move
//! every step, so bond midpoints and orientations are recomputed every frame.

use crate::sim::body::Body;
use nalgebra::{Point3, UnitQuaternion, Vector3};

/// One batched-instance transform: translation, rotation, and non-uniform
/// scale, ready for a render graph's instance buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceTransform {
    pub position: Point3<f64>,
    pub rotation: UnitQuaternion<f64>,
    pub scale: Vector3<f64>,
}

/// The transform for one atom sphere.
pub fn atom_instance(body: &Body, radius: f64) -> InstanceTransform {
    InstanceTransform {
        position: body.position,
        rotation: body.orientation,
        scale: Vector3::new(radius, radius, radius),
    }
}

/// The transform for one bond cylinder between two endpoint positions.
///
/// The midpoint is the t = 0.5 interpolation of the endpoints; the rotation
/// maps the canonical +Y axis onto the endpoint-to-endpoint direction. A
/// degenerate (zero-length) bond keeps the identity rotation.
pub fn bond_instance(
    start: &Point3<f64>,
    end: &Point3<f64>,
    radius: f64,
) -> InstanceTransform {
    let span = end - start;
    let length = span.norm();
    let midpoint = nalgebra::center(start, end);

    let rotation = if length <= f64::EPSILON {
        UnitQuaternion::identity()
    } else {
        // `rotation_between` has no unique answer for opposite vectors; any
        // half-turn through a perpendicular axis works.
        UnitQuaternion::rotation_between(&Vector3::y(), &span).unwrap_or_else(|| {
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), std::f64::consts::PI)
        })
    };

    InstanceTransform {
        position: midpoint,
        rotation,
        scale: Vector3::new(radius, length, radius),
    }
}
