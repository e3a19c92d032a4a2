use nalgebra::{Point3, UnitQuaternion, Vector3};
use slotmap::new_key_type;

new_key_type! {
    /// Stable handle to a body in a [`super::world::PhysicsWorld`].
    pub struct BodyId;
}

/// Who drives a body during a tick.
///
/// `Free` bodies belong to the solver; `Held` bodies belong to tracked input,
/// which overwrites their pose directly. The state makes the per-tick
/// exclusive-ownership contract mechanically checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BodyState {
    #[default]
    Free,
    Held,
}

/// Collision proxy attached to a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColliderShape {
    /// Sphere of the given display/interaction radius (distinct from any
    /// covalent radius).
    Sphere { radius: f64 },
    /// Infinite upward-facing plane through the body's position.
    Plane,
}

/// A point-mass body.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub position: Point3<f64>,
    pub orientation: UnitQuaternion<f64>,
    pub velocity: Vector3<f64>,
    /// Inverse mass; zero marks a fixed body.
    pub inv_mass: f64,
    pub shape: ColliderShape,
    pub state: BodyState,
}

impl Body {
    /// A unit-mass dynamic sphere, the shape every atom gets.
    pub fn dynamic_sphere(position: Point3<f64>, radius: f64) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            inv_mass: 1.0,
            shape: ColliderShape::Sphere { radius },
            state: BodyState::Free,
        }
    }

    /// A fixed zero-mass plane body (the floor).
    pub fn fixed_plane(position: Point3<f64>) -> Self {
        Self {
            position,
            orientation: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            inv_mass: 0.0,
            shape: ColliderShape::Plane,
            state: BodyState::Free,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        self.inv_mass > 0.0
    }

    pub fn is_held(&self) -> bool {
        self.state == BodyState::Held
    }

    /// Inverse mass as seen by the solver: a held body is kinematic, so it
    /// contributes no compliance regardless of its physical mass.
    pub fn solver_inv_mass(&self) -> f64 {
        if self.is_held() { 0.0 } else { self.inv_mass }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamic_sphere_defaults() {
        let body = Body::dynamic_sphere(Point3::new(1.0, 2.0, 3.0), 0.05);
        assert_eq!(body.inv_mass, 1.0);
        assert_eq!(body.velocity, Vector3::zeros());
        assert_eq!(body.state, BodyState::Free);
        assert_eq!(body.shape, ColliderShape::Sphere { radius: 0.05 });
        assert!(body.is_dynamic());
        assert!(!body.is_held());
    }

    #[test]
    fn fixed_plane_has_zero_inverse_mass() {
        let body = Body::fixed_plane(Point3::origin());
        assert_eq!(body.inv_mass, 0.0);
        assert!(!body.is_dynamic());
        assert_eq!(body.shape, ColliderShape::Plane);
    }

    #[test]
    fn held_body_is_kinematic_for_the_solver() {
        let mut body = Body::dynamic_sphere(Point3::origin(), 0.05);
        assert_eq!(body.solver_inv_mass(), 1.0);
        body.state = BodyState::Held;
        assert_eq!(body.solver_inv_mass(), 0.0);
        assert!(body.is_held());
    }
}
