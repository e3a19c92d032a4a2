use super::body::{Body, BodyId, BodyState, ColliderShape};
use nalgebra::{Point3, Vector3};
use slotmap::{SecondaryMap, SlotMap};

/// Default Gauss-Seidel relaxation passes per step.
pub const DEFAULT_SOLVER_ITERATIONS: usize = 10;

/// A rigid distance joint between two bodies.
///
/// `rest_length` is fixed when the joint is registered. `max_force` bounds
/// the per-iteration positional correction the solver may apply
/// (`None` = unbounded, effectively rigid).
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceJoint {
    pub body_a: BodyId,
    pub body_b: BodyId,
    pub rest_length: f64,
    pub max_force: Option<f64>,
}

/// A world of point-mass bodies and distance joints advanced by a fixed
/// timestep.
///
/// The solver is position-based: free dynamic bodies integrate under
/// gravity, joints are relaxed iteratively, sphere bodies are kept above
/// plane bodies, and velocities are re-derived from the positional change.
/// Held bodies are kinematic for the whole step. Bodies are never destroyed
/// during a session.
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    bodies: SlotMap<BodyId, Body>,
    joints: Vec<DistanceJoint>,
    gravity: Vector3<f64>,
    solver_iterations: usize,
}

impl PhysicsWorld {
    pub fn new(gravity: Vector3<f64>) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            joints: Vec::new(),
            gravity,
            solver_iterations: DEFAULT_SOLVER_ITERATIONS,
        }
    }

    pub fn set_solver_iterations(&mut self, iterations: usize) {
        self.solver_iterations = iterations.max(1);
    }

    pub fn add_body(&mut self, body: Body) -> BodyId {
        self.bodies.insert(body)
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id)
    }

    pub fn bodies_iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Flips a body's ownership state.
    ///
    /// Returns `None` if the body does not exist.
    pub fn set_state(&mut self, id: BodyId, state: BodyState) -> Option<()> {
        let body = self.bodies.get_mut(id)?;
        body.state = state;
        // A body changing driver keeps no momentum from its previous owner.
        body.velocity = Vector3::zeros();
        Some(())
    }

    /// Adds a distance joint with the rest length taken from the bodies'
    /// current separation, the registration-time convention the structure
    /// builder relies on.
    ///
    /// Returns `None` if either body does not exist.
    pub fn add_joint(
        &mut self,
        body_a: BodyId,
        body_b: BodyId,
        max_force: Option<f64>,
    ) -> Option<usize> {
        let rest_length = (self.bodies.get(body_b)?.position - self.bodies.get(body_a)?.position)
            .norm();
        self.add_joint_with_rest_length(body_a, body_b, rest_length, max_force)
    }

    /// Adds a distance joint with an explicit rest length.
    pub fn add_joint_with_rest_length(
        &mut self,
        body_a: BodyId,
        body_b: BodyId,
        rest_length: f64,
        max_force: Option<f64>,
    ) -> Option<usize> {
        if !self.bodies.contains_key(body_a) || !self.bodies.contains_key(body_b) {
            return None;
        }
        self.joints.push(DistanceJoint {
            body_a,
            body_b,
            rest_length,
            max_force,
        });
        Some(self.joints.len() - 1)
    }

    pub fn joints(&self) -> &[DistanceJoint] {
        &self.joints
    }

    /// Advances the world by one fixed timestep.
    pub fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        // Integrate free dynamic bodies; held bodies are input-driven and
        // keep no solver velocity.
        let mut start_positions: SecondaryMap<BodyId, Point3<f64>> = SecondaryMap::new();
        for (id, body) in self.bodies.iter_mut() {
            match body.state {
                BodyState::Held => body.velocity = Vector3::zeros(),
                BodyState::Free if body.is_dynamic() => {
                    let _ = start_positions.insert(id, body.position);
                    body.velocity += self.gravity * dt;
                    body.position += body.velocity * dt;
                }
                BodyState::Free => {}
            }
        }

        for _ in 0..self.solver_iterations {
            for joint_index in 0..self.joints.len() {
                self.relax_joint(joint_index, dt);
            }
        }

        self.resolve_floor_contacts();

        // Velocities follow the corrected positions.
        for (id, start) in start_positions.iter() {
            if let Some(body) = self.bodies.get_mut(id) {
                body.velocity = (body.position - *start) / dt;
            }
        }
    }

    fn relax_joint(&mut self, joint_index: usize, dt: f64) {
        let joint = self.joints[joint_index].clone();
        let (inv_a, inv_b, pa, pb) =
            match (self.bodies.get(joint.body_a), self.bodies.get(joint.body_b)) {
                (Some(a), Some(b)) => (
                    a.solver_inv_mass(),
                    b.solver_inv_mass(),
                    a.position,
                    b.position,
                ),
                _ => return,
            };

        let inv_sum = inv_a + inv_b;
        if inv_sum == 0.0 {
            return;
        }
        let delta = pb - pa;
        let distance = delta.norm();
        if distance <= f64::EPSILON {
            return;
        }

        let mut correction = (distance - joint.rest_length) / inv_sum;
        if let Some(max_force) = joint.max_force {
            let limit = max_force * dt * dt;
            correction = correction.clamp(-limit, limit);
        }
        let direction = delta / distance;

        if inv_a > 0.0 {
            if let Some(a) = self.bodies.get_mut(joint.body_a) {
                a.position += direction * (correction * inv_a);
            }
        }
        if inv_b > 0.0 {
            if let Some(b) = self.bodies.get_mut(joint.body_b) {
                b.position -= direction * (correction * inv_b);
            }
        }
    }

    fn resolve_floor_contacts(&mut self) {
        let plane_heights: Vec<f64> = self
            .bodies
            .values()
            .filter(|body| matches!(body.shape, ColliderShape::Plane))
            .map(|body| body.position.y)
            .collect();
        if plane_heights.is_empty() {
            return;
        }

        for body in self.bodies.values_mut() {
            let ColliderShape::Sphere { radius } = body.shape else {
                continue;
            };
            if body.state != BodyState::Free || !body.is_dynamic() {
                continue;
            }
            for &floor_y in &plane_heights {
                let min_y = floor_y + radius;
                if body.position.y < min_y {
                    body.position.y = min_y;
                }
            }
        }
    }

    /// Multiplies every free dynamic body's velocity by `factor`.
    ///
    /// A factor in (0, 1) bleeds energy each frame; the crude dissipation
    /// that keeps a dense constraint network from ringing.
    pub fn apply_damping(&mut self, factor: f64) {
        for body in self.bodies.values_mut() {
            if body.state == BodyState::Free && body.is_dynamic() {
                body.velocity *= factor;
            }
        }
    }
}
