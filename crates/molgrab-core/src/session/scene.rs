use crate::assets::Structure;
use crate::core::models::molecule::Molecule;
use crate::core::topology::registry::TopologyRegistry;
use crate::session::config::{DisplayConfig, SessionConfig};
use crate::session::error::SceneError;
use crate::session::input::{Hand, HandPose, InputEvent};
use crate::session::sync::{self, InstanceTransform};
use crate::sim::body::{Body, BodyId, BodyState};
use crate::sim::world::PhysicsWorld;
use nalgebra::{Point3, Vector3};
use tracing::{debug, info};

/// A running interactive scene: one molecule, its physics world, and the
/// per-frame render state.
///
/// The scene is the only owner of the grab bookkeeping: an atom is either
/// driven by the solver (`Free`) or by one hand (`Held`), never both in the
/// same tick.
#[derive(Debug)]
pub struct MoleculeScene {
    molecule: Molecule,
    world: PhysicsWorld,
    atom_bodies: Vec<BodyId>,
    held: [Option<usize>; Hand::COUNT],
    config: SessionConfig,
    atom_instances: Vec<InstanceTransform>,
    bond_instances: Vec<InstanceTransform>,
    instances_dirty: bool,
}

impl MoleculeScene {
    /// Assembles a scene from an embedded structure.
    pub fn load(structure: Structure, config: SessionConfig) -> Result<Self, SceneError> {
        info!(structure = structure.label(), "loading scene");
        Self::from_text(structure.text(), config)
    }

    /// Assembles a scene from raw coordinate text.
    pub fn from_text(text: &str, config: SessionConfig) -> Result<Self, SceneError> {
        Self::from_text_with_topology(text, None, config)
    }

    /// Assembles a scene, consulting a residue topology overlay while
    /// building the constraint network.
    pub fn from_text_with_topology(
        text: &str,
        overrides: Option<&TopologyRegistry>,
        config: SessionConfig,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        let molecule = Molecule::from_pdb_text_with_topology(text, overrides)?;
        Ok(Self::assemble(molecule, config))
    }

    /// Creates the physics side of the scene: the floor plane, one unit-mass
    /// sphere body per atom at its display-space position, and one rigid
    /// joint per constraint with the rest length carried into display scale.
    fn assemble(molecule: Molecule, config: SessionConfig) -> Self {
        let mut world = PhysicsWorld::new(Vector3::from(config.physics.gravity));
        world.set_solver_iterations(config.physics.solver_iterations);

        if let Some(floor_height) = config.physics.floor_height {
            let _ = world.add_body(Body::fixed_plane(Point3::new(0.0, floor_height, 0.0)));
        }

        let atom_bodies: Vec<BodyId> = molecule
            .atoms()
            .iter()
            .map(|atom| {
                world.add_body(Body::dynamic_sphere(
                    display_position(&config.display, &atom.position),
                    config.display.atom_radius,
                ))
            })
            .collect();

        for constraint in molecule.constraints() {
            // Uniform display scaling preserves distance ratios, so the
            // source-space rest length scales directly.
            let _ = world.add_joint_with_rest_length(
                atom_bodies[constraint.a],
                atom_bodies[constraint.b],
                constraint.rest_length * config.display.scale,
                config.physics.constraint_max_force,
            );
        }

        let mut scene = Self {
            molecule,
            world,
            atom_bodies,
            held: [None; Hand::COUNT],
            config,
            atom_instances: Vec::new(),
            bond_instances: Vec::new(),
            instances_dirty: false,
        };
        scene.sync_instances();
        scene
    }

    /// Advances the scene by one frame: one fixed physics step, the
    /// per-frame velocity damping, then the render-state projection.
    pub fn tick(&mut self) {
        self.world.step(self.config.physics.timestep);
        self.world.apply_damping(self.config.physics.velocity_damping);
        self.sync_instances();
    }

    /// Routes an XR input event. Returns the grabbed atom index on a
    /// successful pinch-start.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<usize> {
        match event {
            InputEvent::PinchStart { hand, tip } => self.pinch_start(hand, tip),
            InputEvent::PinchEnd { hand } => {
                self.pinch_end(hand);
                None
            }
        }
    }

    /// Grabs the nearest free atom within the interaction radius, if any.
    ///
    /// A hand that is already holding an atom keeps it.
    pub fn pinch_start(&mut self, hand: Hand, tip: Point3<f64>) -> Option<usize> {
        if let Some(atom_index) = self.held[hand.index()] {
            return Some(atom_index);
        }

        let atom_index = self.nearest_free_atom(&tip)?;
        self.world
            .set_state(self.atom_bodies[atom_index], BodyState::Held)?;
        self.held[hand.index()] = Some(atom_index);
        debug!(?hand, atom_index, "pinch grab");
        Some(atom_index)
    }

    /// Releases whatever the hand holds back to the solver.
    pub fn pinch_end(&mut self, hand: Hand) {
        if let Some(atom_index) = self.held[hand.index()].take() {
            let _ = self
                .world
                .set_state(self.atom_bodies[atom_index], BodyState::Free);
            debug!(?hand, atom_index, "pinch release");
        }
    }

    /// Overwrites the held body's pose from the tracked hand pose. No-op
    /// when the hand holds nothing.
    pub fn drive_held(&mut self, hand: Hand, pose: HandPose) {
        let Some(atom_index) = self.held[hand.index()] else {
            return;
        };
        if let Some(body) = self.world.body_mut(self.atom_bodies[atom_index]) {
            body.position = pose.position;
            body.orientation = pose.orientation;
        }
    }

    /// The atom a hand currently holds.
    pub fn held_atom(&self, hand: Hand) -> Option<usize> {
        self.held[hand.index()]
    }

    fn nearest_free_atom(&self, tip: &Point3<f64>) -> Option<usize> {
        let grab_radius_sq = self.config.interaction.grab_radius.powi(2);
        let mut best: Option<(usize, f64)> = None;
        for (atom_index, &body_id) in self.atom_bodies.iter().enumerate() {
            let Some(body) = self.world.body(body_id) else {
                continue;
            };
            if body.is_held() {
                continue;
            }
            let distance_sq = (body.position - tip).norm_squared();
            if distance_sq > grab_radius_sq {
                continue;
            }
            if best.map_or(true, |(_, current)| distance_sq < current) {
                best = Some((atom_index, distance_sq));
            }
        }
        best.map(|(atom_index, _)| atom_index)
    }

    /// Recomputes every atom and bond instance transform from current body
    /// state and marks the buffers dirty.
    fn sync_instances(&mut self) {
        self.atom_instances.clear();
        for &body_id in &self.atom_bodies {
            if let Some(body) = self.world.body(body_id) {
                self.atom_instances
                    .push(sync::atom_instance(body, self.config.display.atom_radius));
            }
        }

        self.bond_instances.clear();
        for bond in self.molecule.bonds() {
            let (Some(a), Some(b)) = (
                self.world.body(self.atom_bodies[bond.a]),
                self.world.body(self.atom_bodies[bond.b]),
            ) else {
                continue;
            };
            self.bond_instances.push(sync::bond_instance(
                &a.position,
                &b.position,
                self.config.display.bond_radius,
            ));
        }

        self.instances_dirty = true;
    }

    pub fn molecule(&self) -> &Molecule {
        &self.molecule
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The body backing an atom index.
    pub fn atom_body(&self, atom_index: usize) -> Option<BodyId> {
        self.atom_bodies.get(atom_index).copied()
    }

    /// Per-atom instance transforms, index-aligned with the molecule's atoms.
    pub fn atom_instances(&self) -> &[InstanceTransform] {
        &self.atom_instances
    }

    /// Per-bond instance transforms, index-aligned with the molecule's bonds.
    pub fn bond_instances(&self) -> &[InstanceTransform] {
        &self.bond_instances
    }

    /// Whether the instance buffers changed since the last
    /// [`Self::mark_instances_clean`].
    pub fn instances_dirty(&self) -> bool {
        self.instances_dirty
    }

    /// Acknowledges the current instance buffers (the renderer uploaded
    /// them).
    pub fn mark_instances_clean(&mut self) {
        self.instances_dirty = false;
    }
}

/// Maps a source-space position into display space: uniform scale, then
/// translation.
fn display_position(display: &DisplayConfig, source: &Point3<f64>) -> Point3<f64> {
    let [tx, ty, tz] = display.translation;
    Point3::new(
        source.x * display.scale + tx,
        source.y * display.scale + ty,
        source.z * display.scale + tz,
    )
}
