//! # Simulation Module
//!
//! The stateful physics layer: point-mass bodies, rigid distance joints, and
//! a fixed-timestep position-based solver. The layer knows nothing about
//! molecules; it exposes exactly the surface the structure builder needs —
//! create a body, add a distance joint, advance by a fixed step, read and
//! write body state.
//!
//! ## Ownership contract
//!
//! Every body carries an explicit [`body::BodyState`]: `Free` bodies are
//! integrated and corrected by the solver; `Held` bodies are kinematic for
//! the step and only tracked input may move them. In any one tick a body has
//! exactly one driver, never both.
//!
//! ## Key Components
//!
//! - [`body`] - Bodies, collider shapes, and the `Free | Held` state
//! - [`world`] - The world: body store, joints, stepping, damping

pub mod body;
pub mod world;
