//! # Session Module
//!
//! The user-facing layer: it ties the structure builder and the physics
//! world together into a running interactive scene.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Display transform, interaction radii,
//!   and physics parameters, with TOML deserialization and full defaults
//! - **Scene** ([`scene`]) - Body creation, the fixed-timestep tick, and
//!   grab/release bookkeeping
//! - **Input** ([`input`]) - Hand identity and pinch events
//! - **Render Sync** ([`sync`]) - Projection of body state into per-atom and
//!   per-bond instance transforms
//! - **Errors** ([`error`]) - Scene assembly failures
//!
//! A scene runs single-threaded and frame-driven: one [`scene::MoleculeScene::tick`]
//! per display-refresh callback advances the physics by exactly one fixed
//! timestep (no sub-stepping, no interpolation) and refreshes the instance
//! transforms. Molecule topology never changes after load.

pub mod config;
pub mod error;
pub mod input;
pub mod scene;
pub mod sync;
