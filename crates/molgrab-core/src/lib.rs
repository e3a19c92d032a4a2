//! # molgrab Core Library
//!
//! A library for building, physically simulating, and hand-manipulating protein
//! structures in interactive 3D sessions: parse atomic-coordinate text, infer
//! covalent bonds geometrically, synthesize a rigid distance-constraint network
//! over backbone and side chains, and keep the structure numerically stable
//! while a user pinch-grabs individual atoms.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`Molecule`,
//!   `AtomRecord`), the coordinate-record parser, element data, geometric bond
//!   inference, residue topology tables, and the constraint network builder.
//!
//! - **[`sim`]: The Physics Layer.** This stateful layer owns point-mass
//!   bodies and their distance joints and advances them with a fixed-timestep
//!   position-based solver. Each body carries an explicit `Free | Held`
//!   ownership state so that in any one tick it is driven either by the solver
//!   or by tracked input, never both.
//!
//! - **[`session`]: The Public API.** This is the highest-level, user-facing
//!   layer. It ties `core` and `sim` together into a `MoleculeScene`: body
//!   creation, the per-frame tick, pinch-grab input handling, and projection
//!   of body state into renderable instance transforms.
//!
//! Structure data is embedded at build time and selected through [`assets`];
//! there is no runtime network or command-line surface.

pub mod assets;
pub mod core;
pub mod session;
pub mod sim;
