//! # Topology Module
//!
//! Structural knowledge about amino-acid residues: which intra-residue atom
//! pairs must be linked by rigid distance constraints so a side chain stays
//! geometrically coherent under simulation. The physics layer has no inherent
//! notion of molecular geometry; every needed rigidity constraint must be
//! supplied explicitly.
//!
//! ## Key Components
//!
//! - [`residues`] - The static, hand-curated offset-pair table for the 20
//!   standard residue types
//! - [`registry`] - An optional TOML-defined overlay for residue types the
//!   static table does not cover
//!
//! Offsets are expressed relative to the residue's CA atom position within
//! the per-residue atom block (N = -1, C = +1, O = +2, CB = +3, further
//! side-chain atoms +4 onward), contingent on the fixed backbone-first atom
//! ordering the coordinate format guarantees.

pub mod registry;
pub mod residues;
