//! # Core Module
//!
//! This module provides the fundamental building blocks for turning raw
//! atomic-coordinate text into a simulation-ready molecular structure.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! stages of structure construction:
//!
//! - **Molecular Representation** ([`models`]) - Atom records, bonds,
//!   constraints, and the `Molecule` aggregate
//! - **File Parsing** ([`io`]) - Fixed-column coordinate-record parsing with
//!   per-line rejection diagnostics
//! - **Element Data** ([`elements`]) - Covalent radii with ordered
//!   first-match lookup
//! - **Bond Inference** ([`bonds`]) - Distance-threshold covalent bond
//!   detection for visualization
//! - **Structural Knowledge** ([`topology`]) - Hand-curated per-residue
//!   constraint offset tables
//! - **Constraint Synthesis** ([`constraints`]) - Backbone and side-chain
//!   distance-constraint network construction
//!
//! All algorithms here are pure and deterministic: the same input text always
//! produces the same atoms, bonds, and constraints, with no ambient state.

pub mod bonds;
pub mod constraints;
pub mod elements;
pub mod io;
pub mod models;
pub mod topology;
