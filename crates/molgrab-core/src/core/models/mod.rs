//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent a
//! parsed molecular structure and its derived topology.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual parsed atom records with dense sequence indices
//! - [`topology`] - Visual bonds and rigid distance constraints
//! - [`molecule`] - The owning aggregate: atoms, bonds, and the constraint
//!   network, with topology immutable after construction
//!
//! The `Molecule` aggregate owns all structure data explicitly (no globals),
//! so multiple independent molecules can coexist and be unit-tested without a
//! live render or physics context.

pub mod atom;
pub mod molecule;
pub mod topology;
