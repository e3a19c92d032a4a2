use crate::core::bonds;
use crate::core::constraints;
use crate::core::elements::ElementError;
use crate::core::io::pdb;
use crate::core::models::atom::AtomRecord;
use crate::core::models::topology::{Bond, Constraint};
use crate::core::topology::registry::TopologyRegistry;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Structure text contains no parsable atom records")]
    NoAtoms,
    #[error("Bond inference failed: {0}")]
    Element(#[from] ElementError),
}

/// A fully built molecular structure: atoms, inferred visual bonds, and the
/// rigid constraint network.
///
/// Created once from the full coordinate text; the topology never changes
/// afterward (only simulated positions do, and those live in the physics
/// layer). Each `Molecule` owns its data outright, so independent instances
/// coexist and unit tests need no render or physics context.
#[derive(Debug, Clone)]
pub struct Molecule {
    atoms: Vec<AtomRecord>,
    bonds: Vec<Bond>,
    constraints: Vec<Constraint>,
    rejected_line_count: usize,
    unknown_residues: Vec<String>,
}

impl Molecule {
    /// Builds a molecule from coordinate text with the built-in residue
    /// topology table.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoAtoms`] when nothing parses, or
    /// [`BuildError::Element`] when an atom's covalent radius cannot be
    /// resolved (bond inference must not silently omit atoms).
    pub fn from_pdb_text(text: &str) -> Result<Self, BuildError> {
        Self::from_pdb_text_with_topology(text, None)
    }

    /// Builds a molecule, consulting a topology overlay for residue types
    /// the built-in table does not cover.
    pub fn from_pdb_text_with_topology(
        text: &str,
        overrides: Option<&TopologyRegistry>,
    ) -> Result<Self, BuildError> {
        let contents = pdb::parse(text);
        if contents.atoms.is_empty() {
            return Err(BuildError::NoAtoms);
        }

        let bonds = bonds::infer_bonds(&contents.atoms)?;
        let network = constraints::build_network(&contents.atoms, overrides);

        info!(
            atoms = contents.atoms.len(),
            bonds = bonds.len(),
            constraints = network.constraints.len(),
            rejected_lines = contents.rejected.len(),
            "built molecule"
        );

        Ok(Self {
            atoms: contents.atoms,
            bonds,
            constraints: network.constraints,
            rejected_line_count: contents.rejected.len(),
            unknown_residues: network.unknown_residues,
        })
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    pub fn atom(&self, index: usize) -> Option<&AtomRecord> {
        self.atoms.get(index)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of marker lines the parser rejected while building.
    pub fn rejected_line_count(&self) -> usize {
        self.rejected_line_count
    }

    /// Residue type codes that had no topology entry.
    pub fn unknown_residues(&self) -> &[String] {
        &self.unknown_residues
    }
}
