use super::residues::{self, OffsetPair};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Constraint topology for one residue type, as loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResidueTopology {
    /// Offset pairs relative to the residue's CA atom, same convention as
    /// the static table (N = -1, CB = +3, further side-chain atoms +4...).
    pub constraint_offsets: Vec<OffsetPair>,
}

/// An overlay of per-residue constraint topologies on top of the built-in
/// static table.
///
/// Lets a session supply constraint sets for residue types the static table
/// does not know (modified residues, ligand pseudo-residues) without
/// rebuilding the library. Lookups consult the overlay first, then fall back
/// to the static table.
#[derive(Debug, Clone, Default)]
pub struct TopologyRegistry {
    registry: HashMap<String, ResidueTopology>,
}

impl TopologyRegistry {
    /// Parses an overlay from TOML text.
    ///
    /// Each top-level table keys a residue type code:
    ///
    /// ```toml
    /// [MSE]
    /// constraint_offsets = [[3, 4], [4, 5], [5, 6], [0, 4]]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, TopologyLoadError> {
        let registry: HashMap<String, ResidueTopology> =
            toml::from_str(content).map_err(TopologyLoadError::Toml)?;
        Ok(Self { registry })
    }

    /// Loads an overlay from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TopologyLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| TopologyLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let registry: HashMap<String, ResidueTopology> =
            toml::from_str(&content).map_err(TopologyLoadError::Toml)?;
        Ok(Self { registry })
    }

    /// Returns the overlay entry for a residue type, if any.
    pub fn get(&self, residue_name: &str) -> Option<&ResidueTopology> {
        self.registry.get(residue_name)
    }

    /// Resolves the constraint offsets for a residue type: overlay first,
    /// then the static table.
    pub fn offsets_for(&self, residue_name: &str) -> Option<&[OffsetPair]> {
        if let Some(topology) = self.registry.get(residue_name) {
            return Some(&topology.constraint_offsets);
        }
        residues::sidechain_offsets(residue_name)
    }
}

#[derive(Debug, Error)]
pub enum TopologyLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error: {0}")]
    Toml(toml::de::Error),
}
