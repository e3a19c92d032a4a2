use nalgebra::Point3;

/// Atom name of the alpha carbon, the per-residue anchor the constraint
/// builder keys on.
pub const ALPHA_CARBON: &str = "CA";

/// Represents one parsed atomic-coordinate record.
///
/// Atoms carry a dense, 0-based `index` assigned in insertion order. Atoms of
/// the same residue are contiguous and ordered backbone-first (N, CA, C, O,
/// then side-chain atoms), as guaranteed by the source file's own atom
/// ordering; the constraint builder relies on this positionally (e.g. CB sits
/// at offset +3 from CA).
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// Dense 0-based sequence index matching insertion order.
    pub index: usize,
    /// Residue sequence number from the source file.
    pub residue_number: isize,
    /// Three-letter residue type code (e.g. "ALA").
    pub residue_name: String,
    /// The name of the atom (e.g. "CA", "N", "OG1").
    pub name: String,
    /// One-letter element symbol.
    pub element: char,
    /// The 3D coordinates of the atom in source units (Angstroms).
    pub position: Point3<f64>,
}

impl AtomRecord {
    /// Creates a new record with the given identity and position.
    pub fn new(
        index: usize,
        residue_number: isize,
        residue_name: &str,
        name: &str,
        element: char,
        position: Point3<f64>,
    ) -> Self {
        Self {
            index,
            residue_number,
            residue_name: residue_name.to_string(),
            name: name.to_string(),
            element,
            position,
        }
    }

    /// Returns `true` if this atom is a residue's alpha carbon.
    pub fn is_alpha_carbon(&self) -> bool {
        self.name == ALPHA_CARBON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_record_initializes_fields_correctly() {
        let atom = AtomRecord::new(3, 7, "SER", "OG", 'O', Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.index, 3);
        assert_eq!(atom.residue_number, 7);
        assert_eq!(atom.residue_name, "SER");
        assert_eq!(atom.name, "OG");
        assert_eq!(atom.element, 'O');
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn is_alpha_carbon_matches_only_ca() {
        let ca = AtomRecord::new(0, 1, "ALA", "CA", 'C', Point3::origin());
        let cb = AtomRecord::new(1, 1, "ALA", "CB", 'C', Point3::origin());
        assert!(ca.is_alpha_carbon());
        assert!(!cb.is_alpha_carbon());
    }

    #[test]
    fn atom_record_equality_and_clone_work() {
        let a = AtomRecord::new(0, 1, "GLY", "N", 'N', Point3::new(0.5, 0.0, -0.5));
        let b = a.clone();
        assert_eq!(a, b);
    }
}
