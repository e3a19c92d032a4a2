//! Structure texts embedded at build time.
//!
//! The session has no file or network interface; which structure a scene
//! loads is decided by picking a [`Structure`] variant when assembling it.

/// An embedded coordinate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    /// Two alanine residues, the smallest chain with a full backbone link.
    AlanineDipeptide,
    /// Five residues (ALA-GLY-SER-VAL-LEU) covering the side-chain shapes:
    /// none, single atom, branch, and branched chain.
    MixedPentapeptide,
}

impl Structure {
    /// All embedded structures, in menu order.
    pub const ALL: &'static [Structure] =
        &[Structure::AlanineDipeptide, Structure::MixedPentapeptide];

    /// The raw coordinate record text.
    pub fn text(self) -> &'static str {
        match self {
            Structure::AlanineDipeptide => include_str!("../assets/dipeptide.pdb"),
            Structure::MixedPentapeptide => include_str!("../assets/pentapeptide.pdb"),
        }
    }

    /// A short human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Structure::AlanineDipeptide => "alanine dipeptide",
            Structure::MixedPentapeptide => "mixed pentapeptide",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_structure_has_atom_records() {
        for structure in Structure::ALL {
            assert!(
                structure.text().lines().any(|l| l.starts_with("ATOM")),
                "{} has no atom records",
                structure.label()
            );
        }
    }

    #[test]
    fn dipeptide_has_ten_atom_records() {
        let count = Structure::AlanineDipeptide
            .text()
            .lines()
            .filter(|l| l.starts_with("ATOM"))
            .count();
        assert_eq!(count, 10);
    }

    #[test]
    fn pentapeptide_has_thirty_atom_records() {
        let count = Structure::MixedPentapeptide
            .text()
            .lines()
            .filter(|l| l.starts_with("ATOM"))
            .count();
        assert_eq!(count, 30);
    }
}
