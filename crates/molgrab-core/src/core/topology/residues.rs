//! Hand-curated constraint offset tables for the 20 standard residue types.
//!
//! Each entry lists the atom-index offset pairs (relative to the residue's CA
//! atom) that the constraint builder links with rigid distance constraints.
//! Entries cover the covalent side-chain edges plus bracing pairs (branch
//! triangles, ring cross-braces, a CA anchor for the first extension atom)
//! that distance constraints need to hold a conformation without angular
//! terms. Every residue's set is enumerated standalone; no set is defined in
//! terms of a neighboring residue's.
//!
//! The CA-CB and N-CB attachment pairs are not listed here; the builder emits
//! those for every residue that has a side chain at all.

use phf::{Map, phf_map};

/// A pair of atom-index offsets relative to the residue's CA atom.
pub type OffsetPair = (i8, i8);

/// Residue type code of the side-chain-free residue.
pub const SIDECHAIN_FREE_RESIDUE: &str = "GLY";

/// Returns `true` if atoms of this residue type extend past the backbone.
pub fn has_sidechain(residue_name: &str) -> bool {
    residue_name != SIDECHAIN_FREE_RESIDUE
}

// Glycine: N CA C O. No side chain, no CB.
const GLYCINE: &[OffsetPair] = &[];

// Alanine: N CA C O CB. CB alone is fully held by the builder's
// CA-CB / N-CB attachment pairs.
const ALANINE: &[OffsetPair] = &[];

// Serine: N CA C O CB OG(+4)
const SERINE: &[OffsetPair] = &[(3, 4), (0, 4)];

// Cysteine: N CA C O CB SG(+4)
const CYSTEINE: &[OffsetPair] = &[(3, 4), (0, 4)];

// Threonine: N CA C O CB OG1(+4) CG2(+5)
const THREONINE: &[OffsetPair] = &[(3, 4), (3, 5), (4, 5), (0, 4)];

// Valine: N CA C O CB CG1(+4) CG2(+5)
const VALINE: &[OffsetPair] = &[(3, 4), (3, 5), (4, 5), (0, 4)];

// Leucine: N CA C O CB CG(+4) CD1(+5) CD2(+6)
const LEUCINE: &[OffsetPair] = &[(3, 4), (4, 5), (4, 6), (5, 6), (3, 5), (0, 4)];

// Isoleucine: N CA C O CB CG1(+4) CG2(+5) CD1(+6)
const ISOLEUCINE: &[OffsetPair] = &[(3, 4), (3, 5), (4, 5), (4, 6), (3, 6), (0, 4)];

// Proline: N CA C O CB CG(+4) CD(+5); the ring closes through CD-N.
const PROLINE: &[OffsetPair] = &[(3, 4), (4, 5), (-1, 5), (3, 5), (0, 4)];

// Methionine: N CA C O CB CG(+4) SD(+5) CE(+6)
const METHIONINE: &[OffsetPair] = &[(3, 4), (4, 5), (5, 6), (3, 5), (4, 6), (0, 4)];

// Aspartate: N CA C O CB CG(+4) OD1(+5) OD2(+6)
const ASPARTATE: &[OffsetPair] = &[(3, 4), (4, 5), (4, 6), (5, 6), (3, 5), (0, 4)];

// Asparagine: N CA C O CB CG(+4) OD1(+5) ND2(+6)
const ASPARAGINE: &[OffsetPair] = &[(3, 4), (4, 5), (4, 6), (5, 6), (3, 5), (0, 4)];

// Glutamate: N CA C O CB CG(+4) CD(+5) OE1(+6) OE2(+7)
const GLUTAMATE: &[OffsetPair] = &[
    (3, 4),
    (4, 5),
    (5, 6),
    (5, 7),
    (6, 7),
    (3, 5),
    (4, 6),
    (0, 4),
];

// Glutamine: N CA C O CB CG(+4) CD(+5) OE1(+6) NE2(+7)
const GLUTAMINE: &[OffsetPair] = &[
    (3, 4),
    (4, 5),
    (5, 6),
    (5, 7),
    (6, 7),
    (3, 5),
    (4, 6),
    (0, 4),
];

// Lysine: N CA C O CB CG(+4) CD(+5) CE(+6) NZ(+7)
const LYSINE: &[OffsetPair] = &[
    (3, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (3, 5),
    (4, 6),
    (5, 7),
    (0, 4),
];

// Arginine: N CA C O CB CG(+4) CD(+5) NE(+6) CZ(+7) NH1(+8) NH2(+9)
const ARGININE: &[OffsetPair] = &[
    (3, 4),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (7, 9),
    (8, 9),
    (3, 5),
    (4, 6),
    (5, 7),
    (6, 8),
    (0, 4),
];

// Histidine: N CA C O CB CG(+4) ND1(+5) CD2(+6) CE1(+7) NE2(+8)
// Imidazole ring CG-ND1-CE1-NE2-CD2 with two cross-braces.
const HISTIDINE: &[OffsetPair] = &[
    (3, 4),
    (4, 5),
    (4, 6),
    (5, 7),
    (7, 8),
    (6, 8),
    (4, 7),
    (5, 8),
    (0, 4),
];

// Phenylalanine: N CA C O CB CG(+4) CD1(+5) CD2(+6) CE1(+7) CE2(+8) CZ(+9)
// Benzene ring CG-CD1-CE1-CZ-CE2-CD2 with three cross-braces.
const PHENYLALANINE: &[OffsetPair] = &[
    (3, 4),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 8),
    (7, 9),
    (8, 9),
    (4, 9),
    (5, 8),
    (6, 7),
    (0, 4),
];

// Tyrosine: N CA C O CB CG(+4) CD1(+5) CD2(+6) CE1(+7) CE2(+8) CZ(+9) OH(+10)
const TYROSINE: &[OffsetPair] = &[
    (3, 4),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 8),
    (7, 9),
    (8, 9),
    (4, 9),
    (5, 8),
    (6, 7),
    (9, 10),
    (8, 10),
    (0, 4),
];

// Tryptophan: N CA C O CB CG(+4) CD1(+5) CD2(+6) NE1(+7) CE2(+8) CE3(+9)
// CZ2(+10) CZ3(+11) CH2(+12). Pyrrole ring CG-CD1-NE1-CE2-CD2 fused to the
// benzene ring CD2-CE2-CZ2-CH2-CZ3-CE3.
const TRYPTOPHAN: &[OffsetPair] = &[
    (3, 4),
    (4, 5),
    (4, 6),
    (5, 7),
    (7, 8),
    (6, 8),
    (6, 9),
    (8, 10),
    (9, 11),
    (10, 12),
    (11, 12),
    (4, 8),
    (6, 10),
    (8, 11),
    (0, 4),
];

/// The static residue topology table: residue type code to constraint
/// offset pairs.
pub static SIDECHAIN_OFFSETS: Map<&'static str, &'static [OffsetPair]> = phf_map! {
    "ALA" => ALANINE,
    "ARG" => ARGININE,
    "ASN" => ASPARAGINE,
    "ASP" => ASPARTATE,
    "CYS" => CYSTEINE,
    "GLN" => GLUTAMINE,
    "GLU" => GLUTAMATE,
    "GLY" => GLYCINE,
    "HIS" => HISTIDINE,
    "ILE" => ISOLEUCINE,
    "LEU" => LEUCINE,
    "LYS" => LYSINE,
    "MET" => METHIONINE,
    "PHE" => PHENYLALANINE,
    "PRO" => PROLINE,
    "SER" => SERINE,
    "THR" => THREONINE,
    "TRP" => TRYPTOPHAN,
    "TYR" => TYROSINE,
    "VAL" => VALINE,
};

/// Looks up the constraint offset pairs for a residue type code.
///
/// Returns `None` for types absent from the table; the caller decides the
/// skip-and-warn policy.
pub fn sidechain_offsets(residue_name: &str) -> Option<&'static [OffsetPair]> {
    SIDECHAIN_OFFSETS.get(residue_name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_twenty_standard_residues() {
        let codes = [
            "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE", "LEU", "LYS",
            "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
        ];
        for code in codes {
            assert!(sidechain_offsets(code).is_some(), "missing entry for {code}");
        }
        assert_eq!(SIDECHAIN_OFFSETS.len(), 20);
    }

    #[test]
    fn unknown_residue_returns_none() {
        assert!(sidechain_offsets("XXX").is_none());
        assert!(sidechain_offsets("ala").is_none());
        assert!(sidechain_offsets("").is_none());
    }

    #[test]
    fn sidechain_free_residues_have_empty_entries() {
        assert!(sidechain_offsets("GLY").unwrap().is_empty());
        assert!(sidechain_offsets("ALA").unwrap().is_empty());
        assert!(!has_sidechain("GLY"));
        assert!(has_sidechain("ALA"));
    }

    #[test]
    fn offsets_never_reference_the_backbone_carbonyl() {
        // Only N (-1), CA (0), and side-chain offsets (+3 onward) may appear;
        // C (+1) and O (+2) belong to the backbone constraint set.
        for (residue, pairs) in SIDECHAIN_OFFSETS.entries() {
            for (a, b) in pairs.iter() {
                for offset in [*a, *b] {
                    assert!(
                        offset == -1 || offset == 0 || offset >= 3,
                        "{residue} references backbone offset {offset}"
                    );
                }
            }
        }
    }

    #[test]
    fn offset_pairs_are_unique_within_each_residue() {
        for (residue, pairs) in SIDECHAIN_OFFSETS.entries() {
            for (i, a) in pairs.iter().enumerate() {
                for b in pairs.iter().skip(i + 1) {
                    assert_ne!(a, b, "duplicate pair {a:?} in {residue}");
                    assert_ne!(&(a.1, a.0), b, "mirrored duplicate {a:?} in {residue}");
                }
            }
        }
    }

    #[test]
    fn no_pair_links_an_offset_to_itself() {
        for (residue, pairs) in SIDECHAIN_OFFSETS.entries() {
            for (a, b) in pairs.iter() {
                assert_ne!(a, b, "self pair in {residue}");
            }
        }
    }

    #[test]
    fn ring_residues_carry_cross_braces() {
        // A ring held only by its edges collapses; every cyclic side chain
        // must list at least one non-adjacent pair.
        assert!(sidechain_offsets("PHE").unwrap().contains(&(4, 9)));
        assert!(sidechain_offsets("TYR").unwrap().contains(&(4, 9)));
        assert!(sidechain_offsets("HIS").unwrap().contains(&(4, 7)));
        assert!(sidechain_offsets("TRP").unwrap().contains(&(4, 8)));
        assert!(sidechain_offsets("PRO").unwrap().contains(&(-1, 5)));
    }
}
