//! Synthesizes the rigid distance-constraint network for a parsed structure.
//!
//! The builder walks the atom sequence once, anchoring on every alpha carbon,
//! and emits constraints in a fixed order per residue: backbone links into
//! the next residue, intra-residue backbone pairs, side-chain attachment
//! anchors, then the residue type's table-driven pairs. Rest lengths are
//! frozen from the input conformation; distorted source geometry is kept,
//! not corrected.
//!
//! Failures stay local. A chain terminus or numbering gap just omits the
//! forward links; a residue type without a topology entry skips its
//! side-chain constraints with a warning while its backbone constraints
//! remain; an offset that lands outside the residue skips that single pair.

use crate::core::models::atom::AtomRecord;
use crate::core::models::topology::{Constraint, ConstraintKind};
use crate::core::topology::registry::TopologyRegistry;
use crate::core::topology::residues::{self, OffsetPair};
use tracing::{debug, warn};

/// The constraint set produced for one molecule, with build diagnostics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintNetwork {
    /// Emitted constraints, ascending by alpha-carbon sequence position.
    pub constraints: Vec<Constraint>,
    /// Residue type codes that had no topology entry (deduplicated).
    pub unknown_residues: Vec<String>,
}

impl ConstraintNetwork {
    /// Counts the constraints of one kind.
    pub fn count_of(&self, kind: ConstraintKind) -> usize {
        self.constraints.iter().filter(|c| c.kind == kind).count()
    }
}

/// Builds the full constraint network for an ordered atom sequence.
///
/// `overrides` may supply topology for residue types the static table does
/// not cover; pass `None` to use the built-in table alone.
pub fn build_network(
    atoms: &[AtomRecord],
    overrides: Option<&TopologyRegistry>,
) -> ConstraintNetwork {
    let mut network = ConstraintNetwork::default();

    for ca in atoms.iter().filter(|a| a.is_alpha_carbon()) {
        build_residue(atoms, ca, overrides, &mut network);
    }

    network
}

fn build_residue(
    atoms: &[AtomRecord],
    ca: &AtomRecord,
    overrides: Option<&TopologyRegistry>,
    network: &mut ConstraintNetwork,
) {
    let j = ca.index;
    let residue_number = ca.residue_number;

    let n = backbone_atom(atoms, j, -1, "N", residue_number);
    let c = backbone_atom(atoms, j, 1, "C", residue_number);
    let o = backbone_atom(atoms, j, 2, "O", residue_number);

    // 1. Links into the residue with the next sequence number. Absent at a
    //    chain terminus or across a numbering gap; that is not an error.
    if let Some(next_ca) = atoms[j + 1..]
        .iter()
        .find(|a| a.is_alpha_carbon() && a.residue_number == residue_number + 1)
    {
        let k = next_ca.index;
        let next_n = backbone_atom(atoms, k, -1, "N", residue_number + 1);
        emit(atoms, j, k, ConstraintKind::BackboneLink, network);
        if let (Some(c), Some(next_n)) = (c, next_n) {
            emit(atoms, c, next_n, ConstraintKind::BackboneLink, network);
        }
        if let (Some(o), Some(next_n)) = (o, next_n) {
            emit(atoms, o, next_n, ConstraintKind::BackboneLink, network);
        }
    } else {
        debug!(residue_number, "no next alpha carbon; omitting forward links");
    }

    // 2. Intra-residue backbone rigidity.
    if let Some(n) = n {
        emit(atoms, n, j, ConstraintKind::Backbone, network);
    }
    if let Some(c) = c {
        emit(atoms, j, c, ConstraintKind::Backbone, network);
    }
    if let Some(o) = o {
        emit(atoms, j, o, ConstraintKind::Backbone, network);
    }
    if let (Some(c), Some(o)) = (c, o) {
        emit(atoms, c, o, ConstraintKind::Backbone, network);
    }

    // 3. Side-chain attachment for everything but the side-chain-free type.
    if residues::has_sidechain(&ca.residue_name) {
        let cb = backbone_atom(atoms, j, 3, "CB", residue_number);
        if let Some(cb) = cb {
            emit(atoms, j, cb, ConstraintKind::SidechainAnchor, network);
            if let Some(n) = n {
                emit(atoms, n, cb, ConstraintKind::SidechainAnchor, network);
            }
        }
    }

    // 4. Table-driven side-chain pairs.
    let offsets = match overrides {
        Some(registry) => registry.offsets_for(&ca.residue_name),
        None => residues::sidechain_offsets(&ca.residue_name),
    };
    match offsets {
        Some(pairs) => emit_table_pairs(atoms, j, residue_number, pairs, network),
        None => {
            warn!(
                residue = %ca.residue_name,
                residue_number,
                "residue type has no topology entry; skipping side-chain constraints"
            );
            if !network.unknown_residues.contains(&ca.residue_name) {
                network.unknown_residues.push(ca.residue_name.clone());
            }
        }
    }
}

fn emit_table_pairs(
    atoms: &[AtomRecord],
    ca_index: usize,
    residue_number: isize,
    pairs: &[OffsetPair],
    network: &mut ConstraintNetwork,
) {
    for &(offset_a, offset_b) in pairs {
        let a = resolve_offset(atoms, ca_index, offset_a, residue_number);
        let b = resolve_offset(atoms, ca_index, offset_b, residue_number);
        match (a, b) {
            (Some(a), Some(b)) => emit(atoms, a, b, ConstraintKind::Sidechain, network),
            _ => warn!(
                residue_number,
                offset_a,
                offset_b,
                "side-chain offset pair falls outside the residue; skipping"
            ),
        }
    }
}

/// Resolves a CA-relative offset to an absolute atom index, requiring the
/// target to belong to the same residue.
fn resolve_offset(
    atoms: &[AtomRecord],
    ca_index: usize,
    offset: i8,
    residue_number: isize,
) -> Option<usize> {
    let index = ca_index.checked_add_signed(offset as isize)?;
    let atom = atoms.get(index)?;
    (atom.residue_number == residue_number).then_some(atom.index)
}

/// Resolves a backbone atom positionally, additionally requiring the
/// expected atom name so a truncated residue cannot mis-link.
fn backbone_atom(
    atoms: &[AtomRecord],
    ca_index: usize,
    offset: i8,
    expected_name: &str,
    residue_number: isize,
) -> Option<usize> {
    let index = resolve_offset(atoms, ca_index, offset, residue_number)?;
    (atoms[index].name == expected_name).then_some(index)
}

fn emit(
    atoms: &[AtomRecord],
    a: usize,
    b: usize,
    kind: ConstraintKind,
    network: &mut ConstraintNetwork,
) {
    let rest_length = (atoms[a].position - atoms[b].position).norm();
    network.constraints.push(Constraint::new(a, b, rest_length, kind));
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    /// Lays one residue out with the backbone-first ordering the format
    /// guarantees, at distinct positions so rest lengths are meaningful.
    fn residue(resnum: isize, code: &str, sidechain_atoms: usize) -> Vec<AtomRecord> {
        let ox = 3.8 * (resnum - 1) as f64;
        let mut names: Vec<String> = ["N", "CA", "C", "O"].map(String::from).to_vec();
        for k in 0..sidechain_atoms {
            names.push(if k == 0 {
                "CB".to_string()
            } else {
                format!("X{}", k + 3)
            });
        }

        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let position = match i {
                    0 => Point3::new(ox - 1.2, 0.85, 0.0),
                    1 => Point3::new(ox, 0.0, 0.0),
                    2 => Point3::new(ox + 1.2, 0.85, 0.0),
                    3 => Point3::new(ox + 1.2, 2.08, 0.0),
                    _ => {
                        let k = (i - 4) as f64;
                        Point3::new(ox + 0.3 * k, -1.54 - 1.2 * k, 0.4 * k)
                    }
                };
                let element = name.chars().next().unwrap();
                AtomRecord::new(0, resnum, code, name, element, position)
            })
            .collect()
    }

    fn chain(residues: &[(isize, &str, usize)]) -> Vec<AtomRecord> {
        let mut atoms = Vec::new();
        for &(resnum, code, sidechain_atoms) in residues {
            atoms.extend(residue(resnum, code, sidechain_atoms));
        }
        for (i, atom) in atoms.iter_mut().enumerate() {
            atom.index = i;
        }
        atoms
    }

    #[test]
    fn backbone_completeness_for_a_consecutive_chain() {
        let atoms = chain(&[(1, "GLY", 0), (2, "GLY", 0), (3, "GLY", 0)]);
        let network = build_network(&atoms, None);

        // 4 intra-residue pairs per residue, 3 forward links for all but the
        // terminal residue.
        assert_eq!(network.count_of(ConstraintKind::Backbone), 12);
        assert_eq!(network.count_of(ConstraintKind::BackboneLink), 6);
        assert_eq!(network.count_of(ConstraintKind::SidechainAnchor), 0);
        assert_eq!(network.count_of(ConstraintKind::Sidechain), 0);
        assert!(network.unknown_residues.is_empty());
    }

    #[test]
    fn numbering_gap_omits_forward_links() {
        let atoms = chain(&[(1, "GLY", 0), (2, "GLY", 0), (5, "GLY", 0)]);
        let network = build_network(&atoms, None);

        // Only residue 1 -> 2 links; residue 2 sees no residue 3.
        assert_eq!(network.count_of(ConstraintKind::BackboneLink), 3);
        assert_eq!(network.count_of(ConstraintKind::Backbone), 12);
    }

    #[test]
    fn lone_residue_emits_no_links() {
        let atoms = chain(&[(1, "GLY", 0)]);
        let network = build_network(&atoms, None);
        assert_eq!(network.count_of(ConstraintKind::BackboneLink), 0);
        assert_eq!(network.count_of(ConstraintKind::Backbone), 4);
    }

    #[test]
    fn sidechain_anchors_attach_cb_to_backbone() {
        let atoms = chain(&[(1, "ALA", 1)]);
        let network = build_network(&atoms, None);

        assert_eq!(network.count_of(ConstraintKind::SidechainAnchor), 2);
        assert_eq!(network.count_of(ConstraintKind::Sidechain), 0);

        let anchors: Vec<(usize, usize)> = network
            .constraints
            .iter()
            .filter(|c| c.kind == ConstraintKind::SidechainAnchor)
            .map(|c| (c.a, c.b))
            .collect();
        // CA-CB then N-CB.
        assert_eq!(anchors, vec![(1, 4), (0, 4)]);
    }

    #[test]
    fn emission_order_is_link_backbone_anchor_table() {
        let atoms = chain(&[(1, "SER", 2), (2, "SER", 2)]);
        let network = build_network(&atoms, None);

        let first_residue_kinds: Vec<ConstraintKind> = network
            .constraints
            .iter()
            .take(3 + 4 + 2 + 2)
            .map(|c| c.kind)
            .collect();
        assert_eq!(
            first_residue_kinds,
            vec![
                ConstraintKind::BackboneLink,
                ConstraintKind::BackboneLink,
                ConstraintKind::BackboneLink,
                ConstraintKind::Backbone,
                ConstraintKind::Backbone,
                ConstraintKind::Backbone,
                ConstraintKind::Backbone,
                ConstraintKind::SidechainAnchor,
                ConstraintKind::SidechainAnchor,
                ConstraintKind::Sidechain,
                ConstraintKind::Sidechain,
            ]
        );
    }

    #[test]
    fn building_twice_yields_identical_networks() {
        let atoms = chain(&[(1, "LEU", 4), (2, "VAL", 3)]);
        assert_eq!(build_network(&atoms, None), build_network(&atoms, None));
    }

    #[test]
    fn rest_lengths_match_initial_distances() {
        let atoms = chain(&[(1, "ALA", 1), (2, "ALA", 1)]);
        let network = build_network(&atoms, None);

        assert!(!network.constraints.is_empty());
        for constraint in &network.constraints {
            let expected = (atoms[constraint.a].position - atoms[constraint.b].position).norm();
            assert!((constraint.rest_length - expected).abs() < 1e-12);
            assert!(constraint.rest_length > 0.0);
        }
    }

    #[test]
    fn residue_coverage_matches_table_entries_exactly() {
        for (code, pairs) in residues::SIDECHAIN_OFFSETS.entries() {
            let max_offset = pairs
                .iter()
                .flat_map(|&(a, b)| [a, b])
                .max()
                .unwrap_or(2)
                .max(if residues::has_sidechain(code) { 3 } else { 2 });
            let sidechain_atoms = (max_offset - 2) as usize;

            let atoms = chain(&[(1, *code, sidechain_atoms)]);
            let network = build_network(&atoms, None);

            assert_eq!(
                network.count_of(ConstraintKind::Sidechain),
                pairs.len(),
                "side-chain constraint count mismatch for {code}"
            );
            assert!(network.unknown_residues.is_empty());
        }
    }

    #[test]
    fn proline_ring_reaches_back_to_the_nitrogen() {
        let atoms = chain(&[(1, "PRO", 3)]);
        let network = build_network(&atoms, None);

        // Offsets (-1, 5) resolve to N (index 0) and CD (index 6).
        assert!(
            network
                .constraints
                .iter()
                .any(|c| c.kind == ConstraintKind::Sidechain && c.a == 0 && c.b == 6)
        );
    }

    #[test]
    fn unknown_residue_keeps_backbone_and_reports_the_type() {
        let atoms = chain(&[(1, "XXX", 1), (2, "GLY", 0)]);
        let network = build_network(&atoms, None);

        assert_eq!(network.count_of(ConstraintKind::BackboneLink), 3);
        assert_eq!(network.count_of(ConstraintKind::Backbone), 8);
        assert_eq!(network.count_of(ConstraintKind::SidechainAnchor), 2);
        assert_eq!(network.count_of(ConstraintKind::Sidechain), 0);
        assert_eq!(network.unknown_residues, vec!["XXX".to_string()]);
    }

    #[test]
    fn unknown_residue_is_reported_once() {
        let atoms = chain(&[(1, "XXX", 1), (2, "XXX", 1)]);
        let network = build_network(&atoms, None);
        assert_eq!(network.unknown_residues, vec!["XXX".to_string()]);
    }

    #[test]
    fn truncated_residue_skips_out_of_range_pairs() {
        // SER's table references offset +4 (OG); with the side chain cut at
        // CB both table pairs are skipped but the anchors survive.
        let atoms = chain(&[(1, "SER", 1)]);
        let network = build_network(&atoms, None);

        assert_eq!(network.count_of(ConstraintKind::SidechainAnchor), 2);
        assert_eq!(network.count_of(ConstraintKind::Sidechain), 0);
        assert!(network.unknown_residues.is_empty());
    }

    #[test]
    fn registry_overlay_supplies_missing_topology() {
        let registry = TopologyRegistry::from_toml_str(
            "[XXX]\nconstraint_offsets = [[3, 4], [0, 4]]\n",
        )
        .unwrap();
        let atoms = chain(&[(1, "XXX", 2)]);
        let network = build_network(&atoms, Some(&registry));

        assert_eq!(network.count_of(ConstraintKind::Sidechain), 2);
        assert!(network.unknown_residues.is_empty());
    }

    #[test]
    fn two_atom_fragment_produces_no_panics_and_no_constraints() {
        // The scenario input: a lone N and CA. No C/O to link, no side chain.
        let atoms = vec![
            AtomRecord::new(0, 1, "ALA", "N", 'N', Point3::origin()),
            AtomRecord::new(1, 1, "ALA", "CA", 'C', Point3::new(1.46, 0.0, 0.0)),
        ];
        let network = build_network(&atoms, None);

        assert_eq!(network.count_of(ConstraintKind::Backbone), 1); // N-CA only
        assert_eq!(network.count_of(ConstraintKind::BackboneLink), 0);
        assert_eq!(network.count_of(ConstraintKind::SidechainAnchor), 0);
        assert_eq!(network.count_of(ConstraintKind::Sidechain), 0);
    }
}
