//! Geometric covalent-bond inference.
//!
//! Two atoms are considered bonded when the squared distance between their
//! source-unit positions falls below `1.2 x (r_i + r_j)^2`, with covalent
//! radii from [`crate::core::elements`]. Distances must always be compared in
//! original coordinate units; any display scale or translation has to be
//! inverted first.
//!
//! The scan is a plain O(n^2) sweep over all atom pairs. That is acceptable
//! at this library's working scale (hundreds of atoms) but is a scalability
//! ceiling, not a design: larger structures would need a spatial index
//! (cell grid or k-d tree) to cut the pair candidates down.

use crate::core::elements::{self, ElementError};
use crate::core::models::atom::AtomRecord;
use crate::core::models::topology::Bond;

/// Scale factor applied to the squared radius sum in the threshold test.
pub const DISTANCE_FACTOR: f64 = 1.2;

/// Returns `true` if two atoms at squared distance `distance_sq` with the
/// given covalent radii count as bonded.
pub fn within_bond_threshold(distance_sq: f64, radius_a: f64, radius_b: f64) -> bool {
    let radius_sum = radius_a + radius_b;
    distance_sq < DISTANCE_FACTOR * radius_sum * radius_sum
}

/// Infers the covalent bond set for an ordered atom sequence.
///
/// Output pairs are ordered `a < b`, ascending, so the result is independent
/// of argument orientation by construction. Bonds feed visualization only;
/// the physics constraint network is synthesized separately.
///
/// # Errors
///
/// Fails fast with [`ElementError`] if any atom's radius cannot be resolved;
/// silently omitting an atom here would silently omit its bonds.
pub fn infer_bonds(atoms: &[AtomRecord]) -> Result<Vec<Bond>, ElementError> {
    let radii = atoms
        .iter()
        .map(|atom| elements::radius_for_atom_name(&atom.name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut bonds = Vec::new();
    for i in 0..atoms.len() {
        for j in (i + 1)..atoms.len() {
            let distance_sq = (atoms[i].position - atoms[j].position).norm_squared();
            if within_bond_threshold(distance_sq, radii[i], radii[j]) {
                bonds.push(Bond::new(i, j));
            }
        }
    }
    Ok(bonds)
}
