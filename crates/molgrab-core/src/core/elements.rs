//! Covalent radius data for the elements the coordinate format carries.
//!
//! Lookup matches the first character of an atom name against a fixed ordered
//! list of known element symbols; the first match wins. Bond inference depends
//! on a valid radius for every atom, so an unmatched symbol is a reportable
//! error rather than a silent omission.

use thiserror::Error;

/// Known elements with their covalent radii in Angstroms, in lookup order.
pub const ELEMENTS: &[(char, f64)] = &[
    ('C', 0.76),
    ('N', 0.71),
    ('O', 0.66),
    ('S', 1.05),
    ('P', 1.07),
    ('H', 0.31),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("No covalent radius for atom '{atom_name}' (leading symbol '{symbol}')")]
    UnknownElement { atom_name: String, symbol: char },
    #[error("Atom name is empty")]
    EmptyAtomName,
}

/// Looks up the covalent radius for a bare element symbol.
pub fn covalent_radius(symbol: char) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|(known, _)| *known == symbol)
        .map(|(_, radius)| *radius)
}

/// Resolves the covalent radius for an atom by its name.
///
/// The name's first character is matched against [`ELEMENTS`] in order,
/// first match wins (e.g. "CA", "CB", and "CG1" all resolve as carbon).
///
/// # Errors
///
/// Returns [`ElementError::UnknownElement`] when no entry matches, or
/// [`ElementError::EmptyAtomName`] for a blank name.
pub fn radius_for_atom_name(name: &str) -> Result<f64, ElementError> {
    let symbol = name
        .trim()
        .chars()
        .next()
        .ok_or(ElementError::EmptyAtomName)?;
    covalent_radius(symbol).ok_or_else(|| ElementError::UnknownElement {
        atom_name: name.to_string(),
        symbol,
    })
}
