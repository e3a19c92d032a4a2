/// An unordered pair of atom indices linked by an inferred covalent bond.
///
/// Bonds exist purely for visualization (stick placement between spheres);
/// they never feed the physics constraint network, which is synthesized
/// independently by the constraint builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub a: usize, // Index of the first atom
    pub b: usize, // Index of the second atom
}

impl Bond {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    pub fn contains(&self, atom_index: usize) -> bool {
        self.a == atom_index || self.b == atom_index
    }
}

/// Classifies where in the network a constraint was emitted from.
///
/// The builder emits constraints per residue in exactly this order:
/// inter-residue links, intra-residue backbone, side-chain anchors, then
/// table-driven side-chain pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// Backbone link into the next residue (CA-CA', C-N', O-N').
    BackboneLink,
    /// Intra-residue backbone pair (N-CA, CA-C, CA-O, C-O).
    Backbone,
    /// Side-chain attachment to the backbone (CA-CB, N-CB).
    SidechainAnchor,
    /// Pair from the per-residue topology table.
    Sidechain,
}

/// A rigid distance constraint between two atoms.
///
/// `rest_length` is frozen at construction time to the Euclidean distance
/// between the two atoms' source positions; it is never a canonical bond
/// length. Already-distorted input geometry is preserved, not corrected.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub a: usize,
    pub b: usize,
    pub rest_length: f64,
    pub kind: ConstraintKind,
}

impl Constraint {
    pub fn new(a: usize, b: usize, rest_length: f64, kind: ConstraintKind) -> Self {
        Self {
            a,
            b,
            rest_length,
            kind,
        }
    }

    pub fn contains(&self, atom_index: usize) -> bool {
        self.a == atom_index || self.b == atom_index
    }
}
