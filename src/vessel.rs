//! Vessel kinds, orientations and per-segment damage tracking.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;

/// Axis along which a vessel extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Increasing column number.
    Horizontal,
    /// Increasing row letter.
    Vertical,
}

impl Orientation {
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

impl FromStr for Orientation {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("horizontal") {
            Ok(Orientation::Horizontal)
        } else if s.eq_ignore_ascii_case("vertical") {
            Ok(Orientation::Vertical)
        } else {
            Err(BoardError::InvalidOrientation)
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The five recognized vessel types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum VesselKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

/// (kind, identifier, length) lookup table.
const KIND_TABLE: [(VesselKind, &str, usize); 5] = [
    (VesselKind::Carrier, "carrier", 5),
    (VesselKind::Battleship, "battleship", 4),
    (VesselKind::Cruiser, "cruiser", 3),
    (VesselKind::Submarine, "submarine", 3),
    (VesselKind::Destroyer, "destroyer", 2),
];

impl VesselKind {
    pub const ALL: [VesselKind; 5] = [
        VesselKind::Carrier,
        VesselKind::Battleship,
        VesselKind::Cruiser,
        VesselKind::Submarine,
        VesselKind::Destroyer,
    ];

    /// Number of cells the vessel occupies.
    pub const fn length(self) -> usize {
        KIND_TABLE[self as usize].2
    }

    /// Lower-case identifier, e.g. `"cruiser"`.
    pub const fn name(self) -> &'static str {
        KIND_TABLE[self as usize].1
    }
}

impl FromStr for VesselKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_TABLE
            .iter()
            .find(|(_, name, _)| name.eq_ignore_ascii_case(s))
            .map(|(kind, _, _)| *kind)
            .ok_or(BoardError::InvalidVesselKind)
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A vessel with one damage flag per segment.
///
/// The length is fixed by the kind; damage only ever goes from `false` to
/// `true`, so once sunk a vessel stays sunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vessel {
    kind: VesselKind,
    damage: Vec<bool>,
}

impl Vessel {
    /// Create an undamaged vessel of `kind`.
    pub fn new(kind: VesselKind) -> Self {
        Vessel {
            kind,
            damage: vec![false; kind.length()],
        }
    }

    /// Create an undamaged vessel from its textual kind identifier.
    pub fn from_name(kind: &str) -> Result<Self, BoardError> {
        Ok(Vessel::new(kind.parse()?))
    }

    /// Mark `segment` as damaged. Out-of-range segments are ignored.
    pub fn hit(&mut self, segment: usize) {
        if let Some(cell) = self.damage.get_mut(segment) {
            *cell = true;
        }
    }

    /// True once every segment is damaged.
    pub fn is_sunk(&self) -> bool {
        self.damage.iter().all(|&d| d)
    }

    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.damage.len()
    }

    /// Per-segment damage, ordered from the origin outward.
    pub fn damage(&self) -> &[bool] {
        &self.damage
    }

    /// Number of damaged segments.
    pub fn hits_taken(&self) -> usize {
        self.damage.iter().filter(|&&d| d).count()
    }
}
