//! Common types: board errors, attack results and tile states.

/// Result of an attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackResult {
    /// The attacked tile holds a vessel segment.
    Hit,
    /// The attacked tile is open water.
    Miss,
}

impl AttackResult {
    pub fn is_hit(self) -> bool {
        matches!(self, AttackResult::Hit)
    }
}

/// What a viewer of the board may know about a tile.
///
/// Tiles holding an untouched vessel segment read as `Hidden`; the board
/// never leaks placement through this query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TileState {
    Hidden,
    Hit,
    Miss,
    /// The queried coordinate is not on the board.
    OutOfBounds,
}

/// Errors returned by coordinate parsing, placement and attacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Malformed coordinate text or indices outside the grid.
    InvalidCoordinate,
    /// Unrecognized vessel kind identifier.
    InvalidVesselKind,
    /// Unrecognized orientation identifier.
    InvalidOrientation,
    /// Placement would extend past the edge of the grid.
    OutOfBounds,
    /// Placement would cover a cell already holding a vessel.
    Overlap,
    /// Placement would cover open water that has already been attacked.
    TileAlreadyAttacked,
    /// Placement attempted on a locked board after combat began.
    PlacementClosed,
    /// Random placement could not find a free spot.
    UnableToPlaceVessel,
}

impl BoardError {
    /// Boundary overflow, overlap and attacked water are all placement conflicts.
    pub fn is_placement_conflict(&self) -> bool {
        matches!(
            self,
            BoardError::OutOfBounds | BoardError::Overlap | BoardError::TileAlreadyAttacked
        )
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidCoordinate => {
                write!(f, "Invalid coordinate - expected a letter A-J and a number 1-10")
            }
            BoardError::InvalidVesselKind => write!(f, "Unknown vessel kind"),
            BoardError::InvalidOrientation => {
                write!(f, "Unknown orientation - expected horizontal or vertical")
            }
            BoardError::OutOfBounds => write!(f, "Vessel placement is out of bounds"),
            BoardError::Overlap => write!(f, "Vessel placement overlaps with another vessel"),
            BoardError::TileAlreadyAttacked => {
                write!(f, "Vessel placement covers a tile that was already attacked")
            }
            BoardError::PlacementClosed => {
                write!(f, "Vessels cannot be placed once combat has started")
            }
            BoardError::UnableToPlaceVessel => write!(f, "Unable to place vessel"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
