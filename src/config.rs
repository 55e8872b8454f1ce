use crate::vessel::VesselKind;

/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;

/// Row labels, indexed by zero-based row.
pub const ROW_LABELS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

pub const FLEET_SIZE: usize = 5;

/// One of each kind, largest first (1990 Milton Bradley rules).
pub const STANDARD_FLEET: [VesselKind; FLEET_SIZE] = [
    VesselKind::Carrier,
    VesselKind::Battleship,
    VesselKind::Cruiser,
    VesselKind::Submarine,
    VesselKind::Destroyer,
];

/// Total number of cells occupied by the standard fleet.
pub const STANDARD_FLEET_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Attempts made by random placement before giving up on a single vessel.
pub const PLACEMENT_ATTEMPTS: usize = 100;
