//! Game board state: tile grid, placed vessels and attack resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{AttackResult, BoardError, TileState};
use crate::config::{BOARD_SIZE, PLACEMENT_ATTEMPTS};
use crate::coordinate::Coordinate;
use crate::vessel::{Orientation, Vessel, VesselKind};

/// Identifier of a vessel placed on a particular board.
///
/// Ids are handed out by each board from its own counter, starting at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct VesselId(usize);

impl VesselId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VesselId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Internal tile contents. Vessel segments are back-references into the
/// board's vessel arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Hidden,
    ShipPresent { vessel: VesselId, segment: usize },
    Miss,
    Hit { vessel: VesselId, segment: usize },
}

/// Lifecycle of a board. The first incoming attack ends setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Combat,
}

/// A vessel together with where it sits on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedVessel {
    id: VesselId,
    vessel: Vessel,
    origin: Coordinate,
    orientation: Orientation,
    cells: Vec<Coordinate>,
}

impl PlacedVessel {
    pub fn id(&self) -> VesselId {
        self.id
    }

    pub fn vessel(&self) -> &Vessel {
        &self.vessel
    }

    pub fn kind(&self) -> VesselKind {
        self.vessel.kind()
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupied cells, ordered by segment index.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn is_sunk(&self) -> bool {
        self.vessel.is_sunk()
    }
}

/// A 10×10 grid and the fleet placed on it.
pub struct Board {
    tiles: [[Tile; BOARD_SIZE]; BOARD_SIZE],
    vessels: Vec<PlacedVessel>,
    next_id: usize,
    phase: Phase,
    placement_lock: bool,
}

impl Board {
    /// Create an empty board. Placement stays open after attacks begin.
    pub fn new() -> Self {
        Board {
            tiles: [[Tile::Hidden; BOARD_SIZE]; BOARD_SIZE],
            vessels: Vec::new(),
            next_id: 0,
            phase: Phase::Setup,
            placement_lock: false,
        }
    }

    /// Create an empty board that rejects placement once it has been attacked.
    pub fn with_placement_lock() -> Self {
        Board {
            placement_lock: true,
            ..Board::new()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_placement_locked(&self) -> bool {
        self.placement_lock
    }

    /// Cells a vessel of `length` would cover from `origin`, or an error if it
    /// runs off the grid, crosses another vessel or covers attacked water.
    fn footprint(
        &self,
        length: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Vec<Coordinate>, BoardError> {
        let mut cells = Vec::with_capacity(length);
        for step in 0..length {
            let cell = origin
                .offset(orientation, step)
                .ok_or(BoardError::OutOfBounds)?;
            cells.push(cell);
        }
        for cell in &cells {
            match self.tile(*cell) {
                Tile::Hidden => {}
                // a miss marker is never overwritten
                Tile::Miss => return Err(BoardError::TileAlreadyAttacked),
                Tile::ShipPresent { .. } | Tile::Hit { .. } => return Err(BoardError::Overlap),
            }
        }
        Ok(cells)
    }

    /// Place a vessel of `kind` at `origin`, extending along `orientation`.
    ///
    /// All checks run before anything is written: on error the board is
    /// unchanged.
    pub fn place_vessel(
        &mut self,
        kind: VesselKind,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<VesselId, BoardError> {
        if self.placement_lock && self.phase == Phase::Combat {
            return Err(BoardError::PlacementClosed);
        }
        let vessel = Vessel::new(kind);
        let cells = self.footprint(vessel.length(), origin, orientation)?;

        let id = VesselId(self.next_id);
        self.next_id += 1;
        for (segment, cell) in cells.iter().enumerate() {
            self.tiles[cell.row()][cell.col()] = Tile::ShipPresent { vessel: id, segment };
        }
        log::debug!("placed {} {} at {} {}", kind, id, origin, orientation);
        self.vessels.push(PlacedVessel {
            id,
            vessel,
            origin,
            orientation,
            cells,
        });
        Ok(id)
    }

    /// Textual form of [`Board::place_vessel`], e.g. `("cruiser", "C5", "horizontal")`.
    ///
    /// Validates the origin, then the orientation, then the kind.
    pub fn place_vessel_str(
        &mut self,
        kind: &str,
        origin: &str,
        orientation: &str,
    ) -> Result<VesselId, BoardError> {
        let origin: Coordinate = origin.parse()?;
        let orientation: Orientation = orientation.parse()?;
        let kind: VesselKind = kind.parse()?;
        self.place_vessel(kind, origin, orientation)
    }

    /// Returns a random legal (origin, orientation) for a vessel of `kind`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: VesselKind,
    ) -> Result<(Coordinate, Orientation), BoardError> {
        let span = BOARD_SIZE - kind.length();
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (BOARD_SIZE - 1, span),
                Orientation::Vertical => (span, BOARD_SIZE - 1),
            };
            let origin = Coordinate::new(
                rng.random_range(0..=max_r),
                rng.random_range(0..=max_c),
            )?;
            if self.footprint(kind.length(), origin, orientation).is_ok() {
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::UnableToPlaceVessel)
    }

    /// Place every kind in `fleet` at random, in order.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[VesselKind],
    ) -> Result<Vec<VesselId>, BoardError> {
        let mut ids = Vec::with_capacity(fleet.len());
        for &kind in fleet {
            let (origin, orientation) = self.random_placement(rng, kind)?;
            ids.push(self.place_vessel(kind, origin, orientation)?);
        }
        Ok(ids)
    }

    /// Resolve an attack at `target`.
    ///
    /// Attacking an already resolved tile reports the same result again and
    /// does no further damage.
    pub fn receive_attack(&mut self, target: Coordinate) -> AttackResult {
        self.phase = Phase::Combat;
        let tile = &mut self.tiles[target.row()][target.col()];
        let result = match *tile {
            Tile::Miss => AttackResult::Miss,
            Tile::Hit { .. } => AttackResult::Hit,
            Tile::Hidden => {
                *tile = Tile::Miss;
                AttackResult::Miss
            }
            Tile::ShipPresent { vessel, segment } => {
                *tile = Tile::Hit { vessel, segment };
                let placed = &mut self.vessels[vessel.index()];
                placed.vessel.hit(segment);
                if placed.is_sunk() {
                    log::info!("{} {} sunk by attack at {}", placed.kind(), vessel, target);
                }
                AttackResult::Hit
            }
        };
        log::trace!("attack at {} -> {:?}", target, result);
        result
    }

    /// Textual form of [`Board::receive_attack`]. Invalid coordinates are
    /// rejected without touching the board.
    pub fn receive_attack_str(&mut self, target: &str) -> Result<AttackResult, BoardError> {
        let target: Coordinate = target.parse()?;
        Ok(self.receive_attack(target))
    }

    fn tile(&self, at: Coordinate) -> Tile {
        self.tiles[at.row()][at.col()]
    }

    /// Visible state of the tile at `at`.
    pub fn tile_state(&self, at: Coordinate) -> TileState {
        match self.tile(at) {
            Tile::Hidden | Tile::ShipPresent { .. } => TileState::Hidden,
            Tile::Miss => TileState::Miss,
            Tile::Hit { .. } => TileState::Hit,
        }
    }

    /// Textual form of [`Board::tile_state`]; returns `OutOfBounds` for text
    /// that is not a coordinate on this board.
    pub fn tile_state_str(&self, at: &str) -> TileState {
        match at.parse::<Coordinate>() {
            Ok(at) => self.tile_state(at),
            Err(_) => TileState::OutOfBounds,
        }
    }

    /// True when every placed vessel is sunk. Vacuously true with no vessels.
    pub fn all_vessels_sunk(&self) -> bool {
        self.vessels.iter().all(PlacedVessel::is_sunk)
    }

    pub fn vessel(&self, id: VesselId) -> Option<&PlacedVessel> {
        self.vessels.get(id.index())
    }

    /// The vessel occupying `at`, hit or not.
    pub fn vessel_at(&self, at: Coordinate) -> Option<&PlacedVessel> {
        match self.tile(at) {
            Tile::ShipPresent { vessel, .. } | Tile::Hit { vessel, .. } => self.vessel(vessel),
            Tile::Hidden | Tile::Miss => None,
        }
    }

    /// Placed vessels in placement order.
    pub fn vessels(&self) -> &[PlacedVessel] {
        &self.vessels
    }

    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    /// Number of vessels not yet sunk.
    pub fn vessels_afloat(&self) -> usize {
        self.vessels.iter().filter(|v| !v.is_sunk()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("phase", &self.phase)
            .field("placement_lock", &self.placement_lock)
            .field("vessels", &self.vessels)
            .finish()
    }
}
