//! Commonly used types for ease of import.

pub use crate::{
    AttackResult, Board, BoardError, Combatant, Coordinate, Match, MatchConfig, MatchStatus,
    Orientation, Outcome, Side, TileState, VesselKind, STANDARD_FLEET,
};
