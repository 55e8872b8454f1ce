use alloc::string::String;
use rand::Rng;

use crate::board::Board;
use crate::common::{AttackResult, BoardError};
use crate::coordinate::Coordinate;

/// One side of a match: an exclusively owned board plus attacks on an opponent.
#[derive(Debug)]
pub struct Combatant {
    name: String,
    board: Board,
    shots_fired: usize,
}

impl Combatant {
    /// Create a combatant with an empty, permissive board.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_board(name, Board::new())
    }

    pub fn with_board(name: impl Into<String>, board: Board) -> Self {
        Combatant {
            name: name.into(),
            board,
            shots_fired: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the own board, for vessel placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Number of attacks this combatant has made, repeats included.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Fire at `target` on the opponent's board.
    pub fn attack(&mut self, opponent: &mut Combatant, target: Coordinate) -> AttackResult {
        self.shots_fired += 1;
        let result = opponent.board.receive_attack(target);
        log::debug!("{} fires at {} on {}: {:?}", self.name, target, opponent.name, result);
        result
    }

    /// Textual form of [`Combatant::attack`]. An invalid coordinate is
    /// returned as an error and no shot is counted.
    pub fn attack_str(
        &mut self,
        opponent: &mut Combatant,
        target: &str,
    ) -> Result<AttackResult, BoardError> {
        let target: Coordinate = target.parse()?;
        Ok(self.attack(opponent, target))
    }

    /// A cell drawn uniformly from the whole grid, ignoring history.
    pub fn random_target<R: Rng + ?Sized>(rng: &mut R) -> Coordinate {
        Coordinate::random(rng)
    }

    /// Fire at a uniformly random cell and return the cell that was attacked.
    ///
    /// Already resolved cells may be targeted again.
    pub fn attack_random<R: Rng + ?Sized>(
        &mut self,
        opponent: &mut Combatant,
        rng: &mut R,
    ) -> Coordinate {
        let target = Self::random_target(rng);
        self.attack(opponent, target);
        target
    }

    /// True when every vessel on the own board is sunk.
    pub fn has_lost(&self) -> bool {
        self.board.all_vessels_sunk()
    }
}
