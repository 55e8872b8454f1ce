//! Match loop: two combatants trade uniformly random attacks until a fleet
//! is gone.

use alloc::vec::Vec;
use rand::Rng;

use crate::combatant::Combatant;
use crate::common::AttackResult;
use crate::coordinate::Coordinate;

/// Which combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Attacks first in every round.
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Outcome {
    Winner(Side),
    Draw,
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Finished(Outcome),
}

impl MatchStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchStatus::Finished(_))
    }
}

/// When fleets are checked for a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum Resolution {
    /// After every single attack. The second combatant does not fire once
    /// its own fleet is gone, so fleets can only sink together when they
    /// start out empty.
    PerAttack,
    /// Only after both combatants have fired in a round.
    PerRound,
}

/// Verdict when both fleets are found sunk at the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum SimultaneousLoss {
    Draw,
    FirstAttackerWins,
    SecondAttackerWins,
}

impl SimultaneousLoss {
    fn outcome(self) -> Outcome {
        match self {
            SimultaneousLoss::Draw => Outcome::Draw,
            SimultaneousLoss::FirstAttackerWins => Outcome::Winner(Side::First),
            SimultaneousLoss::SecondAttackerWins => Outcome::Winner(Side::Second),
        }
    }
}

/// Rules for the match loop.
///
/// `Default` is full rounds with a draw on double sinking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchConfig {
    pub resolution: Resolution,
    pub simultaneous_loss: SimultaneousLoss,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            resolution: Resolution::PerRound,
            simultaneous_loss: SimultaneousLoss::Draw,
        }
    }
}

/// One attack made during a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub round: usize,
    pub attacker: Side,
    pub target: Coordinate,
    pub result: AttackResult,
}

/// Two combatants and the state of the contest between them.
#[derive(Debug)]
pub struct Match {
    first: Combatant,
    second: Combatant,
    config: MatchConfig,
    status: MatchStatus,
    rounds: usize,
    history: Vec<Shot>,
}

impl Match {
    /// Start a match between two combatants whose fleets are already placed.
    ///
    /// Fleets are checked immediately, so a combatant with no vessels has
    /// already lost.
    pub fn new(first: Combatant, second: Combatant, config: MatchConfig) -> Self {
        let mut m = Match {
            first,
            second,
            config,
            status: MatchStatus::InProgress,
            rounds: 0,
            history: Vec::new(),
        };
        m.evaluate();
        m
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Number of rounds started so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Every attack made, in order.
    pub fn history(&self) -> &[Shot] {
        &self.history
    }

    pub fn first(&self) -> &Combatant {
        &self.first
    }

    pub fn second(&self) -> &Combatant {
        &self.second
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// Play one round: the first combatant fires, then the second.
    /// Does nothing once the match is finished.
    pub fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MatchStatus {
        if self.status.is_finished() {
            return self.status;
        }
        self.rounds += 1;

        self.fire(Side::First, rng);
        if self.config.resolution == Resolution::PerAttack && self.evaluate().is_finished() {
            return self.status;
        }
        self.fire(Side::Second, rng);
        self.evaluate()
    }

    /// Play rounds until one fleet is sunk.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        loop {
            if let MatchStatus::Finished(outcome) = self.play_round(rng) {
                return outcome;
            }
        }
    }

    fn fire<R: Rng + ?Sized>(&mut self, attacker: Side, rng: &mut R) {
        let target = Combatant::random_target(rng);
        let result = match attacker {
            Side::First => self.first.attack(&mut self.second, target),
            Side::Second => self.second.attack(&mut self.first, target),
        };
        self.history.push(Shot {
            round: self.rounds,
            attacker,
            target,
            result,
        });
    }

    fn evaluate(&mut self) -> MatchStatus {
        let outcome = match (self.first.has_lost(), self.second.has_lost()) {
            (false, false) => return self.status,
            (true, false) => Outcome::Winner(Side::Second),
            (false, true) => Outcome::Winner(Side::First),
            (true, true) => self.config.simultaneous_loss.outcome(),
        };
        log::info!(
            "match finished after {} rounds: {:?} ({} vs {})",
            self.rounds,
            outcome,
            self.first.name(),
            self.second.name()
        );
        self.status = MatchStatus::Finished(outcome);
        self.status
    }
}
