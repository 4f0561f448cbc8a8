use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What one catch amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    /// Below the goal; keep catching.
    Progress,
    /// This catch hit the goal. Fires exactly once per round.
    GoalReached,
    /// The goal was already hit; the round is waiting for its reset.
    AlreadyWon,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatchGameError {
    #[error("the goal must be at least one catch")]
    ZeroGoal,
}

/// Counter for the catch-the-hearts game.
///
/// The counter holds at the goal until [`CatchGame::reset`], so catches that
/// land while the celebration is pending cannot re-arm it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CatchGame {
    caught: u32,
    goal: u32,
}

impl CatchGame {
    pub fn new(goal: u32) -> Result<Self, CatchGameError> {
        if goal == 0 {
            return Err(CatchGameError::ZeroGoal);
        }
        Ok(CatchGame { caught: 0, goal })
    }

    /// Records one catch.
    pub fn catch(&mut self) -> CatchOutcome {
        if self.caught >= self.goal {
            return CatchOutcome::AlreadyWon;
        }
        self.caught += 1;
        if self.caught == self.goal {
            CatchOutcome::GoalReached
        } else {
            CatchOutcome::Progress
        }
    }

    /// Starts the next round from zero.
    pub fn reset(&mut self) {
        self.caught = 0;
    }

    pub fn caught(&self) -> u32 {
        self.caught
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cannot_create_a_game_with_zero_goal() {
        assert_eq!(CatchGame::new(0), Err(CatchGameError::ZeroGoal));
    }

    #[test]
    fn counter_reaches_the_goal_after_exactly_goal_catches() {
        let mut game = CatchGame::new(3).unwrap();

        assert_eq!(game.catch(), CatchOutcome::Progress);
        assert_eq!(game.catch(), CatchOutcome::Progress);
        assert_eq!(game.catch(), CatchOutcome::GoalReached);
        assert_eq!(game.caught(), 3);
    }

    #[test]
    fn goal_fires_exactly_once_per_round() {
        let mut game = CatchGame::new(3).unwrap();
        game.catch();
        game.catch();
        game.catch();

        // Catches landing while the celebration is pending hold the counter.
        assert_eq!(game.catch(), CatchOutcome::AlreadyWon);
        assert_eq!(game.catch(), CatchOutcome::AlreadyWon);
        assert_eq!(game.caught(), 3);
    }

    #[test]
    fn reset_starts_the_next_round_from_zero() {
        let mut game = CatchGame::new(3).unwrap();
        game.catch();
        game.catch();
        game.catch();

        game.reset();

        assert_eq!(game.caught(), 0);
        assert_eq!(game.catch(), CatchOutcome::Progress);
    }

    #[test]
    fn goal_of_one_celebrates_on_the_first_catch() {
        let mut game = CatchGame::new(1).unwrap();

        assert_eq!(game.catch(), CatchOutcome::GoalReached);
    }
}
