//! Alternating turn invariant: Cross, Nought, Cross, ...

use super::Invariant;
use crate::games::ruleset::Ruleset;
use crate::games::types::Seed;
use crate::games::Game;

/// Invariant: Seeds alternate turns, Cross first.
///
/// While the game runs the side to move is the one after the last mover.
/// Once it is over the side to move stays with the last mover.
pub struct AlternatingTurnInvariant;

impl<R: Ruleset> Invariant<Game<R>> for AlternatingTurnInvariant {
    fn holds(game: &Game<R>) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.current_player() == Seed::Cross;
        };
        if first.seed != Seed::Cross {
            return false;
        }

        if history.windows(2).any(|w| w[0].seed == w[1].seed) {
            return false;
        }

        let last = history[history.len() - 1].seed;
        let expected = if game.is_over() { last } else { last.opponent() };
        game.current_player() == expected
    }

    fn description() -> &'static str {
        "Seeds alternate turns (Cross, Nought, Cross, ...)"
    }
}
