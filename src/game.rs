//! The turn state machine and order-submission barrier.
//!
//! `Game` owns the map and the current state and walks the phase diagram:
//! orders are collected per power until every power has submitted (or the
//! surrounding system declares a timeout), the turn is adjudicated, retreats
//! run if anything was dislodged, and Winter runs the adjustment phase.
//! Powers that never submitted contribute Hold orders for all their units —
//! a missing or disconnected player slows nobody down.
//!
//! Every transition goes through the pure resolvers in `resolve`; `Game`
//! replaces its state value wholesale and never exposes a half-resolved
//! turn.

use std::collections::BTreeMap;

use log::{info, warn};

use crate::board::{GameState, Power, Season, ALL_POWERS};
use crate::error::{GameError, MapError};
use crate::map::MapGraph;
use crate::order::RawOrder;
use crate::resolve::{
    adjudicate, resolve_adjustments, resolve_retreats, AdjustmentChoices, AdjustmentOutcome,
    ResolutionReport, RetreatOrder, RetreatOutcome,
};
use crate::snapshot::{encode, Snapshot};
use crate::validate::validate_orders;
use crate::victory::victor;

/// Where the game stands in the turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Collecting movement orders for the current season.
    AwaitingOrders,
    /// Dislodged units need retreat decisions.
    AwaitingRetreats,
    /// Winter: builds and disbands.
    Adjustment,
}

impl TurnPhase {
    pub const fn name(self) -> &'static str {
        match self {
            TurnPhase::AwaitingOrders => "movement",
            TurnPhase::AwaitingRetreats => "retreat",
            TurnPhase::Adjustment => "adjustment",
        }
    }
}

/// A running game.
pub struct Game {
    map: MapGraph,
    state: GameState,
    phase: TurnPhase,
    pending: BTreeMap<Power, Vec<RawOrder>>,
}

impl Game {
    /// Starts a new game on the standard board at Spring 1901.
    pub fn new() -> Result<Game, MapError> {
        let map = MapGraph::standard()?;
        let state = GameState::opening(&map);
        Ok(Game {
            map,
            state,
            phase: TurnPhase::AwaitingOrders,
            pending: BTreeMap::new(),
        })
    }

    /// Resumes a game from a decoded state. The phase is inferred: pending
    /// dislodgements mean retreats, Winter means adjustment.
    pub fn from_state(map: MapGraph, state: GameState) -> Game {
        let phase = if state.has_dislodgements() {
            TurnPhase::AwaitingRetreats
        } else if state.season == Season::Winter {
            TurnPhase::Adjustment
        } else {
            TurnPhase::AwaitingOrders
        };
        Game {
            map,
            state,
            phase,
            pending: BTreeMap::new(),
        }
    }

    pub fn map(&self) -> &MapGraph {
        &self.map
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Renders the current state in the wire format.
    pub fn snapshot(&self) -> Snapshot {
        encode(&self.map, &self.state)
    }

    /// The winner, if any power holds a strict majority of supply centers.
    pub fn victor(&self) -> Option<Power> {
        victor(&self.map, &self.state)
    }

    fn expect_phase(&self, expected: TurnPhase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected: expected.name().to_string(),
                actual: self.phase.name().to_string(),
            });
        }
        Ok(())
    }

    /// Accepts one power's order list for the current movement turn.
    /// Returns true once every power with units has submitted.
    pub fn submit_orders(
        &mut self,
        power: Power,
        orders: Vec<RawOrder>,
    ) -> Result<bool, GameError> {
        self.expect_phase(TurnPhase::AwaitingOrders)?;
        if self.pending.contains_key(&power) {
            return Err(GameError::AlreadySubmitted(power.name().to_string()));
        }
        self.pending.insert(power, orders);
        Ok(self.all_orders_received())
    }

    /// True when every power that still has units has submitted.
    pub fn all_orders_received(&self) -> bool {
        ALL_POWERS
            .iter()
            .filter(|&&p| self.state.unit_count(p) > 0)
            .all(|p| self.pending.contains_key(p))
    }

    /// Adjudicates the current movement turn with whatever has been
    /// submitted. Call on completeness or on timeout; powers that did not
    /// submit hold everywhere. Advances the phase.
    pub fn resolve_movement(&mut self) -> Result<ResolutionReport, GameError> {
        self.expect_phase(TurnPhase::AwaitingOrders)?;

        for &power in &ALL_POWERS {
            if self.state.unit_count(power) > 0 && !self.pending.contains_key(&power) {
                warn!("{power} submitted nothing; all its units hold");
            }
        }

        let submissions: Vec<(Power, Vec<RawOrder>)> = self
            .pending
            .iter()
            .map(|(p, o)| (*p, o.clone()))
            .collect();
        self.pending.clear();

        let validated = validate_orders(&self.map, &self.state, &submissions);
        let (next, report) = adjudicate(&self.map, &self.state, &validated);
        self.state = next;

        if self.state.has_dislodgements() {
            self.phase = TurnPhase::AwaitingRetreats;
        } else {
            self.advance_season();
        }
        info!(
            "{} {} resolved; now in {} phase",
            self.state.year,
            self.state.season.name(),
            self.phase.name()
        );
        Ok(report)
    }

    /// Resolves the retreat phase with the supplied choices and advances.
    pub fn resolve_retreats(
        &mut self,
        choices: &[RetreatOrder],
    ) -> Result<Vec<RetreatOutcome>, GameError> {
        self.expect_phase(TurnPhase::AwaitingRetreats)?;
        let (next, outcomes) = resolve_retreats(&self.map, &self.state, choices);
        self.state = next;
        self.advance_season();
        Ok(outcomes)
    }

    /// Resolves the Winter adjustment phase and opens the next year.
    pub fn resolve_adjustments(
        &mut self,
        choices: &[(Power, AdjustmentChoices)],
    ) -> Result<Vec<AdjustmentOutcome>, GameError> {
        self.expect_phase(TurnPhase::Adjustment)?;
        let (next, outcomes) = resolve_adjustments(&self.map, &self.state, choices);
        self.state = next;
        self.state.year += 1;
        self.state.season = Season::Spring;
        self.phase = TurnPhase::AwaitingOrders;
        info!("adjustments done; {} Spring begins", self.state.year);
        Ok(outcomes)
    }

    /// Moves from the just-resolved season into the next collection phase:
    /// Spring flows into Fall, Fall into the Winter adjustment.
    fn advance_season(&mut self) {
        match self.state.season {
            Season::Spring => {
                self.state.season = Season::Fall;
                self.phase = TurnPhase::AwaitingOrders;
            }
            Season::Fall => {
                self.state.season = Season::Winter;
                self.phase = TurnPhase::Adjustment;
            }
            Season::Winter => {
                // Winter is left via resolve_adjustments.
                self.phase = TurnPhase::Adjustment;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_opens_at_spring_1901() {
        let game = Game::new().unwrap();
        assert_eq!(game.state().year, 1901);
        assert_eq!(game.state().season, Season::Spring);
        assert_eq!(game.phase(), TurnPhase::AwaitingOrders);
        assert_eq!(game.victor(), None);
    }

    #[test]
    fn submission_barrier_tracks_all_powers() {
        let mut game = Game::new().unwrap();
        assert!(!game.all_orders_received());
        for (i, &power) in ALL_POWERS.iter().enumerate() {
            let done = game.submit_orders(power, vec![]).unwrap();
            assert_eq!(done, i == ALL_POWERS.len() - 1);
        }
        assert!(game.all_orders_received());
    }

    #[test]
    fn double_submission_is_rejected() {
        let mut game = Game::new().unwrap();
        game.submit_orders(Power::France, vec![]).unwrap();
        let err = game.submit_orders(Power::France, vec![]).unwrap_err();
        assert!(matches!(err, GameError::AlreadySubmitted(_)));
    }

    #[test]
    fn timeout_defaults_to_holds() {
        let mut game = Game::new().unwrap();
        // Nobody submits; resolution still works and nothing moves.
        let report = game.resolve_movement().unwrap();
        assert_eq!(report.orders.len(), 22);
        assert!(report.dislodged.is_empty());
        assert_eq!(game.state().season, Season::Fall);
        assert_eq!(game.phase(), TurnPhase::AwaitingOrders);
    }

    #[test]
    fn season_cycle_through_a_quiet_year() {
        let mut game = Game::new().unwrap();
        game.resolve_movement().unwrap(); // Spring -> Fall
        assert_eq!(game.state().season, Season::Fall);
        game.resolve_movement().unwrap(); // Fall -> Winter adjustment
        assert_eq!(game.state().season, Season::Winter);
        assert_eq!(game.phase(), TurnPhase::Adjustment);
        game.resolve_adjustments(&[]).unwrap(); // Winter -> next Spring
        assert_eq!(game.state().year, 1902);
        assert_eq!(game.state().season, Season::Spring);
        assert_eq!(game.phase(), TurnPhase::AwaitingOrders);
    }

    #[test]
    fn wrong_phase_is_reported() {
        let mut game = Game::new().unwrap();
        let err = game.resolve_adjustments(&[]).unwrap_err();
        assert!(matches!(err, GameError::WrongPhase { .. }));
        let err = game.resolve_retreats(&[]).unwrap_err();
        assert!(matches!(err, GameError::WrongPhase { .. }));
    }

    #[test]
    fn movement_with_dislodgement_enters_retreat_phase() {
        let mut game = Game::new().unwrap();
        // Spring: Austria walks Vienna into Tyrolia to set up the Fall attack.
        game.submit_orders(Power::Austria, vec![RawOrder::mv("Vienna", "Tyrolia")])
            .unwrap();
        game.resolve_movement().unwrap();
        assert_eq!(game.phase(), TurnPhase::AwaitingOrders);

        // Fall: Trieste takes Venice with Tyrolia's support; Italy holds.
        game.submit_orders(
            Power::Austria,
            vec![
                RawOrder::mv("Trieste", "Venice"),
                RawOrder::support_move("Tyrolia", "Trieste", "Venice"),
            ],
        )
        .unwrap();
        let report = game.resolve_movement().unwrap();
        assert_eq!(report.dislodged.len(), 1);
        assert_eq!(game.phase(), TurnPhase::AwaitingRetreats);

        // Italy lets the dislodged army disband.
        let outcomes = game.resolve_retreats(&[]).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(game.state().season, Season::Winter);
        assert_eq!(game.phase(), TurnPhase::Adjustment);
    }

    #[test]
    fn from_state_infers_phase() {
        let map = MapGraph::standard().unwrap();
        let mut state = GameState::opening(&map);
        state.season = Season::Winter;
        let game = Game::from_state(map, state);
        assert_eq!(game.phase(), TurnPhase::Adjustment);
    }
}
