//! Entente: a turn-based Diplomacy adjudication engine.
//!
//! Seven powers submit secret orders each turn; the engine validates them,
//! resolves the whole set simultaneously — mutual support, convoyed
//! movement, head-to-head conflicts, dislodgement — and produces the next
//! board state plus a full per-order report. Retreats, Winter adjustments,
//! and victory detection round out the turn cycle.
//!
//! Transport, player policies, and negotiation are external: collaborators
//! feed `RawOrder` lists in and broadcast the `Snapshot` and
//! `ResolutionReport` that come back out.

pub mod board;
pub mod error;
pub mod game;
pub mod map;
pub mod order;
pub mod resolve;
pub mod snapshot;
pub mod validate;
pub mod victory;

pub use board::{Dislodgement, GameState, Power, Season, Unit, UnitKind, ALL_POWERS};
pub use error::{GameError, MapError, OrderError, SnapshotError};
pub use game::{Game, TurnPhase};
pub use map::{MapGraph, ProvinceId, Terrain};
pub use order::{Order, RawAction, RawOrder};
pub use resolve::{
    adjudicate, legal_retreats, resolve_adjustments, resolve_retreats, AdjustmentChoices,
    AdjustmentOutcome, BuildOrder, Outcome, ResolutionReport, RetreatChoice, RetreatOrder,
    RetreatOutcome,
};
pub use snapshot::{decode, encode, Snapshot};
pub use validate::{validate_orders, Rejection, TurnOrder, ValidatedOrders};
pub use victory::victor;
