//! Typed errors for every fallible seam of the engine.
//!
//! Map construction problems are configuration errors and surface before a
//! game starts; order problems are per-order and recoverable (the unit
//! defaults to Hold); snapshot problems come from malformed wire data.

use thiserror::Error;

/// A problem in the province definition table. Raised by `MapGraph::build`;
/// a game must not start from a table that produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("province '{0}' is defined more than once")]
    DuplicateProvince(String),

    #[error("province '{from}' lists unknown neighbour '{to}'")]
    UnknownNeighbour { from: String, to: String },

    #[error("adjacency is asymmetric: '{from}' lists '{to}' but not the reverse")]
    AsymmetricAdjacency { from: String, to: String },

    #[error("province '{0}' lists itself as a neighbour")]
    SelfAdjacency(String),
}

/// Why a submitted order was rejected. Every rejection is reported back to
/// the caller; the affected unit falls back to Hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("malformed order: {0}")]
    Malformed(String),

    #[error("unknown order kind '{0}'")]
    UnknownKind(String),

    #[error("unknown territory '{0}'")]
    UnknownTerritory(String),

    #[error("no unit at '{0}'")]
    NoUnit(String),

    #[error("unit at '{location}' belongs to {owner}, not {claimed}")]
    ForeignUnit {
        location: String,
        owner: String,
        claimed: String,
    },

    #[error("unit at '{0}' already has an order this turn")]
    DuplicateOrder(String),

    #[error("'{target}' is not adjacent to '{origin}'")]
    NotAdjacent { origin: String, target: String },

    #[error("a {kind} cannot enter '{target}'")]
    TerrainMismatch { kind: String, target: String },

    #[error("no convoy chain of fleets connects '{from}' to '{to}'")]
    NoConvoyChain { from: String, to: String },

    #[error("support from '{origin}' cannot reach '{target}'")]
    UnreachableSupport { origin: String, target: String },

    #[error("convoying unit at '{0}' is not a fleet in a sea province")]
    NotAConvoyFleet(String),

    #[error("convoy endpoint '{0}' is not coastal")]
    ConvoyEndpointNotCoastal(String),
}

/// A problem decoding a state snapshot from the wire format.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("unknown season code '{0}'")]
    UnknownSeason(String),

    #[error("unknown power abbreviation '{0}'")]
    UnknownPower(String),

    #[error("unknown province name '{0}'")]
    UnknownProvince(String),

    #[error("bad unit code '{code}' for '{province}'")]
    BadUnitCode { province: String, code: String },

    #[error("unit cannot stand in '{0}'")]
    BadPlacement(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A misuse of the turn state machine by the surrounding system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("operation requires the {expected} phase but the game is in {actual}")]
    WrongPhase { expected: String, actual: String },

    #[error("power '{0}' has already submitted orders this turn")]
    AlreadySubmitted(String),
}
