//! Phase resolution: movement adjudication, retreats, and winter
//! adjustments. Every resolver is a pure transition from a state and a set
//! of decisions to the next state plus a report.

pub mod adjust;
pub mod movement;
pub mod retreat;

pub use adjust::{
    resolve_adjustments, AdjustmentAction, AdjustmentChoices, AdjustmentOutcome, BuildOrder,
};
pub use movement::{adjudicate, OrderOutcome, Outcome, ResolutionReport};
pub use retreat::{legal_retreats, resolve_retreats, RetreatChoice, RetreatOrder, RetreatOutcome};
