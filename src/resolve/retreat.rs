//! Retreat-phase resolution.
//!
//! Runs after an adjudication that dislodged units. Each dislodged unit
//! either relocates to a legal neighbouring province or disbands. Two
//! units retreating to the same province disband both — the collision is
//! resolved by rule, not by priority. Units given no choice disband.

use log::{debug, warn};

use crate::board::{GameState, Power, UnitKind};
use crate::map::{MapGraph, ProvinceId};

use super::movement::Outcome;

/// What a dislodged unit does with its retreat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetreatChoice {
    Move(ProvinceId),
    Disband,
}

/// A retreat decision for the dislodged unit formerly at `from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetreatOrder {
    pub power: Power,
    pub from: ProvinceId,
    pub choice: RetreatChoice,
}

/// The fate of one dislodged unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetreatOutcome {
    pub power: Power,
    pub from: ProvinceId,
    pub choice: RetreatChoice,
    pub outcome: Outcome,
}

/// Legal retreat destinations for the dislodged unit formerly at `from`:
/// adjacent provinces that are empty, can host the unit's kind, and are not
/// the origin of the attack that dislodged it.
pub fn legal_retreats(map: &MapGraph, state: &GameState, from: ProvinceId) -> Vec<ProvinceId> {
    let Some(d) = state.dislodgement_at(from) else {
        return Vec::new();
    };
    map.adjacent(from)
        .iter()
        .copied()
        .filter(|&p| {
            !state.occupied(p) && map.can_host(p, d.unit.kind) && p != d.attacker_from
        })
        .collect()
}

/// Resolves the retreat phase: applies every legal, uncontested retreat and
/// disbands the rest. Clears the dislodged set.
pub fn resolve_retreats(
    map: &MapGraph,
    state: &GameState,
    orders: &[RetreatOrder],
) -> (GameState, Vec<RetreatOutcome>) {
    let mut outcomes = Vec::new();
    let mut next = state.clone();

    // One decision per dislodged unit; unknown or foreign orders are noted
    // and otherwise ignored.
    let mut decided: Vec<Option<RetreatChoice>> = vec![None; map.province_count()];
    for order in orders {
        match state.dislodgement_at(order.from) {
            Some(d) if d.unit.owner == order.power && decided[order.from.index()].is_none() => {
                decided[order.from.index()] = Some(order.choice);
            }
            _ => {
                warn!(
                    "ignoring retreat order from {} for {}",
                    order.power,
                    map.name(order.from)
                );
                outcomes.push(RetreatOutcome {
                    power: order.power,
                    from: order.from,
                    choice: order.choice,
                    outcome: Outcome::Failed,
                });
            }
        }
    }

    // Validate each retreat against the legal destination set; an illegal
    // destination or a missing choice disbands the unit.
    struct Pending {
        power: Power,
        from: ProvinceId,
        kind: UnitKind,
        to: ProvinceId,
    }
    let mut pending: Vec<Pending> = Vec::new();
    let mut target_count = vec![0u8; map.province_count()];

    for (from, d) in state.dislodgements() {
        let choice = decided[from.index()];
        match choice {
            Some(RetreatChoice::Move(to)) if legal_retreats(map, state, from).contains(&to) => {
                target_count[to.index()] += 1;
                pending.push(Pending {
                    power: d.unit.owner,
                    from,
                    kind: d.unit.kind,
                    to,
                });
            }
            Some(RetreatChoice::Move(to)) => {
                debug!(
                    "illegal retreat {} -> {}: unit disbands",
                    map.name(from),
                    map.name(to)
                );
                outcomes.push(RetreatOutcome {
                    power: d.unit.owner,
                    from,
                    choice: RetreatChoice::Move(to),
                    outcome: Outcome::Failed,
                });
            }
            Some(RetreatChoice::Disband) | None => {
                outcomes.push(RetreatOutcome {
                    power: d.unit.owner,
                    from,
                    choice: RetreatChoice::Disband,
                    outcome: Outcome::Succeeded,
                });
            }
        }
    }

    // Collisions: every retreat sharing a destination disbands.
    for p in pending {
        if target_count[p.to.index()] > 1 {
            outcomes.push(RetreatOutcome {
                power: p.power,
                from: p.from,
                choice: RetreatChoice::Move(p.to),
                outcome: Outcome::Bounced,
            });
            continue;
        }
        let placed = next.place(map, p.to, crate::board::Unit::new(p.kind, p.power));
        debug_assert!(placed, "legal retreat destination was occupied");
        outcomes.push(RetreatOutcome {
            power: p.power,
            from: p.from,
            choice: RetreatChoice::Move(p.to),
            outcome: Outcome::Succeeded,
        });
    }

    next.clear_dislodgements();
    (next, outcomes)
}
