//! Movement-phase adjudication.
//!
//! Turns one turn's validated order set into outcomes, dislodgements, and
//! the committed next state. Support cutting, convoy validity, and move
//! success depend on one another, so the resolver iterates the three to a
//! fixed point: each pass recomputes strengths from the surviving supports,
//! resolves every contested province, re-derives the cut set from the moves
//! that actually succeeded, and re-checks convoy chains against the fleets
//! dislodged so far. The loop is bounded; if it fails to settle (the convoy
//! disruption paradox), the convoyed moves still in flux are adjudged
//! failures and one final settling run decides the rest.

use log::debug;

use crate::board::{Dislodgement, GameState, Power, UnitKind};
use crate::map::{MapGraph, ProvinceId};
use crate::order::Order;
use crate::validate::{Rejection, TurnOrder, ValidatedOrders};

/// The outcome of a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The order took effect.
    Succeeded,
    /// The order could not take effect: a hold that was dislodged, a move
    /// with no surviving convoy chain, a convoy whose fleet was dislodged.
    Failed,
    /// A move that lost a strength comparison and stayed home.
    Bounced,
    /// A support invalidated by a successful attack on its unit.
    Cut,
}

/// One adjudicated order.
#[derive(Debug, Clone)]
pub struct OrderOutcome {
    pub power: Power,
    pub order: Order,
    pub outcome: Outcome,
}

/// Everything a collaborator needs to explain the turn: the fate of every
/// accepted order, every rejection from validation, which provinces lost
/// their unit, and where competing moves stood off.
#[derive(Debug, Clone)]
pub struct ResolutionReport {
    pub orders: Vec<OrderOutcome>,
    pub rejected: Vec<Rejection>,
    pub dislodged: Vec<(ProvinceId, Dislodgement)>,
    pub standoffs: Vec<ProvinceId>,
}

impl ResolutionReport {
    /// Looks up the outcome of the order given by the unit at `province`.
    pub fn outcome_at(&self, province: ProvinceId) -> Option<Outcome> {
        self.orders
            .iter()
            .find(|o| o.order.unit() == province)
            .map(|o| o.outcome)
    }
}

/// Adjudicates one movement turn and commits the result.
///
/// The input state is untouched; the returned state has winning moves
/// applied, ownership transferred, and dislodged units removed from the
/// board and recorded for the retreat phase.
pub fn adjudicate(
    map: &MapGraph,
    state: &GameState,
    validated: &ValidatedOrders,
) -> (GameState, ResolutionReport) {
    let mut resolver = Resolver::new(map, state, &validated.accepted);
    resolver.run();
    resolver.commit(validated)
}

/// Per-order data the fixed point iterates over.
struct Resolver<'a> {
    map: &'a MapGraph,
    state: &'a GameState,
    orders: &'a [TurnOrder],
    /// Province of a unit -> index of its order.
    by_province: Vec<Option<usize>>,
    /// Moves only: the move must be carried by convoy (army, non-adjacent).
    needs_convoy: Vec<bool>,
    /// Moves only: the convoy chain is currently intact.
    convoy_ok: Vec<bool>,
    /// Moves only: frozen as failed by the paradox fallback.
    convoy_frozen: Vec<bool>,
    /// Supports only: invalidated this fixed point.
    cut: Vec<bool>,
    /// Moves only: the move currently succeeds.
    success: Vec<bool>,
    /// Province -> origin of the successful move that dislodged its unit.
    dislodged_from: Vec<Option<ProvinceId>>,
    /// Provinces where movers tied at top strength.
    standoff: Vec<bool>,
}

impl<'a> Resolver<'a> {
    fn new(map: &'a MapGraph, state: &'a GameState, orders: &'a [TurnOrder]) -> Resolver<'a> {
        let n = orders.len();
        let mut by_province = vec![None; map.province_count()];
        let mut needs_convoy = vec![false; n];

        for (i, t) in orders.iter().enumerate() {
            by_province[t.order.unit().index()] = Some(i);
            if let Order::Move { unit, target } = t.order {
                let kind = state.unit(unit).map(|u| u.kind);
                debug_assert!(kind.is_some(), "validated order without a unit");
                needs_convoy[i] =
                    kind == Some(UnitKind::Army) && !map.is_adjacent(unit, target);
            }
        }

        Resolver {
            map,
            state,
            orders,
            by_province,
            needs_convoy,
            convoy_ok: vec![true; n],
            convoy_frozen: vec![false; n],
            cut: vec![false; n],
            success: vec![false; n],
            dislodged_from: vec![None; map.province_count()],
            standoff: vec![false; map.province_count()],
        }
    }

    /// Iterates strength, cutting, convoy validity, and move resolution to a
    /// fixed point. Bounded; applies the paradox fallback if the bound is
    /// reached with convoyed moves still oscillating.
    fn run(&mut self) {
        let max_passes = self.orders.len() + 4;
        let mut frozen_convoys = false;

        for pass in 0..2 * max_passes {
            self.resolve_moves();
            self.mark_dislodgements();
            let cuts_changed = self.recompute_cuts();
            let convoys_changed = self.recompute_convoys();

            if !cuts_changed && !convoys_changed {
                debug!("adjudication settled after {} passes", pass + 1);
                return;
            }

            // Paradox fallback: a convoy chain whose validity keeps flipping
            // is adjudged broken, and the loop restarts with it frozen.
            if pass + 1 == max_passes && !frozen_convoys {
                for i in 0..self.orders.len() {
                    if self.needs_convoy[i] {
                        self.convoy_ok[i] = false;
                        self.convoy_frozen[i] = true;
                    }
                }
                frozen_convoys = true;
                debug!("convoy paradox: freezing convoyed moves as failed");
            }
        }

        // Pure support-cut oscillation past the bound: settle pessimistically
        // by keeping the current cut set and resolving once more.
        self.resolve_moves();
        self.mark_dislodgements();
    }

    /// True when a move order can take part in resolution at all.
    fn move_valid(&self, i: usize) -> bool {
        !self.needs_convoy[i] || self.convoy_ok[i]
    }

    /// Attack strength: 1 plus every uncut support matching this exact move.
    fn attack_strength(&self, i: usize) -> u32 {
        let (source, target) = match self.orders[i].order {
            Order::Move { unit, target } => (unit, target),
            _ => return 0,
        };
        let mut strength = 1;
        for (j, t) in self.orders.iter().enumerate() {
            if self.cut[j] {
                continue;
            }
            if let Order::SupportMove {
                supported,
                target: sup_target,
                ..
            } = t.order
            {
                if supported == source && sup_target == target {
                    strength += 1;
                }
            }
        }
        strength
    }

    /// Defense strength of the stationary unit at `p`: 1 plus every uncut
    /// support for its hold. A unit whose own move failed defends with bare
    /// strength 1; hold supports match only a unit that is not moving.
    fn hold_strength(&self, p: ProvinceId) -> u32 {
        let Some(i) = self.by_province[p.index()] else {
            return if self.state.occupied(p) { 1 } else { 0 };
        };
        if matches!(self.orders[i].order, Order::Move { .. }) {
            return 1;
        }
        let mut strength = 1;
        for (j, t) in self.orders.iter().enumerate() {
            if self.cut[j] {
                continue;
            }
            if let Order::SupportHold { supported, .. } = t.order {
                if supported == p {
                    strength += 1;
                }
            }
        }
        strength
    }

    /// Resolves every move given the current cut and convoy state.
    fn resolve_moves(&mut self) {
        let n = self.orders.len();
        let mut strength = vec![0u32; n];
        let mut is_move = vec![false; n];
        let mut target = vec![None; n];

        for i in 0..n {
            if let Order::Move { target: t, .. } = self.orders[i].order {
                is_move[i] = true;
                target[i] = Some(t);
                if self.move_valid(i) {
                    strength[i] = self.attack_strength(i);
                }
            }
        }

        // Head-to-head: two moves into each other's sources compare attack
        // strengths directly. The weaker fails; a tie fails both.
        let mut beaten = vec![false; n];
        for i in 0..n {
            if !is_move[i] || strength[i] == 0 {
                continue;
            }
            let t = target[i].unwrap();
            if let Some(j) = self.by_province[t.index()] {
                if j > i
                    && is_move[j]
                    && strength[j] > 0
                    && target[j] == Some(self.orders[i].order.unit())
                {
                    if strength[i] <= strength[j] {
                        beaten[i] = true;
                    }
                    if strength[j] <= strength[i] {
                        beaten[j] = true;
                    }
                }
            }
        }

        // A move must be the unique strongest contender for its target.
        self.standoff.fill(false);
        for i in 0..n {
            self.success[i] = false;
            if !is_move[i] || strength[i] == 0 || beaten[i] {
                continue;
            }
            let t = target[i].unwrap();
            let mut top = true;
            let mut tied = false;
            for j in 0..n {
                if j == i || !is_move[j] || strength[j] == 0 || beaten[j] || target[j] != target[i]
                {
                    continue;
                }
                if strength[j] > strength[i] {
                    top = false;
                }
                if strength[j] == strength[i] {
                    tied = true;
                }
            }
            if top && tied {
                self.standoff[t.index()] = true;
            }
            self.success[i] = top && !tied;
        }

        // Occupied targets: the winner still needs to overpower a defender
        // that stays, and may never dislodge a unit of its own power. A
        // defender beaten head-to-head is already out of the way. Failures
        // cascade to moves that were counting on a vacated province.
        loop {
            let mut changed = false;
            for i in 0..n {
                if !self.success[i] {
                    continue;
                }
                let t = target[i].unwrap();
                let Some(occupant) = self.state.unit(t) else {
                    continue;
                };
                let source = self.orders[i].order.unit();
                let occ_order = self.by_province[t.index()];

                // Head-to-head loser: the comparison above already decided.
                if let Some(j) = occ_order {
                    if is_move[j] && target[j] == Some(source) && self.move_valid(j) {
                        if occupant.owner == self.orders[i].power {
                            self.success[i] = false;
                            changed = true;
                        }
                        continue;
                    }
                    // Occupant vacates; nothing to overpower.
                    if is_move[j] && self.success[j] {
                        continue;
                    }
                }

                // Occupant stays.
                if occupant.owner == self.orders[i].power
                    || strength[i] <= self.hold_strength(t)
                {
                    self.success[i] = false;
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }
    }

    /// Records which provinces lose their unit to a successful foreign move.
    fn mark_dislodgements(&mut self) {
        self.dislodged_from.fill(None);
        for i in 0..self.orders.len() {
            if !self.success[i] {
                continue;
            }
            if let Order::Move { unit, target } = self.orders[i].order {
                if let Some(j) = self.by_province[target.index()] {
                    let stays = !matches!(self.orders[j].order, Order::Move { .. })
                        || !self.success[j];
                    if stays && self.state.occupied(target) {
                        self.dislodged_from[target.index()] = Some(unit);
                    }
                } else if self.state.occupied(target) {
                    self.dislodged_from[target.index()] = Some(unit);
                }
            }
        }
    }

    /// Re-derives the cut set: a support is cut exactly when its province is
    /// the target of a successful move by another power. Returns true if the
    /// set changed.
    fn recompute_cuts(&mut self) -> bool {
        let mut changed = false;
        for s in 0..self.orders.len() {
            let sp = match self.orders[s].order {
                Order::SupportHold { unit, .. } | Order::SupportMove { unit, .. } => unit,
                _ => continue,
            };
            let cut_now = self
                .dislodged_from
                .get(sp.index())
                .copied()
                .flatten()
                .is_some()
                && self.dislodger_power(sp) != Some(self.orders[s].power);
            if cut_now != self.cut[s] {
                self.cut[s] = cut_now;
                changed = true;
            }
        }
        changed
    }

    /// The power of the successful move into `p`, if any.
    fn dislodger_power(&self, p: ProvinceId) -> Option<Power> {
        let from = self.dislodged_from[p.index()]?;
        let i = self.by_province[from.index()]?;
        Some(self.orders[i].power)
    }

    /// Re-checks every convoyed move's chain against the fleets dislodged
    /// this pass. Returns true if any chain changed state.
    fn recompute_convoys(&mut self) -> bool {
        let mut changed = false;
        for i in 0..self.orders.len() {
            if !self.needs_convoy[i] || self.convoy_frozen[i] {
                continue;
            }
            let Order::Move { unit, target } = self.orders[i].order else {
                continue;
            };
            let ok = crate::validate::sea_path_exists(self.map, unit, target, |sea| {
                self.convoying_fleet_survives(sea, unit, target)
            });
            if ok != self.convoy_ok[i] {
                self.convoy_ok[i] = ok;
                changed = true;
            }
        }
        changed
    }

    /// True when the fleet at `sea` ordered the matching convoy and has not
    /// been dislodged.
    fn convoying_fleet_survives(&self, sea: ProvinceId, from: ProvinceId, to: ProvinceId) -> bool {
        if self.dislodged_from[sea.index()].is_some() {
            return false;
        }
        match self.by_province[sea.index()] {
            Some(j) => matches!(
                self.orders[j].order,
                Order::Convoy { from: f, to: t, .. } if f == from && t == to
            ),
            None => false,
        }
    }

    /// Applies the settled resolution: removes dislodged units, executes
    /// winning moves, transfers ownership, and assembles the report.
    fn commit(&self, validated: &ValidatedOrders) -> (GameState, ResolutionReport) {
        let mut next = self.state.clone();
        let mut dislodged = Vec::new();

        for p in self.map.provinces() {
            if let Some(from) = self.dislodged_from[p.index()] {
                let unit = next.remove(p);
                debug_assert!(unit.is_some(), "dislodgement at an empty province");
                if let Some(unit) = unit {
                    let record = Dislodgement {
                        unit,
                        attacker_from: from,
                    };
                    next.set_dislodged(p, record);
                    dislodged.push((p, record));
                }
            }
        }

        // Clear every winning mover first so cycles and chains of moves
        // commit as one step, then place them at their targets.
        let mut arrivals = Vec::new();
        for i in 0..self.orders.len() {
            if !self.success[i] {
                continue;
            }
            if let Order::Move { unit, target } = self.orders[i].order {
                if let Some(moved) = next.remove(unit) {
                    arrivals.push((target, moved));
                }
            }
        }
        for (target, unit) in arrivals {
            let placed = next.place(self.map, target, unit);
            debug_assert!(placed, "winning move into an occupied province");
        }

        let orders = self
            .orders
            .iter()
            .enumerate()
            .map(|(i, t)| OrderOutcome {
                power: t.power,
                order: t.order,
                outcome: self.outcome(i),
            })
            .collect();

        let standoffs = self
            .map
            .provinces()
            .filter(|p| self.standoff[p.index()])
            .collect();

        let report = ResolutionReport {
            orders,
            rejected: validated.rejected.clone(),
            dislodged,
            standoffs,
        };

        debug!(
            "adjudicated {} orders: {} dislodged, {} standoffs",
            self.orders.len(),
            report.dislodged.len(),
            report.standoffs.len()
        );

        (next, report)
    }

    /// Final outcome of order `i`.
    fn outcome(&self, i: usize) -> Outcome {
        let unit = self.orders[i].order.unit();
        let was_dislodged = self.dislodged_from[unit.index()].is_some();
        match self.orders[i].order {
            Order::Move { .. } => {
                if self.success[i] {
                    Outcome::Succeeded
                } else if self.needs_convoy[i] && !self.convoy_ok[i] {
                    Outcome::Failed
                } else {
                    Outcome::Bounced
                }
            }
            Order::SupportHold { .. } | Order::SupportMove { .. } => {
                if self.cut[i] || was_dislodged {
                    Outcome::Cut
                } else {
                    Outcome::Succeeded
                }
            }
            Order::Convoy { .. } => {
                if was_dislodged {
                    Outcome::Failed
                } else {
                    Outcome::Succeeded
                }
            }
            Order::Hold { .. } => {
                if was_dislodged {
                    Outcome::Failed
                } else {
                    Outcome::Succeeded
                }
            }
        }
    }
}
