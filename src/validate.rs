//! Order validation.
//!
//! Checks every submitted order against the map and the current state before
//! adjudication. Illegal or malformed orders are rejected with a typed
//! reason and the affected unit falls back to Hold; nothing is silently
//! dropped. The output carries exactly one accepted order per unit on the
//! board — units without one get an explicit Hold.

use log::warn;

use crate::board::{GameState, Power, UnitKind};
use crate::error::OrderError;
use crate::map::{MapGraph, ProvinceId, Terrain};
use crate::order::{Order, RawAction, RawOrder};

/// An accepted order bound to its issuing power.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    pub power: Power,
    pub order: Order,
}

/// A rejected submission and why it was rejected.
#[derive(Debug, Clone)]
pub struct Rejection {
    pub power: Power,
    pub raw: RawOrder,
    pub reason: OrderError,
}

/// Validation output: one order per unit (Hold filled in where no order was
/// accepted) plus every rejection.
#[derive(Debug, Clone)]
pub struct ValidatedOrders {
    pub accepted: Vec<TurnOrder>,
    pub rejected: Vec<Rejection>,
}

/// Validates all powers' submissions for one movement turn.
pub fn validate_orders(
    map: &MapGraph,
    state: &GameState,
    submissions: &[(Power, Vec<RawOrder>)],
) -> ValidatedOrders {
    let mut accepted: Vec<TurnOrder> = Vec::new();
    let mut rejected: Vec<Rejection> = Vec::new();
    let mut ordered = vec![false; map.province_count()];

    for (power, orders) in submissions {
        for raw in orders {
            match check_order(map, state, *power, raw, &ordered) {
                Ok(order) => {
                    ordered[order.unit().index()] = true;
                    accepted.push(TurnOrder {
                        power: *power,
                        order,
                    });
                }
                Err(reason) => {
                    warn!("rejected order from {power}: {reason}");
                    rejected.push(Rejection {
                        power: *power,
                        raw: raw.clone(),
                        reason,
                    });
                }
            }
        }
    }

    // Every unit without an accepted order holds.
    for p in map.provinces() {
        if let Some(unit) = state.unit(p) {
            if !ordered[p.index()] {
                accepted.push(TurnOrder {
                    power: unit.owner,
                    order: Order::Hold { unit: p },
                });
            }
        }
    }

    ValidatedOrders { accepted, rejected }
}

fn resolve(map: &MapGraph, name: &str) -> Result<ProvinceId, OrderError> {
    map.find(name)
        .ok_or_else(|| OrderError::UnknownTerritory(name.to_string()))
}

/// Checks a single raw order, resolving names to province ids.
fn check_order(
    map: &MapGraph,
    state: &GameState,
    power: Power,
    raw: &RawOrder,
    ordered: &[bool],
) -> Result<Order, OrderError> {
    let source = resolve(map, &raw.location)?;
    let unit = state
        .unit(source)
        .ok_or_else(|| OrderError::NoUnit(raw.location.clone()))?;
    if unit.owner != power {
        return Err(OrderError::ForeignUnit {
            location: raw.location.clone(),
            owner: unit.owner.name().to_string(),
            claimed: power.name().to_string(),
        });
    }
    if ordered[source.index()] {
        return Err(OrderError::DuplicateOrder(raw.location.clone()));
    }

    match &raw.action {
        RawAction::Hold => Ok(Order::Hold { unit: source }),

        RawAction::Move { target } => {
            let target = resolve(map, target)?;
            check_move(map, state, source, target, unit.kind)?;
            Ok(Order::Move {
                unit: source,
                target,
            })
        }

        RawAction::Support { supported, target } => {
            let supported = resolve(map, supported)?;
            if state.unit(supported).is_none() {
                return Err(OrderError::NoUnit(map.name(supported).to_string()));
            }
            match target {
                None => {
                    check_support_reach(map, source, supported, unit.kind)?;
                    Ok(Order::SupportHold {
                        unit: source,
                        supported,
                    })
                }
                Some(target) => {
                    let target = resolve(map, target)?;
                    check_support_reach(map, source, target, unit.kind)?;
                    Ok(Order::SupportMove {
                        unit: source,
                        supported,
                        target,
                    })
                }
            }
        }

        RawAction::Convoy { from, to } => {
            if unit.kind != UnitKind::Fleet || map.terrain(source) != Terrain::Sea {
                return Err(OrderError::NotAConvoyFleet(raw.location.clone()));
            }
            let from = resolve(map, from)?;
            let to = resolve(map, to)?;
            for endpoint in [from, to] {
                if map.terrain(endpoint) != Terrain::Coast {
                    return Err(OrderError::ConvoyEndpointNotCoastal(
                        map.name(endpoint).to_string(),
                    ));
                }
            }
            match state.unit(from) {
                Some(u) if u.kind == UnitKind::Army => {}
                _ => return Err(OrderError::NoUnit(map.name(from).to_string())),
            }
            if !convoy_chain_feasible(map, state, from, to) {
                return Err(OrderError::NoConvoyChain {
                    from: map.name(from).to_string(),
                    to: map.name(to).to_string(),
                });
            }
            Ok(Order::Convoy {
                unit: source,
                from,
                to,
            })
        }
    }
}

/// Move legality: adjacency plus terrain hosting, or a feasible convoy
/// passage for an army between coastal provinces.
fn check_move(
    map: &MapGraph,
    state: &GameState,
    source: ProvinceId,
    target: ProvinceId,
    kind: UnitKind,
) -> Result<(), OrderError> {
    if map.is_adjacent(source, target) {
        if !map.can_host(target, kind) {
            return Err(OrderError::TerrainMismatch {
                kind: kind.name().to_string(),
                target: map.name(target).to_string(),
            });
        }
        return Ok(());
    }

    // Non-adjacent armies may still move coast-to-coast by convoy.
    if kind == UnitKind::Army
        && map.terrain(source) == Terrain::Coast
        && map.terrain(target) == Terrain::Coast
    {
        if convoy_chain_feasible(map, state, source, target) {
            return Ok(());
        }
        return Err(OrderError::NoConvoyChain {
            from: map.name(source).to_string(),
            to: map.name(target).to_string(),
        });
    }

    Err(OrderError::NotAdjacent {
        origin: map.name(source).to_string(),
        target: map.name(target).to_string(),
    })
}

/// Support reach: the supporter must be adjacent to the province it lends
/// strength into, and must be able to occupy it itself.
fn check_support_reach(
    map: &MapGraph,
    source: ProvinceId,
    into: ProvinceId,
    kind: UnitKind,
) -> Result<(), OrderError> {
    if !map.is_adjacent(source, into) {
        return Err(OrderError::UnreachableSupport {
            origin: map.name(source).to_string(),
            target: map.name(into).to_string(),
        });
    }
    if !map.can_host(into, kind) {
        return Err(OrderError::TerrainMismatch {
            kind: kind.name().to_string(),
            target: map.name(into).to_string(),
        });
    }
    Ok(())
}

/// Breadth-first search for an unbroken chain of fleet-occupied sea
/// provinces from `from` to `to`, excluding the endpoints themselves.
pub(crate) fn convoy_chain_feasible(
    map: &MapGraph,
    state: &GameState,
    from: ProvinceId,
    to: ProvinceId,
) -> bool {
    sea_path_exists(map, from, to, |p| {
        matches!(state.unit(p), Some(u) if u.kind == UnitKind::Fleet)
    })
}

/// BFS over sea provinces satisfying `carries`, seeded from the seas
/// adjacent to `from`, succeeding when one is adjacent to `to`.
pub(crate) fn sea_path_exists<F>(map: &MapGraph, from: ProvinceId, to: ProvinceId, carries: F) -> bool
where
    F: Fn(ProvinceId) -> bool,
{
    let mut visited = vec![false; map.province_count()];
    let mut queue = Vec::new();

    for &sea in map.adjacent(from) {
        if map.terrain(sea) == Terrain::Sea && carries(sea) {
            visited[sea.index()] = true;
            queue.push(sea);
        }
    }

    let mut head = 0;
    while head < queue.len() {
        let current = queue[head];
        head += 1;
        if map.is_adjacent(current, to) {
            return true;
        }
        for &next in map.adjacent(current) {
            if map.terrain(next) == Terrain::Sea && !visited[next.index()] && carries(next) {
                visited[next.index()] = true;
                queue.push(next);
            }
        }
    }
    false
}
