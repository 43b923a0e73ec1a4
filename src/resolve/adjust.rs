//! Winter adjustment: builds and disbands.
//!
//! The only point where a power's unit count is reconciled with its
//! supply-center count. Builds are optional and capped at the surplus;
//! removals are mandatory, and any shortfall is covered by disbanding the
//! units farthest from home, deterministically.

use log::{debug, warn};

use crate::board::{GameState, Power, Unit, UnitKind, ALL_POWERS};
use crate::map::{MapGraph, ProvinceId};

use super::movement::Outcome;

/// A requested build: a new unit of `kind` in `province`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOrder {
    pub province: ProvinceId,
    pub kind: UnitKind,
}

/// One power's winter requests. The engine enforces legality and the final
/// counts; which units to build or remove is the caller's policy.
#[derive(Debug, Clone, Default)]
pub struct AdjustmentChoices {
    pub builds: Vec<BuildOrder>,
    pub removals: Vec<ProvinceId>,
}

/// What happened to one build/removal request (or forced disband).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentAction {
    Build(BuildOrder),
    Remove(ProvinceId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustmentOutcome {
    pub power: Power,
    pub action: AdjustmentAction,
    pub outcome: Outcome,
}

/// Resolves the adjustment phase for every power. After this, no power has
/// more units than supply centers.
pub fn resolve_adjustments(
    map: &MapGraph,
    state: &GameState,
    choices: &[(Power, AdjustmentChoices)],
) -> (GameState, Vec<AdjustmentOutcome>) {
    let mut next = state.clone();
    let mut outcomes = Vec::new();

    for &power in &ALL_POWERS {
        let centers = state.center_count(map, power);
        let units = state.unit_count(power);
        let requested = choices.iter().find(|(p, _)| *p == power).map(|(_, c)| c);
        let empty = AdjustmentChoices::default();
        let requested = requested.unwrap_or(&empty);

        if centers > units {
            apply_builds(map, &mut next, power, centers - units, requested, &mut outcomes);
        } else if units > centers {
            apply_removals(map, &mut next, power, units - centers, requested, &mut outcomes);
        } else if !requested.builds.is_empty() || !requested.removals.is_empty() {
            debug!("{power} is balanced; ignoring adjustment requests");
        }

        debug_assert!(
            next.unit_count(power) <= next.center_count(map, power),
            "{power} still over its center count after adjustment"
        );
    }

    (next, outcomes)
}

/// Grants up to `allowed` builds, each in an owned, vacant home supply
/// center whose terrain can host the requested kind.
fn apply_builds(
    map: &MapGraph,
    next: &mut GameState,
    power: Power,
    allowed: usize,
    requested: &AdjustmentChoices,
    outcomes: &mut Vec<AdjustmentOutcome>,
) {
    let mut built = 0;
    for &build in &requested.builds {
        let legal = built < allowed
            && map.home_power(build.province) == Some(power)
            && next.owner(build.province) == Some(power)
            && !next.occupied(build.province)
            && map.can_host(build.province, build.kind);
        let outcome = if legal {
            let placed = next.place(map, build.province, Unit::new(build.kind, power));
            debug_assert!(placed);
            built += 1;
            Outcome::Succeeded
        } else {
            warn!("{power} build in {} refused", map.name(build.province));
            Outcome::Failed
        };
        outcomes.push(AdjustmentOutcome {
            power,
            action: AdjustmentAction::Build(build),
            outcome,
        });
    }
}

/// Applies exactly `needed` removals: the power's requests first, then a
/// forced disband of the units farthest from home for any shortfall.
fn apply_removals(
    map: &MapGraph,
    next: &mut GameState,
    power: Power,
    needed: usize,
    requested: &AdjustmentChoices,
    outcomes: &mut Vec<AdjustmentOutcome>,
) {
    let mut removed = 0;
    for &province in &requested.removals {
        let legal = removed < needed
            && matches!(next.unit(province), Some(u) if u.owner == power);
        let outcome = if legal {
            next.remove(province);
            removed += 1;
            Outcome::Succeeded
        } else {
            warn!("{power} removal at {} refused", map.name(province));
            Outcome::Failed
        };
        outcomes.push(AdjustmentOutcome {
            power,
            action: AdjustmentAction::Remove(province),
            outcome,
        });
    }

    if removed < needed {
        let shortfall = needed - removed;
        warn!("{power} short {shortfall} removal(s); disbanding farthest from home");
        for province in farthest_from_home(map, next, power, shortfall) {
            next.remove(province);
            outcomes.push(AdjustmentOutcome {
                power,
                action: AdjustmentAction::Remove(province),
                outcome: Outcome::Succeeded,
            });
        }
    }
}

/// Picks `count` of the power's units to disband, farthest from any home
/// supply center first, ties broken by province order.
fn farthest_from_home(
    map: &MapGraph,
    state: &GameState,
    power: Power,
    count: usize,
) -> Vec<ProvinceId> {
    let distance = home_distances(map, power);
    let mut units: Vec<(ProvinceId, u32)> = state
        .units_of(power)
        .map(|(p, _)| (p, distance[p.index()]))
        .collect();
    units.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    units.into_iter().take(count).map(|(p, _)| p).collect()
}

/// Multi-source BFS distance from every province to the power's nearest
/// home supply center, ignoring terrain.
fn home_distances(map: &MapGraph, power: Power) -> Vec<u32> {
    let mut distance = vec![u32::MAX; map.province_count()];
    let mut queue = Vec::new();
    for p in map.provinces() {
        if map.home_power(p) == Some(power) {
            distance[p.index()] = 0;
            queue.push(p);
        }
    }
    let mut head = 0;
    while head < queue.len() {
        let current = queue[head];
        head += 1;
        for &n in map.adjacent(current) {
            if distance[n.index()] == u32::MAX {
                distance[n.index()] = distance[current.index()] + 1;
                queue.push(n);
            }
        }
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Season;

    fn setup() -> (MapGraph, GameState) {
        let map = MapGraph::standard().unwrap();
        let state = GameState::empty(&map, 1901, Season::Winter);
        (map, state)
    }

    fn place(map: &MapGraph, state: &mut GameState, name: &str, kind: UnitKind, power: Power) {
        let id = map.find(name).unwrap();
        assert!(state.place(map, id, Unit::new(kind, power)), "{name}");
    }

    fn own(map: &MapGraph, state: &mut GameState, name: &str, power: Power) {
        state.set_owner(map.find(name).unwrap(), power);
    }

    #[test]
    fn build_in_home_center() {
        let (map, mut state) = setup();
        own(&map, &mut state, "Paris", Power::France);
        own(&map, &mut state, "Brest", Power::France);
        place(&map, &mut state, "Paris", UnitKind::Army, Power::France);
        // 2 centers, 1 unit: one build allowed.
        let brest = map.find("Brest").unwrap();
        let (next, outcomes) = resolve_adjustments(
            &map,
            &state,
            &[(
                Power::France,
                AdjustmentChoices {
                    builds: vec![BuildOrder {
                        province: brest,
                        kind: UnitKind::Fleet,
                    }],
                    removals: vec![],
                },
            )],
        );
        assert_eq!(outcomes[0].outcome, Outcome::Succeeded);
        assert_eq!(next.unit_count(Power::France), 2);
        assert_eq!(next.unit(brest).unwrap().kind, UnitKind::Fleet);
    }

    #[test]
    fn build_refused_outside_home_or_over_quota() {
        let (map, mut state) = setup();
        own(&map, &mut state, "Paris", Power::France);
        own(&map, &mut state, "Brest", Power::France);
        own(&map, &mut state, "Spain", Power::France);
        place(&map, &mut state, "Paris", UnitKind::Army, Power::France);
        // 3 centers, 1 unit: 2 builds allowed, but Spain is not a home center.
        let (next, outcomes) = resolve_adjustments(
            &map,
            &state,
            &[(
                Power::France,
                AdjustmentChoices {
                    builds: vec![
                        BuildOrder {
                            province: map.find("Spain").unwrap(),
                            kind: UnitKind::Army,
                        },
                        BuildOrder {
                            province: map.find("Brest").unwrap(),
                            kind: UnitKind::Fleet,
                        },
                        // Paris is occupied.
                        BuildOrder {
                            province: map.find("Paris").unwrap(),
                            kind: UnitKind::Army,
                        },
                    ],
                    removals: vec![],
                },
            )],
        );
        assert_eq!(outcomes[0].outcome, Outcome::Failed);
        assert_eq!(outcomes[1].outcome, Outcome::Succeeded);
        assert_eq!(outcomes[2].outcome, Outcome::Failed);
        assert_eq!(next.unit_count(Power::France), 2);
    }

    #[test]
    fn fleet_cannot_be_built_inland() {
        let (map, mut state) = setup();
        own(&map, &mut state, "Paris", Power::France);
        let (next, outcomes) = resolve_adjustments(
            &map,
            &state,
            &[(
                Power::France,
                AdjustmentChoices {
                    builds: vec![BuildOrder {
                        province: map.find("Paris").unwrap(),
                        kind: UnitKind::Fleet,
                    }],
                    removals: vec![],
                },
            )],
        );
        assert_eq!(outcomes[0].outcome, Outcome::Failed);
        assert_eq!(next.unit_count(Power::France), 0);
    }

    #[test]
    fn requested_removal_applies() {
        let (map, mut state) = setup();
        own(&map, &mut state, "Paris", Power::France);
        place(&map, &mut state, "Paris", UnitKind::Army, Power::France);
        place(&map, &mut state, "Gascony", UnitKind::Army, Power::France);
        // 1 center, 2 units: one removal required.
        let gas = map.find("Gascony").unwrap();
        let (next, outcomes) = resolve_adjustments(
            &map,
            &state,
            &[(
                Power::France,
                AdjustmentChoices {
                    builds: vec![],
                    removals: vec![gas],
                },
            )],
        );
        assert_eq!(outcomes[0].outcome, Outcome::Succeeded);
        assert_eq!(next.unit_count(Power::France), 1);
        assert_eq!(
            next.unit_count(Power::France),
            next.center_count(&map, Power::France)
        );
    }

    #[test]
    fn removal_shortfall_disbands_farthest() {
        let (map, mut state) = setup();
        own(&map, &mut state, "Paris", Power::France);
        place(&map, &mut state, "Paris", UnitKind::Army, Power::France);
        place(&map, &mut state, "Syria", UnitKind::Army, Power::France);
        // 1 center, 2 units, no removals submitted: Syria is farther from
        // French homes than Paris and must be the forced disband.
        let (next, outcomes) = resolve_adjustments(&map, &state, &[]);
        assert_eq!(outcomes.len(), 1);
        assert_eq!(
            outcomes[0].action,
            AdjustmentAction::Remove(map.find("Syria").unwrap())
        );
        assert!(next.occupied(map.find("Paris").unwrap()));
        assert_eq!(next.unit_count(Power::France), 1);
    }

    #[test]
    fn balanced_power_ignores_requests() {
        let (map, mut state) = setup();
        own(&map, &mut state, "Paris", Power::France);
        place(&map, &mut state, "Paris", UnitKind::Army, Power::France);
        let (next, outcomes) = resolve_adjustments(
            &map,
            &state,
            &[(
                Power::France,
                AdjustmentChoices {
                    builds: vec![BuildOrder {
                        province: map.find("Brest").unwrap(),
                        kind: UnitKind::Fleet,
                    }],
                    removals: vec![],
                },
            )],
        );
        assert!(outcomes.is_empty());
        assert_eq!(next.unit_count(Power::France), 1);
    }
}
