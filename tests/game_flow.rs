//! Whole-game integration tests: the turn state machine, supply-center
//! capture, winter builds, snapshot round-trips, and a seeded fuzz run that
//! hammers the engine with arbitrary orders while checking its invariants.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use entente::board::{Power, Season, UnitKind, ALL_POWERS};
use entente::game::{Game, TurnPhase};
use entente::map::MapGraph;
use entente::order::RawOrder;
use entente::resolve::{
    legal_retreats, AdjustmentChoices, BuildOrder, RetreatChoice, RetreatOrder,
};
use entente::snapshot::{decode, Snapshot};

/// The classic opening every power might play, straight from the raw tuple
/// format the transport delivers.
fn opening_moves() -> Vec<(Power, Vec<RawOrder>)> {
    vec![
        (
            Power::England,
            vec![
                RawOrder::mv("London", "North Sea"),
                RawOrder::mv("Edinburgh", "Norwegian Sea"),
                RawOrder::mv("Liverpool", "Yorkshire"),
            ],
        ),
        (
            Power::France,
            vec![
                RawOrder::mv("Brest", "English Channel"),
                RawOrder::mv("Paris", "Burgundy"),
                RawOrder::mv("Marseilles", "Spain"),
            ],
        ),
        (
            Power::Germany,
            vec![
                RawOrder::mv("Kiel", "Denmark"),
                RawOrder::mv("Berlin", "Kiel"),
                RawOrder::mv("Munich", "Ruhr"),
            ],
        ),
        (
            Power::Italy,
            vec![
                RawOrder::mv("Venice", "Tyrolia"),
                RawOrder::mv("Rome", "Venice"),
                RawOrder::mv("Naples", "Ionian Sea"),
            ],
        ),
        (
            Power::Austria,
            vec![
                RawOrder::mv("Vienna", "Galicia"),
                RawOrder::mv("Budapest", "Serbia"),
                RawOrder::mv("Trieste", "Adriatic Sea"),
            ],
        ),
        (
            Power::Russia,
            vec![
                RawOrder::mv("St Petersburg", "Gulf of Bothnia"),
                RawOrder::mv("Moscow", "Ukraine"),
                RawOrder::mv("Warsaw", "Galicia"),
                RawOrder::mv("Sevastopol", "Black Sea"),
            ],
        ),
        (
            Power::Turkey,
            vec![
                RawOrder::mv("Constantinople", "Bulgaria"),
                RawOrder::mv("Ankara", "Armenia"),
                RawOrder::mv("Smyrna", "Aegean Sea"),
            ],
        ),
    ]
}

#[test]
fn spring_1901_opening_resolves() {
    let mut game = Game::new().unwrap();
    for (power, orders) in opening_moves() {
        game.submit_orders(power, orders).unwrap();
    }
    assert!(game.all_orders_received());
    let report = game.resolve_movement().unwrap();

    let map = game.map();
    let at = |name: &str| game.state().unit(map.find(name).unwrap());

    // Austria and Russia collide in Galicia: a standoff, everything else
    // walks into empty provinces.
    assert!(report.standoffs.contains(&map.find("Galicia").unwrap()));
    assert!(at("Galicia").is_none());
    assert_eq!(at("Vienna").unwrap().owner, Power::Austria);
    assert_eq!(at("Warsaw").unwrap().owner, Power::Russia);

    assert_eq!(at("North Sea").unwrap().owner, Power::England);
    assert_eq!(at("English Channel").unwrap().owner, Power::France);
    assert_eq!(at("Spain").unwrap().owner, Power::France);
    assert_eq!(at("Denmark").unwrap().owner, Power::Germany);
    assert_eq!(at("Kiel").unwrap().owner, Power::Germany);
    assert_eq!(at("Bulgaria").unwrap().owner, Power::Turkey);
    assert!(report.dislodged.is_empty());
    assert_eq!(game.state().season, Season::Fall);

    // Walking into neutral centers takes them over.
    assert_eq!(game.state().center_count(map, Power::France), 4); // + Spain
    assert_eq!(game.state().center_count(map, Power::Turkey), 4); // + Bulgaria
    game.state().check_invariants(map).unwrap();
}

#[test]
fn winter_build_after_capturing_a_center() {
    let mut game = Game::new().unwrap();

    // Spring: Turkey walks into Bulgaria, a neutral center.
    game.submit_orders(
        Power::Turkey,
        vec![RawOrder::mv("Constantinople", "Bulgaria")],
    )
    .unwrap();
    game.resolve_movement().unwrap();

    // Fall: everyone holds.
    game.resolve_movement().unwrap();
    assert_eq!(game.phase(), TurnPhase::Adjustment);

    let con = game.map().find("Constantinople").unwrap();
    let outcomes = game
        .resolve_adjustments(&[(
            Power::Turkey,
            AdjustmentChoices {
                builds: vec![BuildOrder {
                    province: con,
                    kind: UnitKind::Army,
                }],
                removals: vec![],
            },
        )])
        .unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(game.state().unit_count(Power::Turkey), 4);
    assert_eq!(
        game.state().unit_count(Power::Turkey),
        game.state().center_count(game.map(), Power::Turkey)
    );
    assert_eq!(game.state().year, 1902);
    assert_eq!(game.state().season, Season::Spring);
}

#[test]
fn snapshot_round_trip_mid_game() {
    let mut game = Game::new().unwrap();
    for (power, orders) in opening_moves() {
        game.submit_orders(power, orders).unwrap();
    }
    game.resolve_movement().unwrap();

    let snap = game.snapshot();
    let text = snap.to_json().unwrap();
    let parsed = Snapshot::from_json(&text).unwrap();
    let decoded = decode(game.map(), &parsed).unwrap();

    for p in game.map().provinces() {
        assert_eq!(
            decoded.unit(p),
            game.state().unit(p),
            "{}",
            game.map().name(p)
        );
    }
    for &power in &ALL_POWERS {
        assert_eq!(
            decoded.center_count(game.map(), power),
            game.state().center_count(game.map(), power),
            "{power}"
        );
    }
}

/// Arbitrary order soup, several years long: whatever is thrown at the
/// engine, the board stays structurally sound and no power ever ends an
/// adjustment phase with more units than centers.
#[test]
fn fuzzed_games_preserve_invariants() {
    let mut rng = SmallRng::seed_from_u64(0x1914);

    for _ in 0..8 {
        let mut game = Game::new().unwrap();
        for _ in 0..24 {
            match game.phase() {
                TurnPhase::AwaitingOrders => {
                    for &power in &ALL_POWERS {
                        let orders = random_orders(&mut rng, &game, power);
                        // Some powers "time out" and submit nothing.
                        if rng.gen_bool(0.8) {
                            game.submit_orders(power, orders).unwrap();
                        }
                    }
                    game.resolve_movement().unwrap();
                }
                TurnPhase::AwaitingRetreats => {
                    let choices = random_retreats(&mut rng, &game);
                    game.resolve_retreats(&choices).unwrap();
                }
                TurnPhase::Adjustment => {
                    let choices = random_adjustments(&mut rng, &game);
                    game.resolve_adjustments(&choices).unwrap();
                    for &power in &ALL_POWERS {
                        assert!(
                            game.state().unit_count(power)
                                <= game.state().center_count(game.map(), power),
                            "{power} over its center count after adjustment"
                        );
                    }
                }
            }
            game.state().check_invariants(game.map()).unwrap();
            if game.phase() != TurnPhase::AwaitingRetreats {
                assert!(!game.state().has_dislodgements());
            }
            if game.victor().is_some() {
                break;
            }
        }
    }
}

fn random_province(rng: &mut SmallRng, map: &MapGraph) -> String {
    // Occasionally an unknown name, to exercise the rejection path.
    if rng.gen_bool(0.05) {
        return "Atlantis".to_string();
    }
    let idx = rng.gen_range(0..map.province_count());
    map.name(map.provinces().nth(idx).unwrap()).to_string()
}

fn random_orders(rng: &mut SmallRng, game: &Game, power: Power) -> Vec<RawOrder> {
    let map = game.map();
    let mut orders = Vec::new();
    for (province, _) in game.state().units_of(power) {
        let location = map.name(province).to_string();
        let order = match rng.gen_range(0..6) {
            0 => RawOrder::hold(&location),
            1 | 2 => {
                // Mostly plausible moves: a random neighbour.
                let adj = map.adjacent(province);
                let target = map.name(adj[rng.gen_range(0..adj.len())]).to_string();
                RawOrder::mv(&location, &target)
            }
            3 => RawOrder::mv(&location, &random_province(rng, map)),
            4 => RawOrder::support_hold(&location, &random_province(rng, map)),
            _ => RawOrder::support_move(
                &location,
                &random_province(rng, map),
                &random_province(rng, map),
            ),
        };
        orders.push(order);
    }
    orders
}

fn random_retreats(rng: &mut SmallRng, game: &Game) -> Vec<RetreatOrder> {
    let mut choices = Vec::new();
    for (from, d) in game.state().dislodgements() {
        let options = legal_retreats(game.map(), game.state(), from);
        let choice = if options.is_empty() || rng.gen_bool(0.3) {
            RetreatChoice::Disband
        } else {
            RetreatChoice::Move(options[rng.gen_range(0..options.len())])
        };
        choices.push(RetreatOrder {
            power: d.unit.owner,
            from,
            choice,
        });
    }
    choices
}

fn random_adjustments(rng: &mut SmallRng, game: &Game) -> Vec<(Power, AdjustmentChoices)> {
    let map = game.map();
    let state = game.state();
    let mut all = Vec::new();
    for &power in &ALL_POWERS {
        let centers = state.center_count(map, power);
        let units = state.unit_count(power);
        let mut choices = AdjustmentChoices::default();
        if centers > units {
            for p in map.provinces() {
                if choices.builds.len() >= centers - units {
                    break;
                }
                if map.home_power(p) == Some(power)
                    && state.owner(p) == Some(power)
                    && !state.occupied(p)
                    && rng.gen_bool(0.7)
                {
                    let kind = if map.can_host(p, UnitKind::Fleet) && rng.gen_bool(0.4) {
                        UnitKind::Fleet
                    } else {
                        UnitKind::Army
                    };
                    choices.builds.push(BuildOrder { province: p, kind });
                }
            }
        } else if units > centers && rng.gen_bool(0.5) {
            // Sometimes pick our own removals; otherwise let the engine
            // force-disband the farthest units.
            choices.removals = state
                .units_of(power)
                .map(|(p, _)| p)
                .take(units - centers)
                .collect();
        }
        all.push((power, choices));
    }
    all
}
