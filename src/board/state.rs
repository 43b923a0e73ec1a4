//! Game state.
//!
//! `GameState` is the complete snapshot of a game between phases: unit
//! positions, province ownership, and any units awaiting retreat. Ownership
//! is stored once, in the province→owner vector; per-power views (owned
//! provinces, controlled supply centers, unit lists) are derived on demand
//! and never stored alongside it.

use crate::map::{MapGraph, ProvinceId};

use super::power::Power;
use super::unit::Unit;

/// The season of a game turn. Spring and Fall are movement seasons; Winter
/// is the adjustment season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Fall,
    Winter,
}

impl Season {
    /// Returns the single-letter snapshot code (`S`/`F`/`W`).
    pub const fn code(self) -> char {
        match self {
            Season::Spring => 'S',
            Season::Fall => 'F',
            Season::Winter => 'W',
        }
    }

    /// Parses a season from its snapshot code.
    pub fn from_code(c: char) -> Option<Season> {
        match c {
            'S' => Some(Season::Spring),
            'F' => Some(Season::Fall),
            'W' => Some(Season::Winter),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

/// A unit forced out of its province, waiting for the retreat phase.
/// `attacker_from` is the origin of the move that dislodged it and is an
/// illegal retreat destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dislodgement {
    pub unit: Unit,
    pub attacker_from: ProvinceId,
}

/// Complete board state between phases.
///
/// All per-province data lives in vectors sized from the map, indexed by
/// `ProvinceId`. States are cheap to clone; phase transitions take a state
/// by reference and return a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub year: u16,
    pub season: Season,
    units: Vec<Option<Unit>>,
    owner: Vec<Option<Power>>,
    dislodged: Vec<Option<Dislodgement>>,
}

impl GameState {
    /// Creates an empty state with no units or ownership.
    pub fn empty(map: &MapGraph, year: u16, season: Season) -> GameState {
        let n = map.province_count();
        GameState {
            year,
            season,
            units: vec![None; n],
            owner: vec![None; n],
            dislodged: vec![None; n],
        }
    }

    /// Creates the Spring 1901 opening position: the standard deployment,
    /// with each power owning the provinces its units start in.
    pub fn opening(map: &MapGraph) -> GameState {
        let mut state = GameState::empty(map, 1901, Season::Spring);
        for &(name, kind, power) in crate::map::standard::INITIAL_UNITS {
            if let Some(id) = map.find(name) {
                let placed = state.place(map, id, Unit::new(kind, power));
                debug_assert!(placed, "opening deployment must be placeable");
            }
        }
        state
    }

    /// Returns the unit in a province, if any.
    pub fn unit(&self, id: ProvinceId) -> Option<Unit> {
        self.units[id.index()]
    }

    /// Returns true if a unit occupies the province.
    pub fn occupied(&self, id: ProvinceId) -> bool {
        self.units[id.index()].is_some()
    }

    /// Places a unit and takes ownership of the province. Returns false if
    /// the province is occupied or cannot host the unit's kind.
    pub fn place(&mut self, map: &MapGraph, id: ProvinceId, unit: Unit) -> bool {
        if self.units[id.index()].is_some() || !map.can_host(id, unit.kind) {
            return false;
        }
        self.units[id.index()] = Some(unit);
        self.owner[id.index()] = Some(unit.owner);
        true
    }

    /// Removes and returns the unit in a province. Ownership is unchanged.
    pub fn remove(&mut self, id: ProvinceId) -> Option<Unit> {
        self.units[id.index()].take()
    }

    /// Returns the power owning a province, if any.
    pub fn owner(&self, id: ProvinceId) -> Option<Power> {
        self.owner[id.index()]
    }

    /// Sets the owner of a province.
    pub fn set_owner(&mut self, id: ProvinceId, power: Power) {
        self.owner[id.index()] = Some(power);
    }

    /// Records a dislodged unit at its former province.
    pub fn set_dislodged(&mut self, id: ProvinceId, d: Dislodgement) {
        self.dislodged[id.index()] = Some(d);
    }

    /// Returns the dislodgement recorded at a province, if any.
    pub fn dislodgement_at(&self, id: ProvinceId) -> Option<Dislodgement> {
        self.dislodged[id.index()]
    }

    /// Iterates over all pending dislodgements as (former province, record).
    pub fn dislodgements(&self) -> impl Iterator<Item = (ProvinceId, Dislodgement)> + '_ {
        self.dislodged
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (ProvinceId(i as u16), d)))
    }

    /// Returns true if any unit awaits retreat.
    pub fn has_dislodgements(&self) -> bool {
        self.dislodged.iter().any(|d| d.is_some())
    }

    /// Clears all pending dislodgements.
    pub fn clear_dislodgements(&mut self) {
        self.dislodged.fill(None);
    }

    /// Iterates over a power's units as (province, unit). Derived view.
    pub fn units_of(&self, power: Power) -> impl Iterator<Item = (ProvinceId, Unit)> + '_ {
        self.units.iter().enumerate().filter_map(move |(i, u)| {
            u.filter(|u| u.owner == power)
                .map(|u| (ProvinceId(i as u16), u))
        })
    }

    /// Number of units a power has on the board (dislodged units excluded).
    pub fn unit_count(&self, power: Power) -> usize {
        self.units_of(power).count()
    }

    /// Iterates over the supply centers a power controls. Derived view over
    /// the ownership vector.
    pub fn centers_of<'a>(
        &'a self,
        map: &'a MapGraph,
        power: Power,
    ) -> impl Iterator<Item = ProvinceId> + 'a {
        map.provinces()
            .filter(move |&p| map.is_supply_center(p) && self.owner(p) == Some(power))
    }

    /// Number of supply centers a power controls.
    pub fn center_count(&self, map: &MapGraph, power: Power) -> usize {
        self.centers_of(map, power).count()
    }

    /// Checks the structural invariants that must hold between phases:
    /// vector sizes match the map and every unit sits on terrain its kind
    /// can occupy, in a province it owns. Intended for tests.
    pub fn check_invariants(&self, map: &MapGraph) -> Result<(), String> {
        if self.units.len() != map.province_count() {
            return Err("unit vector does not match map size".to_string());
        }
        for p in map.provinces() {
            if let Some(unit) = self.unit(p) {
                if !map.can_host(p, unit.kind) {
                    return Err(format!(
                        "{} {} on incompatible terrain at {}",
                        unit.owner,
                        unit.kind.name(),
                        map.name(p)
                    ));
                }
                if self.owner(p) != Some(unit.owner) {
                    return Err(format!(
                        "unit of {} in {} owned by someone else",
                        unit.owner,
                        map.name(p)
                    ));
                }
            }
        }
        Ok(())
    }
}
