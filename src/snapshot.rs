//! The wire-format state codec.
//!
//! Collaborators exchange game state as a small JSON document:
//!
//! ```json
//! {
//!   "Y": 1901,
//!   "S": "S",
//!   "P": {"AUS": 3, "ENG": 3, ...},
//!   "U": {"London": "FENG", "Paris": "AFRA", ...},
//!   "SC": {"London": "ENG", ...}
//! }
//! ```
//!
//! `U` maps occupied provinces to a 4-character code: unit kind (`A`/`F`)
//! followed by the owning power's 3-letter abbreviation. `SC` lists owned
//! supply centers only. Ownership of provinces that are neither centers nor
//! occupied is not carried by the format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::{GameState, Power, Season, Unit, UnitKind, ALL_POWERS};
use crate::error::SnapshotError;
use crate::map::MapGraph;

/// A state snapshot in wire layout. Maps are ordered so serialization is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "Y")]
    pub year: u16,
    #[serde(rename = "S")]
    pub season: String,
    #[serde(rename = "P")]
    pub center_counts: BTreeMap<String, usize>,
    #[serde(rename = "U")]
    pub units: BTreeMap<String, String>,
    #[serde(rename = "SC")]
    pub centers: BTreeMap<String, String>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Snapshot, SnapshotError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Renders a state as a snapshot.
pub fn encode(map: &MapGraph, state: &GameState) -> Snapshot {
    let mut center_counts = BTreeMap::new();
    for &power in &ALL_POWERS {
        center_counts.insert(power.abbr().to_string(), state.center_count(map, power));
    }

    let mut units = BTreeMap::new();
    let mut centers = BTreeMap::new();
    for p in map.provinces() {
        if let Some(unit) = state.unit(p) {
            units.insert(
                map.name(p).to_string(),
                format!("{}{}", unit.kind.code(), unit.owner.abbr()),
            );
        }
        if map.is_supply_center(p) {
            if let Some(owner) = state.owner(p) {
                centers.insert(map.name(p).to_string(), owner.abbr().to_string());
            }
        }
    }

    Snapshot {
        year: state.year,
        season: state.season.code().to_string(),
        center_counts,
        units,
        centers,
    }
}

/// Rebuilds a state from a snapshot against the given map.
pub fn decode(map: &MapGraph, snapshot: &Snapshot) -> Result<GameState, SnapshotError> {
    let season = match snapshot.season.chars().collect::<Vec<_>>().as_slice() {
        [c] => Season::from_code(*c)
            .ok_or_else(|| SnapshotError::UnknownSeason(snapshot.season.clone()))?,
        _ => return Err(SnapshotError::UnknownSeason(snapshot.season.clone())),
    };

    let mut state = GameState::empty(map, snapshot.year, season);

    for (name, code) in &snapshot.units {
        let province = map
            .find(name)
            .ok_or_else(|| SnapshotError::UnknownProvince(name.clone()))?;
        let (kind, owner) = parse_unit_code(name, code)?;
        if !state.place(map, province, Unit::new(kind, owner)) {
            return Err(SnapshotError::BadPlacement(name.clone()));
        }
    }

    for (name, abbr) in &snapshot.centers {
        let province = map
            .find(name)
            .ok_or_else(|| SnapshotError::UnknownProvince(name.clone()))?;
        let owner =
            Power::from_abbr(abbr).ok_or_else(|| SnapshotError::UnknownPower(abbr.clone()))?;
        state.set_owner(province, owner);
    }

    Ok(state)
}

fn parse_unit_code(province: &str, code: &str) -> Result<(UnitKind, Power), SnapshotError> {
    let bad = || SnapshotError::BadUnitCode {
        province: province.to_string(),
        code: code.to_string(),
    };
    if code.len() != 4 {
        return Err(bad());
    }
    let kind = UnitKind::from_code(code.chars().next().unwrap_or(' ')).ok_or_else(bad)?;
    let owner = Power::from_abbr(&code[1..]).ok_or_else(bad)?;
    Ok((kind, owner))
}
