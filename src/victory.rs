//! Victory detection.

use crate::board::{GameState, Power, ALL_POWERS};
use crate::map::MapGraph;

/// Returns the power controlling a strict majority of the map's supply
/// centers, or None while the game is still contested.
pub fn victor(map: &MapGraph, state: &GameState) -> Option<Power> {
    ALL_POWERS
        .iter()
        .copied()
        .find(|&p| 2 * state.center_count(map, p) > map.supply_center_count())
}
