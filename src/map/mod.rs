//! The province graph.
//!
//! A `MapGraph` is built once at startup from a definition table and never
//! changes during play. Provinces are identified by `ProvinceId`, an index
//! assigned at build time; nothing in the engine assumes a particular
//! province count. The builder validates the table and refuses to produce a
//! graph with asymmetric or dangling adjacency.

pub mod standard;

use std::collections::HashMap;

use crate::board::power::Power;
use crate::board::unit::UnitKind;
use crate::error::MapError;

/// Index of a province within its `MapGraph`. Valid only for the graph that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProvinceId(pub(crate) u16);

impl ProvinceId {
    /// Returns the raw index, for use with per-province vectors.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Classifies a province by terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Land,
    Sea,
    Coast,
}

/// One row of a map definition table. Adjacency is by name and must be
/// listed from both sides.
#[derive(Debug, Clone, Copy)]
pub struct ProvinceDef {
    pub name: &'static str,
    pub terrain: Terrain,
    pub supply_center: bool,
    pub home: Option<Power>,
    pub adjacent: &'static [&'static str],
}

/// The static province graph: terrain, supply-center flags, home powers,
/// and symmetric adjacency.
#[derive(Debug, Clone)]
pub struct MapGraph {
    names: Vec<&'static str>,
    terrain: Vec<Terrain>,
    supply_center: Vec<bool>,
    home: Vec<Option<Power>>,
    adjacent: Vec<Vec<ProvinceId>>,
    by_name: HashMap<&'static str, ProvinceId>,
    supply_center_count: usize,
}

impl MapGraph {
    /// Builds a graph from a definition table, validating that every
    /// neighbour reference resolves and that adjacency is symmetric.
    pub fn build(defs: &[ProvinceDef]) -> Result<MapGraph, MapError> {
        let mut by_name = HashMap::with_capacity(defs.len());
        for (i, def) in defs.iter().enumerate() {
            if by_name.insert(def.name, ProvinceId(i as u16)).is_some() {
                return Err(MapError::DuplicateProvince(def.name.to_string()));
            }
        }

        let mut adjacent = Vec::with_capacity(defs.len());
        for def in defs {
            let mut neighbours = Vec::with_capacity(def.adjacent.len());
            for &adj in def.adjacent {
                if adj == def.name {
                    return Err(MapError::SelfAdjacency(def.name.to_string()));
                }
                let id = *by_name.get(adj).ok_or_else(|| MapError::UnknownNeighbour {
                    from: def.name.to_string(),
                    to: adj.to_string(),
                })?;
                if !neighbours.contains(&id) {
                    neighbours.push(id);
                }
            }
            adjacent.push(neighbours);
        }

        // Every edge must be listed from both endpoints.
        for (i, def) in defs.iter().enumerate() {
            for &n in &adjacent[i] {
                if !adjacent[n.index()].contains(&ProvinceId(i as u16)) {
                    return Err(MapError::AsymmetricAdjacency {
                        from: def.name.to_string(),
                        to: defs[n.index()].name.to_string(),
                    });
                }
            }
        }

        let supply_center_count = defs.iter().filter(|d| d.supply_center).count();

        Ok(MapGraph {
            names: defs.iter().map(|d| d.name).collect(),
            terrain: defs.iter().map(|d| d.terrain).collect(),
            supply_center: defs.iter().map(|d| d.supply_center).collect(),
            home: defs.iter().map(|d| d.home).collect(),
            adjacent,
            by_name,
            supply_center_count,
        })
    }

    /// Builds the standard 76-province board.
    pub fn standard() -> Result<MapGraph, MapError> {
        MapGraph::build(standard::PROVINCES)
    }

    /// Number of provinces on this map.
    pub fn province_count(&self) -> usize {
        self.names.len()
    }

    /// Total number of supply centers on this map.
    pub fn supply_center_count(&self) -> usize {
        self.supply_center_count
    }

    /// Iterates over every province id.
    pub fn provinces(&self) -> impl Iterator<Item = ProvinceId> {
        (0..self.names.len() as u16).map(ProvinceId)
    }

    /// Looks up a province by its full name.
    pub fn find(&self, name: &str) -> Option<ProvinceId> {
        self.by_name.get(name).copied()
    }

    /// Returns the display name of a province.
    pub fn name(&self, id: ProvinceId) -> &'static str {
        self.names[id.index()]
    }

    /// Returns the terrain of a province.
    pub fn terrain(&self, id: ProvinceId) -> Terrain {
        self.terrain[id.index()]
    }

    /// Returns true if the province is a supply center.
    pub fn is_supply_center(&self, id: ProvinceId) -> bool {
        self.supply_center[id.index()]
    }

    /// Returns the home power of a province, or None if it is not a home
    /// supply center.
    pub fn home_power(&self, id: ProvinceId) -> Option<Power> {
        self.home[id.index()]
    }

    /// Returns the neighbours of a province, in table order.
    pub fn adjacent(&self, id: ProvinceId) -> &[ProvinceId] {
        &self.adjacent[id.index()]
    }

    /// Returns true if `a` and `b` share an edge.
    pub fn is_adjacent(&self, a: ProvinceId, b: ProvinceId) -> bool {
        self.adjacent[a.index()].contains(&b)
    }

    /// Returns true if a unit of the given kind may occupy the province:
    /// armies on land and coast, fleets on sea and coast.
    pub fn can_host(&self, id: ProvinceId, kind: UnitKind) -> bool {
        match self.terrain(id) {
            Terrain::Land => kind == UnitKind::Army,
            Terrain::Sea => kind == UnitKind::Fleet,
            Terrain::Coast => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(
        name: &'static str,
        terrain: Terrain,
        adjacent: &'static [&'static str],
    ) -> ProvinceDef {
        ProvinceDef {
            name,
            terrain,
            supply_center: false,
            home: None,
            adjacent,
        }
    }

    #[test]
    fn build_small_graph() {
        let graph = MapGraph::build(&[
            def("A", Terrain::Land, &["B"]),
            def("B", Terrain::Coast, &["A", "C"]),
            def("C", Terrain::Sea, &["B"]),
        ])
        .unwrap();

        assert_eq!(graph.province_count(), 3);
        let a = graph.find("A").unwrap();
        let b = graph.find("B").unwrap();
        let c = graph.find("C").unwrap();
        assert!(graph.is_adjacent(a, b));
        assert!(graph.is_adjacent(b, a));
        assert!(!graph.is_adjacent(a, c));
        assert_eq!(graph.name(b), "B");
    }

    #[test]
    fn rejects_asymmetric_adjacency() {
        let err = MapGraph::build(&[
            def("A", Terrain::Land, &["B"]),
            def("B", Terrain::Land, &[]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            MapError::AsymmetricAdjacency {
                from: "A".to_string(),
                to: "B".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_neighbour() {
        let err = MapGraph::build(&[def("A", Terrain::Land, &["Nowhere"])]).unwrap_err();
        assert!(matches!(err, MapError::UnknownNeighbour { .. }));
    }

    #[test]
    fn rejects_duplicate_province() {
        let err = MapGraph::build(&[
            def("A", Terrain::Land, &[]),
            def("A", Terrain::Sea, &[]),
        ])
        .unwrap_err();
        assert_eq!(err, MapError::DuplicateProvince("A".to_string()));
    }

    #[test]
    fn rejects_self_adjacency() {
        let err = MapGraph::build(&[def("A", Terrain::Land, &["A"])]).unwrap_err();
        assert_eq!(err, MapError::SelfAdjacency("A".to_string()));
    }

    #[test]
    fn can_host_by_terrain() {
        let graph = MapGraph::build(&[
            def("Inland", Terrain::Land, &[]),
            def("Ocean", Terrain::Sea, &[]),
            def("Shore", Terrain::Coast, &[]),
        ])
        .unwrap();
        let inland = graph.find("Inland").unwrap();
        let ocean = graph.find("Ocean").unwrap();
        let shore = graph.find("Shore").unwrap();

        assert!(graph.can_host(inland, UnitKind::Army));
        assert!(!graph.can_host(inland, UnitKind::Fleet));
        assert!(!graph.can_host(ocean, UnitKind::Army));
        assert!(graph.can_host(ocean, UnitKind::Fleet));
        assert!(graph.can_host(shore, UnitKind::Army));
        assert!(graph.can_host(shore, UnitKind::Fleet));
    }
}
