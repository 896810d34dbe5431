use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use serde::Serialize;

use crate::map::Map;
use crate::palette::Palette;

/// Undirected view of a map; node weights are country indices.
pub type MapGraph = Graph<usize, (), Undirected>;

/// One node per country and one edge per border. Names that do not resolve
/// are left out.
pub fn to_petgraph(map: &Map) -> MapGraph {
  let mut graph = MapGraph::with_capacity(map.len(), 0);
  let nodes: Vec<NodeIndex> = (0..map.len()).map(|c| graph.add_node(c)).collect();
  for country in 0..map.len() {
    for name in map.neighbours(country) {
      match map.find_country(name) {
        // Each border is listed on both sides; keep one copy
        Some(other) if other > country => {
          graph.update_edge(nodes[country], nodes[other], ());
        }
        _ => {}
      }
    }
  }
  graph
}

#[derive(Debug, Serialize)]
pub struct SerializableCountry {
  name: String,
  color: Option<String>,
  neighbours: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SerializableMap {
  country_count: usize,
  countries: Vec<SerializableCountry>,
  edges: Vec<(usize, usize)>,
}

impl SerializableMap {
  pub fn new(map: &Map, palette: &Palette) -> Self {
    let countries = map
      .countries()
      .iter()
      .map(|c| SerializableCountry {
        name: c.name.clone(),
        color: c.color.map(|col| palette.name(col).to_string()),
        neighbours: c.neighbours.clone(),
      })
      .collect();

    let graph = to_petgraph(map);
    let edges = graph
      .edge_indices()
      .filter_map(|e| graph.edge_endpoints(e))
      // Shift to 1-indexed for output
      .map(|(u, v)| (graph[u] + 1, graph[v] + 1))
      .collect();

    SerializableMap { country_count: map.len(), countries, edges }
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::map::Country;
  use crate::palette::Color;

  fn triangle() -> Map {
    let mut map = Map::new();
    map.push(Country::new("A").with_neighbours(["B", "C"]).with_color(Color::new(0))).unwrap();
    map.push(Country::new("B").with_neighbours(["A", "C"])).unwrap();
    map.push(Country::new("C").with_neighbours(["A", "B"])).unwrap();
    map.push(Country::new("D")).unwrap();
    map
  }

  #[test]
  fn petgraph_view_has_one_edge_per_border() {
    let graph = to_petgraph(&triangle());
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.neighbors(NodeIndex::new(3)).count(), 0);
  }

  #[test]
  fn json_lists_countries_and_edges() {
    let exported = SerializableMap::new(&triangle(), &Palette::default());
    let value: serde_json::Value = serde_json::from_str(&exported.to_json().unwrap()).unwrap();
    assert_eq!(value["country_count"], 4);
    assert_eq!(value["countries"][0]["color"], "red");
    assert!(value["countries"][1]["color"].is_null());
    assert_eq!(value["edges"], serde_json::json!([[1, 2], [1, 3], [2, 3]]));
  }
}
