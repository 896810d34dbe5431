//! Random map generator. Every map it produces is symmetric and can be
//! colored with `colors` colors, since borders only join countries whose
//! hidden colors differ.

use indicatif::ProgressBar;
use itertools::Itertools;
use log::debug;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ConfigError;
use crate::map::{Country, Map};
use crate::palette::{Color, Palette};
use crate::parse::MAX_COUNTRIES;

type ColoredGraph = Graph<Option<Color>, (), Undirected>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
  pub countries: usize,
  /// Share of countries printed as `nocolor` (0 to 100).
  pub uncolored_percent: u32,
  /// Chance that two differently colored countries border (0 to 100).
  pub density: u32,
  pub seed: u64,
  pub colors: usize,
}

impl GeneratorConfig {
  pub fn new(countries: usize, seed: u64) -> Self {
    GeneratorConfig { countries, uncolored_percent: 100, density: 30, seed, colors: 4 }
  }

  fn validate(&self, palette: &Palette) -> Result<(), ConfigError> {
    if self.colors == 0 || self.colors > palette.len() {
      return Err(ConfigError::ColorCount { requested: self.colors, max: palette.len() });
    }
    if self.countries > MAX_COUNTRIES {
      return Err(ConfigError::CountryCount { requested: self.countries, max: MAX_COUNTRIES });
    }
    if self.uncolored_percent > 100 {
      return Err(ConfigError::Percentage { name: "uncolored", value: self.uncolored_percent });
    }
    if self.density > 100 {
      return Err(ConfigError::Percentage { name: "density", value: self.density });
    }
    Ok(())
  }
}

pub fn country_name(index: usize) -> String {
  format!("C{:05}", index + 1)
}

fn from_petgraph(graph: &ColoredGraph) -> Map {
  let mut map = Map::new();
  for node in graph.node_indices() {
    let mut neighbours: Vec<usize> = graph.neighbors(node).map(|n| n.index()).collect();
    neighbours.sort_unstable();

    let mut country = Country::new(country_name(node.index()))
      .with_neighbours(neighbours.into_iter().map(country_name));
    country.color = graph[node];
    // Node names are unique by construction
    let _ = map.push(country);
  }
  map
}

pub fn generate_map(
  config: &GeneratorConfig,
  palette: &Palette,
  pb: &ProgressBar,
) -> Result<Map, ConfigError> {
  config.validate(palette)?;
  let n = config.countries;
  let mut rng = StdRng::seed_from_u64(config.seed);

  let mut graph = ColoredGraph::with_capacity(n, 0);
  let nodes: Vec<NodeIndex> = (0..n)
    .map(|_| graph.add_node(Some(Color::new(rng.random_range(0..config.colors)))))
    .collect();

  // Decide randomly about borders
  let pairs = n * n.saturating_sub(1) / 2;
  pb.set_length(pairs as u64);
  let density = f64::from(config.density);
  for (i, j) in (0..n).tuple_combinations() {
    if graph[nodes[i]] != graph[nodes[j]] && rng.random::<f64>() * 100.0 < density {
      graph.add_edge(nodes[i], nodes[j], ());
    }
    pb.inc(1);
  }

  // Uncolor some countries, probing forward from a random start
  let to_uncolor = (u64::from(config.uncolored_percent) * n as u64).div_ceil(100) as usize;
  for _ in 0..to_uncolor {
    let mut j = rng.random_range(0..n);
    while graph[nodes[j]].is_none() {
      j = (j + 1) % n;
    }
    graph[nodes[j]] = None;
  }

  debug!(
    "generated {} countries, {} borders, {} uncolored (seed {})",
    n,
    graph.edge_count(),
    to_uncolor,
    config.seed
  );
  Ok(from_petgraph(&graph))
}
